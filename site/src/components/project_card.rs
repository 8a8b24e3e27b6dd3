//! One gallery tile: image, hover overlay, and grid span.

use leptos::prelude::*;

use crate::projects::Project;

/// A single portfolio tile.
///
/// The image hides itself on load failure so missing assets degrade to the
/// tinted placeholder block instead of a broken-image icon.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let failed = RwSignal::new(false);

    view! {
        <a class=project.size.tile_class() href="#">
            <div class="project-tile__media">
                <Show when=move || !failed.get()>
                    <img
                        class="project-tile__image"
                        src=project.image
                        alt=project.title
                        on:error=move |_| failed.set(true)
                    />
                </Show>
                <div class="project-tile__overlay">
                    <h2 class="project-tile__title">{project.title}</h2>
                    <span class="project-tile__category">{project.category}</span>
                </div>
            </div>
        </a>
    }
}
