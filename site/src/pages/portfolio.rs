//! Portfolio gallery page: fixed word-mark bar over a dense project grid.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::project_card::ProjectCard;
use crate::components::theme_toggle::ThemeToggle;
use crate::projects;
use crate::state::session::SessionState;

/// Gallery page. Redirects back to the gate when the session flag is absent.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !session.get().access_granted {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <div class="portfolio-page">
            <nav class="portfolio-nav">
                <span class="portfolio-nav__mark">"Blanchardesign"</span>
                <ThemeToggle/>
            </nav>
            <main class="portfolio-grid">
                {projects::CATALOG
                    .iter()
                    .map(|project| view! { <ProjectCard project=*project/> })
                    .collect_view()}
            </main>
        </div>
    }
}
