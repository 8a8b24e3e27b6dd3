//! Theme flip button labeled with the mode it switches to.

use leptos::prelude::*;

use backdrop::style::Theme;

use crate::state::theme::ThemeState;
use crate::util::theme_store;

/// Toggle between light and dark, persisting the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    let label = move || {
        if theme.get().theme == Theme::Dark { "Light Mode" } else { "Dark Mode" }
    };

    let on_click = move |_| {
        theme.update(|state| state.theme = theme_store::toggle(state.theme));
    };

    view! {
        <button class="theme-toggle" on:click=on_click>
            {label}
        </button>
    }
}
