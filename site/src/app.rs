//! Root application component with routing, theming, and the persistent
//! background layers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::backdrop_host::BackdropHost;
use crate::pages::{gate::GatePage, portfolio::PortfolioPage};
use crate::state::session::SessionState;
use crate::state::theme::ThemeState;
use crate::util::{access, theme_store};

/// Root application component.
///
/// Provides the shared theme and session contexts, then stacks the solid
/// background layer and the animated backdrop behind the routed pages. Both
/// layers persist across navigation; only the page content swaps.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState { theme: theme_store::read_preference() });
    let session = RwSignal::new(SessionState { access_granted: access::stored_access() });
    provide_context(theme);
    provide_context(session);

    // Mirror the initial theme onto <html> before the first paint settles.
    theme_store::apply(theme.get_untracked().theme);

    view! {
        <Title text="Blanchardesign"/>

        <div class="app-shell">
            <div class="app-shell__backfill"></div>
            <BackdropHost/>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=GatePage/>
                    <Route path=StaticSegment("portfolio") view=PortfolioPage/>
                </Routes>
            </Router>
        </div>
    }
}
