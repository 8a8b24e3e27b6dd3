//! Access gate page: a single password field in front of the gallery.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::session::SessionState;
use crate::util::access;

/// Gate page — collects the access code and unlocks the portfolio.
/// Redirects to `/portfolio` as soon as the session flag is set, which also
/// covers visitors returning with the flag already stored.
#[component]
pub fn GatePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let code = RwSignal::new(String::new());
    let denied = RwSignal::new(false);

    Effect::new(move || {
        if session.get().access_granted {
            navigate("/portfolio", NavigateOptions::default());
        }
    });

    let submit = move || {
        if access::verify(&code.get()) {
            access::grant_access();
            session.update(|s| s.access_granted = true);
        } else {
            denied.set(true);
            code.set(String::new());
        }
    };

    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit();
        } else if denied.get() {
            denied.set(false);
        }
    };

    view! {
        <div class="gate-page">
            <div class="gate-page__toggle">
                <ThemeToggle/>
            </div>
            <div class="gate-card">
                <h1 class="gate-card__mark">"Blanchardesign"</h1>
                <div class="gate-card__field">
                    <input
                        class="gate-card__input"
                        type="password"
                        placeholder="PASSWORD"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                        on:keydown=on_key_down
                    />
                    <button
                        class="gate-card__enter"
                        aria-label="Enter"
                        on:click=move |_| submit()
                    >
                        "\u{2192}"
                    </button>
                </div>
                <p class="gate-card__denied" class:gate-card__denied--visible=move || denied.get()>
                    "ACCESS DENIED"
                </p>
            </div>
        </div>
    }
}
