// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;
mod screens;
pub mod storage;
pub mod tip_flow;
pub mod transfer;

use api::prefs::user_prefs::UserPrefs;
pub use app_state::AppState;
use components::pico::Container;
use hooks::use_host_ready::use_host_ready;
use screens::tip::TipScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    // Mini-app hosts render us in a narrow frame.
    let mini_app_css = r#"
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        background-color: var(--pico-background-color);
    }

    .app-main-container {
        max-width: 424px;
        margin: 0 auto;
        padding: 1rem 0.75rem;
    }

    .app-main-container header h1 {
        font-size: 1.5rem;
        margin-bottom: 1rem;
    }

    .app-main-container table td {
        vertical-align: middle;
    }

    .app-main-container table button {
        margin-bottom: 0;
        padding: 0.25rem 0.5rem;
        font-size: 0.875rem;
    }

    .loading-placeholder {
        display: flex;
        justify-content: center;
        padding-top: 4rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{mini_app_css}"
        }
        AppBody {}
    }
}

/// Waits for the host to report ready before rendering anything interactive.
#[component]
fn AppBody() -> Element {
    let host_ready = use_host_ready();
    let app_state = use_hook(|| {
        let user_prefs = UserPrefs::default();
        dioxus_logger::tracing::info!("prefs: {:#?}", user_prefs);
        AppState::new(user_prefs)
    });

    if !host_ready() {
        return rsx! {
            div {
                class: "loading-placeholder",
                p { "aria-busy": "true", "Loading..." }
            }
        };
    }

    rsx! {
        LoadedApp {
            app_state,
        }
    }
}

/// This component holds the main app logic and only runs when the host is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    h1 { "Tip Circles" }
                }
                TipScreen {}
            }
        }
    }
}
