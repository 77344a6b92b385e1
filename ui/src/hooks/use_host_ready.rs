//=============================================================================
// File: src/hooks/use_host_ready.rs
//=============================================================================

// The host page owns the mini-app SDK. Only the browser build talks to it.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use self::fallback::*;

/// Name of the global the host page exposes its mini-app SDK under.
pub const HOST_SDK_GLOBAL: &str = "miniAppSdk";

/// # WebAssembly (WASM) Implementation
/// Tells the host SDK the app is ready and flips the flag once it answers.
/// Outside a host (plain browser tab) there is no SDK; the app then runs
/// standalone instead of waiting forever.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use super::HOST_SDK_GLOBAL;
    use dioxus::prelude::*;
    use dioxus_logger::tracing::{info, warn};
    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    pub fn use_host_ready() -> Signal<bool> {
        let mut is_ready = use_signal(|| false);

        use_effect(move || {
            spawn(async move {
                match announce_ready().await {
                    Ok(()) => info!("host sdk ready"),
                    Err(e) => warn!("host sdk unavailable, running standalone: {}", e),
                }
                is_ready.set(true);
            });
        });

        is_ready
    }

    fn js_err(e: JsValue) -> String {
        e.as_string().unwrap_or_else(|| format!("{:?}", e))
    }

    /// Calls `window.miniAppSdk.actions.ready()` and awaits the result.
    async fn announce_ready() -> Result<(), String> {
        let window = web_sys::window().ok_or("no window")?;
        let sdk = Reflect::get(&window, &JsValue::from_str(HOST_SDK_GLOBAL)).map_err(js_err)?;
        if sdk.is_undefined() || sdk.is_null() {
            return Err(format!("window.{} is not defined", HOST_SDK_GLOBAL));
        }
        let actions = Reflect::get(&sdk, &JsValue::from_str("actions")).map_err(js_err)?;
        let ready: Function = Reflect::get(&actions, &JsValue::from_str("ready"))
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| "actions.ready is not a function".to_string())?;
        let returned = ready.call0(&actions).map_err(js_err)?;
        JsFuture::from(Promise::resolve(&returned))
            .await
            .map_err(js_err)?;
        Ok(())
    }
}

/// # Fallback Implementation
/// Desktop and server builds have no host. Ready immediately.
#[cfg(not(target_arch = "wasm32"))]
mod fallback {
    use dioxus::prelude::*;

    pub fn use_host_ready() -> Signal<bool> {
        use_signal(|| true)
    }
}
