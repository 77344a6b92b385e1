// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;
    use wasm_bindgen::JsValue;
    use web_sys::{Storage, Window};

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    fn js_err(e: JsValue) -> String {
        e.as_string().unwrap_or_else(|| format!("{:?}", e))
    }

    /// `window.localStorage`, or `None` if the browser refuses access
    /// (privacy mode, sandboxed iframe without storage permission).
    fn local_storage() -> Result<Option<Storage>, String> {
        match web_sys::window() {
            Some(win) => Window::local_storage(&win).map_err(js_err),
            None => Ok(None),
        }
    }

    pub fn local_storage_get(key: &str) -> Result<Option<String>, String> {
        match local_storage()? {
            Some(storage) => storage.get_item(key).map_err(js_err),
            None => Ok(None),
        }
    }

    pub fn local_storage_set(key: &str, value: &str) -> Result<(), String> {
        match local_storage()? {
            Some(storage) => storage.set_item(key, value).map_err(js_err),
            None => Ok(()),
        }
    }
}

/// Native builds (desktop, server-side rendering) have no browser storage
/// medium: reads find nothing and writes are dropped.
#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub fn local_storage_get(_key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    pub fn local_storage_set(_key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }
}
