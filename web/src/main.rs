use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("circles tip {} (web)", env!("CARGO_PKG_VERSION"));
    dioxus::launch(TipApp);
}

#[component]
fn TipApp() -> Element {
    ui::App()
}
