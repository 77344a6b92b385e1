use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

// Development shell. There is no host SDK and no browser storage here, so
// the app starts immediately and history lasts for the session only.
fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("circles tip {} (desktop)", env!("CARGO_PKG_VERSION"));
    dioxus::launch(TipApp);
}

#[component]
fn TipApp() -> Element {
    ui::App()
}
