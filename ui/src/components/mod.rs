//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, forms, and modals.
pub mod amount;
pub mod pico;
pub mod tip_confirmation;
pub mod tip_form;
pub mod tip_history;

/// Renders a root component once and returns its HTML.
#[cfg(test)]
pub(crate) fn render_html(root: fn() -> dioxus::prelude::Element) -> String {
    let mut dom = dioxus::prelude::VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
