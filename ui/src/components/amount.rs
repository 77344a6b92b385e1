//! A component for displaying amounts of Circles.

use api::circles_amount::CirclesAmount;
use dioxus::prelude::*;

/// Renders an amount with its unit, e.g. "2.5 Circles".
#[component]
pub fn Amount(amount: CirclesAmount) -> Element {
    rsx! {
        span {
            class: "amount",
            "{amount.to_string_with_unit()}"
        }
    }
}
