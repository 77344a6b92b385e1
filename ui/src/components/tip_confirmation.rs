//=============================================================================
// File: src/components/tip_confirmation.rs
//=============================================================================
use crate::components::amount::Amount;
use crate::components::pico::{Button, Card};
use api::tip_record::TipRecord;
use dioxus::prelude::*;

/// Read-only summary of a tip that was just sent.
#[component]
pub fn TipConfirmation(tip: TipRecord, on_send_another: EventHandler<()>) -> Element {
    rsx! {
        Card {
            h3 { "Tip sent!" }
            p {
                "You sent "
                strong { Amount { amount: tip.amount } }
                " to "
                strong { "{tip.recipient}" }
            }
            if let Some(message) = &tip.message {
                blockquote { "{message}" }
            }
            Button {
                on_click: move |_| on_send_another.call(()),
                "Send another"
            }
        }
    }
}
