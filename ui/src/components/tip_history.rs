//=============================================================================
// File: src/components/tip_history.rs
//=============================================================================
use crate::components::amount::Amount;
use crate::components::pico::{Button, ButtonType, Card};
use api::history::TipHistory;
use api::tip_record::TipRecord;
use dioxus::prelude::*;

/// A single row in the recent-tips table.
#[component]
fn TipHistoryRow(tip: TipRecord, on_repeat: EventHandler<TipRecord>) -> Element {
    let repeat_tip = tip.clone();

    rsx! {
        tr {
            td { "{tip.recipient}" }
            td { Amount { amount: tip.amount } }
            td {
                if let Some(message) = &tip.message {
                    small { "{message}" }
                }
            }
            td {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| on_repeat.call(repeat_tip.clone()),
                    "Tip again"
                }
            }
        }
    }
}

/// The recent tips, newest first. Renders nothing when there are none.
#[component]
pub fn TipHistoryList(history: TipHistory, on_repeat: EventHandler<TipRecord>) -> Element {
    if history.is_empty() {
        return rsx! {};
    }

    rsx! {
        Card {
            h3 { "Recent tips" }
            table {
                thead { tr {
                    th { "Recipient" }
                    th { "Amount" }
                    th { "Message" }
                    th {}
                }}
                tbody {
                    for (i, tip) in history.iter().enumerate() {
                        TipHistoryRow {
                            key: "{i}",
                            tip: tip.clone(),
                            on_repeat,
                        }
                    }
                }
            }
        }
    }
}
