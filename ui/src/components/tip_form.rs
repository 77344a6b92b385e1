//=============================================================================
// File: src/components/tip_form.rs
//=============================================================================
use crate::components::pico::{Button, Card, Input};
use crate::tip_flow::submit_available;
use api::tip_record::TipDraft;
use dioxus::prelude::*;

/// Collects recipient, amount and an optional message.
///
/// `initial` only seeds the fields when the form mounts; the caller gives the
/// form a new `key` to re-seed it. The submit button is disabled while
/// `loading` is true or while a required field is empty.
#[component]
pub fn TipForm(
    initial: TipDraft,
    loading: bool,
    #[props(default)] error: Option<String>,
    on_submit: EventHandler<TipDraft>,
) -> Element {
    let mut draft = use_signal(|| initial.clone());

    // Real-time validation of the amount field, once something is typed.
    let amount_error = use_memo(move || {
        let d = draft.read();
        if d.amount.trim().is_empty() {
            None
        } else {
            d.amount_error().map(|e| e.to_string())
        }
    });

    let submit_disabled = !submit_available(loading, &draft.read());

    rsx! {
        Card {
            h3 { "Send a tip" }
            div {
                Input {
                    label: "Recipient".to_string(),
                    name: "recipient".to_string(),
                    placeholder: "username or user ID".to_string(),
                    value: "{draft.read().recipient}",
                    disabled: loading,
                    on_input: move |event: FormEvent| {
                        draft.with_mut(|d| d.recipient = event.value());
                    },
                }
                Input {
                    label: "Amount (Circles)".to_string(),
                    name: "amount".to_string(),
                    input_type: "number".to_string(),
                    placeholder: "1".to_string(),
                    value: "{draft.read().amount}",
                    disabled: loading,
                    invalid: amount_error().map(|_| true),
                    on_input: move |event: FormEvent| {
                        draft.with_mut(|d| d.amount = event.value());
                    },
                }
                if let Some(err) = amount_error() {
                    small { style: "color: var(--pico-del-color);", "{err}" }
                }
                Input {
                    label: "Message (optional)".to_string(),
                    name: "message".to_string(),
                    placeholder: "Thanks for the great post!".to_string(),
                    value: "{draft.read().message}",
                    disabled: loading,
                    on_input: move |event: FormEvent| {
                        draft.with_mut(|d| d.message = event.value());
                    },
                }
                if let Some(err) = error {
                    p { style: "color: var(--pico-del-color);", "{err}" }
                }
                Button {
                    disabled: submit_disabled,
                    busy: loading,
                    on_click: move |_| on_submit.call(draft()),
                    if loading { "Sending..." } else { "Send tip" }
                }
            }
        }
    }
}
