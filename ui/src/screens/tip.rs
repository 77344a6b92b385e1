//=============================================================================
// File: src/screens/tip.rs
//=============================================================================
use crate::components::tip_confirmation::TipConfirmation;
use crate::components::tip_form::TipForm;
use crate::components::tip_history::TipHistoryList;
use crate::tip_flow::{Screen, TipFlow};
use crate::AppState;
use api::tip_record::{TipDraft, TipRecord};
use dioxus::prelude::*;

/// Switches between the tip form (with the recent-tip list below it) and the
/// confirmation of the tip just sent.
#[component]
pub fn TipScreen() -> Element {
    let app_state = use_context::<AppState>();

    let mut flow = use_signal({
        let store = app_state.history_store.clone();
        move || TipFlow::load(&*store)
    });
    // Validation message for the last rejected submit.
    let mut submit_error = use_signal::<Option<String>>(|| None);

    // --- Event Handlers ---
    let on_submit = move |draft: TipDraft| {
        let record = match flow.write().begin_submit(&draft) {
            Ok(record) => record,
            Err(e) => {
                submit_error.set(Some(e.to_string()));
                return;
            }
        };
        submit_error.set(None);

        let app_state = app_state.clone();
        spawn(async move {
            let outcome = app_state.transfer.send(&record).await;
            flow.write()
                .finish_submit(record, outcome, &*app_state.history_store);
        });
    };
    let on_repeat = move |tip: TipRecord| {
        flow.write().repeat(tip);
        submit_error.set(None);
    };
    let on_send_another = move |_: ()| {
        flow.write().send_another();
        submit_error.set(None);
    };

    let state = flow();
    let error = submit_error().or_else(|| {
        state
            .last_failure()
            .map(|failure| format!("Your tip was not sent: {failure}"))
    });

    rsx! {
        match state.screen() {
            Screen::Input => rsx! {
                TipForm {
                    key: "{state.form_epoch()}",
                    initial: state.form_seed(),
                    loading: state.is_loading(),
                    error,
                    on_submit,
                }
                TipHistoryList {
                    history: state.history().clone(),
                    on_repeat,
                }
            },
            Screen::Confirmation => match state.current().cloned() {
                Some(tip) => rsx! {
                    TipConfirmation {
                        tip,
                        on_send_another,
                    }
                },
                None => rsx! {},
            },
        }
    }
}
