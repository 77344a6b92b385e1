//! The state behind the tip screen: which view is showing, the tip being
//! sent or shown, the loading flag and the recent-tip history.
//!
//! `TipScreen` keeps a `TipFlow` in a signal and drives it from UI events.
//! Submitting is split into `begin_submit` and `finish_submit` so that no
//! borrow of the signal is held while the transfer is awaited.

use api::history::TipHistory;
use api::tip_record::TipDraft;
use api::tip_record::TipRecord;
use api::tip_record::TipValidationError;
use api::transfer::Transfer;
use api::ApiError;
use dioxus_logger::tracing::{error, info, warn};
use thiserror::Error;

use crate::storage::HistoryStore;

/// The two mutually exclusive views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::EnumIs)]
pub enum Screen {
    #[default]
    Input,
    Confirmation,
}

/// Whether the submit action may be offered. Used by the form's button and
/// by `TipFlow::can_submit`.
pub fn submit_available(loading: bool, draft: &TipDraft) -> bool {
    !loading && draft.is_complete()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a tip is already being sent")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] TipValidationError),
    #[error("sending the tip failed: {0}")]
    Transfer(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TipFlow {
    screen: Screen,
    /// On `Input`: the record the form was seeded from, if any.
    /// On `Confirmation`: the tip that was just sent.
    current: Option<TipRecord>,
    loading: bool,
    history: TipHistory,
    last_failure: Option<String>,
    /// Bumped whenever the form has to be re-seeded from `current`.
    form_epoch: u64,
}

impl TipFlow {
    pub fn new(history: TipHistory) -> Self {
        Self {
            screen: Screen::Input,
            current: None,
            loading: false,
            history,
            last_failure: None,
            form_epoch: 0,
        }
    }

    /// Starts on the input screen with whatever history `store` holds.
    pub fn load(store: &dyn HistoryStore) -> Self {
        let history = store.load();
        info!("loaded {} recent tips", history.len());
        Self::new(history)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn current(&self) -> Option<&TipRecord> {
        self.current.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn history(&self) -> &TipHistory {
        &self.history
    }

    /// Why the last send failed. Cleared when the next one starts.
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub fn form_epoch(&self) -> u64 {
        self.form_epoch
    }

    /// The values the input form should start with.
    pub fn form_seed(&self) -> TipDraft {
        self.current
            .as_ref()
            .map(TipDraft::from)
            .unwrap_or_default()
    }

    /// Whether the submit action is available for `draft`.
    pub fn can_submit(&self, draft: &TipDraft) -> bool {
        submit_available(self.loading, draft)
    }

    /// Validates `draft` and marks the flow as loading. The caller must pass
    /// the returned record to `Transfer::send` and then to `finish_submit`.
    pub fn begin_submit(&mut self, draft: &TipDraft) -> Result<TipRecord, SubmitError> {
        if self.loading {
            return Err(SubmitError::InFlight);
        }
        let record = draft.validate()?;
        info!("sending {} to {}", record.amount.to_string_with_unit(), record.recipient);
        self.loading = true;
        self.last_failure = None;
        Ok(record)
    }

    /// Applies the outcome of a send started with `begin_submit`.
    ///
    /// On success the record goes to the front of the history, the history is
    /// persisted and the confirmation screen is shown. On failure the flow
    /// stays on the input screen and remembers the error.
    pub fn finish_submit(
        &mut self,
        record: TipRecord,
        outcome: Result<(), ApiError>,
        store: &dyn HistoryStore,
    ) {
        match outcome {
            Ok(()) => {
                info!("tip to {} sent", record.recipient);
                self.history.push_front(record.clone());
                if let Err(e) = store.save(&self.history) {
                    warn!("tip history not saved: {}", e);
                }
                self.current = Some(record);
                self.screen = Screen::Confirmation;
            }
            Err(e) => {
                error!("tip to {} failed: {:#}", record.recipient, e);
                self.last_failure = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    /// Runs a complete submit without a UI in between.
    pub async fn submit(
        &mut self,
        draft: &TipDraft,
        transfer: &dyn Transfer,
        store: &dyn HistoryStore,
    ) -> Result<(), SubmitError> {
        let record = self.begin_submit(draft)?;
        let outcome = transfer.send(&record).await;
        self.finish_submit(record, outcome, store);
        match &self.last_failure {
            Some(failure) => Err(SubmitError::Transfer(failure.clone())),
            None => Ok(()),
        }
    }

    /// "Send another": back to a blank form.
    pub fn send_another(&mut self) {
        self.current = None;
        self.screen = Screen::Input;
        self.form_epoch += 1;
    }

    /// Re-seeds the form with a past tip. The screen does not change.
    pub fn repeat(&mut self, record: TipRecord) {
        self.current = Some(record);
        self.form_epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryHistoryStore;
    use api::circles_amount::CirclesAmount;
    use async_trait::async_trait;
    use std::cell::Cell;

    /// Counts calls and optionally fails them.
    #[derive(Default)]
    struct FakeTransfer {
        calls: Cell<usize>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl Transfer for FakeTransfer {
        async fn send(&self, _tip: &TipRecord) -> Result<(), ApiError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                anyhow::bail!("backend unreachable");
            }
            Ok(())
        }
    }

    fn draft(recipient: &str, amount: &str, message: &str) -> TipDraft {
        TipDraft {
            recipient: recipient.to_string(),
            amount: amount.to_string(),
            message: message.to_string(),
        }
    }

    fn tip(recipient: &str, amount: f64) -> TipRecord {
        TipRecord::new(recipient, CirclesAmount::try_from(amount).unwrap(), None)
    }

    fn recipients(flow: &TipFlow) -> Vec<String> {
        flow.history().iter().map(|r| r.recipient.clone()).collect()
    }

    #[tokio::test]
    async fn first_tip_lands_in_history_and_confirmation() {
        let store = MemoryHistoryStore::new();
        let transfer = FakeTransfer::default();
        let mut flow = TipFlow::load(&store);

        flow.submit(&draft("alice", "2.5", ""), &transfer, &store)
            .await
            .unwrap();

        assert_eq!(flow.history().len(), 1);
        assert_eq!(flow.history().get(0), Some(&tip("alice", 2.5)));
        assert_eq!(flow.screen(), Screen::Confirmation);
        assert!(!flow.is_loading());
        assert_eq!(
            flow.current().map(|t| t.amount.to_string_with_unit()),
            Some("2.5 Circles".to_string())
        );
        assert_eq!(store.load(), *flow.history());
    }

    #[tokio::test]
    async fn sixth_tip_drops_the_oldest() {
        let seeded: TipHistory = ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(|n| tip(n, 1.0))
            .collect::<Vec<_>>()
            .into();
        let store = MemoryHistoryStore::new();
        store.save(&seeded).unwrap();
        let mut flow = TipFlow::load(&store);

        flow.submit(&draft("F", "1", ""), &FakeTransfer::default(), &store)
            .await
            .unwrap();

        assert_eq!(recipients(&flow), ["F", "A", "B", "C", "D"]);
        assert_eq!(store.load(), *flow.history());
    }

    #[tokio::test]
    async fn history_length_is_min_of_previous_plus_one_and_five() {
        let store = MemoryHistoryStore::new();
        let transfer = FakeTransfer::default();
        let mut flow = TipFlow::load(&store);

        for i in 0..8 {
            let name = format!("user{i}");
            let before = flow.history().len();
            flow.submit(&draft(&name, "1", ""), &transfer, &store)
                .await
                .unwrap();
            assert_eq!(flow.history().len(), (before + 1).min(5));
            assert_eq!(recipients(&flow)[0], name);
            flow.send_another();
        }
        assert_eq!(recipients(&flow), ["user7", "user6", "user5", "user4", "user3"]);
    }

    #[tokio::test]
    async fn empty_recipient_never_reaches_transfer() {
        let store = MemoryHistoryStore::new();
        let transfer = FakeTransfer::default();
        let mut flow = TipFlow::load(&store);

        let result = flow.submit(&draft("", "5", ""), &transfer, &store).await;

        assert_eq!(
            result,
            Err(SubmitError::Invalid(TipValidationError::EmptyRecipient))
        );
        assert_eq!(transfer.calls.get(), 0);
        assert!(!flow.is_loading());
        assert!(flow.history().is_empty());
        assert_eq!(store.raw(), None);
    }

    #[tokio::test]
    async fn non_numeric_amount_is_rejected_before_sending() {
        let store = MemoryHistoryStore::new();
        let transfer = FakeTransfer::default();
        let mut flow = TipFlow::load(&store);

        let result = flow.submit(&draft("bob", "ten", ""), &transfer, &store).await;

        assert!(matches!(result, Err(SubmitError::Invalid(TipValidationError::Amount(_)))));
        assert_eq!(transfer.calls.get(), 0);
    }

    #[test]
    fn submit_is_unavailable_while_loading() {
        let store = MemoryHistoryStore::new();
        let mut flow = TipFlow::load(&store);
        let good = draft("alice", "1", "");

        assert!(flow.can_submit(&good));
        let record = flow.begin_submit(&good).unwrap();
        assert!(flow.is_loading());
        assert!(!flow.can_submit(&good));
        assert!(!flow.can_submit(&draft("bob", "3", "hey")));
        assert_eq!(flow.begin_submit(&good), Err(SubmitError::InFlight));

        flow.finish_submit(record, Ok(()), &store);
        assert!(!flow.is_loading());
        assert_eq!(flow.history().len(), 1);
    }

    #[test]
    fn loading_disables_submit_for_any_draft() {
        for d in [
            TipDraft::default(),
            draft("alice", "1", ""),
            draft("42", "0.5", "gm"),
            draft("bob", "nope", ""),
        ] {
            assert!(!submit_available(true, &d));
        }
        assert!(submit_available(false, &draft("alice", "1", "")));
    }

    #[test]
    fn incomplete_draft_cannot_be_submitted() {
        let flow = TipFlow::new(TipHistory::new());
        assert!(!flow.can_submit(&draft("", "1", "")));
        assert!(!flow.can_submit(&draft("alice", "", "")));
        assert!(!flow.can_submit(&TipDraft::default()));
    }

    #[tokio::test]
    async fn failed_transfer_stays_on_input_and_is_observable() {
        let store = MemoryHistoryStore::new();
        let transfer = FakeTransfer {
            fail: true,
            ..Default::default()
        };
        let mut flow = TipFlow::load(&store);

        let result = flow.submit(&draft("alice", "1", ""), &transfer, &store).await;

        assert!(matches!(result, Err(SubmitError::Transfer(_))));
        assert_eq!(transfer.calls.get(), 1);
        assert_eq!(flow.screen(), Screen::Input);
        assert!(!flow.is_loading());
        assert!(flow.history().is_empty());
        assert_eq!(flow.last_failure(), Some("backend unreachable"));
        assert_eq!(store.raw(), None);

        // the next attempt clears the old failure
        flow.submit(&draft("alice", "1", ""), &FakeTransfer::default(), &store)
            .await
            .unwrap();
        assert_eq!(flow.last_failure(), None);
    }

    #[test]
    fn repeat_prefills_without_changing_screen() {
        let b = TipRecord::new(
            "bob",
            CirclesAmount::try_from(3.5).unwrap(),
            Some("again!".to_string()),
        );
        let history: TipHistory = vec![tip("a", 1.0), b.clone(), tip("c", 2.0)].into();
        let mut flow = TipFlow::new(history);
        let epoch = flow.form_epoch();

        flow.repeat(b.clone());

        assert_eq!(flow.screen(), Screen::Input);
        assert_eq!(flow.form_seed(), draft("bob", "3.5", "again!"));
        assert!(flow.form_epoch() > epoch);
        assert_eq!(flow.history().len(), 3);
    }

    #[tokio::test]
    async fn send_another_returns_to_a_blank_form() {
        let store = MemoryHistoryStore::new();
        let mut flow = TipFlow::load(&store);
        flow.submit(&draft("alice", "2.5", "ty"), &FakeTransfer::default(), &store)
            .await
            .unwrap();
        assert!(flow.screen().is_confirmation());

        flow.send_another();

        assert!(flow.screen().is_input());
        assert_eq!(flow.current(), None);
        let seed = flow.form_seed();
        assert_eq!(seed.recipient, "");
        assert_eq!(seed.amount, "1");
        assert_eq!(seed.message, "");
        assert_eq!(flow.history().len(), 1);
    }

    #[test]
    fn malformed_storage_starts_empty() {
        let store = MemoryHistoryStore::with_raw("[{\"recipient\": 12}");
        let flow = TipFlow::load(&store);
        assert!(flow.history().is_empty());
        assert_eq!(flow.screen(), Screen::Input);
    }
}
