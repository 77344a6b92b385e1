//! Provides the bounded, most-recent-first list of past tips.

use std::collections::VecDeque;

use serde::Deserialize;
use serde::Serialize;

use crate::tip_record::TipRecord;

/// How many tips the history keeps.
pub const MAX_HISTORY_LEN: usize = 5;

/// The most recent tips, newest first, never longer than `MAX_HISTORY_LEN`.
///
/// Serializes as a plain JSON array of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<TipRecord>", into = "Vec<TipRecord>")]
pub struct TipHistory(VecDeque<TipRecord>);

impl TipHistory {
    pub fn new() -> Self {
        Self(VecDeque::with_capacity(MAX_HISTORY_LEN + 1))
    }

    /// Adds `record` as the newest entry, dropping the oldest entry if the
    /// list would grow past the cap.
    pub fn push_front(&mut self, record: TipRecord) {
        self.0.push_front(record);
        self.0.truncate(MAX_HISTORY_LEN);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TipRecord> {
        self.0.get(index)
    }

    /// Iterates newest first.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, TipRecord> {
        self.0.iter()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Keeps only the first `MAX_HISTORY_LEN` records, so a stored list that was
/// written by something else can never exceed the cap.
impl From<Vec<TipRecord>> for TipHistory {
    fn from(records: Vec<TipRecord>) -> Self {
        let mut deque = VecDeque::from(records);
        deque.truncate(MAX_HISTORY_LEN);
        Self(deque)
    }
}

impl From<TipHistory> for Vec<TipRecord> {
    fn from(history: TipHistory) -> Self {
        history.0.into()
    }
}

impl<'a> IntoIterator for &'a TipHistory {
    type Item = &'a TipRecord;
    type IntoIter = std::collections::vec_deque::Iter<'a, TipRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circles_amount::CirclesAmount;

    fn tip(recipient: &str) -> TipRecord {
        TipRecord::new(recipient, CirclesAmount::try_from(1.0).unwrap(), None)
    }

    fn recipients(history: &TipHistory) -> Vec<&str> {
        history.iter().map(|r| r.recipient.as_str()).collect()
    }

    #[test]
    fn push_front_grows_until_cap() {
        let mut history = TipHistory::new();
        for (i, name) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
            history.push_front(tip(name));
            assert_eq!(history.len(), i + 1);
        }
        assert_eq!(recipients(&history), ["e", "d", "c", "b", "a"]);
    }

    #[test]
    fn push_front_drops_only_the_oldest() {
        let mut history: TipHistory = ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(tip)
            .collect::<Vec<_>>()
            .into();

        history.push_front(tip("F"));
        assert_eq!(history.len(), MAX_HISTORY_LEN);
        assert_eq!(recipients(&history), ["F", "A", "B", "C", "D"]);
    }

    #[test]
    fn from_vec_truncates_oversized_lists() {
        let history: TipHistory = (0..8)
            .map(|i| tip(&i.to_string()))
            .collect::<Vec<_>>()
            .into();
        assert_eq!(recipients(&history), ["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn json_is_a_plain_array() {
        let mut history = TipHistory::new();
        history.push_front(tip("alice"));
        assert_eq!(
            history.to_json().unwrap(),
            r#"[{"recipient":"alice","amount":1}]"#
        );
        assert_eq!(TipHistory::from_json("[]").unwrap(), TipHistory::new());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(TipHistory::from_json("not json").is_err());
        assert!(TipHistory::from_json(r#"[{"recipient":"x","amount":-1}]"#).is_err());
        assert!(TipHistory::from_json(r#"{"recipient":"x"}"#).is_err());
    }
}
