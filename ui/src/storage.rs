//! Persistence of the recent-tip history.

use std::cell::RefCell;
use std::rc::Rc;

use api::history::TipHistory;
use dioxus_logger::tracing::warn;
use thiserror::Error;

use crate::compat;

/// The single key the history lives under.
pub const HISTORY_STORAGE_KEY: &str = "recentTips";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to serialize tip history: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write tip history: {0}")]
    Write(String),
}

/// Where the tip history is kept between sessions.
///
/// `load` never fails: a missing, unreadable or malformed value is an empty
/// history. `save` replaces whatever was stored before.
pub trait HistoryStore {
    fn load(&self) -> TipHistory;
    fn save(&self, history: &TipHistory) -> Result<(), StorageError>;
}

fn parse_stored(raw: Option<String>) -> TipHistory {
    match raw {
        None => TipHistory::new(),
        Some(json) => TipHistory::from_json(&json).unwrap_or_else(|e| {
            warn!("discarding malformed tip history: {}", e);
            TipHistory::new()
        }),
    }
}

/// The browser's `localStorage`. Off the web there is no storage medium, so
/// this loads nothing and saves nowhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistoryStore;

impl HistoryStore for BrowserHistoryStore {
    fn load(&self) -> TipHistory {
        let raw = compat::local_storage_get(HISTORY_STORAGE_KEY).unwrap_or_else(|e| {
            warn!("local storage unreadable: {}", e);
            None
        });
        parse_stored(raw)
    }

    fn save(&self, history: &TipHistory) -> Result<(), StorageError> {
        let json = history.to_json()?;
        compat::local_storage_set(HISTORY_STORAGE_KEY, &json).map_err(StorageError::Write)
    }
}

/// Keeps the serialized value in memory. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `raw` already stored, as if a previous session wrote it.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    /// The stored value exactly as it would sit in `localStorage`.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> TipHistory {
        parse_stored(self.raw())
    }

    fn save(&self, history: &TipHistory) -> Result<(), StorageError> {
        let json = history.to_json()?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }
}
