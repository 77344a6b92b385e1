//! The tip record and the editable form data it is built from.

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::circles_amount::CirclesAmount;
use crate::circles_amount::ParseCirclesAmountError;

/// The amount text a fresh form starts with.
pub const DEFAULT_AMOUNT: &str = "1";

/// A single tip from the current user to `recipient`.
///
/// Records carry no id or timestamp. Two identical tips compare equal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TipRecord {
    /// A username-like handle or a numeric user id.
    pub recipient: String,
    pub amount: CirclesAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TipRecord {
    pub fn new(
        recipient: impl Into<String>,
        amount: CirclesAmount,
        message: Option<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            amount,
            message,
        }
    }
}

/// Why a `TipDraft` could not become a `TipRecord`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipValidationError {
    #[error("recipient is required")]
    EmptyRecipient,
    #[error(transparent)]
    Amount(#[from] ParseCirclesAmountError),
}

/// The raw text of the tip form while it is being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TipDraft {
    pub recipient: String,
    pub amount: String,
    pub message: String,
}

impl Default for TipDraft {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            amount: DEFAULT_AMOUNT.to_string(),
            message: String::new(),
        }
    }
}

impl From<&TipRecord> for TipDraft {
    fn from(record: &TipRecord) -> Self {
        Self {
            recipient: record.recipient.clone(),
            amount: record.amount.to_string(),
            message: record.message.clone().unwrap_or_default(),
        }
    }
}

impl TipDraft {
    /// True when both required fields hold some text. This only gates the
    /// submit button; `validate` decides whether the text is usable.
    pub fn is_complete(&self) -> bool {
        !self.recipient.trim().is_empty() && !self.amount.trim().is_empty()
    }

    /// Checks the amount field on its own, for live feedback while typing.
    pub fn amount_error(&self) -> Option<ParseCirclesAmountError> {
        CirclesAmount::parse(&self.amount).err()
    }

    /// Parses and validates the draft into a record.
    ///
    /// The recipient is trimmed. An empty message becomes `None`.
    pub fn validate(&self) -> Result<TipRecord, TipValidationError> {
        let recipient = self.recipient.trim();
        if recipient.is_empty() {
            return Err(TipValidationError::EmptyRecipient);
        }
        let amount = CirclesAmount::parse(&self.amount)?;
        let message = if self.message.trim().is_empty() {
            None
        } else {
            Some(self.message.clone())
        };
        Ok(TipRecord::new(recipient, amount, message))
    }
}
