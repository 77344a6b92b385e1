//! The boundary to whatever actually moves Circles between users.

use async_trait::async_trait;

use crate::tip_record::TipRecord;
use crate::ApiError;

/// Sends one tip. Resolves once the transfer has either succeeded or failed;
/// there is no partial progress.
///
/// Futures are not `Send`: the UI runs on a single-threaded executor.
#[async_trait(?Send)]
pub trait Transfer {
    async fn send(&self, tip: &TipRecord) -> Result<(), ApiError>;
}
