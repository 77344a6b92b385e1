//! The stand-in transfer backend.

use std::time::Duration;

use api::prefs::tip_prefs::TipPrefs;
use api::tip_record::TipRecord;
use api::transfer::Transfer;
use api::ApiError;
use async_trait::async_trait;

use crate::compat;

/// Waits for a fixed delay and reports success. Nothing is transferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedTransfer {
    delay: Duration,
    fail: bool,
}

impl SimulatedTransfer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Every send waits the same delay, then fails.
    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }
}

impl From<&TipPrefs> for SimulatedTransfer {
    fn from(prefs: &TipPrefs) -> Self {
        Self {
            delay: prefs.send_delay,
            fail: prefs.simulate_failure,
        }
    }
}

#[async_trait(?Send)]
impl Transfer for SimulatedTransfer {
    async fn send(&self, tip: &TipRecord) -> Result<(), ApiError> {
        compat::sleep(self.delay).await;
        if self.fail {
            anyhow::bail!("simulated transfer to {} failed", tip.recipient);
        }
        Ok(())
    }
}
