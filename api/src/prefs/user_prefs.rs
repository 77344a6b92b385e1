use super::tip_prefs::TipPrefs;
use serde::Serialize;
use serde::Deserialize;

/// Represents all user prefs. Intended for saving to a file, editing in a settings dialog, etc.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    tip_prefs: TipPrefs,
}

impl UserPrefs {
    pub fn tip_prefs(&self) -> &TipPrefs {
        &self.tip_prefs
    }
}
