use api::prefs::user_prefs::UserPrefs;
use api::transfer::Transfer;
use std::ops::Deref;
use std::rc::Rc;

use crate::storage::BrowserHistoryStore;
use crate::storage::HistoryStore;
use crate::transfer::SimulatedTransfer;

pub struct AppStateData {
    pub history_store: Rc<dyn HistoryStore>,
    pub transfer: Rc<dyn Transfer>,
}

/// The stable, non-reactive services shared through the component tree.
#[derive(Clone)]
pub struct AppState(Rc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl AppState {
    /// Browser storage and the simulated transfer configured by `user_prefs`.
    pub fn new(user_prefs: UserPrefs) -> Self {
        let transfer = SimulatedTransfer::from(user_prefs.tip_prefs());
        Self::with_services(Rc::new(BrowserHistoryStore), Rc::new(transfer))
    }

    pub fn with_services(history_store: Rc<dyn HistoryStore>, transfer: Rc<dyn Transfer>) -> Self {
        Self(Rc::new(AppStateData {
            history_store,
            transfer,
        }))
    }
}
