pub mod tip_prefs;
pub mod user_prefs;
