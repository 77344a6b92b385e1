//! This crate contains the domain types shared by the Circles tip front-ends.

pub mod circles_amount;
pub mod history;
pub mod prefs;
pub mod tip_record;
pub mod transfer;

pub type ApiError = anyhow::Error;
