//! Provides a validated type for amounts of Circles, the tipped currency.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

/// The display name of the unit.
pub const CIRCLES_UNIT: &str = "Circles";

/// An error that can occur when parsing a string into a `CirclesAmount`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCirclesAmountError {
    /// Nothing was entered.
    #[error("amount is required")]
    Empty,
    /// The string is not a number (e.g., "abc", "1.2.3").
    #[error("amount must be a number")]
    InvalidFormat,
    /// The string parsed to infinity or NaN.
    #[error("amount must be a finite number")]
    NotFinite,
    /// Zero or negative.
    #[error("amount must be greater than zero")]
    NotPositive,
}

/// A positive, finite quantity of Circles.
///
/// Stored as an `f64` because the persisted format is a plain JSON number.
/// The value is checked on every way in: parsing user input, converting from
/// a float, and deserializing a stored record. Whole amounts serialize as
/// integers (`1`, not `1.0`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct CirclesAmount(f64);

impl CirclesAmount {
    /// Parses user input, trimming surrounding whitespace first.
    ///
    /// # Examples
    /// ```
    /// use circles_api::circles_amount::{CirclesAmount, ParseCirclesAmountError};
    ///
    /// let amount = CirclesAmount::parse(" 2.5 ").unwrap();
    /// assert_eq!(amount.value(), 2.5);
    ///
    /// assert_eq!(CirclesAmount::parse("0"), Err(ParseCirclesAmountError::NotPositive));
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseCirclesAmountError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCirclesAmountError::Empty);
        }
        let value = s
            .parse::<f64>()
            .map_err(|_| ParseCirclesAmountError::InvalidFormat)?;
        Self::try_from(value)
    }

    /// Returns the raw numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Formats the amount with its unit (e.g., "2.5 Circles").
    pub fn to_string_with_unit(&self) -> String {
        format!("{} {}", self, CIRCLES_UNIT)
    }
}

impl TryFrom<f64> for CirclesAmount {
    type Error = ParseCirclesAmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ParseCirclesAmountError::NotFinite);
        }
        if value <= 0.0 {
            return Err(ParseCirclesAmountError::NotPositive);
        }
        Ok(Self(value))
    }
}

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

impl Serialize for CirclesAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0 <= MAX_EXACT_INT {
            serializer.serialize_u64(self.0 as u64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Formats the bare number in its shortest form ("2.5", "1").
impl fmt::Display for CirclesAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
