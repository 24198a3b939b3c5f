//! Core type definitions for sales-review

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest rating accepted by default
pub const DEFAULT_MIN_RATING: i32 = 1;

/// Highest rating accepted by default
pub const DEFAULT_MAX_RATING: i32 = 5;

/// Price in the smallest currency unit (cents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Create a price from an amount in cents
    pub fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    /// Amount in cents
    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Price {
    fn from(cents: u64) -> Self {
        Price(cents)
    }
}

/// Renders as major units with two decimals, e.g. `219.98`
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Inclusive range of accepted star ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRange {
    /// Lowest accepted rating
    pub min: i32,
    /// Highest accepted rating
    pub max: i32,
}

impl RatingRange {
    /// Create a range from its inclusive bounds
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Check that the range is non-empty (`min <= max`)
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Check whether a rating lies within the range
    pub fn contains(&self, rating: i32) -> bool {
        (self.min..=self.max).contains(&rating)
    }
}

impl Default for RatingRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_RATING, DEFAULT_MAX_RATING)
    }
}

impl fmt::Display for RatingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
