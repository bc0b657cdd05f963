//! Whole-number percentages for progress and engagement figures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer percentage in `0..=100`, serialized as a bare number.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(100);

    /// Values above 100 saturate.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// `part / total`, rounded half up. An empty total is 0%.
    pub fn rounded_ratio(part: usize, total: usize) -> Self {
        Self::ratio(part, total, |num, den| (2 * num + den) / (2 * den))
    }

    /// `part / total`, rounded down. An empty total is 0%.
    pub fn floored_ratio(part: usize, total: usize) -> Self {
        Self::ratio(part, total, |num, den| num / den)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    fn ratio(part: usize, total: usize, divide: impl Fn(u128, u128) -> u128) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let scaled = divide(part as u128 * 100, total as u128);
        Self(scaled.min(100) as u8)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
