//! Gestational age at birth.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GrowthError, Result};

/// Length of a full-term pregnancy, in days (40 completed weeks).
pub const TERM_DAYS: i64 = 280;

/// Gestational age at birth, as completed weeks plus days.
///
/// Construction is the validation gate: weeks must lie in [22, 44] and days
/// in [0, 6], so downstream age correction never sees a clinically
/// implausible gestation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gestation {
    weeks: u32,
    days: u32,
}

impl Gestation {
    pub const MIN_WEEKS: u32 = 22;
    pub const MAX_WEEKS: u32 = 44;

    /// Builds a gestation, rejecting out-of-range components.
    pub fn new(weeks: u32, days: u32) -> Result<Self> {
        if !(Self::MIN_WEEKS..=Self::MAX_WEEKS).contains(&weeks) || days > 6 {
            return Err(GrowthError::GestationOutOfRange { weeks, days });
        }
        Ok(Self { weeks, days })
    }

    /// Full term: 40 completed weeks, 0 days.
    pub fn term() -> Self {
        Self { weeks: 40, days: 0 }
    }

    pub fn weeks(&self) -> u32 {
        self.weeks
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Total gestation in days.
    pub fn total_days(&self) -> i64 {
        i64::from(self.weeks) * 7 + i64::from(self.days)
    }

    /// Days short of (positive) or beyond (negative) a 40-week term.
    pub fn days_short_of_term(&self) -> i64 {
        TERM_DAYS - self.total_days()
    }

    /// True when no correction applies (born at or after 40+0).
    pub fn is_term_or_post_term(&self) -> bool {
        self.total_days() >= TERM_DAYS
    }
}

impl Default for Gestation {
    fn default() -> Self {
        Self::term()
    }
}

impl fmt::Display for Gestation {
    /// Clinical `weeks+days` notation, e.g. `32+4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.weeks, self.days)
    }
}
