use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{ReduceError, Result};

/// How additions behave once they leave the `i64` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    #[default]
    Checked,
    Wrapping,
    Saturating,
}

impl OverflowPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Wrapping => "wrapping",
            Self::Saturating => "saturating",
        }
    }

    pub fn add(self, lhs: i64, rhs: i64) -> Result<i64> {
        match self {
            Self::Checked => lhs
                .checked_add(rhs)
                .ok_or_else(|| ReduceError::Overflow(format!("{lhs} + {rhs} exceeds i64 range"))),
            Self::Wrapping => Ok(lhs.wrapping_add(rhs)),
            Self::Saturating => Ok(lhs.saturating_add(rhs)),
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = ReduceError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "checked" => Ok(Self::Checked),
            "wrapping" => Ok(Self::Wrapping),
            "saturating" => Ok(Self::Saturating),
            other => Err(ReduceError::Validation(format!(
                "invalid overflow policy: {other} (expected checked|wrapping|saturating)"
            ))),
        }
    }
}

pub fn sum_of(lhs: i64, rhs: i64, policy: OverflowPolicy) -> Result<i64> {
    policy.add(lhs, rhs)
}

#[must_use]
pub const fn is_even(value: i64) -> bool {
    value % 2 == 0
}

/// `1..=max`; empty when `max < 1`.
#[must_use]
pub const fn number_range(max: i64) -> RangeInclusive<i64> {
    1..=max
}
