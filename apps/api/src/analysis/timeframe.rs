use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Days,
    Months,
    Years,
}

impl TimeUnit {
    /// Largest value the timeline picker allows for this unit.
    pub fn max_value(&self) -> u32 {
        match self {
            TimeUnit::Days => 365,
            TimeUnit::Months => 24,
            TimeUnit::Years => 5,
        }
    }

    fn plural(&self) -> &'static str {
        match self {
            TimeUnit::Days => "days",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }

    fn singular(&self) -> &'static str {
        match self {
            TimeUnit::Days => "day",
            TimeUnit::Months => "month",
            TimeUnit::Years => "year",
        }
    }
}

#[derive(Debug, Deserialize)]
struct TimeframeParts {
    value: u32,
    unit: TimeUnit,
}

impl From<TimeframeParts> for Timeframe {
    fn from(parts: TimeframeParts) -> Self {
        Timeframe::new(parts.value, parts.unit)
    }
}

/// Goal timeline chosen by the user. The value is always within
/// `1..=unit.max_value()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TimeframeParts")]
pub struct Timeframe {
    value: u32,
    unit: TimeUnit,
}

impl Default for Timeframe {
    fn default() -> Self {
        Self {
            value: 6,
            unit: TimeUnit::Months,
        }
    }
}

impl Timeframe {
    pub fn new(value: u32, unit: TimeUnit) -> Self {
        Self {
            value: value.clamp(1, unit.max_value()),
            unit,
        }
    }

    /// Whole months, rounding days up to the next 30-day month (minimum 1).
    pub fn in_months(&self) -> u32 {
        match self.unit {
            TimeUnit::Days => self.value.div_ceil(30).max(1),
            TimeUnit::Months => self.value,
            TimeUnit::Years => self.value * 12,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.value == 1 {
            self.unit.singular()
        } else {
            self.unit.plural()
        };
        write!(f, "{} {}", self.value, unit)
    }
}
