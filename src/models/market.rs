//! Market data model
//!
//! Quotes shown in the market overview grid and the timeframe selector.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Chart timeframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "1Y")]
    OneYear,
}

impl Timeframe {
    /// Every timeframe, in selector order
    pub const ALL: [Timeframe; 5] = [
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::OneYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::OneYear => "1Y",
        }
    }

    /// Parse from a selector label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
    }

    /// Next timeframe, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous timeframe, wrapping around
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single instrument quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub price: Money,
    pub change: Money,
    pub change_percent: f64,
    /// Pre-formatted volume label ("125.4M")
    pub volume: String,
}

impl Quote {
    /// Whether the instrument is up on the session (zero counts as up)
    pub fn is_up(&self) -> bool {
        !self.change.is_negative()
    }
}

/// One figure in the static market summary strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketStat {
    pub label: String,
    pub value: String,
    pub change: String,
    pub positive: bool,
}

impl MarketStat {
    pub fn new(label: &str, value: &str, change: &str, positive: bool) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            change: change.to_string(),
            positive,
        }
    }
}
