//! Units offered in the cost/bounty dropdowns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Recurrence or scope of a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CostUnit {
    Hour,
    Day,
    Week,
    TwoWeeks,
    Month,
    Quarter,
    Year,
    Total,
}

impl CostUnit {
    /// Dropdown order.
    pub const ALL: [CostUnit; 8] = [
        CostUnit::Hour,
        CostUnit::Day,
        CostUnit::Week,
        CostUnit::TwoWeeks,
        CostUnit::Month,
        CostUnit::Quarter,
        CostUnit::Year,
        CostUnit::Total,
    ];

    /// Token stored in the money string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CostUnit::Hour => "hr",
            CostUnit::Day => "day",
            CostUnit::Week => "week",
            CostUnit::TwoWeeks => "2 weeks",
            CostUnit::Month => "month",
            CostUnit::Quarter => "quarter",
            CostUnit::Year => "year",
            CostUnit::Total => "total",
        }
    }

    /// Dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            CostUnit::Hour => "per hour",
            CostUnit::Day => "per day",
            CostUnit::Week => "per week",
            CostUnit::TwoWeeks => "every 2 weeks",
            CostUnit::Month => "per month",
            CostUnit::Quarter => "per quarter",
            CostUnit::Year => "per year",
            CostUnit::Total => "total",
        }
    }
}

impl fmt::Display for CostUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CostUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::invalid_format("unit", format!("unknown unit '{}'", s)))
    }
}

impl TryFrom<String> for CostUnit {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CostUnit> for String {
    fn from(unit: CostUnit) -> Self {
        unit.as_str().to_string()
    }
}
