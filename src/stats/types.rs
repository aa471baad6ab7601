//! Type definitions shared by every statistic variant

use std::fmt;

use serde::{Deserialize, Serialize};

/// Owner label under which a stat's aggregate is reported.
pub const AGGREGATE_OWNER: &str = "aggregate";

/// Selects which data points a stat yields
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum DataDigest {
    /// Per-owner entries followed by the aggregate
    #[default]
    #[value(name = "with_aggregate")]
    WithAggregate,
    /// Per-owner entries only
    #[value(name = "without_aggregate")]
    WithoutAggregate,
    /// The aggregate only
    #[value(name = "just_aggregate")]
    JustAggregate,
}

impl DataDigest {
    pub fn includes_entries(self) -> bool {
        !matches!(self, DataDigest::JustAggregate)
    }

    pub fn includes_aggregate(self) -> bool {
        !matches!(self, DataDigest::WithoutAggregate)
    }
}

impl fmt::Display for DataDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataDigest::WithAggregate => write!(f, "with_aggregate"),
            DataDigest::WithoutAggregate => write!(f, "without_aggregate"),
            DataDigest::JustAggregate => write!(f, "just_aggregate"),
        }
    }
}

/// Payload recorded for one owner of a stat
///
/// Each stat variant accepts exactly one payload shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum StatValue {
    Scalar(f64),
}

impl StatValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            StatValue::Scalar(value) => Some(*value),
        }
    }

    /// Formats the value with a fixed number of decimals.
    pub fn format_with_precision(&self, precision: usize) -> String {
        match self {
            StatValue::Scalar(value) => format!("{:.*}", precision, value),
        }
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Scalar(value)
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Scalar(value) => write!(f, "{}", value),
        }
    }
}
