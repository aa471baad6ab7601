//! simstats library - simulator statistics report parsing and aggregation
//!
//! Parse a report into a [`Stats`] registry, call [`Stats::aggregate`] and
//! then [`Stats::post_process`], and read the results back with
//! [`Stats::find`], [`Stats::query`] and [`Stat::data_points`].

pub mod config;
pub mod error;
pub mod numeric;
pub mod report;
pub mod stats;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::StatsError;
pub use report::{ReportParser, parse};
pub use stats::{DataDigest, ScalarStat, Stat, StatValue, Stats};
