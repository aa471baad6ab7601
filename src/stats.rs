//! Statistics data model
//!
//! A [`Stats`] registry maps `(owner_group, name)` to a [`Stat`]. Each stat
//! holds one value per owner, can sum them into an aggregate, and can reorder
//! its owners by the numbers embedded in their names.

mod registry;
mod scalar;
mod stat;
mod types;

// Re-export public types
pub use registry::{StatKey, Stats};
pub use scalar::ScalarStat;
pub use stat::Stat;
pub use types::{AGGREGATE_OWNER, DataDigest, StatValue};
