//! The capability every statistic variant provides

use std::fmt;

use crate::stats::types::{DataDigest, StatValue};

/// A named, described counter holding one value per owner.
///
/// Variants differ in the payload they store per owner and in how they
/// summarize it. Payload shape mismatches are programmer errors and panic.
pub trait Stat: fmt::Debug {
    fn name(&self) -> &str;

    fn desc(&self) -> &str;

    /// Recomputes the summary entry from the raw per-owner entries.
    ///
    /// Calling it repeatedly yields the same summary each time.
    fn aggregate(&mut self);

    /// Records or overwrites the entry for `owner`.
    fn add_observation(&mut self, owner: &str, value: StatValue);

    /// Yields `(owner, value)` pairs in the current presentation order.
    ///
    /// The summary entry, when selected by `include`, is labelled
    /// [`AGGREGATE_OWNER`](crate::stats::AGGREGATE_OWNER). Each call starts a
    /// fresh pass over the entries.
    fn data_points(&self, include: DataDigest) -> Box<dyn Iterator<Item = (&str, StatValue)> + '_>;

    /// Reorders the per-owner entries for presentation.
    fn post_process(&mut self);
}
