use std::collections::HashMap;
use std::fmt;

use crate::numeric::NumericKey;
use crate::stats::stat::Stat;
use crate::stats::types::{AGGREGATE_OWNER, DataDigest, StatValue};

/// Floating-point counter keyed by owner
///
/// Entries keep first-observed order until [`Stat::post_process`] sorts them by
/// the numbers embedded in each owner. The aggregate is held apart from the
/// entries and never takes part in that ordering. An observation for the
/// owner `aggregate` lands in that slot and is replaced by the next
/// [`Stat::aggregate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarStat {
    name: String,
    desc: String,
    entries: Vec<(String, f64)>,
    positions: HashMap<String, usize>,
    aggregate: Option<f64>,
}

impl ScalarStat {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            entries: Vec::new(),
            positions: HashMap::new(),
            aggregate: None,
        }
    }

    /// Value recorded for `owner`, if any.
    pub fn get(&self, owner: &str) -> Option<f64> {
        self.positions.get(owner).map(|&idx| self.entries[idx].1)
    }

    /// Sum computed by the last call to [`Stat::aggregate`].
    pub fn aggregate_value(&self) -> Option<f64> {
        self.aggregate
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn reindex(&mut self) {
        self.positions.clear();
        for (idx, (owner, _)) in self.entries.iter().enumerate() {
            self.positions.insert(owner.clone(), idx);
        }
    }
}

impl Stat for ScalarStat {
    fn name(&self) -> &str {
        &self.name
    }

    fn desc(&self) -> &str {
        &self.desc
    }

    fn aggregate(&mut self) {
        let sum = self.entries.iter().fold(0.0_f64, |acc, (_, value)| acc + *value);
        self.aggregate = Some(sum);
    }

    fn add_observation(&mut self, owner: &str, value: StatValue) {
        let StatValue::Scalar(value) = value;
        assert!(
            value.is_finite(),
            "scalar stat `{}` expects a finite value for owner `{}`, got {}",
            self.name,
            owner,
            value
        );

        if owner == AGGREGATE_OWNER {
            #[cfg(debug_assertions)]
            log::debug!("Stat {} received a reported aggregate of {}", self.name, value);

            self.aggregate = Some(value);
            return;
        }

        match self.positions.get(owner) {
            Some(&idx) => self.entries[idx].1 = value,
            None => {
                self.positions.insert(owner.to_string(), self.entries.len());
                self.entries.push((owner.to_string(), value));
            }
        }
    }

    fn data_points(&self, include: DataDigest) -> Box<dyn Iterator<Item = (&str, StatValue)> + '_> {
        let entries = self
            .entries
            .iter()
            .filter(move |_| include.includes_entries())
            .map(|(owner, value)| (owner.as_str(), StatValue::Scalar(*value)));

        let aggregate = self
            .aggregate
            .filter(|_| include.includes_aggregate())
            .map(|sum| (AGGREGATE_OWNER, StatValue::Scalar(sum)));

        Box::new(entries.chain(aggregate))
    }

    fn post_process(&mut self) {
        // sort_by_cached_key is stable: equal keys keep first-observed order
        self.entries
            .sort_by_cached_key(|(owner, _)| NumericKey::from_owner(owner));
        self.reindex();

        #[cfg(debug_assertions)]
        log::debug!("Sorted {} owners of stat {}", self.entries.len(), self.name);
    }
}

impl fmt::Display for ScalarStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.desc.is_empty() {
            write!(f, " [{}]", self.desc)?;
        }
        write!(f, ":")?;

        for (idx, (owner, value)) in self.data_points(DataDigest::WithAggregate).enumerate() {
            let sep = if idx == 0 { " " } else { ", " };
            write!(f, "{}{}={}", sep, owner, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "scalar_tests.rs"]
mod scalar_tests;
