//! Registry of statistics keyed by owner group and name

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::stats::stat::Stat;

/// Composite key of a statistic within [`Stats`]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatKey {
    pub owner_group: String,
    pub name: String,
}

impl StatKey {
    pub fn new(owner_group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner_group: owner_group.into(),
            name: name.into(),
        }
    }
}

/// All statistics parsed from one report
///
/// At most one stat exists per `(owner_group, name)` pair. Iteration happens to
/// be ordered by key; callers should not depend on any particular order.
#[derive(Debug, Default)]
pub struct Stats {
    stats: BTreeMap<StatKey, Box<dyn Stat>>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, owner_group: &str, name: &str) -> Option<&dyn Stat> {
        let stat = self.stats.get(&StatKey::new(owner_group, name))?;
        Some(stat.as_ref())
    }

    pub fn find_mut(&mut self, owner_group: &str, name: &str) -> Option<&mut dyn Stat> {
        let stat = self.stats.get_mut(&StatKey::new(owner_group, name))?;
        Some(stat.as_mut())
    }

    /// Stores `stat` under `(owner_group, name)`, replacing any stat already there.
    ///
    /// Call [`Stats::find`] first to avoid overwriting collected observations.
    pub fn insert(&mut self, owner_group: &str, name: &str, stat: Box<dyn Stat>) -> &mut dyn Stat {
        let slot = match self.stats.entry(StatKey::new(owner_group, name)) {
            Entry::Occupied(mut occupied) => {
                log::warn!("Replacing existing stat {}.{}", owner_group, name);
                occupied.insert(stat);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(stat),
        };
        slot.as_mut()
    }

    /// Owner groups that have a stat called `name`, without duplicates.
    pub fn query(&self, name: &str) -> Vec<&str> {
        self.stats
            .keys()
            .filter(|key| key.name == name)
            .map(|key| key.owner_group.as_str())
            .collect()
    }

    pub fn aggregate(&mut self) {
        for stat in self.stats.values_mut() {
            stat.aggregate();
        }
    }

    pub fn post_process(&mut self) {
        for stat in self.stats.values_mut() {
            stat.post_process();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StatKey, &dyn Stat)> {
        self.stats.iter().map(|(key, stat)| {
            let stat: &dyn Stat = stat.as_ref();
            (key, stat)
        })
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
