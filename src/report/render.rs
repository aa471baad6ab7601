//! Table and JSON views of a processed registry

use serde::Serialize;

use crate::config::OutputConfig;
use crate::error::StatsError;
use crate::stats::{DataDigest, Stat, StatValue, Stats};

/// Which stats of a registry to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'q> {
    All,
    /// Every owner group that has a stat with this name
    Name(&'q str),
    /// Exactly one stat
    Stat { owner_group: &'q str, name: &'q str },
}

/// How data points are selected and printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub digest: DataDigest,
    pub precision: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        OutputConfig::default().into()
    }
}

impl From<OutputConfig> for RenderOptions {
    fn from(config: OutputConfig) -> Self {
        RenderOptions {
            digest: config.digest,
            precision: config.precision,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerValue {
    pub owner: String,
    pub value: StatValue,
}

/// Owned copy of one stat's data points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatSnapshot {
    pub group: String,
    pub name: String,
    pub desc: String,
    pub values: Vec<OwnerValue>,
}

impl StatSnapshot {
    fn capture(owner_group: &str, stat: &dyn Stat, digest: DataDigest) -> Self {
        StatSnapshot {
            group: owner_group.to_string(),
            name: stat.name().to_string(),
            desc: stat.desc().to_string(),
            values: stat
                .data_points(digest)
                .map(|(owner, value)| OwnerValue {
                    owner: owner.to_string(),
                    value,
                })
                .collect(),
        }
    }
}

/// Captures the selected stats, in registry order.
pub fn snapshot(
    stats: &Stats,
    selection: Selection<'_>,
    digest: DataDigest,
) -> Result<Vec<StatSnapshot>, StatsError> {
    match selection {
        Selection::All => Ok(stats
            .iter()
            .map(|(key, stat)| StatSnapshot::capture(&key.owner_group, stat, digest))
            .collect()),
        Selection::Name(name) => {
            let groups = stats.query(name);
            if groups.is_empty() {
                return Err(StatsError::NameNotFound(name.to_string()));
            }
            Ok(groups
                .into_iter()
                .filter_map(|group| {
                    stats
                        .find(group, name)
                        .map(|stat| StatSnapshot::capture(group, stat, digest))
                })
                .collect())
        }
        Selection::Stat { owner_group, name } => {
            let stat = stats
                .find(owner_group, name)
                .ok_or_else(|| StatsError::StatNotFound {
                    owner_group: owner_group.to_string(),
                    name: name.to_string(),
                })?;
            Ok(vec![StatSnapshot::capture(owner_group, stat, digest)])
        }
    }
}

/// Renders snapshots as aligned text blocks separated by blank lines.
pub fn render_table(snapshots: &[StatSnapshot], precision: usize) -> String {
    let mut out = String::new();

    for (idx, snap) in snapshots.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }

        out.push_str(&format!("{}.{}", snap.group, snap.name));
        if !snap.desc.is_empty() {
            out.push_str(&format!("  # {}", snap.desc));
        }
        out.push('\n');

        let values: Vec<String> = snap
            .values
            .iter()
            .map(|entry| entry.value.format_with_precision(precision))
            .collect();
        let owner_width = snap.values.iter().map(|e| e.owner.chars().count()).max().unwrap_or(0);
        let value_width = values.iter().map(String::len).max().unwrap_or(0);

        for (entry, value) in snap.values.iter().zip(&values) {
            out.push_str(&format!(
                "  {:<ow$}  {:>vw$}\n",
                entry.owner,
                value,
                ow = owner_width,
                vw = value_width
            ));
        }
    }

    out
}

pub fn render_json(snapshots: &[StatSnapshot]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshots)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
