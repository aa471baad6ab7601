// Configuration type definitions

use serde::Deserialize;

use crate::stats::DataDigest;

/// Default number of decimals in table output
fn default_precision() -> usize {
    6
}

/// What to do with value tokens that parse to NaN or infinity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NonFinitePolicy {
    /// Drop the line and log a warning
    #[default]
    Skip,
    /// Fail the parse
    Reject,
}

/// Output rendering selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Parser configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub non_finite: NonFinitePolicy,
}

/// Output configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub digest: DataDigest,
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::Table,
            digest: DataDigest::WithAggregate,
            precision: default_precision(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
