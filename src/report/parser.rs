use std::io::BufRead;

use crate::config::{NonFinitePolicy, ParserConfig};
use crate::error::StatsError;
use crate::numeric::strip_numeric_characters;
use crate::stats::{ScalarStat, StatValue, Stats};

/// One recognized statistic line
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine<'a> {
    pub owner: &'a str,
    pub name: &'a str,
    pub value: f64,
    pub desc: String,
}

impl StatLine<'_> {
    /// Owner with its digits removed; owners sharing it form one group.
    pub fn owner_group(&self) -> String {
        strip_numeric_characters(self.owner)
    }
}

/// Builds a [`Stats`] registry from report lines
#[derive(Debug, Clone, Default)]
pub struct ReportParser {
    config: ParserConfig,
}

impl ReportParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parses every line, skipping those that are not statistic records.
    ///
    /// Does not aggregate or post-process the result.
    pub fn parse<I, S>(&self, lines: I) -> Result<Stats, StatsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parse_numbered(lines.into_iter().map(Ok::<S, StatsError>))
    }

    /// Like [`ReportParser::parse`], reading lines from `reader`.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Stats, StatsError> {
        self.parse_numbered(reader.lines().map(|line| line.map_err(StatsError::from)))
    }

    fn parse_numbered<I, S>(&self, lines: I) -> Result<Stats, StatsError>
    where
        I: IntoIterator<Item = Result<S, StatsError>>,
        S: AsRef<str>,
    {
        let mut stats = Stats::new();
        for (idx, line) in lines.into_iter().enumerate() {
            self.ingest(&mut stats, idx + 1, line?.as_ref())?;
        }

        #[cfg(debug_assertions)]
        log::debug!("Parsed {} stats", stats.len());

        Ok(stats)
    }

    /// Classifies a single line.
    ///
    /// Returns `Ok(None)` for lines that are not statistic records and an error
    /// when a record's value token is not a number. `line_number` is only used
    /// for error reporting.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Option<StatLine<'_>>, StatsError> {
        let mut tokens = line.split_whitespace();

        let (Some(path), Some(value_token)) = (tokens.next(), tokens.next()) else {
            return Ok(None);
        };

        if path.contains('|') || value_token.contains('|') {
            return Ok(None);
        }

        let Some((owner, name)) = path.rsplit_once('.') else {
            return Ok(None);
        };

        if owner.is_empty() || !is_stat_name(name) {
            return Ok(None);
        }

        let value = value_token
            .parse::<f64>()
            .map_err(|_| StatsError::InvalidValue {
                line: line_number,
                token: value_token.to_string(),
            })?;

        // Third token holds value flags and is not part of the description
        let desc = tokens.skip(1).collect::<Vec<_>>().join(" ");

        Ok(Some(StatLine {
            owner,
            name,
            value,
            desc,
        }))
    }

    fn ingest(&self, stats: &mut Stats, line_number: usize, line: &str) -> Result<(), StatsError> {
        let Some(record) = Self::parse_line(line, line_number)? else {
            return Ok(());
        };

        if !record.value.is_finite() {
            match self.config.non_finite {
                NonFinitePolicy::Skip => {
                    log::warn!(
                        "line {}: skipping {}.{} with non-finite value {}",
                        line_number,
                        record.owner,
                        record.name,
                        record.value
                    );
                    return Ok(());
                }
                NonFinitePolicy::Reject => {
                    let token = line.split_whitespace().nth(1).unwrap_or_default();
                    return Err(StatsError::NonFiniteValue {
                        line: line_number,
                        token: token.to_string(),
                    });
                }
            }
        }

        let owner_group = record.owner_group();
        let value = StatValue::Scalar(record.value);
        match stats.find_mut(&owner_group, record.name) {
            Some(stat) => stat.add_observation(record.owner, value),
            None => {
                #[cfg(debug_assertions)]
                log::debug!("New stat {}.{} at line {}", owner_group, record.name, line_number);

                let stat = ScalarStat::new(record.name, record.desc.as_str());
                stats
                    .insert(&owner_group, record.name, Box::new(stat))
                    .add_observation(record.owner, value);
            }
        }

        Ok(())
    }
}

/// Parses `lines` with the default parser configuration.
pub fn parse<I, S>(lines: I) -> Result<Stats, StatsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ReportParser::default().parse(lines)
}

// Names are a single word: letters, digits and underscores.
fn is_stat_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
