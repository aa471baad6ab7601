use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::config::ParserConfig;
use crate::error::StatsError;
use crate::report::parser::ReportParser;
use crate::stats::Stats;

/// Reads statistics reports from stdin or a file
pub struct ReportReader;

impl ReportReader {
    /// Opens a report as a line source
    ///
    /// # Arguments
    /// * `path` - Optional file path. If None, reads from stdin.
    pub fn open(path: Option<&Path>) -> Result<Box<dyn BufRead>, StatsError> {
        match path {
            Some(file_path) => {
                #[cfg(debug_assertions)]
                log::debug!("Reading report from {:?}", file_path);

                let file = File::open(file_path)?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => {
                #[cfg(debug_assertions)]
                log::debug!("Reading report from stdin");

                Ok(Box::new(BufReader::new(io::stdin())))
            }
        }
    }

    /// Opens and parses a report in one step
    ///
    /// The returned registry is neither aggregated nor post-processed.
    pub fn read_stats(path: Option<&Path>, config: &ParserConfig) -> Result<Stats, StatsError> {
        let reader = Self::open(path)?;
        ReportParser::new(config.clone()).parse_reader(reader)
    }
}
