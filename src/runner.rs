//! Mode dispatch for a single run

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::{Mode, RunConfig};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::report;
use crate::statistics::{Outcome, Statistics};

/// Executes `config` against `input`, writing to `out`.
///
/// Returns the counting outcome, or `None` in dump mode. A dictionary file
/// is loaded before any input is read, so an unreadable path fails the run
/// without consuming input.
pub fn run<R: BufRead, W: Write>(config: &RunConfig, input: R, out: W) -> Result<Option<Outcome>> {
    match &config.mode {
        Mode::Dump => {
            let mut dictionary = Dictionary::new();
            let lines = dictionary.extend_from_reader(input)?;
            debug!(lines, words = dictionary.size() - 1, "dumping dictionary");
            report::write_dump(&dictionary, out)?;
            Ok(None)
        }
        Mode::Count { dictionary } => {
            let mut stats = match dictionary {
                Some(path) => Statistics::with_dictionary(Dictionary::from_path(path)?),
                None => Statistics::new(),
            };
            let outcome = stats.process(input)?;
            report::write_report(&stats, &config.report, out)?;
            Ok(Some(outcome))
        }
    }
}
