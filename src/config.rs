//! Run configuration
//!
//! Plain structs assembled from the parsed command line. The library
//! entry points take these rather than the clap types so they can be
//! driven directly from tests and benchmarks.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};

/// How the frequency report is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: OutputFormat,
    /// Print at most this many ranked phrases
    pub limit: Option<usize>,
}

impl ReportConfig {
    /// Text output limited to the `n` most frequent phrases
    pub fn top(n: usize) -> Self {
        Self {
            limit: Some(n),
            ..Self::default()
        }
    }
}

/// What a run does with its input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Count n-grams, optionally starting from a pre-seeded dictionary
    Count { dictionary: Option<PathBuf> },
    /// Print the distinct words in descending order
    Dump,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Count { dictionary: None }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    /// Token source; standard input when `None`
    pub input: Option<PathBuf>,
    pub report: ReportConfig,
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        let mode = if cli.dump {
            Mode::Dump
        } else {
            Mode::Count {
                dictionary: cli.dictionary.clone(),
            }
        };

        Self {
            mode,
            input: cli.input.clone(),
            report: ReportConfig {
                format: cli.format,
                limit: cli.top,
            },
        }
    }
}
