//! uniqn - sliding-window n-gram frequency counter
//!
//! Reads one token per line, interns each token to a small integer code and
//! keeps the last three codes packed in a single `u64`. Unigram, bigram and
//! trigram keys are sliced out of that packed window with shifts and masks,
//! so the counting loop never hashes a string more than once per token.
//!
//! # Example
//! ```
//! use uniqn::statistics::Statistics;
//!
//! let mut stats = Statistics::new();
//! stats.process("a\nb\na\nb\n".as_bytes()).unwrap();
//!
//! assert_eq!(stats.count_of(&["a", "b"]), 2);
//! assert_eq!(stats.count_of(&["b", "a"]), 1);
//! assert_eq!(stats.total_unigrams(), 4);
//! ```

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod dictionary;
pub mod error;
pub mod input;
pub mod json_output;
pub mod phrase;
pub mod report;
pub mod runner;
pub mod statistics;

pub use dictionary::{Code, Dictionary, SENTINEL};
pub use error::{NgramError, Result};
pub use phrase::Phrase;
pub use statistics::{Outcome, Phase, Statistics, StreamEnd};
