//! N-gram frequency accumulation
//!
//! `Statistics` owns the dictionary and the frequency table for one run and
//! drives the phrase window over the token stream:
//!
//! - **Priming**: the first two tokens are pushed without counting.
//! - **Sliding**: every further token is pushed and the unigram, bigram and
//!   trigram starting at the oldest slot are counted.
//! - **Draining**: once the stream ends (end of input or a blank line, both
//!   of which intern to the sentinel), the two trailing partial windows are
//!   counted so the last two tokens get their unigrams and the final pair
//!   its bigram.
//!
//! Streams shorter than three tokens never reach a full window and produce
//! no statistics at all.

use std::io::BufRead;

use fnv::FnvHashMap;
use tracing::{debug, info};

use crate::dictionary::{Dictionary, SENTINEL};
use crate::error::Result;
use crate::input::TokenReader;
use crate::phrase::{Phrase, FIELD_COUNT};

/// Driver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Priming,
    Sliding,
    Draining,
    Done,
}

/// What ended the token stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// The reader had no more lines
    EndOfInput,
    /// A blank line was read; anything after it is left unread
    BlankLine,
}

/// How a call to [`Statistics::process`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The stream ended before a full window was seen; nothing was counted
    Exhausted { tokens: u64, end: StreamEnd },
    /// The stream was counted and drained
    Counted { tokens: u64, end: StreamEnd },
}

impl Outcome {
    pub fn tokens(&self) -> u64 {
        match *self {
            Outcome::Exhausted { tokens, .. } | Outcome::Counted { tokens, .. } => tokens,
        }
    }

    pub fn end(&self) -> StreamEnd {
        match *self {
            Outcome::Exhausted { end, .. } | Outcome::Counted { end, .. } => end,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Outcome::Exhausted { .. })
    }
}

/// Frequency table keyed by packed phrase sub-keys
#[derive(Debug, Default)]
pub struct Statistics {
    dictionary: Dictionary,
    table: FnvHashMap<u64, u64>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a pre-seeded dictionary
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            table: FnvHashMap::default(),
        }
    }

    /// Counts every n-gram in `reader`.
    ///
    /// Counts accumulate across calls; the window restarts empty each time.
    pub fn process<R: BufRead>(&mut self, reader: R) -> Result<Outcome> {
        let mut tokens = TokenReader::new(reader);
        let mut window = Phrase::new();
        let mut phase = Phase::Priming;
        let mut primed = 0;
        let mut windows = 0u64;
        let mut exhausted = false;
        let mut end = StreamEnd::EndOfInput;

        while phase != Phase::Done {
            let next = match phase {
                Phase::Priming => match tokens.next_token()? {
                    Some(word) => {
                        window.push(self.dictionary.code_of(word));
                        primed += 1;
                        if primed < FIELD_COUNT - 1 {
                            Phase::Priming
                        } else {
                            Phase::Sliding
                        }
                    }
                    None => {
                        exhausted = true;
                        Phase::Done
                    }
                },
                Phase::Sliding => {
                    let code = match tokens.next_token()? {
                        Some(word) => {
                            if word.is_empty() {
                                end = StreamEnd::BlankLine;
                            }
                            self.dictionary.code_of(word)
                        }
                        None => SENTINEL,
                    };
                    window.push(code);

                    if code != SENTINEL {
                        self.record(window, FIELD_COUNT);
                        windows += 1;
                        Phase::Sliding
                    } else if windows == 0 {
                        exhausted = true;
                        Phase::Done
                    } else {
                        Phase::Draining
                    }
                }
                Phase::Draining => {
                    self.record(window, FIELD_COUNT - 1);
                    window.push(SENTINEL);
                    self.record(window, FIELD_COUNT - 2);
                    Phase::Done
                }
                Phase::Done => Phase::Done,
            };

            if next != phase {
                debug!(from = ?phase, to = ?next, tokens = tokens.tokens_read(), "phase transition");
            }
            phase = next;
        }

        let tokens = tokens.tokens_read();
        if exhausted {
            match end {
                StreamEnd::EndOfInput => info!(
                    tokens,
                    "input ended before the window filled, no statistics produced"
                ),
                StreamEnd::BlankLine => info!(
                    tokens,
                    "blank line before the window filled, stopped with input unread and no statistics produced"
                ),
            }
            Ok(Outcome::Exhausted { tokens, end })
        } else {
            debug!(
                tokens,
                ?end,
                windows,
                keys = self.table.len(),
                words = self.dictionary.size(),
                "stream counted"
            );
            Ok(Outcome::Counted { tokens, end })
        }
    }

    /// Increments the first `depth` sub-keys of `window`
    fn record(&mut self, window: Phrase, depth: usize) {
        for n in 0..depth {
            *self.table.entry(window.subkey(n)).or_insert(0) += 1;
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Number of distinct keys in the table
    pub fn size(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Count stored under a packed key
    pub fn count(&self, key: u64) -> u64 {
        self.table.get(&key).copied().unwrap_or(0)
    }

    /// Count of a word sequence (1 to 3 words), 0 if any word is unknown
    pub fn count_of<W: AsRef<[u8]>>(&self, words: &[W]) -> u64 {
        if words.is_empty() || words.len() > FIELD_COUNT {
            return 0;
        }
        let mut phrase = Phrase::new();
        for word in words {
            match self.dictionary.get(word) {
                Some(code) => phrase.push(code),
                None => return 0,
            }
        }
        self.count(phrase.value())
    }

    /// Sum of all single-word counts
    pub fn total_unigrams(&self) -> u64 {
        self.entries()
            .filter(|(phrase, _)| phrase.len() <= 1)
            .map(|(_, count)| count)
            .sum()
    }

    /// Calls `func(count, phrase)` for every table entry
    pub fn for_each<F: FnMut(u64, Phrase)>(&self, mut func: F) {
        for (&key, &count) in &self.table {
            func(count, Phrase::from_value(key));
        }
    }

    /// Iterates over `(phrase, count)` pairs in table order
    pub fn entries(&self) -> impl Iterator<Item = (Phrase, u64)> + '_ {
        self.table
            .iter()
            .map(|(&key, &count)| (Phrase::from_value(key), count))
    }
}
