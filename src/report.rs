//! Ranking and rendering of accumulated phrase counts
//!
//! Entries are ordered by count, most frequent first. Equal counts are
//! ordered by packed key, highest first, which keeps the output
//! deterministic regardless of hash-table iteration order.
//!
//! Words are byte strings. Text, JSON and CSV output decode them lossily;
//! the dump writes them back byte for byte.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::io::Write;

use crate::cli::OutputFormat;
use crate::config::ReportConfig;
use crate::csv_output::{CsvNgram, CsvOutput};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::json_output::{JsonNgram, JsonOutput, JsonSummary};
use crate::phrase::{Phrase, FIELD_COUNT};
use crate::statistics::Statistics;

/// Text rendered for an absent or sentinel slot
pub const PLACEHOLDER: &str = " ";

/// One frequency-table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked {
    pub count: u64,
    pub phrase: Phrase,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| other.phrase.value().cmp(&self.phrase.value()))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ranked {
    /// Words of the occupied slots, oldest first; sentinels decode to ""
    pub fn words<'a>(&self, dictionary: &'a Dictionary) -> Result<Vec<&'a [u8]>> {
        self.phrase
            .codes()
            .map(|code| dictionary.text_of(code))
            .collect()
    }

    /// `<count>: <w1> <w2> <w3>` with absent slots as placeholders
    pub fn render(&self, dictionary: &Dictionary) -> Result<String> {
        let mut slots: Vec<Cow<'_, str>> = self
            .words(dictionary)?
            .into_iter()
            .map(|w| {
                if w.is_empty() {
                    Cow::Borrowed(PLACEHOLDER)
                } else {
                    String::from_utf8_lossy(w)
                }
            })
            .collect();
        slots.resize(FIELD_COUNT, Cow::Borrowed(PLACEHOLDER));
        Ok(format!("{}: {}", self.count, slots.join(" ")))
    }
}

/// Every table entry in report order
pub fn rank(stats: &Statistics) -> Vec<Ranked> {
    let mut ranked = Vec::with_capacity(stats.size());
    stats.for_each(|count, phrase| ranked.push(Ranked { count, phrase }));
    ranked.sort_unstable();
    ranked
}

/// Writes the ranked report in the configured format
pub fn write_report<W: Write>(stats: &Statistics, config: &ReportConfig, mut out: W) -> Result<()> {
    let dictionary = stats.dictionary();
    let ranked = rank(stats);
    let shown = &ranked[..config.limit.unwrap_or(ranked.len()).min(ranked.len())];

    match config.format {
        OutputFormat::Text => {
            for entry in shown {
                writeln!(out, "{}", entry.render(dictionary)?)?;
            }
        }
        OutputFormat::Json => {
            let mut json = JsonOutput::new();
            for entry in shown {
                let words = entry.words(dictionary)?;
                json.add_ngram(JsonNgram {
                    count: entry.count,
                    n: words.len(),
                    words: words.into_iter().map(lossy).collect(),
                    key: entry.phrase.value(),
                });
            }
            json.set_summary(JsonSummary {
                distinct_ngrams: stats.size(),
                total_unigrams: stats.total_unigrams(),
                vocabulary: dictionary.size() - 1,
            });
            writeln!(out, "{}", json.to_json()?)?;
        }
        OutputFormat::Csv => {
            let mut csv = CsvOutput::new();
            for entry in shown {
                csv.add_ngram(CsvNgram {
                    count: entry.count,
                    words: entry
                        .words(dictionary)?
                        .into_iter()
                        .map(lossy)
                        .collect(),
                });
            }
            write!(out, "{}", csv.to_csv())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn lossy(word: &[u8]) -> String {
    String::from_utf8_lossy(word).into_owned()
}

/// Writes the dictionary's real words in descending byte-wise order,
/// exactly as they were read
pub fn write_dump<W: Write>(dictionary: &Dictionary, mut out: W) -> Result<()> {
    for word in dictionary.sorted_descending() {
        out.write_all(word)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
