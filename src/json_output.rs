//! JSON output format for n-gram reports
//!
//! `--format json` implementation

use serde::{Deserialize, Serialize};

/// A single ranked phrase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonNgram {
    /// Occurrence count
    pub count: u64,
    /// Number of words in the phrase (1 to 3)
    pub n: usize,
    /// Words, oldest first; padding slots are empty strings
    pub words: Vec<String>,
    /// Packed phrase key
    pub key: u64,
}

/// Totals over the whole report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Distinct phrases in the frequency table
    pub distinct_ngrams: usize,
    /// Sum of all single-word counts
    pub total_unigrams: u64,
    /// Distinct words seen, sentinel excluded
    pub vocabulary: usize,
}

/// Complete JSON document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Ranked phrases, most frequent first
    pub ngrams: Vec<JsonNgram>,
    pub summary: JsonSummary,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "uniqn-json-v1".to_string(),
            ngrams: Vec::new(),
            summary: JsonSummary {
                distinct_ngrams: 0,
                total_unigrams: 0,
                vocabulary: 0,
            },
        }
    }

    /// Add a ranked phrase to the output
    pub fn add_ngram(&mut self, ngram: JsonNgram) {
        self.ngrams.push(ngram);
    }

    pub fn set_summary(&mut self, summary: JsonSummary) {
        self.summary = summary;
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_creation() {
        let output = JsonOutput::new();
        assert_eq!(output.format, "uniqn-json-v1");
        assert!(output.ngrams.is_empty());
        assert_eq!(output.summary.distinct_ngrams, 0);
    }

    #[test]
    fn test_json_serialization() {
        let mut output = JsonOutput::new();
        output.add_ngram(JsonNgram {
            count: 2,
            n: 2,
            words: vec!["a".to_string(), "b".to_string()],
            key: (1 << 21) | 2,
        });
        output.set_summary(JsonSummary {
            distinct_ngrams: 1,
            total_unigrams: 4,
            vocabulary: 2,
        });

        let json = output.to_json().unwrap();
        assert!(json.contains("\"format\": \"uniqn-json-v1\""));
        assert!(json.contains("\"count\": 2"));
        assert!(json.contains("\"total_unigrams\": 4"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut output = JsonOutput::new();
        output.add_ngram(JsonNgram {
            count: 7,
            n: 1,
            words: vec!["cat".to_string()],
            key: 1,
        });

        let json = output.to_json().unwrap();
        let parsed: JsonOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ngrams.len(), 1);
        assert_eq!(parsed.ngrams[0].words, vec!["cat"]);
        assert_eq!(parsed.ngrams[0].count, 7);
    }
}
