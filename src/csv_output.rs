//! CSV output format for n-gram reports
//!
//! `--format csv`: one row per ranked phrase, three word columns with
//! unused slots left empty.

use crate::phrase::FIELD_COUNT;

/// CSV record for a single ranked phrase
#[derive(Debug, Clone)]
pub struct CsvNgram {
    pub count: u64,
    pub words: Vec<String>,
}

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput {
    rows: Vec<CsvNgram>,
}

impl CsvOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a phrase to the output
    pub fn add_ngram(&mut self, row: CsvNgram) {
        self.rows.push(row);
    }

    fn header() -> String {
        let mut headers = vec!["count".to_string(), "n".to_string()];
        headers.extend((1..=FIELD_COUNT).map(|i| format!("w{i}")));
        headers.join(",")
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_row(row: &CsvNgram) -> String {
        let mut fields = vec![row.count.to_string(), row.words.len().to_string()];
        fields.extend(row.words.iter().map(|w| Self::escape_field(w)));
        fields.resize(FIELD_COUNT + 2, String::new());
        fields.join(",")
    }

    /// Render the header and every row, newline-terminated
    pub fn to_csv(&self) -> String {
        let mut output = Self::header();
        output.push('\n');
        for row in &self.rows {
            output.push_str(&Self::format_row(row));
            output.push('\n');
        }
        output
    }
}
