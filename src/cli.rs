//! CLI argument parsing for uniqn

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the frequency report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<count>: <w1> <w2> <w3>` lines (default)
    #[default]
    Text,
    /// JSON document for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "uniqn")]
#[command(version)]
#[command(
    about = "Count unigram, bigram and trigram frequencies in a one-word-per-line stream",
    long_about = None
)]
pub struct Cli {
    /// Word list used to pre-seed the dictionary (one word per line, ends at a blank line)
    #[arg(value_name = "DICTIONARY", conflicts_with = "dump")]
    pub dictionary: Option<PathBuf>,

    /// Print the distinct input words in descending order instead of counting
    #[arg(short = 'd', long = "dump")]
    pub dump: bool,

    /// Read tokens from PATH instead of standard input
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Only print the N most frequent phrases
    #[arg(short = 'n', long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Enable debug tracing on stderr (filter with RUST_LOG)
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["uniqn"]);
        assert!(cli.dictionary.is_none());
        assert!(!cli.dump);
        assert!(cli.input.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.top.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_dump_flag() {
        let cli = Cli::parse_from(["uniqn", "-d"]);
        assert!(cli.dump);
    }

    #[test]
    fn test_cli_dictionary_positional() {
        let cli = Cli::parse_from(["uniqn", "words.txt"]);
        assert_eq!(cli.dictionary, Some(PathBuf::from("words.txt")));
    }

    #[test]
    fn test_cli_dump_conflicts_with_dictionary() {
        assert!(Cli::try_parse_from(["uniqn", "-d", "words.txt"]).is_err());
    }

    #[test]
    fn test_cli_format_and_top() {
        let cli = Cli::parse_from(["uniqn", "--format", "json", "--top", "10"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.top, Some(10));
    }

    #[test]
    fn test_cli_input_path() {
        let cli = Cli::parse_from(["uniqn", "-i", "corpus.txt", "--debug"]);
        assert_eq!(cli.input, Some(PathBuf::from("corpus.txt")));
        assert!(cli.debug);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["uniqn", "--format", "xml"]).is_err());
    }
}
