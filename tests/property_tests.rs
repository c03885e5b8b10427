//! Property-based tests for the n-gram counter
//!
//! Compares the packed-window counter against a naive slice-window count
//! over random word streams.

use proptest::prelude::*;
use std::collections::HashMap;
use uniqn::phrase::{Phrase, FIELD_MASK};
use uniqn::report;
use uniqn::{Dictionary, Statistics};

fn count(words: &[String]) -> Statistics {
    let input: String = words.iter().map(|w| format!("{w}\n")).collect();
    let mut stats = Statistics::new();
    stats.process(input.as_bytes()).unwrap();
    stats
}

fn naive(words: &[String], n: usize) -> HashMap<Vec<String>, u64> {
    let mut counts = HashMap::new();
    for window in words.windows(n) {
        *counts.entry(window.to_vec()).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_unigrams_sum_to_token_count(
        words in prop::collection::vec("[a-e]{1,3}", 3..60),
    ) {
        // Property: every token contributes exactly one unigram count
        let stats = count(&words);
        prop_assert_eq!(stats.total_unigrams(), words.len() as u64);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_counts_match_naive_windows(
        words in prop::collection::vec("[a-d]", 3..40),
    ) {
        // Property: every n-gram count equals its number of occurrences
        let stats = count(&words);

        for n in 1..=3 {
            for (gram, expected) in naive(&words, n) {
                let refs: Vec<&str> = gram.iter().map(String::as_str).collect();
                prop_assert_eq!(stats.count_of(&refs), expected, "n-gram {:?}", gram);
            }
        }

        let distinct: usize = (1..=3).map(|n| naive(&words, n).len()).sum();
        prop_assert_eq!(stats.size(), distinct);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_short_streams_produce_nothing(
        words in prop::collection::vec("[a-z]{1,5}", 0..3),
    ) {
        // Property: fewer than three tokens never reach a full window
        let stats = count(&words);
        prop_assert!(stats.is_empty());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_interning_is_idempotent(
        words in prop::collection::vec("[a-z]{1,8}", 0..50),
    ) {
        // Property: N distinct words get N distinct codes plus the sentinel
        let mut dictionary = Dictionary::new();
        let first: Vec<_> = words.iter().map(|w| dictionary.code_of(w)).collect();
        let second: Vec<_> = words.iter().map(|w| dictionary.code_of(w)).collect();
        prop_assert_eq!(&first, &second);

        let mut distinct = words.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(dictionary.size(), distinct.len() + 1);
        prop_assert!(first.iter().all(|&c| c != 0));
    }

    #[test]
    fn prop_byte_lines_intern_exactly(
        lines in prop::collection::vec(
            prop::collection::vec(any::<u8>().prop_filter("no newline", |b| *b != b'\n'), 1..4),
            0..40,
        ),
    ) {
        // Property: lines are interned by their exact bytes, valid UTF-8 or not
        let input: Vec<u8> = lines.iter().flat_map(|l| l.iter().copied().chain([b'\n'])).collect();
        let mut dictionary = Dictionary::new();
        dictionary.extend_from_reader(&input[..]).unwrap();

        let mut distinct = lines.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(dictionary.size(), distinct.len() + 1);
        for line in &lines {
            let code = dictionary.get(line).unwrap();
            prop_assert_eq!(dictionary.text_of(code).unwrap(), &line[..]);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_phrase_keeps_last_three_codes(
        codes in prop::collection::vec(1u32..(FIELD_MASK as u32), 1..10),
    ) {
        // Property: the window always holds the newest three codes in order
        let phrase = codes.iter().fold(Phrase::new(), |p, &c| p.with(c));
        let tail: Vec<u32> = codes.iter().rev().take(3).rev().copied().collect();
        let held: Vec<u32> = phrase.codes().collect();
        prop_assert_eq!(held, tail);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_report_decodes_to_input_sequences(
        words in prop::collection::vec("[a-c]{1,2}", 3..30),
    ) {
        // Property: every reported phrase is a contiguous run of the input
        let stats = count(&words);
        for entry in report::rank(&stats) {
            let decoded = entry.words(stats.dictionary()).unwrap();
            let found = words
                .windows(decoded.len())
                .any(|w| w.iter().map(String::as_bytes).eq(decoded.iter().copied()));
            prop_assert!(found, "phrase {:?} not in input", decoded);
        }
    }
}
