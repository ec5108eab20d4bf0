//! BDD-style scenarios for lexstat-model statistics.
//!
//! Each test reads as a Given/When/Then scenario exercising:
//! - Per-file statistics from raw text
//! - Most/least-frequent word resolution and the three-word cap
//! - The zero-word identity

use lexstat_model::{ContentStats, FREQUENT_WORDS_CAP};
use lexstat_syllable::Unhyphenated;
use lexstat_types::Language;

fn stats(text: &str) -> ContentStats {
    ContentStats::from_text(text, &Unhyphenated)
}

// ========================
// Scenario: repeated western words
// ========================

#[test]
fn scenario_cat_dog_cat() {
    // Given the text "cat dog cat"
    let stats = stats("cat dog cat");

    // When it is summarized
    let summary = stats.summarize();

    // Then the table, extremes and average follow the word counts
    let western = stats.words().table(Language::Western);
    assert_eq!(western.get("cat"), 2);
    assert_eq!(western.get("dog"), 1);
    assert_eq!(western.len(), 2);
    assert!(stats.words().table(Language::Eastern).is_empty());
    assert_eq!(summary.most_frequent_words, vec!["cat"]);
    assert_eq!(summary.least_frequent_words, vec!["dog"]);
    assert_eq!(summary.average_word_length, 3.0);
}

// ========================
// Scenario: empty file
// ========================

#[test]
fn scenario_empty_text_is_all_zero() {
    // Given text that the extractor could not read
    let summary = stats("").summarize();

    // Then everything is zero or empty
    assert_eq!(summary.word_count, 0);
    assert_eq!(summary.average_word_length, 0.0);
    assert!(summary.vowels.is_empty());
    assert!(summary.consonants.is_empty());
    assert!(summary.syllables.is_empty());
    assert!(summary.most_frequent_words.is_empty());
    assert!(summary.least_frequent_words.is_empty());
}

// ========================
// Scenario: ties beyond the cap
// ========================

#[test]
fn scenario_four_unique_words_cap_at_three() {
    // Given four words that each occur once
    let summary = stats("delta alpha charlie bravo").summarize();

    // Then both lists hold the same three words, never four
    assert_eq!(summary.least_frequent_words.len(), FREQUENT_WORDS_CAP);
    assert_eq!(summary.most_frequent_words, summary.least_frequent_words);
    assert_eq!(
        summary.most_frequent_words,
        vec!["alpha", "bravo", "charlie"]
    );
}

#[test]
fn scenario_tie_order_is_western_then_eastern() {
    // Given eastern and western words with equal counts
    let summary = stats("яблоко zebra арбуз apple").summarize();

    // Then western words come first, each table in lexicographic order
    assert_eq!(summary.most_frequent_words, vec!["apple", "zebra", "арбуз"]);
}

// ========================
// Scenario: identity element
// ========================

#[test]
fn scenario_zero_word_stats_do_not_change_a_summary() {
    // Given a summary with words and an empty one
    let base = stats("the quick brown fox, the end");
    let empty = stats("1234 !!!");

    // When the empty one is merged from either side
    let right = base.clone().merged(&empty);
    let left = empty.clone().merged(&base);

    // Then both results equal the original exactly
    assert_eq!(right, base);
    assert_eq!(left, base);
}

// ========================
// Scenario: merging files into a directory
// ========================

#[test]
fn scenario_merge_weights_average_by_word_count() {
    // Given one file of four 2-letter words and one file of a single 7-letter word
    let short = stats("ab cd ef gh");
    let long = stats("abcdefg");

    // When they are merged
    let merged = short.merged(&long);

    // Then the average is weighted by word count, not by file
    assert_eq!(merged.word_count(), 5);
    assert!((merged.average_word_length() - 3.0).abs() < 1e-12);
}

#[test]
fn scenario_directory_extremes_use_all_words() {
    // Given two files whose top words differ per language
    let a = stats("сон сон сон day");
    let b = stats("day night");

    // When merged
    let summary = a.merged(&b).summarize();

    // Then the global maximum wins, regardless of which table it is in
    assert_eq!(summary.most_frequent_words, vec!["сон"]);
    assert_eq!(summary.least_frequent_words, vec!["night"]);
}
