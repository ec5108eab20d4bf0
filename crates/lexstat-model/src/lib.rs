//! # lexstat-model
//!
//! **Tier 2 (Statistics Model)**
//!
//! Builds per-file statistics from a token stream and combines statistics
//! with an associative, commutative merge.
//!
//! The merge keeps the average word length as a word-count-weighted mean,
//! `(n_a * avg_a + n_b * avg_b) / (n_a + n_b)`; every other field is a plain
//! multiset union. A value built from zero words is an identity element.
//!
//! ## What belongs here
//! * `ContentStats`, the accumulator shared by files and directories
//! * Most/least-frequent word resolution
//!
//! ## What does NOT belong here
//! * Filesystem traversal or text extraction
//! * Persistence

#![forbid(unsafe_code)]

use lexstat_syllable::Hyphenate;
use lexstat_tokenize::{WordToken, tokenize};
use lexstat_types::{ContentSummary, Tally, WordFrequencies};

/// How many words are kept in each most/least-frequent list.
pub const FREQUENT_WORDS_CAP: usize = 3;

/// Running statistics for one file or a whole subtree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentStats {
    word_count: u64,
    average_word_length: f64,
    vowels: Tally,
    consonants: Tally,
    syllables: Tally,
    words: WordFrequencies,
}

impl ContentStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume every token of one file.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = WordToken>,
    {
        let mut stats = ContentStats::new();
        let mut total_letters = 0u64;

        for token in tokens {
            total_letters += token.letter_count() as u64;
            stats.vowels.merge(token.vowels());
            stats.consonants.merge(token.consonants());
            stats.syllables.merge(token.syllables());
            stats.words.record(token.language(), token.text());
        }

        stats.word_count = stats.words.total_words();
        stats.average_word_length = if stats.word_count == 0 {
            0.0
        } else {
            total_letters as f64 / stats.word_count as f64
        };
        stats
    }

    /// Tokenize `text` and build its statistics.
    pub fn from_text(text: &str, hyphenator: &dyn Hyphenate) -> Self {
        Self::from_tokens(tokenize(text, hyphenator))
    }

    /// Fold `other` into `self`.
    pub fn merge(&mut self, other: &ContentStats) {
        self.average_word_length = weighted_mean(
            self.word_count,
            self.average_word_length,
            other.word_count,
            other.average_word_length,
        );
        self.word_count += other.word_count;
        self.vowels.merge(&other.vowels);
        self.consonants.merge(&other.consonants);
        self.syllables.merge(&other.syllables);
        self.words.merge(&other.words);
    }

    /// Owned variant of [`ContentStats::merge`].
    #[must_use]
    pub fn merged(mut self, other: &ContentStats) -> Self {
        self.merge(other);
        self
    }

    pub fn word_count(&self) -> u64 {
        self.word_count
    }

    pub fn average_word_length(&self) -> f64 {
        self.average_word_length
    }

    pub fn vowels(&self) -> &Tally {
        &self.vowels
    }

    pub fn consonants(&self) -> &Tally {
        &self.consonants
    }

    pub fn syllables(&self) -> &Tally {
        &self.syllables
    }

    pub fn words(&self) -> &WordFrequencies {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The persisted view: statistics plus frequency extremes, without the
    /// frequency tables themselves.
    pub fn summarize(&self) -> ContentSummary {
        let extremes = frequency_extremes(&self.words, FREQUENT_WORDS_CAP);
        ContentSummary {
            word_count: self.word_count,
            average_word_length: self.average_word_length,
            vowels: self.vowels.clone(),
            consonants: self.consonants.clone(),
            syllables: self.syllables.clone(),
            most_frequent_words: extremes.most,
            least_frequent_words: extremes.least,
        }
    }
}

/// Word-count-weighted mean of two averages.
///
/// A side with zero words leaves the other side's mean untouched, bit for bit.
pub fn weighted_mean(count_a: u64, mean_a: f64, count_b: u64, mean_b: f64) -> f64 {
    match (count_a, count_b) {
        (0, 0) => 0.0,
        (_, 0) => mean_a,
        (0, _) => mean_b,
        _ => {
            let total = (count_a + count_b) as f64;
            (count_a as f64 * mean_a + count_b as f64 * mean_b) / total
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyExtremes {
    pub most: Vec<String>,
    pub least: Vec<String>,
}

/// Words whose count equals the global maximum (`most`) or minimum (`least`)
/// across both language tables.
///
/// Candidates are taken in table-iteration order (western table, then eastern;
/// each lexicographic) and truncated to `cap`. Both lists are empty when both
/// tables are.
pub fn frequency_extremes(words: &WordFrequencies, cap: usize) -> FrequencyExtremes {
    let mut counts = words.iter().map(|(_, count)| count);
    let Some(first) = counts.next() else {
        return FrequencyExtremes::default();
    };
    let (min, max) = counts.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c)));

    let collect = |target: u64| -> Vec<String> {
        words
            .iter()
            .filter(|(_, count)| *count == target)
            .take(cap)
            .map(|(word, _)| word.to_string())
            .collect()
    };

    FrequencyExtremes {
        most: collect(max),
        least: collect(min),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexstat_syllable::Unhyphenated;
    use lexstat_types::Language;

    #[test]
    fn weighted_mean_zero_sides() {
        assert_eq!(weighted_mean(0, 0.0, 0, 0.0), 0.0);
        assert_eq!(weighted_mean(3, 4.5, 0, 99.0), 4.5);
        assert_eq!(weighted_mean(0, 99.0, 2, 1.25), 1.25);
    }

    #[test]
    fn weighted_mean_weights_by_count() {
        assert_eq!(weighted_mean(1, 2.0, 3, 6.0), 5.0);
    }

    #[test]
    fn from_text_counts_letters_and_words() {
        let stats = ContentStats::from_text("a bb ccc", &Unhyphenated);
        assert_eq!(stats.word_count(), 3);
        assert_eq!(stats.average_word_length(), 2.0);
        assert_eq!(stats.vowels().get("a"), 1);
        assert_eq!(stats.consonants().get("c"), 3);
    }

    #[test]
    fn merge_keeps_words_per_language() {
        let mut a = ContentStats::from_text("cat кот", &Unhyphenated);
        let b = ContentStats::from_text("кот", &Unhyphenated);
        a.merge(&b);
        assert_eq!(a.words().table(Language::Western).get("cat"), 1);
        assert_eq!(a.words().table(Language::Eastern).get("кот"), 2);
        assert_eq!(a.word_count(), 3);
    }

    #[test]
    fn extremes_empty_tables() {
        let extremes = frequency_extremes(&WordFrequencies::default(), FREQUENT_WORDS_CAP);
        assert!(extremes.most.is_empty());
        assert!(extremes.least.is_empty());
    }

    #[test]
    fn extremes_span_both_languages() {
        let mut words = WordFrequencies::default();
        for _ in 0..3 {
            words.record(Language::Eastern, "да");
        }
        words.record(Language::Western, "yes");
        words.record(Language::Western, "yes");
        words.record(Language::Western, "no");

        let extremes = frequency_extremes(&words, FREQUENT_WORDS_CAP);
        assert_eq!(extremes.most, vec!["да"]);
        assert_eq!(extremes.least, vec!["no"]);
    }

    #[test]
    fn summarize_carries_extremes() {
        let summary = ContentStats::from_text("b a b", &Unhyphenated).summarize();
        assert_eq!(summary.word_count, 3);
        assert_eq!(summary.most_frequent_words, vec!["b"]);
        assert_eq!(summary.least_frequent_words, vec!["a"]);
    }
}
