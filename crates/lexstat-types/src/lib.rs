//! # lexstat-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures and contracts for `lexstat`.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: The primary contract is the JSON shape persisted by the
//! store and printed by `--format json`, not Rust struct literals. New fields get
//! sensible defaults; removed/renamed fields bump `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Pure data structs (summaries, multisets, reports)
//! * Serialization/Deserialization logic
//! * Stability markers (SCHEMA_VERSION)
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Tokenization or merge logic

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// The current schema version for persisted summaries and receipts.
pub const SCHEMA_VERSION: u32 = 1;

/// The two recognized alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Latin letters `a-z`.
    Western,
    /// Cyrillic letters `а-я` plus `ё`.
    Eastern,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Western => "western",
            Language::Eastern => "eastern",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A multiset of strings (letters, syllables or words) with occurrence counts.
///
/// Keys iterate in lexicographic order, so two tallies with the same contents
/// always serialize and iterate identically regardless of how they were built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally(BTreeMap<String, u64>);

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` occurrences of `key`.
    pub fn add(&mut self, key: &str, n: u64) {
        if n == 0 {
            return;
        }
        match self.0.get_mut(key) {
            Some(count) => *count += n,
            None => {
                self.0.insert(key.to_string(), n);
            }
        }
    }

    /// Add a single occurrence of `key`.
    pub fn bump(&mut self, key: &str) {
        self.add(key, 1);
    }

    pub fn bump_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.add(ch.encode_utf8(&mut buf), 1);
    }

    /// Multiset union: counts of shared keys are summed.
    pub fn merge(&mut self, other: &Tally) {
        for (key, count) in &other.0 {
            self.add(key, *count);
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.0.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn as_map(&self) -> &BTreeMap<String, u64> {
        &self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Tally {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.bump(key.as_ref());
        }
        tally
    }
}

impl From<BTreeMap<String, u64>> for Tally {
    fn from(mut map: BTreeMap<String, u64>) -> Self {
        map.retain(|_, count| *count > 0);
        Tally(map)
    }
}

/// Per-language word occurrence tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequencies {
    pub western: Tally,
    pub eastern: Tally,
}

impl WordFrequencies {
    pub fn record(&mut self, language: Language, word: &str) {
        self.table_mut(language).bump(word);
    }

    pub fn table(&self, language: Language) -> &Tally {
        match language {
            Language::Western => &self.western,
            Language::Eastern => &self.eastern,
        }
    }

    pub fn table_mut(&mut self, language: Language) -> &mut Tally {
        match language {
            Language::Western => &mut self.western,
            Language::Eastern => &mut self.eastern,
        }
    }

    pub fn merge(&mut self, other: &WordFrequencies) {
        self.western.merge(&other.western);
        self.eastern.merge(&other.eastern);
    }

    /// Total number of word occurrences across both languages.
    pub fn total_words(&self) -> u64 {
        self.western.total() + self.eastern.total()
    }

    pub fn is_empty(&self) -> bool {
        self.western.is_empty() && self.eastern.is_empty()
    }

    /// Every `(word, count)` pair: western table first, then eastern.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.western.iter().chain(self.eastern.iter())
    }
}

/// The persisted statistic bundle shared by files and directories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSummary {
    #[serde(default)]
    pub word_count: u64,
    pub average_word_length: f64,
    pub vowels: Tally,
    pub consonants: Tally,
    #[serde(default)]
    pub syllables: Tally,
    pub most_frequent_words: Vec<String>,
    pub least_frequent_words: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileSummary {
    /// Normalized path of the file.
    pub path: String,
    #[serde(flatten)]
    pub content: ContentSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorySummary {
    /// Normalized path of the directory (`.` for a relative root).
    pub path: String,
    /// Number of qualifying files in this directory and all descendants.
    pub file_count: usize,
    /// Every qualifying file in this directory and all descendants, sorted.
    pub files: Vec<String>,
    /// Every subdirectory below this directory, sorted.
    pub dirs: Vec<String>,
    #[serde(flatten)]
    pub content: ContentSummary,
}

/// Statistics for a single standalone word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordReport {
    pub word: String,
    pub language: Language,
    /// Character length of the lowercased word, spaces and hyphens included.
    pub number_of_letters: usize,
    pub vowels: Tally,
    pub consonants: Tally,
    pub syllables: Tally,
}

/// The set of file and directory paths a run covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathInventory {
    pub files: BTreeSet<String>,
    pub dirs: BTreeSet<String>,
}

impl PathInventory {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "lexstat".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// The tree was walked and every summary recomputed.
    Computed,
    /// The path inventory matched the store; nothing was recomputed.
    Unchanged,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReceipt {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub status: RunStatus,
    pub root: String,
    pub extensions: Vec<String>,
    pub files: usize,
    pub directories: usize,
    /// blake3 fingerprint of the path inventory.
    pub fingerprint: String,
    pub summary: Option<DirectorySummary>,
}
