//! # lexstat-syllable
//!
//! **Tier 1 (Capabilities)**
//!
//! Splits a word into syllable fragments using Knuth-Liang hyphenation
//! patterns. The western alphabet uses the US English dictionary, the eastern
//! alphabet the Russian one; both are embedded in the binary.
//!
//! ## What belongs here
//! * The `Hyphenate` seam used by tokenization and word reports
//! * Dictionary loading
//!
//! ## What does NOT belong here
//! * Alphabet classification (use lexstat-tokenize)
//! * Counting fragments into tallies

#![forbid(unsafe_code)]

use hyphenation::{Hyphenator, Load, Standard};
use lexstat_types::Language;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyllableError {
    #[error("Failed to load the {language} hyphenation dictionary: {message}")]
    Load { language: Language, message: String },
}

/// Anything that can split a lowercase word into ordered syllable fragments.
///
/// Concatenating the returned fragments must give back `word`.
pub trait Hyphenate {
    fn hyphenate(&self, word: &str, language: Language) -> Vec<String>;
}

/// Dictionary-backed hyphenator for both alphabets.
pub struct Syllabifier {
    western: Standard,
    eastern: Standard,
}

impl Syllabifier {
    /// Load the embedded dictionaries.
    pub fn embedded() -> Result<Self, SyllableError> {
        Ok(Self {
            western: load(Language::Western)?,
            eastern: load(Language::Eastern)?,
        })
    }

    fn dictionary(&self, language: Language) -> &Standard {
        match language {
            Language::Western => &self.western,
            Language::Eastern => &self.eastern,
        }
    }
}

fn load(language: Language) -> Result<Standard, SyllableError> {
    let dictionary = match language {
        Language::Western => hyphenation::Language::EnglishUS,
        Language::Eastern => hyphenation::Language::Russian,
    };
    Standard::from_embedded(dictionary).map_err(|err| SyllableError::Load {
        language,
        message: err.to_string(),
    })
}

impl Hyphenate for Syllabifier {
    fn hyphenate(&self, word: &str, language: Language) -> Vec<String> {
        if word.is_empty() {
            return Vec::new();
        }
        let hyphenated = self.dictionary(language).hyphenate(word);
        split_at_breaks(word, &hyphenated.breaks)
    }
}

/// Treats every word as a single syllable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unhyphenated;

impl Hyphenate for Unhyphenated {
    fn hyphenate(&self, word: &str, _language: Language) -> Vec<String> {
        if word.is_empty() {
            Vec::new()
        } else {
            vec![word.to_string()]
        }
    }
}

/// Cut `word` at the given byte offsets.
///
/// Offsets that are out of range, unsorted, or not on a char boundary are skipped.
pub fn split_at_breaks(word: &str, breaks: &[usize]) -> Vec<String> {
    let mut fragments = Vec::with_capacity(breaks.len() + 1);
    let mut start = 0usize;
    for &at in breaks {
        if at <= start || at >= word.len() || !word.is_char_boundary(at) {
            continue;
        }
        fragments.push(word[start..at].to_string());
        start = at;
    }
    if start < word.len() {
        fragments.push(word[start..].to_string());
    }
    fragments
}
