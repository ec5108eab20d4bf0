use std::fmt;

use lexstat_syllable::Hyphenate;
use lexstat_types::{Language, Tally, WordReport};

use crate::alphabet::classify;
use crate::token::tokenize;

/// Why a standalone word was not analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    Empty,
    /// Only spaces and hyphens, no letters.
    NoLetters,
    InvalidCharacter(char),
}

/// A word that failed validation. Returned as a value, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRejection {
    pub word: String,
    pub reason: RejectionReason,
}

impl fmt::Display for WordRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            RejectionReason::Empty => write!(f, "Word is not valid: empty input"),
            RejectionReason::NoLetters => {
                write!(f, "Word is not valid: '{}' contains no letters", self.word)
            }
            RejectionReason::InvalidCharacter(ch) => write!(
                f,
                "Word is not valid: '{}' contains unsupported character {ch:?}",
                self.word
            ),
        }
    }
}

impl std::error::Error for WordRejection {}

/// Check that `word` consists only of letters of either alphabet, spaces and
/// hyphens, and contains at least one letter. Returns the lowercased word.
pub fn validate_word(word: &str) -> Result<String, WordRejection> {
    let reject = |reason| WordRejection {
        word: word.to_string(),
        reason,
    };
    if word.is_empty() {
        return Err(reject(RejectionReason::Empty));
    }

    let mut lowered = String::with_capacity(word.len());
    let mut letters = 0usize;
    for ch in word.chars() {
        match ch {
            ' ' | '-' => lowered.push(ch),
            _ => match classify(ch) {
                Some((letter, _)) => {
                    letters += 1;
                    lowered.push(letter);
                }
                None => return Err(reject(RejectionReason::InvalidCharacter(ch))),
            },
        }
    }

    if letters == 0 {
        return Err(reject(RejectionReason::NoLetters));
    }
    Ok(lowered)
}

/// Validate `word` and compute its length, vowel, consonant and syllable breakdown.
///
/// `number_of_letters` is the character length of the lowercased word, spaces and
/// hyphens included. The word is western only when its first character is a
/// Latin letter, so a leading space or hyphen makes it eastern. Spaces and
/// hyphens separate parts that are hyphenated independently.
pub fn analyze_word(word: &str, hyphenator: &dyn Hyphenate) -> Result<WordReport, WordRejection> {
    let word = validate_word(word)?;

    let language = match word.chars().next().and_then(classify) {
        Some((_, Language::Western)) => Language::Western,
        _ => Language::Eastern,
    };
    let number_of_letters = word.chars().count();

    let mut vowels = Tally::new();
    let mut consonants = Tally::new();
    let mut syllables = Tally::new();
    for token in tokenize(&word, hyphenator) {
        vowels.merge(token.vowels());
        consonants.merge(token.consonants());
        syllables.merge(token.syllables());
    }

    Ok(WordReport {
        word,
        language,
        number_of_letters,
        vowels,
        consonants,
        syllables,
    })
}
