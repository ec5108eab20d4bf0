use std::str::Chars;

use lexstat_syllable::Hyphenate;
use lexstat_types::{Language, Tally};

use crate::alphabet::{classify, is_vowel};

/// One lowercase word with its letter breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    text: String,
    letter_count: usize,
    language: Language,
    vowels: Tally,
    consonants: Tally,
    syllables: Tally,
}

impl WordToken {
    /// Build a token from a lowercase, single-alphabet letter run.
    ///
    /// The language is decided by the first letter; every letter that is not a
    /// vowel of that language counts as a consonant.
    pub fn new(text: String, hyphenator: &dyn Hyphenate) -> Self {
        let language = match text.chars().next().and_then(classify) {
            Some((_, Language::Western)) => Language::Western,
            _ => Language::Eastern,
        };

        let mut vowels = Tally::new();
        let mut consonants = Tally::new();
        let mut letter_count = 0usize;
        for ch in text.chars() {
            letter_count += 1;
            if is_vowel(ch, language) {
                vowels.bump_char(ch);
            } else {
                consonants.bump_char(ch);
            }
        }

        let syllables = hyphenator.hyphenate(&text, language).into_iter().collect();

        Self {
            text,
            letter_count,
            language,
            vowels,
            consonants,
            syllables,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn letter_count(&self) -> usize {
        self.letter_count
    }

    pub fn language(&self) -> Language {
        self.language
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
}

/// Lazy, single-pass token stream over a borrowed text.
pub struct Tokens<'t, 'h> {
    chars: Chars<'t>,
    hyphenator: &'h dyn Hyphenate,
    buffer: String,
    buffer_language: Option<Language>,
}

/// Scan `text` and yield one [`WordToken`] per letter run.
pub fn tokenize<'t, 'h>(text: &'t str, hyphenator: &'h dyn Hyphenate) -> Tokens<'t, 'h> {
    Tokens {
        chars: text.chars(),
        hyphenator,
        buffer: String::new(),
        buffer_language: None,
    }
}

impl Tokens<'_, '_> {
    fn flush(&mut self) -> Option<WordToken> {
        self.buffer_language = None;
        if self.buffer.is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.buffer);
        Some(WordToken::new(text, self.hyphenator))
    }
}

impl Iterator for Tokens<'_, '_> {
    type Item = WordToken;

    fn next(&mut self) -> Option<WordToken> {
        while let Some(ch) = self.chars.next() {
            match classify(ch) {
                Some((letter, language)) => {
                    if self.buffer_language.is_some_and(|current| current != language) {
                        let token = self.flush();
                        self.buffer.push(letter);
                        self.buffer_language = Some(language);
                        return token;
                    }
                    self.buffer.push(letter);
                    self.buffer_language = Some(language);
                }
                None => {
                    if !self.buffer.is_empty() {
                        return self.flush();
                    }
                }
            }
        }
        self.flush()
    }
}
