//! # lexstat-tokenize
//!
//! **Tier 1 (Text Processing)**
//!
//! Turns raw text into lowercase, language-tagged word tokens and builds
//! standalone single-word reports.
//!
//! A token is a maximal run of letters from one recognized alphabet: Latin
//! `a-z` ("western") or Cyrillic `а-яё` ("eastern"). Anything else, including
//! a switch to the other alphabet, ends the run.
//!
//! ## What belongs here
//! * Character classification and vowel sets
//! * The lazy `Tokens` iterator and `WordToken`
//! * Word validation and `WordReport` construction
//!
//! ## What does NOT belong here
//! * Frequency tables and averages (use lexstat-model)
//! * File reading (use lexstat-content)

#![forbid(unsafe_code)]

pub mod alphabet;
mod token;
mod word;

pub use alphabet::{EASTERN_VOWELS, WESTERN_VOWELS, classify, is_vowel};
pub use token::{Tokens, WordToken, tokenize};
pub use word::{RejectionReason, WordRejection, analyze_word, validate_word};
