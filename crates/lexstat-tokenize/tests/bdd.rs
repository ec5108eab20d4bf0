//! BDD-style scenarios for lexstat-tokenize.

use lexstat_syllable::Unhyphenated;
use lexstat_tokenize::{analyze_word, tokenize, validate_word};
use lexstat_types::Language;

// ========================
// Scenario: plain western text
// ========================

#[test]
fn scenario_repeated_words_are_separate_tokens() {
    // Given a short western sentence
    let text = "cat dog cat";

    // When it is tokenized
    let tokens: Vec<_> = tokenize(text, &Unhyphenated).collect();

    // Then each word is one token, in input order
    let words: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(words, vec!["cat", "dog", "cat"]);
    assert!(tokens.iter().all(|t| t.language() == Language::Western));
    assert!(tokens.iter().all(|t| t.letter_count() == 3));
}

// ========================
// Scenario: mixed alphabets
// ========================

#[test]
fn scenario_mixed_text_tags_each_token_by_alphabet() {
    // Given text with two western words and one eastern word
    let text = "the quick кот";

    // When it is tokenized
    let tokens: Vec<_> = tokenize(text, &Unhyphenated).collect();

    // Then the language tag matches each token's alphabet
    let tagged: Vec<(&str, Language)> = tokens.iter().map(|t| (t.text(), t.language())).collect();
    assert_eq!(
        tagged,
        vec![
            ("the", Language::Western),
            ("quick", Language::Western),
            ("кот", Language::Eastern),
        ]
    );
}

#[test]
fn scenario_multiline_text_with_punctuation() {
    // Given text spanning lines with punctuation and digits
    let text = "Hello,\nworld! 42 times\r\n— Привет.";

    // When it is tokenized
    let words: Vec<String> = tokenize(text, &Unhyphenated)
        .map(|t| t.text().to_string())
        .collect();

    // Then only letter runs survive, lowercased
    assert_eq!(words, vec!["hello", "world", "times", "привет"]);
}

// ========================
// Scenario: standalone word validation
// ========================

#[test]
fn scenario_validation_accepts_words_and_rejects_digits() {
    assert!(validate_word("hello").is_ok());
    assert!(validate_word("hello123").is_err());
}

#[test]
fn scenario_word_report_for_cyrillic_word() {
    // Given a Cyrillic word
    // When it is analyzed
    let report = analyze_word("Молоко", &Unhyphenated).unwrap();

    // Then it is eastern with three vowels and three consonants
    assert_eq!(report.language, Language::Eastern);
    assert_eq!(report.number_of_letters, 6);
    assert_eq!(report.vowels.get("о"), 3);
    assert_eq!(report.consonants.total(), 3);
}
