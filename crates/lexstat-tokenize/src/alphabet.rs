//! Letter sets for the two recognized alphabets.

use lexstat_types::Language;

pub const WESTERN_VOWELS: &str = "aeiouy";
pub const EASTERN_VOWELS: &str = "аоуэыяеюиё";

/// Case-fold `ch` and report which alphabet it belongs to.
///
/// Returns the lowercase letter, or `None` for characters that do not form
/// words (digits, punctuation, whitespace, other scripts).
pub fn classify(ch: char) -> Option<(char, Language)> {
    let mut lower = ch.to_lowercase();
    let folded = lower.next()?;
    if lower.next().is_some() {
        return None;
    }
    match folded {
        'a'..='z' => Some((folded, Language::Western)),
        'а'..='я' | 'ё' => Some((folded, Language::Eastern)),
        _ => None,
    }
}

/// Whether a lowercase letter is a vowel of `language`.
pub fn is_vowel(letter: char, language: Language) -> bool {
    match language {
        Language::Western => WESTERN_VOWELS.contains(letter),
        Language::Eastern => EASTERN_VOWELS.contains(letter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_folds_case() {
        assert_eq!(classify('Q'), Some(('q', Language::Western)));
        assert_eq!(classify('Ж'), Some(('ж', Language::Eastern)));
        assert_eq!(classify('Ё'), Some(('ё', Language::Eastern)));
    }

    #[test]
    fn classify_rejects_non_letters() {
        for ch in ['1', '-', ' ', '_', 'é', 'ß', 'ї', '中'] {
            assert_eq!(classify(ch), None, "{ch:?} must not form words");
        }
    }

    #[test]
    fn vowel_sets_are_per_language() {
        assert!(is_vowel('y', Language::Western));
        assert!(!is_vowel('t', Language::Western));
        assert!(is_vowel('ё', Language::Eastern));
        assert!(!is_vowel('к', Language::Eastern));
        // Latin 'a' is not a Cyrillic vowel.
        assert!(!is_vowel('a', Language::Eastern));
    }
}
