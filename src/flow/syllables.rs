// Syllable estimation
// Vowel-group counting heuristic behind a narrow trait so a dictionary-backed
// counter can replace it without touching the analyzers

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z\s'-]").unwrap());
static SILENT_ENDING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap());
static LEADING_Y_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^y").unwrap());
static VOWEL_GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]{1,2}").unwrap());

/// Estimates the number of syllables in a word, line, or phrase
pub trait SyllableCounter: Send + Sync {
    fn count(&self, text: &str) -> u32;
}

/// Approximate counter: counts groups of one or two vowels after dropping
/// common silent endings. Not a linguistic syllabifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSyllableCounter;

impl SyllableCounter for HeuristicSyllableCounter {
    fn count(&self, text: &str) -> u32 {
        let text = text.trim();
        if text.is_empty() {
            return 0;
        }

        let lowered = text.to_lowercase();
        let cleaned = NON_WORD_RE.replace_all(&lowered, "");

        if cleaned.chars().count() <= 3 {
            return 1;
        }

        // Silent "e", past-tense "ed", and plural "es" add no syllable
        let stripped = SILENT_ENDING_RE.replace(&cleaned, "");
        let stripped = LEADING_Y_RE.replace(&stripped, "");

        match VOWEL_GROUP_RE.find_iter(&stripped).count() {
            0 => 1,
            n => n as u32,
        }
    }
}

/// Count syllables with the default heuristic counter.
/// Returns 0 for blank input and at least 1 for anything else.
pub fn count_syllables(text: &str) -> u32 {
    HeuristicSyllableCounter.count(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_zero() {
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("   \t "), 0);
    }

    #[test]
    fn test_short_words_are_one_syllable() {
        assert_eq!(count_syllables("a"), 1);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("sky"), 1);
    }

    #[test]
    fn test_punctuation_only_is_total() {
        assert_eq!(count_syllables("!!!?"), 1);
        assert_eq!(count_syllables("..."), 1);
    }

    #[test]
    fn test_non_latin_text_is_total() {
        assert_eq!(count_syllables("こんにちは世界"), 1);
        assert_eq!(count_syllables("привет мир"), 1);
    }

    #[test]
    fn test_silent_endings() {
        // "make" -> "ma" -> 1 group
        assert_eq!(count_syllables("make"), 1);
        // "walked" -> "walk" -> 1 group
        assert_eq!(count_syllables("walked"), 1);
        // "wishes" -> "wi" + "shes" stripped to "wi" -> 1 group
        assert_eq!(count_syllables("wishes"), 1);
    }

    #[test]
    fn test_vowel_groups() {
        assert_eq!(count_syllables("hello"), 2);
        assert_eq!(count_syllables("yellow"), 2);
        assert_eq!(count_syllables("beautiful"), 4);
    }

    #[test]
    fn test_whole_line_counts_all_groups() {
        assert_eq!(count_syllables("la la la la la la la la"), 8);
        assert_eq!(count_syllables("Hello, World!"), 3);
    }

    #[test]
    fn test_long_alphabetic_word_at_least_one() {
        assert_eq!(count_syllables("rhythms"), 1);
        assert!(count_syllables("strengths") >= 1);
    }

    #[test]
    fn test_trait_object_counter() {
        let counter: Box<dyn SyllableCounter> = Box::new(HeuristicSyllableCounter);
        assert_eq!(counter.count("hello"), count_syllables("hello"));
    }
}
