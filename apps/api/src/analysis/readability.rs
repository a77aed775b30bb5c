//! Readability: word, sentence and syllable counts plus Flesch Reading Ease.
//!
//! All functions are pure and deterministic. The syllable counter is a
//! heuristic (vowel-run counting with silent-e handling) and is typically off
//! by a few syllables per paragraph; treat it as an estimate, not a dictionary.

use once_cell::sync::Lazy;
use regex::Regex;

/// Score returned when a text has no words or no sentences to measure.
pub const NEUTRAL_READABILITY: u32 = 50;

/// ASCII word tokens, equivalent to `\b\w+\b` over ASCII text.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("valid regex"));

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Returns every word token in `text`, in order.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(text).map(|m| m.as_str())
}

pub fn count_words(text: &str) -> usize {
    words(text).count()
}

/// Counts segments between `.`, `!` and `?` runs that contain non-whitespace.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_SPLIT_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Estimates the syllable count of the whole text.
///
/// Steps:
/// 1. lowercase and keep only `a-z`
/// 2. collapse each run of two or more vowels to a single vowel
/// 3. drop a trailing consonant + `e`
/// 4. drop a trailing consonant + `ed`
/// 5. count the vowels left
///
/// Never returns less than 1, so `count_syllables("") == 1`.
pub fn count_syllables(text: &str) -> usize {
    let letters: Vec<u8> = text
        .to_lowercase()
        .bytes()
        .filter(|b| b.is_ascii_lowercase())
        .collect();

    let mut collapsed: Vec<u8> = Vec::with_capacity(letters.len());
    let mut i = 0;
    while i < letters.len() {
        if is_vowel(letters[i]) {
            let start = i;
            while i < letters.len() && is_vowel(letters[i]) {
                i += 1;
            }
            collapsed.push(if i - start >= 2 { b'a' } else { letters[start] });
        } else {
            collapsed.push(letters[i]);
            i += 1;
        }
    }

    let n = collapsed.len();
    if n >= 2 && collapsed[n - 1] == b'e' && !is_vowel(collapsed[n - 2]) {
        collapsed.truncate(n - 2);
    }

    let n = collapsed.len();
    if n >= 3 && collapsed.ends_with(b"ed") && !is_vowel(collapsed[n - 3]) {
        collapsed.truncate(n - 3);
    }

    match collapsed.iter().filter(|&&b| is_vowel(b)).count() {
        0 => 1,
        count => count,
    }
}

/// Flesch Reading Ease, rounded and clamped to `[0, 100]`.
///
/// Returns [`NEUTRAL_READABILITY`] when the text has no words or no sentences.
pub fn flesch_reading_ease(text: &str) -> u32 {
    let word_count = count_words(text);
    let sentence_count = count_sentences(text);
    if word_count == 0 || sentence_count == 0 {
        return NEUTRAL_READABILITY;
    }

    let words = word_count as f64;
    let sentences = sentence_count as f64;
    let syllables = count_syllables(text) as f64;

    let score = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words);
    score.round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_ignores_punctuation() {
        assert_eq!(count_words("Hello, world! It's 2024."), 5);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   ...  "), 0);
    }

    #[test]
    fn test_count_sentences_drops_empty_segments() {
        assert_eq!(count_sentences("One. Two! Three?"), 3);
        assert_eq!(count_sentences("Wait... what?!"), 2);
        assert_eq!(count_sentences("no terminator"), 1);
        assert_eq!(count_sentences("  .  !! ?"), 0);
        assert_eq!(count_sentences(""), 0);
    }

    #[test]
    fn test_count_syllables_empty_floor_is_one() {
        assert_eq!(count_syllables(""), 1);
        assert_eq!(count_syllables("1234 !!"), 1);
    }

    #[test]
    fn test_count_syllables_collapses_vowel_runs() {
        // "beautiful" -> "batiful" -> a, i, u
        assert_eq!(count_syllables("beautiful"), 3);
    }

    #[test]
    fn test_count_syllables_drops_silent_trailing_e() {
        // "make" -> "ma" -> 1
        assert_eq!(count_syllables("make"), 1);
        // "the" -> "t" -> 0 vowels -> floor of 1
        assert_eq!(count_syllables("the"), 1);
    }

    #[test]
    fn test_count_syllables_drops_trailing_ed() {
        // "jumped" -> "jum" -> 1
        assert_eq!(count_syllables("jumped"), 1);
    }

    #[test]
    fn test_count_syllables_works_on_whole_text() {
        // letters are concatenated before counting: "catdog" -> a, o
        assert_eq!(count_syllables("cat dog"), 2);
    }

    #[test]
    fn test_flesch_neutral_when_no_words() {
        assert_eq!(flesch_reading_ease(""), NEUTRAL_READABILITY);
        assert_eq!(flesch_reading_ease("?!."), NEUTRAL_READABILITY);
    }

    #[test]
    fn test_flesch_simple_text_scores_high() {
        let score = flesch_reading_ease("The cat sat on the mat. The dog ran.");
        assert!(score >= 90, "Score was {score}");
    }

    #[test]
    fn test_flesch_always_within_bounds() {
        let samples = [
            "Go.",
            "Incomprehensibility notwithstanding, institutionalization characterizes bureaucratization.",
            "A b c d e f g h i j k l m n o p q r s t u v w x y z.",
            "Hello world! This is fine? Yes.",
            "Supercalifragilisticexpialidocious.",
        ];
        for text in samples {
            let score = flesch_reading_ease(text);
            assert!(score <= 100, "{text:?} scored {score}");
        }
    }

    #[test]
    fn test_flesch_hard_text_clamps_to_zero() {
        let text = "Incomprehensibility notwithstanding institutionalization characterizes \
                    bureaucratization internationalization counterrevolutionaries electroencephalography.";
        assert_eq!(flesch_reading_ease(text), 0);
    }
}
