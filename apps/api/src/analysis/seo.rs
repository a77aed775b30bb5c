//! SEO scoring: keyword density and the additive SEO rubric.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::analysis::readability::{
    count_sentences, count_syllables, count_words, flesch_reading_ease,
};

/// Points awarded per rubric criterion when fully met.
const FULL_POINTS: u32 = 25;
/// Points awarded per rubric criterion when partially met.
const PARTIAL_POINTS: u32 = 15;
/// Heading structure is not analysed; every text gets the full baseline.
const HEADING_BASELINE: u32 = 25;

/// Full SEO/readability breakdown for a piece of content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeoReport {
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    pub readability: u32,    // 0 – 100
    pub keyword_density: f64, // percent of words
    pub seo_score: u32,       // 0 – 100
}

/// Percentage of words in `text` that are whole-word, case-insensitive
/// occurrences of any keyword.
///
/// Multi-word keywords count once per phrase occurrence. Blank keywords are
/// ignored. Returns 0.0 for an empty keyword list or a text with no words.
pub fn keyword_density(text: &str, keywords: &[String]) -> f64 {
    let total_words = count_words(text);
    if total_words == 0 {
        return 0.0;
    }

    let matches: usize = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(|k| count_whole_word(text, k))
        .sum();

    matches as f64 / total_words as f64 * 100.0
}

fn count_whole_word(text: &str, keyword: &str) -> usize {
    let pattern = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(keyword));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.find_iter(text).count(),
        Err(e) => {
            tracing::warn!("Skipping keyword {keyword:?}: {e}");
            0
        }
    }
}

/// Additive rubric, capped at 100:
/// - density in [1, 4] → 25, otherwise density > 0 → 15
/// - readability ≥ 70 → 25, ≥ 50 → 15
/// - word count ≥ 1000 → 25, ≥ 500 → 15
/// - heading structure → fixed 25
pub fn seo_score(density: f64, readability: u32, word_count: usize) -> u32 {
    let mut score = 0;

    if (1.0..=4.0).contains(&density) {
        score += FULL_POINTS;
    } else if density > 0.0 {
        score += PARTIAL_POINTS;
    }

    if readability >= 70 {
        score += FULL_POINTS;
    } else if readability >= 50 {
        score += PARTIAL_POINTS;
    }

    if word_count >= 1000 {
        score += FULL_POINTS;
    } else if word_count >= 500 {
        score += PARTIAL_POINTS;
    }

    score += HEADING_BASELINE;

    score.min(100)
}

/// Runs every measurement over `content` and scores it against `keywords`.
pub fn analyze_seo(content: &str, keywords: &[String]) -> SeoReport {
    let word_count = count_words(content);
    let readability = flesch_reading_ease(content);
    let density = keyword_density(content, keywords);

    SeoReport {
        word_count,
        sentence_count: count_sentences(content),
        syllable_count: count_syllables(content),
        readability,
        keyword_density: density,
        seo_score: seo_score(density, readability, word_count),
    }
}
