//! Hashtag extraction: content-derived tags merged with a generic pool, then sampled.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::analysis::readability::words;

/// Generic tags mixed into every candidate pool.
pub const GENERIC_HASHTAGS: &[&str] = &[
    "#ContentCreation",
    "#DigitalMarketing",
    "#SocialMedia",
    "#Innovation",
    "#Productivity",
    "#Success",
    "#Motivation",
    "#Business",
    "#Growth",
    "#Technology",
    "#Inspiration",
    "#Leadership",
    "#Strategy",
    "#Tips",
];

/// Tokens must be longer than this to become a hashtag.
const MIN_TOKEN_LEN: usize = 4;

/// Returns `#Word` for every token longer than four characters, in text order.
pub fn content_hashtags(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    words(&lowered)
        .filter(|w| w.len() > MIN_TOKEN_LEN)
        .map(|w| format!("#{}", capitalize_first(w)))
        .collect()
}

/// Content tags followed by the generic pool, first occurrence wins.
pub fn candidate_pool(text: &str) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();
    let generic = GENERIC_HASHTAGS.iter().map(|s| s.to_string());
    for tag in content_hashtags(text).into_iter().chain(generic) {
        if !pool.contains(&tag) {
            pool.push(tag);
        }
    }
    pool
}

/// Samples up to `count` distinct hashtags from the candidate pool.
///
/// Order is random. Returns the whole pool when it holds fewer than `count`
/// tags.
pub fn extract_hashtags<R: Rng + ?Sized>(text: &str, count: usize, rng: &mut R) -> Vec<String> {
    let pool = candidate_pool(text);
    pool.choose_multiple(rng, count).cloned().collect()
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
