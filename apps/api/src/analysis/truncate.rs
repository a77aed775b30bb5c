//! Per-platform content truncation.

use crate::generation::options::Platform;

pub const TWITTER_LIMIT: usize = 200;
pub const TIKTOK_LIMIT: usize = 100;
const TIKTOK_PREFIX: &str = "Quick tip: ";
const TIKTOK_MORE: &str = "... (check comments for more!)";

/// Keeps the first `limit` chars; appends `ellipsis` only when something was cut.
pub fn truncate_chars(text: &str, limit: usize, ellipsis: &str) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ellipsis),
        None => text.to_string(),
    }
}

/// Applies a platform's length rules to a caption or description.
///
/// Twitter keeps 200 chars plus `...`. TikTok is reframed as a quick tip of
/// at most 100 chars. Every other platform passes through unchanged.
pub fn truncate_for_platform(text: &str, platform: Platform) -> String {
    match platform {
        Platform::Twitter => truncate_chars(text, TWITTER_LIMIT, "..."),
        Platform::Tiktok => format!(
            "{TIKTOK_PREFIX}{}",
            truncate_chars(text, TIKTOK_LIMIT, TIKTOK_MORE)
        ),
        _ => text.to_string(),
    }
}

/// Whether the platform would split `text` into a thread.
pub fn needs_thread(text: &str, platform: Platform) -> bool {
    platform == Platform::Twitter && text.chars().count() > TWITTER_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twitter_short_text_untouched() {
        assert_eq!(truncate_for_platform("hello", Platform::Twitter), "hello");
        let exact = "a".repeat(TWITTER_LIMIT);
        assert_eq!(truncate_for_platform(&exact, Platform::Twitter), exact);
    }

    #[test]
    fn test_twitter_long_text_cut_at_200() {
        let long = "b".repeat(250);
        let out = truncate_for_platform(&long, Platform::Twitter);
        assert_eq!(out.len(), 203);
        assert!(out.ends_with("..."));
        assert!(needs_thread(&long, Platform::Twitter));
    }

    #[test]
    fn test_tiktok_prefix_and_suffix() {
        let short = truncate_for_platform("drink water", Platform::Tiktok);
        assert_eq!(short, "Quick tip: drink water");

        let long = "c".repeat(150);
        let out = truncate_for_platform(&long, Platform::Tiktok);
        assert!(out.starts_with("Quick tip: "));
        assert!(out.ends_with("(check comments for more!)"));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let emoji = "🚀".repeat(210);
        let out = truncate_for_platform(&emoji, Platform::Twitter);
        assert_eq!(out.chars().count(), 203);
    }

    #[test]
    fn test_other_platforms_pass_through() {
        let long = "d".repeat(500);
        assert_eq!(truncate_for_platform(&long, Platform::Linkedin), long);
        assert!(!needs_thread(&long, Platform::Linkedin));
    }
}
