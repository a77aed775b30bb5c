//! Social captions, per-platform variants, preview payloads and the publish record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::analysis::hashtags::extract_hashtags;
use crate::analysis::truncate::{needs_thread, truncate_for_platform};
use crate::generation::options::{CallToAction, Platform, SocialTone};
use crate::models::content::{ContentType, NewContent};

pub const DEFAULT_HASHTAG_COUNT: usize = 10;
pub const MAX_HASHTAG_COUNT: usize = 30;

/// Hashtags kept on the Twitter variant.
const TWITTER_HASHTAGS: usize = 3;

fn default_hashtag_count() -> usize {
    DEFAULT_HASHTAG_COUNT
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialRequest {
    pub content: String,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub tone: SocialTone,
    #[serde(default = "default_hashtag_count")]
    pub hashtag_count: usize,
    #[serde(default)]
    pub cta: Option<CallToAction>,
    #[serde(default)]
    pub custom_cta: Option<String>,
}

impl SocialRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            platform: Platform::default(),
            tone: SocialTone::default(),
            hashtag_count: DEFAULT_HASHTAG_COUNT,
            cta: None,
            custom_cta: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformVariant {
    pub name: &'static str,
    pub content: String,
    pub hashtags: Vec<String>,
    pub tips: &'static [&'static str],
    /// The full caption is too long for one post on this platform.
    pub needs_thread: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialPost {
    pub caption: String,
    pub hashtags: Vec<String>,
    pub platform: Platform,
    /// Space-separated pieces of the caption.
    pub word_count: usize,
    pub character_count: usize,
    pub platforms: BTreeMap<Platform, PlatformVariant>,
}

/// starter, blank line, content, then the platform closer and CTA as their own paragraphs.
pub fn build_caption<R: Rng + ?Sized>(request: &SocialRequest, rng: &mut R) -> String {
    let starter = request
        .tone
        .starters()
        .choose(rng)
        .copied()
        .unwrap_or_default();

    let mut caption = format!("{starter}\n\n{}", request.content.trim());
    if let Some(suffix) = request.platform.caption_suffix() {
        caption.push_str("\n\n");
        caption.push_str(suffix);
    }
    if let Some(cta) = request.cta {
        caption.push_str("\n\n");
        caption.push_str(&cta.text(request.custom_cta.as_deref()));
    }
    caption
}

pub fn platform_variants(caption: &str, hashtags: &[String]) -> BTreeMap<Platform, PlatformVariant> {
    Platform::ALL
        .into_iter()
        .map(|platform| {
            let tags = match platform {
                Platform::Twitter => hashtags.iter().take(TWITTER_HASHTAGS).cloned().collect(),
                _ => hashtags.to_vec(),
            };
            let variant = PlatformVariant {
                name: platform.display_name(),
                content: truncate_for_platform(caption, platform),
                hashtags: tags,
                tips: platform.tips(),
                needs_thread: needs_thread(caption, platform),
            };
            (platform, variant)
        })
        .collect()
}

/// Builds the caption and samples hashtags from the request content.
/// The caller validates that content is present and the count is in range.
pub fn generate_social<R: Rng + ?Sized>(request: &SocialRequest, rng: &mut R) -> SocialPost {
    let caption = build_caption(request, rng);
    let hashtags = extract_hashtags(&request.content, request.hashtag_count, rng);

    SocialPost {
        word_count: caption.split(' ').count(),
        character_count: caption.chars().count(),
        platforms: platform_variants(&caption, &hashtags),
        platform: request.platform,
        hashtags,
        caption,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Preview
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewRequest {
    pub caption: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub platform: Platform,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PreviewStat {
    pub label: &'static str,
    pub value: u32,
    pub formatted: String,
}

impl PreviewStat {
    fn new(label: &'static str, value: u32) -> Self {
        Self {
            label,
            value,
            formatted: format_count(value),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialPreview {
    pub platform: Platform,
    pub display_name: &'static str,
    pub handle: &'static str,
    pub body: String,
    pub stats: Vec<PreviewStat>,
}

/// `1234` renders as `1.2K`; smaller values are printed as-is.
pub fn format_count(value: u32) -> String {
    if value >= 1000 {
        format!("{:.1}K", f64::from(value) / 1000.0)
    } else {
        value.to_string()
    }
}

fn hashtag_line(hashtags: &[String]) -> String {
    hashtags
        .iter()
        .map(|tag| tag.trim().trim_start_matches('#'))
        .filter(|tag| !tag.is_empty())
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Mock post as the platform would render it. `None` for platforms without a
/// preview layout.
pub fn preview<R: Rng + ?Sized>(request: &PreviewRequest, rng: &mut R) -> Option<SocialPreview> {
    let platform = request.platform;
    let tags = hashtag_line(&request.hashtags);
    let caption = request.caption.trim();

    let (handle, separator, stats) = match platform {
        Platform::Instagram => ("your_brand", "\n\n", vec![PreviewStat::new("likes", 1247)]),
        Platform::Twitter => (
            "@yourbrand",
            " ",
            vec![
                PreviewStat::new("replies", rng.gen_range(5..55)),
                PreviewStat::new("retweets", rng.gen_range(20..220)),
                PreviewStat::new("likes", rng.gen_range(100..600)),
                PreviewStat::new("views", rng.gen_range(1000..6000)),
            ],
        ),
        Platform::Linkedin => (
            "Your Brand",
            "\n\n",
            vec![
                PreviewStat::new("likes", rng.gen_range(50..250)),
                PreviewStat::new("comments", rng.gen_range(5..35)),
                PreviewStat::new("reposts", rng.gen_range(2..17)),
            ],
        ),
        Platform::Reddit => (
            "u/yourbrand",
            "\n\n",
            vec![
                PreviewStat::new("upvotes", rng.gen_range(100..600)),
                PreviewStat::new("comments", rng.gen_range(10..60)),
                PreviewStat::new("awards", rng.gen_range(0..3)),
            ],
        ),
        Platform::Facebook | Platform::Tiktok => return None,
    };

    let body = if tags.is_empty() {
        caption.to_string()
    } else {
        format!("{caption}{separator}{tags}")
    };

    Some(SocialPreview {
        platform,
        display_name: platform.display_name(),
        handle,
        body,
        stats,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Publish
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostAction {
    #[default]
    Now,
    Schedule,
}

impl PostAction {
    pub fn as_str(self) -> &'static str {
        match self {
            PostAction::Now => "now",
            PostAction::Schedule => "schedule",
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            PostAction::Now => "posted",
            PostAction::Schedule => "scheduled",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishRequest {
    pub caption: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub action: PostAction,
    #[serde(default)]
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

/// Validated publish request, ready to store as a `posted` record.
#[derive(Debug, Clone)]
pub struct Publication {
    pub record: NewContent,
    pub message: String,
}

/// Checks the publish request and builds the record. Errors are user-facing messages.
pub fn prepare_publication(request: &PublishRequest, now: DateTime<Utc>) -> Result<Publication, String> {
    let caption = request.caption.trim();
    if caption.is_empty() {
        return Err("caption cannot be empty".to_string());
    }

    let mut platforms: Vec<Platform> = Vec::with_capacity(request.platforms.len());
    for p in &request.platforms {
        if !platforms.contains(p) {
            platforms.push(*p);
        }
    }
    if platforms.is_empty() {
        return Err("Please select at least one platform.".to_string());
    }

    let scheduled_time = match request.action {
        PostAction::Now => None,
        PostAction::Schedule => Some(
            request
                .scheduled_time
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .ok_or_else(|| "scheduled_time is required when scheduling a post".to_string())?,
        ),
    };

    let names: Vec<&str> = platforms.iter().map(|p| p.as_str()).collect();
    let message = format!(
        "Content {} successfully to {}!",
        request.action.past_tense(),
        names.join(", ")
    );

    let record = NewContent {
        user_id: request.user_id,
        content_type: ContentType::Social,
        title: format!("Social Media Post - {}", now.format("%Y-%m-%d")),
        content: caption.to_string(),
        metadata: json!({
            "hashtags": request.hashtags,
            "platforms": names,
            "action": request.action.as_str(),
            "scheduled_time": scheduled_time,
            "character_count": caption.chars().count(),
            "word_count": caption.split(' ').count(),
        }),
    };

    Ok(Publication { record, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(21)
    }

    #[test]
    fn test_caption_layout_with_suffix_and_cta() {
        let request = SocialRequest {
            platform: Platform::Linkedin,
            tone: SocialTone::Professional,
            cta: Some(CallToAction::Follow),
            ..SocialRequest::new("We shipped a new release")
        };
        let caption = build_caption(&request, &mut rng());
        let parts: Vec<&str> = caption.split("\n\n").collect();
        assert_eq!(parts.len(), 4);
        assert!(SocialTone::Professional.starters().contains(&parts[0]));
        assert_eq!(parts[1], "We shipped a new release");
        assert_eq!(parts[2], Platform::Linkedin.caption_suffix().unwrap());
        assert_eq!(parts[3], "💙 Follow us for daily insights!");
    }

    #[test]
    fn test_reddit_caption_has_no_suffix() {
        let request = SocialRequest {
            platform: Platform::Reddit,
            ..SocialRequest::new("Ask me anything")
        };
        let caption = build_caption(&request, &mut rng());
        assert!(caption.ends_with("Ask me anything"));
    }

    #[test]
    fn test_custom_cta_text_is_used() {
        let request = SocialRequest {
            platform: Platform::Reddit,
            cta: Some(CallToAction::Custom),
            custom_cta: Some("Join the beta".to_string()),
            ..SocialRequest::new("Launching soon")
        };
        assert!(build_caption(&request, &mut rng()).ends_with("\n\nJoin the beta"));
    }

    #[test]
    fn test_generate_counts_and_hashtags() {
        let request = SocialRequest {
            hashtag_count: 5,
            ..SocialRequest::new("Building reliable services with careful engineering")
        };
        let post = generate_social(&request, &mut rng());
        assert_eq!(post.hashtags.len(), 5);
        let unique: HashSet<&String> = post.hashtags.iter().collect();
        assert_eq!(unique.len(), 5);
        assert_eq!(post.word_count, post.caption.split(' ').count());
        assert_eq!(post.character_count, post.caption.chars().count());
        assert_eq!(post.platform, Platform::Instagram);
    }

    #[test]
    fn test_twitter_variant_truncates_and_keeps_three_tags() {
        let long = "word ".repeat(80);
        let post = generate_social(&SocialRequest::new(long), &mut rng());
        let twitter = &post.platforms[&Platform::Twitter];
        assert_eq!(twitter.name, "Twitter/X");
        assert_eq!(twitter.hashtags.len(), 3);
        assert_eq!(twitter.content.chars().count(), 203);
        assert!(twitter.content.ends_with("..."));
        assert!(twitter.needs_thread);

        let linkedin = &post.platforms[&Platform::Linkedin];
        assert_eq!(linkedin.content, post.caption);
        assert_eq!(linkedin.hashtags, post.hashtags);
        assert_eq!(linkedin.tips, Platform::Linkedin.tips());
        assert!(!linkedin.needs_thread);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.0K");
        assert_eq!(format_count(1234), "1.2K");
        assert_eq!(format_count(5999), "6.0K");
    }

    #[test]
    fn test_twitter_preview_joins_tags_inline() {
        let request = PreviewRequest {
            caption: "Hello world".to_string(),
            hashtags: vec!["#Rust".to_string(), "Tokio".to_string()],
            platform: Platform::Twitter,
        };
        let preview = preview(&request, &mut rng()).unwrap();
        assert_eq!(preview.body, "Hello world #Rust #Tokio");
        assert_eq!(preview.handle, "@yourbrand");
        let labels: Vec<&str> = preview.stats.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["replies", "retweets", "likes", "views"]);
        let views = &preview.stats[3];
        assert!((1000..6000).contains(&views.value));
        assert!(views.formatted.ends_with('K'));
    }

    #[test]
    fn test_instagram_preview_puts_tags_below() {
        let request = PreviewRequest {
            caption: "Sunset".to_string(),
            hashtags: vec!["#Travel".to_string()],
            platform: Platform::Instagram,
        };
        let preview = preview(&request, &mut rng()).unwrap();
        assert_eq!(preview.body, "Sunset\n\n#Travel");
        assert_eq!(preview.stats[0].formatted, "1.2K");
    }

    #[test]
    fn test_preview_unavailable_for_tiktok() {
        let request = PreviewRequest {
            caption: "Dance".to_string(),
            hashtags: vec![],
            platform: Platform::Tiktok,
        };
        assert!(preview(&request, &mut rng()).is_none());
    }

    fn publish(action: PostAction, platforms: Vec<Platform>, time: Option<&str>) -> PublishRequest {
        PublishRequest {
            caption: "Big news today".to_string(),
            hashtags: vec!["#News".to_string()],
            platforms,
            action,
            scheduled_time: time.map(str::to_string),
            user_id: None,
        }
    }

    #[test]
    fn test_publication_requires_platform() {
        let err = prepare_publication(&publish(PostAction::Now, vec![], None), Utc::now()).unwrap_err();
        assert!(err.contains("at least one platform"));
    }

    #[test]
    fn test_schedule_requires_time() {
        let req = publish(PostAction::Schedule, vec![Platform::Twitter], Some("  "));
        assert!(prepare_publication(&req, Utc::now()).is_err());
    }

    #[test]
    fn test_publication_metadata_and_message() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let req = publish(
            PostAction::Schedule,
            vec![Platform::Instagram, Platform::Twitter, Platform::Instagram],
            Some("2024-05-02T10:00"),
        );
        let publication = prepare_publication(&req, now).unwrap();
        assert_eq!(
            publication.message,
            "Content scheduled successfully to instagram, twitter!"
        );

        let record = publication.record;
        assert_eq!(record.content_type, ContentType::Social);
        assert_eq!(record.title, "Social Media Post - 2024-05-01");
        assert_eq!(record.metadata["platforms"], json!(["instagram", "twitter"]));
        assert_eq!(record.metadata["action"], "schedule");
        assert_eq!(record.metadata["scheduled_time"], "2024-05-02T10:00");
        assert_eq!(record.metadata["word_count"], 3);
        assert_eq!(record.metadata["character_count"], 14);
    }

    #[test]
    fn test_post_now_has_no_scheduled_time() {
        let req = publish(PostAction::Now, vec![Platform::Reddit], Some("ignored"));
        let publication = prepare_publication(&req, Utc::now()).unwrap();
        assert!(publication.record.metadata["scheduled_time"].is_null());
        assert!(publication.message.starts_with("Content posted"));
    }
}
