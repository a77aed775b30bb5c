//! Closed option sets for every generator form, with their lookup tables.
//!
//! Wire names are kebab-case. Deserializing an unknown key fails, which the
//! handlers surface as a validation error.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Blog
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlogTone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Authoritative,
    Conversational,
    Informative,
    Persuasive,
    Educational,
}

impl BlogTone {
    pub fn as_str(self) -> &'static str {
        match self {
            BlogTone::Professional => "professional",
            BlogTone::Casual => "casual",
            BlogTone::Friendly => "friendly",
            BlogTone::Authoritative => "authoritative",
            BlogTone::Conversational => "conversational",
            BlogTone::Informative => "informative",
            BlogTone::Persuasive => "persuasive",
            BlogTone::Educational => "educational",
        }
    }

    /// Adjective phrase woven into the body text.
    pub fn style(self) -> &'static str {
        match self {
            BlogTone::Professional => "authoritative and informative",
            BlogTone::Casual => "relaxed and conversational",
            BlogTone::Friendly => "warm and approachable",
            BlogTone::Authoritative => "expert and confident",
            BlogTone::Conversational => "engaging and personal",
            BlogTone::Informative => "educational and clear",
            BlogTone::Persuasive => "compelling and convincing",
            BlogTone::Educational => "instructional and detailed",
        }
    }

    /// Title format table. Only four tones carry their own formats; the rest
    /// share the professional set.
    pub fn title_formats(self) -> &'static [&'static str; 3] {
        match self {
            BlogTone::Casual => &[
                "Everything You Need to Know About {topic}",
                "{topic} Made Simple: A Beginner's Guide",
                "Why {topic} Matters (And How to Get Started)",
            ],
            BlogTone::Friendly => &[
                "Let's Talk About {topic}: Your Friendly Guide",
                "{topic}: What You Should Know",
                "Getting Started with {topic}: A Helpful Guide",
            ],
            BlogTone::Authoritative => &[
                "The Definitive Guide to {topic}",
                "Mastering {topic}: Expert Insights and Strategies",
                "{topic}: The Complete Professional Reference",
            ],
            _ => &[
                "Understanding {topic}: A Comprehensive Analysis",
                "{topic}: Best Practices and Implementation",
                "The Complete Guide to {topic}",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlogLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl BlogLength {
    /// Declared word count for the length option.
    pub fn target_words(self) -> usize {
        match self {
            BlogLength::Short => 400,
            BlogLength::Medium => 750,
            BlogLength::Long => 1200,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Social
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    #[default]
    Instagram,
    Twitter,
    Linkedin,
    Reddit,
    Facebook,
    Tiktok,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Reddit,
        Platform::Facebook,
        Platform::Tiktok,
    ];

    /// Platforms with a dedicated preview mockup.
    pub const PREVIEWABLE: [Platform; 4] = [
        Platform::Instagram,
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Reddit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Reddit => "reddit",
            Platform::Facebook => "facebook",
            Platform::Tiktok => "tiktok",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter/X",
            Platform::Linkedin => "LinkedIn",
            Platform::Reddit => "Reddit",
            Platform::Facebook => "Facebook",
            Platform::Tiktok => "TikTok",
        }
    }

    /// Closing line appended to the caption when this is the primary platform.
    pub fn caption_suffix(self) -> Option<&'static str> {
        match self {
            Platform::Linkedin => {
                Some("What has been your experience with this? Share your thoughts in the comments.")
            }
            Platform::Instagram => Some("Double tap if you agree! 💖"),
            Platform::Twitter => Some("What do you think? Let me know below 👇"),
            _ => None,
        }
    }

    pub fn tips(self) -> &'static [&'static str] {
        match self {
            Platform::Instagram => &[
                "Use high-quality visuals",
                "Post during peak hours (6-9 PM)",
                "Use Stories for extra engagement",
            ],
            Platform::Twitter => &[
                "Keep it under 280 characters",
                "Use threads for longer content",
                "Engage with replies quickly",
            ],
            Platform::Facebook => &[
                "Use native video when possible",
                "Ask questions to boost engagement",
                "Post when audience is active",
            ],
            Platform::Linkedin => &[
                "Add professional context",
                "Tag relevant connections",
                "Share industry insights",
            ],
            Platform::Tiktok => &[
                "Create engaging visual content",
                "Use trending sounds",
                "Keep videos under 60 seconds",
            ],
            Platform::Reddit => &[
                "Follow community rules",
                "Be authentic and helpful",
                "Engage in discussions",
            ],
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown platform '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialTone {
    #[default]
    Engaging,
    Professional,
    Fun,
    Inspirational,
    Informative,
    Casual,
    Urgent,
    Friendly,
}

impl SocialTone {
    pub fn starters(self) -> &'static [&'static str; 3] {
        match self {
            SocialTone::Engaging => &[
                "🚀 Ready to dive in?",
                "💡 Here's something amazing:",
                "✨ Let me share this with you:",
            ],
            SocialTone::Professional => &["Sharing insights on:", "Important update:", "Key findings:"],
            SocialTone::Fun => &["🎉 Guess what?", "🤩 This is so cool:", "🌟 Fun fact:"],
            SocialTone::Inspirational => &[
                "✨ Remember this:",
                "🌟 Believe it or not:",
                "💪 Here's your motivation:",
            ],
            SocialTone::Informative => &[
                "📚 Did you know:",
                "🔍 Here's what we found:",
                "📊 Latest data shows:",
            ],
            SocialTone::Casual => &["Hey there! 👋", "So, here's the thing...", "Quick update:"],
            SocialTone::Urgent => &["🚨 Important:", "⚡ Don't miss this:", "🔥 Act fast:"],
            SocialTone::Friendly => &[
                "Hello friends! 😊",
                "Hope you're having a great day!",
                "Sharing some love:",
            ],
        }
    }
}

/// Call-to-action choice for social captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallToAction {
    Visit,
    Follow,
    Share,
    Comment,
    Dm,
    Signup,
    Custom,
}

/// Fallback text for `Custom` when no custom wording is supplied.
pub const DEFAULT_CUSTOM_CTA: &str = "🔗 Take action today!";

impl CallToAction {
    pub fn text(self, custom: Option<&str>) -> String {
        match self {
            CallToAction::Visit => "👆 Visit our website for more details!".to_string(),
            CallToAction::Follow => "💙 Follow us for daily insights!".to_string(),
            CallToAction::Share => "🔄 Share if you found this helpful!".to_string(),
            CallToAction::Comment => "💬 What are your thoughts? Comment below!".to_string(),
            CallToAction::Dm => "📩 Send us a DM to learn more!".to_string(),
            CallToAction::Signup => "✅ Sign up now and get started!".to_string(),
            CallToAction::Custom => custom
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_CUSTOM_CTA)
                .to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Technical docs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocType {
    #[default]
    Api,
    Code,
    UserGuide,
    Readme,
}

impl DocType {
    pub fn as_str(self) -> &'static str {
        match self {
            DocType::Api => "api",
            DocType::Code => "code",
            DocType::UserGuide => "user-guide",
            DocType::Readme => "readme",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            DocType::Api => "API Documentation",
            DocType::Code => "Code Documentation",
            DocType::UserGuide => "User Guide",
            DocType::Readme => "README Documentation",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocLanguage {
    #[default]
    Javascript,
    Python,
    Java,
    Csharp,
    Php,
    Ruby,
    Go,
    Rust,
    Typescript,
    Other,
}

impl DocLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            DocLanguage::Javascript => "javascript",
            DocLanguage::Python => "python",
            DocLanguage::Java => "java",
            DocLanguage::Csharp => "csharp",
            DocLanguage::Php => "php",
            DocLanguage::Ruby => "ruby",
            DocLanguage::Go => "go",
            DocLanguage::Rust => "rust",
            DocLanguage::Typescript => "typescript",
            DocLanguage::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocStyle {
    #[default]
    Detailed,
    Concise,
    Tutorial,
    Reference,
}

impl DocStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            DocStyle::Detailed => "detailed",
            DocStyle::Concise => "concise",
            DocStyle::Tutorial => "tutorial",
            DocStyle::Reference => "reference",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Marketing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CopyType {
    #[default]
    Ad,
    Email,
    Landing,
    SocialAd,
    Product,
}

impl CopyType {
    pub fn as_str(self) -> &'static str {
        match self {
            CopyType::Ad => "ad",
            CopyType::Email => "email",
            CopyType::Landing => "landing",
            CopyType::SocialAd => "social-ad",
            CopyType::Product => "product",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CopyType::Ad => "Advertisement",
            CopyType::Email => "Email Marketing Campaign",
            CopyType::Landing => "Landing Page Copy",
            CopyType::SocialAd => "Social Media Advertisement",
            CopyType::Product => "Product Description",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarketingTone {
    #[default]
    Persuasive,
    Urgent,
    Friendly,
    Professional,
    Exciting,
    Trustworthy,
    Casual,
    Authoritative,
}

impl MarketingTone {
    pub fn as_str(self) -> &'static str {
        match self {
            MarketingTone::Persuasive => "persuasive",
            MarketingTone::Urgent => "urgent",
            MarketingTone::Friendly => "friendly",
            MarketingTone::Professional => "professional",
            MarketingTone::Exciting => "exciting",
            MarketingTone::Trustworthy => "trustworthy",
            MarketingTone::Casual => "casual",
            MarketingTone::Authoritative => "authoritative",
        }
    }

    pub fn is_urgent(self) -> bool {
        self == MarketingTone::Urgent
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Objective {
    #[default]
    IncreaseSales,
    GenerateLeads,
    BrandAwareness,
    DriveTraffic,
    PromoteEvent,
    CustomerRetention,
}

impl Objective {
    pub fn as_str(self) -> &'static str {
        match self {
            Objective::IncreaseSales => "increase-sales",
            Objective::GenerateLeads => "generate-leads",
            Objective::BrandAwareness => "brand-awareness",
            Objective::DriveTraffic => "drive-traffic",
            Objective::PromoteEvent => "promote-event",
            Objective::CustomerRetention => "customer-retention",
        }
    }
}
