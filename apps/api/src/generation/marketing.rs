//! Marketing copy template fill, one template per copy type.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::hashtags::capitalize_first;
use crate::generation::options::{CopyType, MarketingTone, Objective};

const BASE_SUGGESTIONS: [&str; 5] = [
    "Consider A/B testing different headlines",
    "Add social proof and testimonials",
    "Include urgency indicators if appropriate",
    "Optimize call-to-action placement",
    "Test different value propositions",
];

const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketingRequest {
    #[serde(default)]
    pub copy_type: CopyType,
    pub product: String,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub tone: MarketingTone,
    #[serde(default)]
    pub objective: Objective,
    /// Comma-separated.
    #[serde(default)]
    pub key_benefits: Option<String>,
    #[serde(default)]
    pub call_to_action: Option<String>,
    #[serde(default)]
    pub constraints: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketingCopy {
    pub title: String,
    pub content: String,
    pub copy_type: CopyType,
    pub word_count: usize,
    pub conversion_score: u32,
    pub engagement_score: u32,
    pub suggestions: Vec<&'static str>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Borrowed, trimmed view of the request that the templates read from.
struct CopyInputs<'a> {
    product: &'a str,
    audience: Option<&'a str>,
    benefits: Vec<&'a str>,
    cta: Option<&'a str>,
    constraints: Option<&'a str>,
    urgent: bool,
}

impl<'a> CopyInputs<'a> {
    fn from_request(request: &'a MarketingRequest) -> Self {
        let benefits = non_blank(&request.key_benefits)
            .map(|b| {
                b.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            product: request.product.trim(),
            audience: non_blank(&request.target_audience),
            benefits,
            cta: non_blank(&request.call_to_action),
            constraints: non_blank(&request.constraints),
            urgent: request.tone.is_urgent(),
        }
    }

    /// Caller's benefits as `{bullet}{benefit}` lines, or the defaults when none were given.
    fn benefit_lines(&self, bullet: &str, defaults: [&str; 3]) -> String {
        let items: Vec<&str> = if self.benefits.is_empty() {
            defaults.to_vec()
        } else {
            self.benefits.clone()
        };
        items
            .iter()
            .map(|b| format!("{bullet}{b}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn audience_title(&self, fallback: &str) -> String {
        self.audience
            .map(capitalize_first)
            .unwrap_or_else(|| fallback.to_string())
    }
}

fn ad_copy(input: &CopyInputs) -> String {
    let product = input.product;
    let audience = input.audience.unwrap_or("Business");
    let benefits = input.benefit_lines("✅ ", ["Proven results", "Easy to use", "Expert support"]);
    let urgency = if input.urgent {
        "Do not wait! Limited time offer!"
    } else {
        ""
    };
    let cta = input.cta.unwrap_or("Get Started Now");
    let tag: String = product.split_whitespace().collect();

    format!(
        "🚀 Discover {product} - Transform Your {audience} Today!\n\n{benefits}\n\n{urgency}\n\n{cta} 👆\n\n#{tag} #Marketing #Growth"
    )
}

fn email_copy(input: &CopyInputs) -> String {
    let product = input.product;
    let subject_prefix = if input.urgent { "⚡ Last Chance:" } else { "🌟" };
    let opener = input
        .audience
        .map(|a| format!("As a {a}"))
        .unwrap_or_else(|| "We know you are busy".to_string());
    let benefits = input.benefit_lines(
        "• ",
        [
            "Saves you time and money",
            "Easy implementation",
            "Proven results",
        ],
    );
    let closing = if input.urgent {
        "This offer expires soon."
    } else {
        "Ready to get started?"
    };
    let cta = input.cta.unwrap_or("Click here to learn more");
    let postscript = if input.urgent {
        "Only 24 hours left!"
    } else {
        "Questions? Just reply to this email."
    };

    format!(
        r#"Subject: {subject_prefix} {product} is Here!

Hi there!

{opener}, you deserve solutions that actually work.

That is why we are excited to introduce {product}.

Here is what makes it special:
{benefits}

{closing}

{cta} →

Best regards,
The Team

P.S. {postscript}"#
    )
}

fn landing_copy(input: &CopyInputs) -> String {
    let product = input.product;
    let audience = input.audience_title("Business");
    let reasons = if input.benefits.is_empty() {
        "**Proven Results** - Join thousands of satisfied customers.\n\n\
         **Easy to Use** - Get started in minutes, not hours.\n\n\
         **Expert Support** - Our team is here to help you succeed."
            .to_string()
    } else {
        input
            .benefits
            .iter()
            .map(|b| format!("**{b}** - Experience the difference that quality makes."))
            .collect::<Vec<_>>()
            .join("\n\n")
    };
    let banner = if input.urgent {
        "⚡ Limited Time Offer - Act Now!"
    } else {
        "🚀 Join the Success Story"
    };
    let cta = input.cta.unwrap_or("Start Your Free Trial Today");
    let fine_print = input
        .constraints
        .unwrap_or("No credit card required. Cancel anytime.");

    format!(
        r#"# {product}: The Solution You've Been Looking For

## Transform Your {audience} Today

### Why Choose {product}?

{reasons}

### Ready to Get Started?

{banner}

{cta}

*{fine_print}*

---

💡 Still have questions? Contact our support team 24/7."#
    )
}

fn social_ad_copy(input: &CopyInputs) -> String {
    let product = input.product;
    let audience = input.audience_title("Everyone");
    let benefits = input.benefit_lines(
        "🔥 ",
        ["Game-changing results", "Easy to implement", "Trusted by experts"],
    );
    let closer = if input.urgent {
        "⏰ Limited spots available!"
    } else {
        "✨ Ready to join them?"
    };
    let cta = input.cta.unwrap_or("Learn More");

    format!("🎯 {audience} is talking about {product}!\n\nHere is why:\n{benefits}\n\n{closer}\n\n👆 {cta}")
}

fn product_copy(input: &CopyInputs) -> String {
    let product = input.product;
    let features = input.benefit_lines(
        "• ",
        [
            "Premium quality materials",
            "User-friendly design",
            "Excellent customer support",
        ],
    );
    let audience = input
        .audience
        .unwrap_or("Anyone looking for quality and reliability");
    let note = if input.urgent {
        "🔥 **Limited Time:** Special pricing available now!"
    } else {
        "💡 **Pro Tip:** Order now for fastest delivery!"
    };
    let cta = input.cta.unwrap_or("Add to Cart");

    format!(
        r#"## {product}

**Key Features:**
{features}

**Perfect for:** {audience}

**What is Included:**
• Complete {product}
• User manual and setup guide
• 30-day money-back guarantee
• Free customer support

{note}

{cta}"#
    )
}

/// Three optimization tips. Tone- and type-specific tips come first.
pub fn suggestions(copy_type: CopyType, tone: MarketingTone) -> Vec<&'static str> {
    let mut tips = Vec::with_capacity(BASE_SUGGESTIONS.len() + 2);
    if tone.is_urgent() {
        tips.push("Add countdown timers for urgency");
    }
    if copy_type == CopyType::Email {
        tips.push("Test subject line variations");
    }
    tips.extend(BASE_SUGGESTIONS);
    tips.truncate(MAX_SUGGESTIONS);
    tips
}

/// Fills the template for the requested copy type. The caller validates
/// that `product` is not blank.
pub fn generate_marketing<R: Rng + ?Sized>(request: &MarketingRequest, rng: &mut R) -> MarketingCopy {
    let input = CopyInputs::from_request(request);
    let content = match request.copy_type {
        CopyType::Ad => ad_copy(&input),
        CopyType::Email => email_copy(&input),
        CopyType::Landing => landing_copy(&input),
        CopyType::SocialAd => social_ad_copy(&input),
        CopyType::Product => product_copy(&input),
    };

    MarketingCopy {
        title: format!("{} - {}", request.copy_type.label(), input.product),
        word_count: content.split(' ').count(),
        copy_type: request.copy_type,
        conversion_score: rng.gen_range(75..95),
        engagement_score: rng.gen_range(80..95),
        suggestions: suggestions(request.copy_type, request.tone),
        content,
    }
}
