//! Blog post template fill.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::readability::{count_words, flesch_reading_ease};
use crate::analysis::seo::{keyword_density, seo_score};
use crate::generation::options::{BlogLength, BlogTone};

/// Keywords appended after the topic words, in this order.
const RELATED_KEYWORDS: [&str; 9] = [
    "best practices",
    "guide",
    "tips",
    "strategies",
    "how to",
    "complete guide",
    "beginner",
    "advanced",
    "tutorial",
];

const MAX_KEYWORDS: usize = 10;

const DEFAULT_KEY_POINTS: &str = "- Understanding the fundamentals of {topic}
- Best practices and implementation strategies
- Common challenges and how to overcome them
- Future trends and considerations";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogRequest {
    pub topic: String,
    #[serde(default)]
    pub tone: BlogTone,
    #[serde(default)]
    pub length: BlogLength,
    #[serde(default)]
    pub audience: Option<String>,
    /// One key point per line.
    #[serde(default)]
    pub outline: Option<String>,
    /// Comma-separated.
    #[serde(default)]
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub title: String,
    pub content: String,
    /// Declared length for the chosen option, not a count of `content`.
    pub word_count: usize,
    pub rendered_word_count: usize,
    pub readability_score: u32,
    pub seo_score: u32,
    pub keywords: Vec<String>,
    pub meta_description: String,
    pub structure_score: u32,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub fn generate_title<R: Rng + ?Sized>(topic: &str, tone: BlogTone, rng: &mut R) -> String {
    let format = tone
        .title_formats()
        .choose(rng)
        .copied()
        .unwrap_or("The Complete Guide to {topic}");
    format.replace("{topic}", topic)
}

/// Topic words, then the related pool, then the caller's keywords. First ten win.
pub fn blog_keywords(topic: &str, user_keywords: Option<&str>) -> Vec<String> {
    let topic_words = topic
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<_>>();
    let related = RELATED_KEYWORDS.iter().map(|k| k.to_string());
    let user = user_keywords
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string);

    topic_words
        .into_iter()
        .chain(related)
        .chain(user)
        .take(MAX_KEYWORDS)
        .collect()
}

pub fn meta_description(topic: &str) -> String {
    format!(
        "Learn everything about {topic} with our comprehensive guide. Discover best practices, tips, and strategies for success. Get started today!"
    )
}

fn key_points(topic: &str, outline: Option<&str>) -> String {
    let points = outline
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>();

    if points.is_empty() {
        DEFAULT_KEY_POINTS.replace("{topic}", topic)
    } else {
        points.join("\n")
    }
}

fn render_body(title: &str, request: &BlogRequest, topic: &str) -> String {
    let style = request.tone.style();
    let audience = non_blank(&request.audience);
    let intro_audience = audience
        .map(|a| format!(" specifically for {a}"))
        .unwrap_or_default();
    let focus = audience
        .map(|a| format!(" the needs of {a}"))
        .unwrap_or_else(|| " continuous learning".to_string());
    let points = key_points(topic, non_blank(&request.outline));

    format!(
        r#"# {title}

## Introduction

{topic} has become increasingly important in today's digital landscape. This {style} guide will explore the key aspects of {topic} and provide you with actionable insights{intro_audience}.

## Key Points

{points}

## Main Content

### Getting Started with {topic}

The journey into {topic} begins with a solid foundation of knowledge. Whether you're a beginner or have some experience, it's essential to understand the core concepts that drive success in this area.

### Key Strategies and Best Practices

When implementing {topic}, consider these essential strategies:

1. **Strategic Planning**: Develop a comprehensive approach that aligns with your goals
2. **Implementation**: Put theory into practice with careful execution
3. **Optimization**: Continuously improve your results based on data and feedback
4. **Measurement**: Track progress and success metrics to ensure you're on the right path

### Advanced Techniques

For those looking to take their understanding further, advanced strategies in {topic} include:

- Regular analysis and optimization of your approach
- Staying updated with industry trends and best practices
- Building strong foundational knowledge through continuous learning
- Networking with other professionals in the field

### Common Challenges and Solutions

Every journey with {topic} comes with its challenges. Here are some common issues and how to address them:

**Challenge 1: Getting Started**
Many people struggle with where to begin. The key is to start small and build momentum gradually.

**Challenge 2: Maintaining Consistency**
Success requires consistent effort. Create a sustainable routine that you can maintain long-term.

**Challenge 3: Measuring Progress**
Without proper metrics, it's hard to know if you're succeeding. Establish clear KPIs from the beginning.

### Tools and Resources

To succeed with {topic}, consider using these tools and resources:

- Industry-leading software and platforms
- Educational materials and training programs
- Professional networks and communities
- Analytics and measurement tools

## Conclusion

{topic} represents a significant opportunity for growth and innovation. By maintaining a {style} approach and focusing on{focus}, you can achieve meaningful results.

Remember that success in {topic} is a journey, not a destination. Stay curious, keep learning, and don't hesitate to experiment with new approaches. The key is to start where you are, use what you have, and do what you can.

## Next Steps

1. Apply the strategies outlined in this guide
2. Start with small, manageable steps
3. Track your progress and adjust as needed
4. Connect with others who share your interests
5. Continue learning and growing in your understanding

---

*This content was generated using AI assistance and optimized for SEO and readability.*"#
    )
}

/// Fills the blog template. The caller validates that `topic` is not blank.
pub fn generate_blog<R: Rng + ?Sized>(request: &BlogRequest, rng: &mut R) -> BlogPost {
    let topic = request.topic.trim();
    let title = generate_title(topic, request.tone, rng);
    let content = render_body(&title, request, topic);
    let keywords = blog_keywords(topic, non_blank(&request.keywords));

    let word_count = request.length.target_words();
    let readability_score = flesch_reading_ease(&content);
    let density = keyword_density(&content, &keywords);

    BlogPost {
        rendered_word_count: count_words(&content),
        seo_score: seo_score(density, readability_score, word_count),
        readability_score,
        keywords,
        meta_description: meta_description(topic),
        structure_score: rng.gen_range(85..95),
        word_count,
        title,
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn request(topic: &str) -> BlogRequest {
        BlogRequest {
            topic: topic.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_professional_medium_testing_post() {
        let mut rng = StdRng::seed_from_u64(11);
        let post = generate_blog(&request("Testing"), &mut rng);

        let expected_titles = [
            "Understanding Testing: A Comprehensive Analysis",
            "Testing: Best Practices and Implementation",
            "The Complete Guide to Testing",
        ];
        assert!(expected_titles.contains(&post.title.as_str()));
        assert!(post.content.contains("Testing"));
        assert!(post.content.starts_with(&format!("# {}", post.title)));
        assert_eq!(post.word_count, 750);
        assert!(post.rendered_word_count > 0);
        assert!(post.readability_score <= 100);
        assert!(post.seo_score <= 100);
        assert!((85..95).contains(&post.structure_score));
    }

    #[test]
    fn test_keywords_order_and_limit() {
        let keywords = blog_keywords("Machine Learning", Some("ai, , models"));
        assert_eq!(keywords.len(), 10);
        assert_eq!(keywords[0], "machine");
        assert_eq!(keywords[1], "learning");
        assert_eq!(keywords[2], "best practices");
        assert!(!keywords.contains(&"ai".to_string()));

        let short = blog_keywords("", Some("ownership"));
        assert_eq!(short.last().map(String::as_str), Some("ownership"));
    }

    #[test]
    fn test_outline_replaces_default_key_points() {
        let mut rng = StdRng::seed_from_u64(1);
        let req = BlogRequest {
            outline: Some("First idea\n\n  Second idea  ".to_string()),
            audience: Some("startup founders".to_string()),
            ..request("Hiring")
        };
        let post = generate_blog(&req, &mut rng);
        assert!(post.content.contains("- First idea\n- Second idea"));
        assert!(!post.content.contains("Understanding the fundamentals of Hiring"));
        assert!(post.content.contains("specifically for startup founders"));
        assert!(post.content.contains("focusing on the needs of startup founders"));
    }

    #[test]
    fn test_default_key_points_mention_topic() {
        let mut rng = StdRng::seed_from_u64(1);
        let post = generate_blog(&request("Gardening"), &mut rng);
        assert!(post.content.contains("- Understanding the fundamentals of Gardening"));
        assert!(post.content.contains("focusing on continuous learning"));
    }

    #[test]
    fn test_tone_without_own_titles_uses_professional_formats() {
        let mut rng = StdRng::seed_from_u64(5);
        let title = generate_title("Cooking", BlogTone::Educational, &mut rng);
        let formats = BlogTone::Professional.title_formats();
        assert!(formats
            .iter()
            .any(|f| f.replace("{topic}", "Cooking") == title));
    }

    #[test]
    fn test_length_sets_declared_word_count() {
        let mut rng = StdRng::seed_from_u64(2);
        let req = BlogRequest {
            length: BlogLength::Long,
            ..request("Budgeting")
        };
        assert_eq!(generate_blog(&req, &mut rng).word_count, 1200);
    }

    #[test]
    fn test_meta_description_mentions_topic() {
        assert!(meta_description("SEO").starts_with("Learn everything about SEO"));
    }
}
