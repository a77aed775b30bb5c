use serde::Serialize;

use crate::models::content::ContentType;

#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub content_type: ContentType,
    pub title: &'static str,
    pub description: &'static str,
    /// Generation endpoint, relative to the API root.
    pub endpoint: &'static str,
    pub features: &'static [&'static str],
}

pub static TEMPLATES: [TemplateInfo; 4] = [
    TemplateInfo {
        id: "blog-post",
        content_type: ContentType::Blog,
        title: "Blog Post Generator",
        description: "Create engaging blog posts with SEO optimization and custom tone matching",
        endpoint: "/api/v1/generate/blog",
        features: &["SEO Optimized", "Custom Tone", "Readability Score"],
    },
    TemplateInfo {
        id: "social-media",
        content_type: ContentType::Social,
        title: "Social Media Scheduler",
        description: "Generate captions, hashtags and schedule posts across multiple platforms",
        endpoint: "/api/v1/generate/social",
        features: &["Auto Hashtags", "Multi-Platform", "Scheduling", "Post Now"],
    },
    TemplateInfo {
        id: "technical-docs",
        content_type: ContentType::Docs,
        title: "Technical Documentation",
        description: "Generate documentation from code comments and API specifications",
        endpoint: "/api/v1/generate/docs",
        features: &["Code Analysis", "API Docs", "Auto-Format"],
    },
    TemplateInfo {
        id: "marketing-copy",
        content_type: ContentType::Marketing,
        title: "Marketing Copy",
        description: "Create compelling marketing content for ads, emails, and landing pages",
        endpoint: "/api/v1/generate/marketing",
        features: &["A/B Testing", "Conversion Focus", "Brand Voice"],
    },
];
