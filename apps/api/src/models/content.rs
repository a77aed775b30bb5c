use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::generation::options::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Blog,
    Social,
    Docs,
    Marketing,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::Social => "social",
            ContentType::Docs => "docs",
            ContentType::Marketing => "marketing",
        }
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blog" => Ok(ContentType::Blog),
            "social" => Ok(ContentType::Social),
            "docs" => Ok(ContentType::Docs),
            "marketing" => Ok(ContentType::Marketing),
            other => Err(format!("unknown content type '{other}'")),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    #[default]
    Draft,
    Posted,
}

impl ContentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Posted => "posted",
        }
    }
}

impl FromStr for ContentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ContentStatus::Draft),
            "posted" => Ok(ContentStatus::Posted),
            other => Err(format!("unknown content status '{other}'")),
        }
    }
}

/// A generated artifact as persisted by either storage backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentRecord {
    pub id: Uuid,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub content: String,
    pub metadata: Value,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for `ContentStore::create`. The store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewContent {
    pub user_id: Option<Uuid>,
    pub content_type: ContentType,
    pub title: String,
    pub content: String,
    pub metadata: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentFilter {
    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,
    pub status: Option<ContentStatus>,
    pub user_id: Option<Uuid>,
}

impl ContentFilter {
    pub fn matches(&self, record: &ContentRecord) -> bool {
        self.content_type.map_or(true, |t| record.content_type == t)
            && self.status.map_or(true, |s| record.status == s)
            && self.user_id.map_or(true, |u| record.user_id == Some(u))
    }
}

/// Simulated engagement numbers. None of these come from a real platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyticsMetrics {
    pub engagement: u32,
    pub reach: u32,
    pub likes: u32,
    pub shares: u32,
    pub comments: u32,
    pub clicks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsRecord {
    pub id: Uuid,
    pub content_id: Uuid,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub platform: Platform,
    pub metrics: AnalyticsMetrics,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAnalytics {
    pub content_id: Uuid,
    pub user_id: Option<Uuid>,
    pub platform: Platform,
    pub metrics: AnalyticsMetrics,
}

/// Look-back window for analytics listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalyticsPeriod {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
}

impl AnalyticsPeriod {
    pub fn days(self) -> i64 {
        match self {
            AnalyticsPeriod::Week => 7,
            AnalyticsPeriod::Month => 30,
        }
    }

    /// Earliest `recorded_at` included in the window ending at `now`.
    pub fn since(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.days())
    }
}
