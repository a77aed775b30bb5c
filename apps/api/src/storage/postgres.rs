//! Postgres backend over the hosted database's `generated_content` and
//! `content_analytics` tables.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::generation::options::Platform;
use crate::models::content::{
    AnalyticsMetrics, AnalyticsPeriod, AnalyticsRecord, ContentFilter, ContentRecord,
    ContentStatus, NewAnalytics, NewContent,
};
use crate::storage::{ContentStore, StorageError};

/// Statements run at startup. Each is idempotent.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS generated_content (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID,
        type VARCHAR(50) NOT NULL,
        title TEXT,
        content TEXT NOT NULL,
        metadata JSONB,
        status VARCHAR(20) NOT NULL DEFAULT 'draft',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    // Tables created by the hosted dashboard predate the status column
    "ALTER TABLE generated_content ADD COLUMN IF NOT EXISTS status VARCHAR(20) NOT NULL DEFAULT 'draft'",
    r#"
    CREATE TABLE IF NOT EXISTS content_analytics (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID,
        content_id UUID REFERENCES generated_content(id) ON DELETE CASCADE,
        platform VARCHAR(50),
        metrics JSONB,
        recorded_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

#[derive(Debug, FromRow)]
struct ContentRow {
    id: Uuid,
    user_id: Option<Uuid>,
    #[sqlx(rename = "type")]
    content_type: String,
    title: Option<String>,
    content: String,
    metadata: Option<Value>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContentRow> for ContentRecord {
    type Error = StorageError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        Ok(ContentRecord {
            id: row.id,
            user_id: row.user_id,
            content_type: row.content_type.parse().map_err(StorageError::Corrupt)?,
            title: row.title.unwrap_or_default(),
            content: row.content,
            metadata: row.metadata.unwrap_or_else(|| Value::Object(Default::default())),
            status: row.status.parse().map_err(StorageError::Corrupt)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct AnalyticsRow {
    id: Uuid,
    content_id: Option<Uuid>,
    user_id: Option<Uuid>,
    platform: Option<String>,
    metrics: Option<Value>,
    recorded_at: DateTime<Utc>,
}

impl TryFrom<AnalyticsRow> for AnalyticsRecord {
    type Error = StorageError;

    fn try_from(row: AnalyticsRow) -> Result<Self, Self::Error> {
        let content_id = row
            .content_id
            .ok_or_else(|| StorageError::Corrupt(format!("analytics {} has no content_id", row.id)))?;
        let platform: Platform = row
            .platform
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(StorageError::Corrupt)?;
        let metrics: AnalyticsMetrics = serde_json::from_value(row.metrics.unwrap_or(Value::Null))?;

        Ok(AnalyticsRecord {
            id: row.id,
            content_id,
            user_id: row.user_id,
            platform,
            metrics,
            recorded_at: row.recorded_at,
        })
    }
}

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Opens a pool and makes sure both tables exist.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        info!("PostgreSQL connection pool established");

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), StorageError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ContentStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn create(
        &self,
        new: NewContent,
        status: ContentStatus,
    ) -> Result<ContentRecord, StorageError> {
        let row = sqlx::query_as::<_, ContentRow>(
            r#"
            INSERT INTO generated_content (user_id, type, title, content, metadata, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, type, title, content, metadata, status, created_at, updated_at
            "#,
        )
        .bind(new.user_id)
        .bind(new.content_type.as_str())
        .bind(&new.title)
        .bind(&new.content)
        .bind(&new.metadata)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted {} content {}", new.content_type, row.id);
        row.try_into()
    }

    async fn list(&self, filter: &ContentFilter) -> Result<Vec<ContentRecord>, StorageError> {
        let rows = sqlx::query_as::<_, ContentRow>(
            r#"
            SELECT id, user_id, type, title, content, metadata, status, created_at, updated_at
            FROM generated_content
            WHERE ($1::text IS NULL OR type = $1)
              AND ($2::text IS NULL OR status = $2)
              AND ($3::uuid IS NULL OR user_id = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(filter.content_type.map(|t| t.as_str()))
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ContentRecord::try_from).collect()
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ContentStatus,
    ) -> Result<ContentRecord, StorageError> {
        let row = sqlx::query_as::<_, ContentRow>(
            r#"
            UPDATE generated_content
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, user_id, type, title, content, metadata, status, created_at, updated_at
            "#,
        )
        .bind(status.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound(id))?;

        row.try_into()
    }

    async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM generated_content WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn record_analytics(&self, new: NewAnalytics) -> Result<AnalyticsRecord, StorageError> {
        let metrics = serde_json::to_value(new.metrics)?;
        let row = sqlx::query_as::<_, AnalyticsRow>(
            r#"
            INSERT INTO content_analytics (user_id, content_id, platform, metrics)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content_id, user_id, platform, metrics, recorded_at
            "#,
        )
        .bind(new.user_id)
        .bind(new.content_id)
        .bind(new.platform.as_str())
        .bind(&metrics)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn list_analytics(
        &self,
        period: AnalyticsPeriod,
        user_id: Option<Uuid>,
    ) -> Result<Vec<AnalyticsRecord>, StorageError> {
        let rows = sqlx::query_as::<_, AnalyticsRow>(
            r#"
            SELECT id, content_id, user_id, platform, metrics, recorded_at
            FROM content_analytics
            WHERE recorded_at >= $1
              AND ($2::uuid IS NULL OR user_id = $2)
            ORDER BY recorded_at DESC
            "#,
        )
        .bind(period.since(Utc::now()))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(AnalyticsRecord::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::ContentType;
    use serde_json::json;

    fn content_row(content_type: &str, status: &str) -> ContentRow {
        let now = Utc::now();
        ContentRow {
            id: Uuid::new_v4(),
            user_id: None,
            content_type: content_type.to_string(),
            title: None,
            content: "body".to_string(),
            metadata: None,
            status: status.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_content_row_converts_with_defaults() {
        let record = ContentRecord::try_from(content_row("social", "posted")).unwrap();
        assert_eq!(record.content_type, ContentType::Social);
        assert_eq!(record.status, ContentStatus::Posted);
        assert_eq!(record.title, "");
        assert_eq!(record.metadata, json!({}));
    }

    #[test]
    fn test_content_row_with_unknown_type_is_corrupt() {
        let err = ContentRecord::try_from(content_row("podcast", "draft")).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }

    #[test]
    fn test_analytics_row_converts_metrics_json() {
        let row = AnalyticsRow {
            id: Uuid::new_v4(),
            content_id: Some(Uuid::new_v4()),
            user_id: None,
            platform: Some("reddit".to_string()),
            metrics: Some(json!({
                "engagement": 40, "reach": 1500, "likes": 60,
                "shares": 12, "comments": 7, "clicks": 30
            })),
            recorded_at: Utc::now(),
        };
        let record = AnalyticsRecord::try_from(row).unwrap();
        assert_eq!(record.platform, Platform::Reddit);
        assert_eq!(record.metrics.reach, 1500);
    }

    #[test]
    fn test_analytics_row_without_content_is_corrupt() {
        let row = AnalyticsRow {
            id: Uuid::new_v4(),
            content_id: None,
            user_id: None,
            platform: Some("twitter".to_string()),
            metrics: None,
            recorded_at: Utc::now(),
        };
        assert!(matches!(
            AnalyticsRecord::try_from(row),
            Err(StorageError::Corrupt(_))
        ));
    }
}
