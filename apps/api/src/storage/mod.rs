//! Content storage: one trait, two interchangeable backends.
//!
//! `LocalStore` keeps everything in a single JSON file; `PgStore` writes the
//! `generated_content` / `content_analytics` tables. `AppState` holds an
//! `Arc<dyn ContentStore>` chosen at startup from `STORAGE_BACKEND`.

use async_trait::async_trait;
use rand::Rng;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::generation::options::Platform;
use crate::models::content::{
    AnalyticsMetrics, AnalyticsPeriod, AnalyticsRecord, ContentFilter, ContentRecord,
    ContentStatus, NewAnalytics, NewContent,
};

pub mod handlers;
pub mod local;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("content {0} not found")]
    NotFound(Uuid),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("corrupt row: {0}")]
    Corrupt(String),
}

/// Persistence port for generated content and its simulated analytics.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Short backend label for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    async fn create(
        &self,
        new: NewContent,
        status: ContentStatus,
    ) -> Result<ContentRecord, StorageError>;

    /// Matching records, newest first.
    async fn list(&self, filter: &ContentFilter) -> Result<Vec<ContentRecord>, StorageError>;

    /// Sets `status` and refreshes `updated_at`.
    async fn update_status(
        &self,
        id: Uuid,
        status: ContentStatus,
    ) -> Result<ContentRecord, StorageError>;

    /// Removes the record if present. Deleting a missing id is not an error.
    async fn delete(&self, id: Uuid) -> Result<(), StorageError>;

    async fn record_analytics(&self, new: NewAnalytics) -> Result<AnalyticsRecord, StorageError>;

    /// Analytics recorded within `period`, newest first.
    async fn list_analytics(
        &self,
        period: AnalyticsPeriod,
        user_id: Option<Uuid>,
    ) -> Result<Vec<AnalyticsRecord>, StorageError>;
}

/// Random metrics in the ranges the dashboard mockups expect.
pub fn sample_metrics<R: Rng + ?Sized>(rng: &mut R) -> AnalyticsMetrics {
    AnalyticsMetrics {
        engagement: rng.gen_range(20..120),
        reach: rng.gen_range(1000..6000),
        likes: rng.gen_range(50..250),
        shares: rng.gen_range(10..60),
        comments: rng.gen_range(5..35),
        clicks: rng.gen_range(25..175),
    }
}

/// Builds one sample analytics row per previewable platform for `content_id`.
///
/// Metrics are drawn up front so the caller can release the RNG before
/// awaiting the writes.
pub fn sample_analytics<R: Rng + ?Sized>(
    content_id: Uuid,
    user_id: Option<Uuid>,
    rng: &mut R,
) -> Vec<NewAnalytics> {
    Platform::PREVIEWABLE
        .iter()
        .map(|&platform| NewAnalytics {
            content_id,
            user_id,
            platform,
            metrics: sample_metrics(rng),
        })
        .collect()
}

/// Writes the given sample rows. Stops at the first failure.
pub async fn seed_sample_analytics(
    store: &dyn ContentStore,
    rows: Vec<NewAnalytics>,
) -> Result<Vec<AnalyticsRecord>, StorageError> {
    let mut written = Vec::with_capacity(rows.len());
    for row in rows {
        written.push(store.record_analytics(row).await?);
    }
    debug!("Seeded {} analytics rows", written.len());
    Ok(written)
}
