//! Local JSON-file backend.
//!
//! The whole history lives in one document:
//! `{ "contentHistory": [...], "contentAnalytics": [...] }`.
//! Every operation re-reads the file, applies its change and writes it back
//! with a temp-file + rename, all under one async mutex.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::content::{
    AnalyticsPeriod, AnalyticsRecord, ContentFilter, ContentRecord, ContentStatus, NewAnalytics,
    NewContent,
};
use crate::storage::{ContentStore, StorageError};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocalDocument {
    #[serde(default)]
    content_history: Vec<ContentRecord>,
    #[serde(default)]
    content_analytics: Vec<AnalyticsRecord>,
}

pub struct LocalStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LocalStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        info!("Using local content store at {}", path.display());
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Missing file reads as an empty document. A corrupt file is an error.
    async fn read(&self) -> Result<LocalDocument, StorageError> {
        match fs::read_to_string(&self.path).await {
            Ok(s) if s.trim().is_empty() => Ok(LocalDocument::default()),
            Ok(s) => Ok(serde_json::from_str(&s)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(LocalDocument::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, doc: &LocalDocument) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(doc)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path).await?;
        f.write_all(json.as_bytes()).await?;
        f.sync_all().await?;
        drop(f);

        fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ContentStore for LocalStore {
    fn backend(&self) -> &'static str {
        "local"
    }

    async fn create(
        &self,
        new: NewContent,
        status: ContentStatus,
    ) -> Result<ContentRecord, StorageError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.read().await?;

        let now = Utc::now();
        let record = ContentRecord {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            content_type: new.content_type,
            title: new.title,
            content: new.content,
            metadata: new.metadata,
            status,
            created_at: now,
            updated_at: now,
        };

        // Newest first
        doc.content_history.insert(0, record.clone());
        self.write(&doc).await?;

        debug!("Stored {} record {} as {}", record.content_type, record.id, status.as_str());
        Ok(record)
    }

    async fn list(&self, filter: &ContentFilter) -> Result<Vec<ContentRecord>, StorageError> {
        let _guard = self.lock.lock().await;
        let doc = self.read().await?;
        Ok(doc
            .content_history
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ContentStatus,
    ) -> Result<ContentRecord, StorageError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.read().await?;

        let record = doc
            .content_history
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StorageError::NotFound(id))?;
        record.status = status;
        record.updated_at = Utc::now();
        let updated = record.clone();

        self.write(&doc).await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.read().await?;
        doc.content_history.retain(|r| r.id != id);
        doc.content_analytics.retain(|a| a.content_id != id);
        self.write(&doc).await
    }

    async fn record_analytics(&self, new: NewAnalytics) -> Result<AnalyticsRecord, StorageError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.read().await?;

        let record = AnalyticsRecord {
            id: Uuid::new_v4(),
            content_id: new.content_id,
            user_id: new.user_id,
            platform: new.platform,
            metrics: new.metrics,
            recorded_at: Utc::now(),
        };
        doc.content_analytics.insert(0, record.clone());
        self.write(&doc).await?;
        Ok(record)
    }

    async fn list_analytics(
        &self,
        period: AnalyticsPeriod,
        user_id: Option<Uuid>,
    ) -> Result<Vec<AnalyticsRecord>, StorageError> {
        let _guard = self.lock.lock().await;
        let doc = self.read().await?;
        let since = period.since(Utc::now());

        let mut rows: Vec<AnalyticsRecord> = doc
            .content_analytics
            .into_iter()
            .filter(|a| a.recorded_at >= since)
            .filter(|a| user_id.map_or(true, |u| a.user_id == Some(u)))
            .collect();
        rows.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(rows)
    }
}
