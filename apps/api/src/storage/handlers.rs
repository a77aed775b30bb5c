//! History and analytics endpoints over the configured `ContentStore`.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::content::{
    AnalyticsMetrics, AnalyticsPeriod, AnalyticsRecord, ContentFilter, ContentRecord,
    ContentStatus,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: ContentStatus,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    #[serde(default)]
    pub period: AnalyticsPeriod,
    pub user_id: Option<Uuid>,
}

/// Column totals across every listed row.
#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AnalyticsTotals {
    pub engagement: u64,
    pub reach: u64,
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
    pub clicks: u64,
}

impl AnalyticsTotals {
    fn add(&mut self, m: &AnalyticsMetrics) {
        self.engagement += u64::from(m.engagement);
        self.reach += u64::from(m.reach);
        self.likes += u64::from(m.likes);
        self.shares += u64::from(m.shares);
        self.comments += u64::from(m.comments);
        self.clicks += u64::from(m.clicks);
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub period: AnalyticsPeriod,
    pub totals: AnalyticsTotals,
    pub records: Vec<AnalyticsRecord>,
}

pub fn totals(records: &[AnalyticsRecord]) -> AnalyticsTotals {
    records.iter().fold(AnalyticsTotals::default(), |mut acc, r| {
        acc.add(&r.metrics);
        acc
    })
}

/// GET /api/v1/content?type=&status=&user_id=
pub async fn handle_list_content(
    State(state): State<AppState>,
    query: Result<Query<ContentFilter>, QueryRejection>,
) -> Result<Json<Vec<ContentRecord>>, AppError> {
    let Query(filter) = query?;
    let records = state.store.list(&filter).await?;
    Ok(Json(records))
}

/// PATCH /api/v1/content/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<ContentRecord>, AppError> {
    let Json(update) = payload?;
    let record = state.store.update_status(id, update.status).await?;
    info!("Content {id} marked {}", record.status.as_str());
    Ok(Json(record))
}

/// DELETE /api/v1/content/:id
///
/// Always 204, whether or not the id existed.
pub async fn handle_delete_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.delete(id).await?;
    info!("Deleted content {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/analytics?period=7d|30d&user_id=
pub async fn handle_list_analytics(
    State(state): State<AppState>,
    query: Result<Query<AnalyticsQuery>, QueryRejection>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let Query(q) = query?;
    let records = state.store.list_analytics(q.period, q.user_id).await?;
    Ok(Json(AnalyticsResponse {
        period: q.period,
        totals: totals(&records),
        records,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::options::Platform;
    use chrono::Utc;

    fn row(likes: u32, reach: u32) -> AnalyticsRecord {
        AnalyticsRecord {
            id: Uuid::new_v4(),
            content_id: Uuid::new_v4(),
            user_id: None,
            platform: Platform::Twitter,
            metrics: AnalyticsMetrics {
                engagement: 1,
                reach,
                likes,
                shares: 2,
                comments: 3,
                clicks: 4,
            },
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_totals_sum_every_column() {
        let t = totals(&[row(10, 5000), row(20, 4000)]);
        assert_eq!(t.likes, 30);
        assert_eq!(t.reach, 9000);
        assert_eq!(t.engagement, 2);
        assert_eq!(t.clicks, 8);
    }

    #[test]
    fn test_totals_of_nothing_is_zero() {
        assert_eq!(totals(&[]), AnalyticsTotals::default());
    }
}
