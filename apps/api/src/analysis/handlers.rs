use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::hashtags::extract_hashtags;
use crate::analysis::seo::{analyze_seo, SeoReport};
use crate::errors::AppError;
use crate::generation::social::{DEFAULT_HASHTAG_COUNT, MAX_HASHTAG_COUNT};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SeoRequest {
    pub content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct HashtagRequest {
    pub content: String,
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HashtagResponse {
    pub hashtags: Vec<String>,
}

/// POST /api/v1/analysis/seo
///
/// Empty content is allowed and scores as neutral readability with no keywords.
pub async fn handle_analyze_seo(
    payload: Result<Json<SeoRequest>, JsonRejection>,
) -> Result<Json<SeoReport>, AppError> {
    let Json(request) = payload?;
    Ok(Json(analyze_seo(&request.content, &request.keywords)))
}

/// POST /api/v1/analysis/hashtags
pub async fn handle_extract_hashtags(
    State(state): State<AppState>,
    payload: Result<Json<HashtagRequest>, JsonRejection>,
) -> Result<Json<HashtagResponse>, AppError> {
    let Json(request) = payload?;
    let count = request.count.unwrap_or(DEFAULT_HASHTAG_COUNT);
    if !(1..=MAX_HASHTAG_COUNT).contains(&count) {
        return Err(AppError::Validation(format!(
            "count must be between 1 and {MAX_HASHTAG_COUNT}"
        )));
    }

    let hashtags = extract_hashtags(&request.content, count, &mut *state.rng());
    Ok(Json(HashtagResponse { hashtags }))
}
