//! Axum route handlers for the Generation API.

use std::time::Duration;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::MutexGuard;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::blog::{generate_blog, BlogPost, BlogRequest};
use crate::generation::catalog::{TemplateInfo, TEMPLATES};
use crate::generation::docs::{generate_docs, DocsRequest, TechnicalDoc};
use crate::generation::marketing::{generate_marketing, MarketingCopy, MarketingRequest};
use crate::generation::social::{
    generate_social, prepare_publication, preview, PreviewRequest, PublishRequest, SocialPost,
    SocialPreview, SocialRequest, MAX_HASHTAG_COUNT,
};
use crate::models::content::{ContentStatus, ContentType, NewContent};
use crate::state::AppState;
use crate::storage::{sample_analytics, seed_sample_analytics};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Generator options plus the persistence flags every generation accepts.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest<T> {
    #[serde(flatten)]
    pub options: T,
    /// Store the result as a draft.
    #[serde(default)]
    pub save: bool,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct Generated<T> {
    #[serde(flatten)]
    pub output: T,
    /// Id of the stored draft when `save` was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub content_id: Uuid,
    pub status: ContentStatus,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Shared steps
// ────────────────────────────────────────────────────────────────────────────

fn require(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Claims the panel for this request, or fails with 409 if it is busy.
fn lock_panel(state: &AppState, panel: ContentType) -> Result<MutexGuard<'_, ()>, AppError> {
    state.panels.for_panel(panel).try_lock().map_err(|_| {
        AppError::Conflict(format!("A {panel} generation is already in progress"))
    })
}

async fn simulate_latency(state: &AppState) {
    let ms = state.config.generation_delay_ms;
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// Stores `new` with `status` and, when enabled, sample analytics for it.
/// Analytics failures are logged and do not fail the request.
async fn persist(
    state: &AppState,
    new: NewContent,
    status: ContentStatus,
) -> Result<Uuid, AppError> {
    let user_id = new.user_id;
    let record = state.store.create(new, status).await?;
    info!("Saved {} content {} as {}", record.content_type, record.id, status.as_str());

    if state.config.seed_analytics {
        let rows = sample_analytics(record.id, user_id, &mut *state.rng());
        if let Err(e) = seed_sample_analytics(state.store.as_ref(), rows).await {
            warn!("Could not seed analytics for {}: {e}", record.id);
        }
    }

    Ok(record.id)
}

fn today_title(prefix: &str) -> String {
    format!("{prefix} - {}", Utc::now().format("%Y-%m-%d"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<&'static [TemplateInfo]> {
    Json(&TEMPLATES)
}

/// POST /api/v1/generate/blog
pub async fn handle_generate_blog(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest<BlogRequest>>, JsonRejection>,
) -> Result<Json<Generated<BlogPost>>, AppError> {
    let Json(request) = payload?;
    let options = &request.options;
    require(&options.topic, "topic")?;

    let _panel = lock_panel(&state, ContentType::Blog)?;
    simulate_latency(&state).await;

    let post = generate_blog(options, &mut *state.rng());
    info!("Generated blog post '{}'", post.title);

    let content_id = if request.save {
        let new = NewContent {
            user_id: request.user_id,
            content_type: ContentType::Blog,
            title: post.title.clone(),
            content: post.content.clone(),
            metadata: json!({
                "tone": options.tone.as_str(),
                "length": options.length,
                "audience": options.audience,
                "word_count": post.word_count,
                "readability_score": post.readability_score,
                "seo_score": post.seo_score,
                "keywords": post.keywords,
            }),
        };
        Some(persist(&state, new, ContentStatus::Draft).await?)
    } else {
        None
    };

    Ok(Json(Generated {
        output: post,
        content_id,
    }))
}

/// POST /api/v1/generate/social
pub async fn handle_generate_social(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest<SocialRequest>>, JsonRejection>,
) -> Result<Json<Generated<SocialPost>>, AppError> {
    let Json(request) = payload?;
    let options = &request.options;
    require(&options.content, "content")?;
    if !(1..=MAX_HASHTAG_COUNT).contains(&options.hashtag_count) {
        return Err(AppError::Validation(format!(
            "hashtag_count must be between 1 and {MAX_HASHTAG_COUNT}"
        )));
    }

    let _panel = lock_panel(&state, ContentType::Social)?;
    simulate_latency(&state).await;

    let post = generate_social(options, &mut *state.rng());
    info!(
        "Generated {} caption with {} hashtags",
        post.platform.as_str(),
        post.hashtags.len()
    );

    let content_id = if request.save {
        let new = NewContent {
            user_id: request.user_id,
            content_type: ContentType::Social,
            title: today_title("Social Media Post"),
            content: post.caption.clone(),
            metadata: json!({
                "platform": post.platform.as_str(),
                "tone": options.tone,
                "hashtags": post.hashtags,
                "word_count": post.word_count,
                "character_count": post.character_count,
            }),
        };
        Some(persist(&state, new, ContentStatus::Draft).await?)
    } else {
        None
    };

    Ok(Json(Generated {
        output: post,
        content_id,
    }))
}

/// POST /api/v1/generate/social/preview
pub async fn handle_social_preview(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<Json<SocialPreview>, AppError> {
    let Json(request) = payload?;
    require(&request.caption, "caption")?;

    let rendered = preview(&request, &mut *state.rng()).ok_or_else(|| {
        AppError::Validation(format!(
            "No preview layout for {}",
            request.platform.display_name()
        ))
    })?;
    Ok(Json(rendered))
}

/// POST /api/v1/generate/social/publish
///
/// Stores the caption as `posted`. Nothing is sent to any real platform.
pub async fn handle_social_publish(
    State(state): State<AppState>,
    payload: Result<Json<PublishRequest>, JsonRejection>,
) -> Result<Json<PublishResponse>, AppError> {
    let Json(request) = payload?;
    let publication = prepare_publication(&request, Utc::now()).map_err(AppError::Validation)?;

    let _panel = lock_panel(&state, ContentType::Social)?;
    simulate_latency(&state).await;

    let content_id = persist(&state, publication.record, ContentStatus::Posted).await?;
    info!("{}", publication.message);

    Ok(Json(PublishResponse {
        content_id,
        status: ContentStatus::Posted,
        message: publication.message,
    }))
}

/// POST /api/v1/generate/docs
pub async fn handle_generate_docs(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest<DocsRequest>>, JsonRejection>,
) -> Result<Json<Generated<TechnicalDoc>>, AppError> {
    let Json(request) = payload?;
    let options = &request.options;
    require(&options.code_input, "code_input")?;

    let _panel = lock_panel(&state, ContentType::Docs)?;
    simulate_latency(&state).await;

    let doc = generate_docs(options);
    info!("Generated {} ({} words)", doc.title, doc.word_count);

    let content_id = if request.save {
        let new = NewContent {
            user_id: request.user_id,
            content_type: ContentType::Docs,
            title: doc.title.clone(),
            content: doc.content.clone(),
            metadata: json!({
                "doc_type": options.doc_type.as_str(),
                "language": options.language.as_str(),
                "style": options.style.as_str(),
                "include_examples": options.include_examples,
                "project_name": options.project_name(),
                "version": options.version(),
            }),
        };
        Some(persist(&state, new, ContentStatus::Draft).await?)
    } else {
        None
    };

    Ok(Json(Generated {
        output: doc,
        content_id,
    }))
}

/// POST /api/v1/generate/marketing
pub async fn handle_generate_marketing(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest<MarketingRequest>>, JsonRejection>,
) -> Result<Json<Generated<MarketingCopy>>, AppError> {
    let Json(request) = payload?;
    let options = &request.options;
    require(&options.product, "product")?;

    let _panel = lock_panel(&state, ContentType::Marketing)?;
    simulate_latency(&state).await;

    let copy = generate_marketing(options, &mut *state.rng());
    info!("Generated {}", copy.title);

    let content_id = if request.save {
        let new = NewContent {
            user_id: request.user_id,
            content_type: ContentType::Marketing,
            title: copy.title.clone(),
            content: copy.content.clone(),
            metadata: json!({
                "copy_type": copy.copy_type.as_str(),
                "tone": options.tone.as_str(),
                "objective": options.objective.as_str(),
                "target_audience": options.target_audience,
                "word_count": copy.word_count,
                "conversion_score": copy.conversion_score,
            }),
        };
        Some(persist(&state, new, ContentStatus::Draft).await?)
    } else {
        None
    };

    Ok(Json(Generated {
        output: copy,
        content_id,
    }))
}
