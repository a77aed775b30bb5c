//! Axum route handlers for delegated email/password auth.

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{AuthClient, AuthError, AuthSession, SignUpOutcome};
use crate::errors::AppError;
use crate::state::AppState;

const CONFIRMATION_MESSAGE: &str = "Account created! Check your email to verify your account.";

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    pub message: &'static str,
    /// Present when the service signs the user in straight away.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<AuthSession>,
}

fn client(state: &AppState) -> Result<&AuthClient, AppError> {
    state.auth.as_ref().ok_or_else(|| AuthError::Disabled.into())
}

fn credentials<'a>(email: &'a str, password: &'a str) -> Result<(&'a str, &'a str), AppError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }
    Ok((email, password))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// POST /api/v1/auth/sign-up
pub async fn handle_sign_up(
    State(state): State<AppState>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SignUpResponse>), AppError> {
    let Json(request) = payload?;
    let auth = client(&state)?;
    let (email, password) = credentials(&request.email, &request.password)?;
    if request.password != request.confirm_password {
        return Err(AppError::Validation("Passwords do not match".to_string()));
    }

    let session = match auth.sign_up(email, password).await? {
        SignUpOutcome::Session(session) => Some(session),
        SignUpOutcome::PendingConfirmation(user) => {
            info!("Sign-up for {} awaits email confirmation", user.id);
            None
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: CONFIRMATION_MESSAGE,
            session,
        }),
    ))
}

/// POST /api/v1/auth/sign-in
pub async fn handle_sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Json<AuthSession>, AppError> {
    let Json(request) = payload?;
    let auth = client(&state)?;
    let (email, password) = credentials(&request.email, &request.password)?;

    let session = auth.sign_in(email, password).await?;
    info!("User {} signed in", session.user.id);
    Ok(Json(session))
}

/// POST /api/v1/auth/sign-out
///
/// Expects `Authorization: Bearer <access_token>`.
pub async fn handle_sign_out(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let auth = client(&state)?;
    let token = bearer_token(&headers)
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))?;

    auth.sign_out(token).await?;
    Ok(StatusCode::NO_CONTENT)
}
