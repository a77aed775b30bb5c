//! Auth client: email/password accounts delegated to a GoTrue-compatible
//! service (the hosted backend's `/auth/v1` API).
//!
//! Every call is a single attempt. Failures are reported to the caller as-is;
//! there is no retry or backoff.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

pub mod handlers;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication is not configured")]
    Disabled,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("auth service rejected the request (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("auth service returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

/// Sign-up either logs the user straight in or waits for email confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignUpOutcome {
    Session(AuthSession),
    PendingConfirmation(AuthUser),
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// The service reports errors under different keys depending on the endpoint.
#[derive(Debug, Default, Deserialize)]
struct ServiceError {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ServiceError {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ServiceError>(body)
        .ok()
        .and_then(ServiceError::into_message)
        .unwrap_or_else(|| body.to_string())
}

#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl AuthClient {
    pub fn new(base_url: &str, anon_key: String) -> Result<Self, AuthError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn request(&self, path: &str) -> RequestBuilder {
        self.client
            .post(self.url(path))
            .header("apikey", &self.anon_key)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AuthError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        let message = error_message(&body);
        warn!("Auth service returned {status}: {message}");
        if status.is_client_error() {
            Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            })
        } else {
            Err(AuthError::Upstream {
                status: status.as_u16(),
                message,
            })
        }
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let outcome = self
            .send(self.request("signup").json(&Credentials { email, password }))
            .await?;
        debug!("Sign-up accepted for {email}");
        Ok(outcome)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let session: AuthSession = self
            .send(
                self.request("token")
                    .query(&[("grant_type", "password")])
                    .json(&Credentials { email, password }),
            )
            .await?;
        debug!("Signed in user {}", session.user.id);
        Ok(session)
    }

    /// Revokes the session behind `access_token`.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .request("logout")
            .bearer_auth(access_token)
            .send()
            .await?;

        match response.status() {
            s if s.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AuthError::Rejected {
                status: response.status().as_u16(),
                message: "Session is not valid".to_string(),
            }),
            s => {
                let body = response.text().await.unwrap_or_default();
                Err(AuthError::Upstream {
                    status: s.as_u16(),
                    message: error_message(&body),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Query,
        http::{HeaderMap, StatusCode as AxumStatus},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;

    const USER_ID: &str = "6f1c2e8a-0b7d-4c5e-9a3f-1d2e3f4a5b6c";

    async fn token(
        Query(q): Query<HashMap<String, String>>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (AxumStatus, Json<Value>) {
        if headers.get("apikey").and_then(|v| v.to_str().ok()) != Some("anon") {
            return (AxumStatus::UNAUTHORIZED, Json(json!({ "message": "No API key" })));
        }
        if q.get("grant_type").map(String::as_str) != Some("password") {
            return (AxumStatus::BAD_REQUEST, Json(json!({ "error": "unsupported_grant_type" })));
        }
        if body["password"] != "hunter22" {
            return (
                AxumStatus::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_grant",
                    "error_description": "Invalid login credentials"
                })),
            );
        }
        (
            AxumStatus::OK,
            Json(json!({
                "access_token": "jwt",
                "token_type": "bearer",
                "expires_in": 3600,
                "refresh_token": "refresh",
                "user": { "id": USER_ID, "email": body["email"] }
            })),
        )
    }

    async fn signup(Json(body): Json<Value>) -> Json<Value> {
        Json(json!({ "id": USER_ID, "email": body["email"] }))
    }

    async fn logout(headers: HeaderMap) -> AxumStatus {
        match headers.get("authorization").and_then(|v| v.to_str().ok()) {
            Some("Bearer jwt") => AxumStatus::NO_CONTENT,
            _ => AxumStatus::UNAUTHORIZED,
        }
    }

    async fn spawn_service() -> AuthClient {
        let app = Router::new()
            .route("/auth/v1/token", post(token))
            .route("/auth/v1/signup", post(signup))
            .route("/auth/v1/logout", post(logout));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        AuthClient::new(&format!("http://{addr}/"), "anon".to_string()).unwrap()
    }

    #[test]
    fn test_error_message_prefers_description() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(error_message(body), "Invalid login credentials");
        assert_eq!(error_message(r#"{"msg":"User already registered"}"#), "User already registered");
        assert_eq!(error_message("gateway timeout"), "gateway timeout");
    }

    #[test]
    fn test_sign_up_outcome_distinguishes_session_from_user() {
        let pending: SignUpOutcome =
            serde_json::from_value(json!({ "id": USER_ID, "email": "a@b.co" })).unwrap();
        assert!(matches!(pending, SignUpOutcome::PendingConfirmation(_)));

        let session: SignUpOutcome = serde_json::from_value(json!({
            "access_token": "jwt",
            "user": { "id": USER_ID }
        }))
        .unwrap();
        assert!(matches!(session, SignUpOutcome::Session(_)));
    }

    #[tokio::test]
    async fn test_sign_in_success_returns_session() {
        let client = spawn_service().await;
        let session = client.sign_in("me@example.com", "hunter22").await.unwrap();
        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.user.id.to_string(), USER_ID);
        assert_eq!(session.user.email.as_deref(), Some("me@example.com"));
    }

    #[tokio::test]
    async fn test_sign_in_bad_password_is_rejected() {
        let client = spawn_service().await;
        let err = client.sign_in("me@example.com", "wrong").await.unwrap_err();
        match err {
            AuthError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid login credentials");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_sign_up_pending_confirmation() {
        let client = spawn_service().await;
        let outcome = client.sign_up("new@example.com", "hunter22").await.unwrap();
        assert!(matches!(outcome, SignUpOutcome::PendingConfirmation(u) if u.email.as_deref() == Some("new@example.com")));
    }

    #[tokio::test]
    async fn test_sign_out_with_and_without_valid_token() {
        let client = spawn_service().await;
        client.sign_out("jwt").await.unwrap();
        let err = client.sign_out("stale").await.unwrap_err();
        assert!(matches!(err, AuthError::Rejected { status: 401, .. }));
    }
}
