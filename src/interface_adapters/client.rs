use async_trait::async_trait;
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::domain::api::ProctoringApi;
use crate::domain::errors::ApiError;
use crate::domain::ports::TokenProvider;
use crate::frameworks::config;

// Explicit per-operation encoding. Adding a new binary-payload operation
// means constructing a `Multipart` here, never an accidental default.
enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Form),
}

// Thin reqwest client for the remote proctoring/certification service.
// Each operation is a single best-effort request; there is no retry,
// caching, or local session registry.
#[derive(Clone)]
pub struct ProctoringClient {
    http: reqwest::Client,
    api_root: String,
    credentials: Arc<dyn TokenProvider>,
}

impl ProctoringClient {
    // `api_root` is the full request prefix, e.g. `http://host:8000/api/proctoring`.
    pub fn new(api_root: impl Into<String>, credentials: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_root: api_root.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn from_env(credentials: Arc<dyn TokenProvider>) -> Self {
        Self::new(config::api_root(), credentials)
    }

    // Single dispatch point: the credential attach and the body encoding are
    // decided here and nowhere else, so no operation can bypass them.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.api_root, path);
        let mut request = self.http.request(method, url);
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(payload) => request.json(&payload),
            RequestBody::Multipart(form) => request.multipart(form),
        };
        if let Some(token) = self.credentials.bearer_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|err| {
            tracing::warn!(error = %err, path, "proctoring request failed in transport");
            ApiError::RequestFailed {
                status: None,
                body: None,
            }
        })?;

        let status = response.status();
        // Pass the backend body through untouched; absent or non-JSON bodies
        // become null rather than an error.
        let body = response.json::<Value>().await.ok();
        if status.is_success() {
            return Ok(body.unwrap_or(Value::Null));
        }
        Err(ApiError::from_status(status.as_u16(), body))
    }
}

// Reject empty identifiers before any network I/O; session liveness and
// everything else stays the backend's call.
fn require_id(name: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation {
            body: Some(json!({ "message": format!("{name} is required") })),
        });
    }
    Ok(())
}

#[async_trait]
impl ProctoringApi for ProctoringClient {
    async fn register_face(&self, user_id: &str, face_image: Vec<u8>) -> Result<Value, ApiError> {
        require_id("user_id", user_id)?;
        let form = Form::new()
            .text("user_id", user_id.to_string())
            .part("face_image", Part::bytes(face_image).file_name("face_image"));
        self.execute(Method::POST, "/register-face", RequestBody::Multipart(form))
            .await
    }

    async fn start_session(
        &self,
        session_id: &str,
        user_id: &str,
        test_session_id: &str,
        config: Value,
    ) -> Result<Value, ApiError> {
        require_id("session_id", session_id)?;
        require_id("user_id", user_id)?;
        require_id("test_session_id", test_session_id)?;
        let payload = json!({
            "session_id": session_id,
            "user_id": user_id,
            "test_session_id": test_session_id,
            "config": config,
        });
        self.execute(Method::POST, "/start-session", RequestBody::Json(payload))
            .await
    }

    async fn stop_session(&self, session_id: &str) -> Result<Value, ApiError> {
        require_id("session_id", session_id)?;
        self.execute(
            Method::POST,
            &format!("/stop-session/{session_id}"),
            RequestBody::Empty,
        )
        .await
    }

    async fn process_frame(
        &self,
        session_id: &str,
        frame_data: Vec<u8>,
    ) -> Result<Value, ApiError> {
        require_id("session_id", session_id)?;
        let form = Form::new().part("frame_data", Part::bytes(frame_data).file_name("frame_data"));
        self.execute(
            Method::POST,
            &format!("/process-frame/{session_id}"),
            RequestBody::Multipart(form),
        )
        .await
    }

    async fn get_session_status(&self, session_id: &str) -> Result<Value, ApiError> {
        require_id("session_id", session_id)?;
        self.execute(
            Method::GET,
            &format!("/session-status/{session_id}"),
            RequestBody::Empty,
        )
        .await
    }

    async fn get_active_sessions(&self) -> Result<Value, ApiError> {
        self.execute(Method::GET, "/active-sessions", RequestBody::Empty)
            .await
    }

    async fn save_test_session(&self, record: Value) -> Result<Value, ApiError> {
        self.execute(
            Method::POST,
            "/save-test-session",
            RequestBody::Json(record),
        )
        .await
    }

    async fn issue_certificate(&self, request: Value) -> Result<Value, ApiError> {
        self.execute(
            Method::POST,
            "/issue-certificate",
            RequestBody::Json(request),
        )
        .await
    }

    async fn get_certificate(&self, certificate_id: &str) -> Result<Value, ApiError> {
        require_id("certificate_id", certificate_id)?;
        self.execute(
            Method::GET,
            &format!("/certificate/{certificate_id}"),
            RequestBody::Empty,
        )
        .await
    }

    async fn get_user_certificates(&self, user_id: &str) -> Result<Value, ApiError> {
        require_id("user_id", user_id)?;
        self.execute(
            Method::GET,
            &format!("/user-certificates/{user_id}"),
            RequestBody::Empty,
        )
        .await
    }

    async fn verify_certificate(&self, verification_code: &str) -> Result<Value, ApiError> {
        require_id("verification_code", verification_code)?;
        self.execute(
            Method::GET,
            &format!("/verify-certificate/{verification_code}"),
            RequestBody::Empty,
        )
        .await
    }

    async fn get_user_test_sessions(&self, user_id: &str) -> Result<Value, ApiError> {
        require_id("user_id", user_id)?;
        self.execute(
            Method::GET,
            &format!("/test-sessions/{user_id}"),
            RequestBody::Empty,
        )
        .await
    }
}
