use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::ApiError;

// Request surface of the remote proctoring/certification service.
// Use cases and callers depend on this trait, not the concrete HTTP client.
// Dependencies point inwards to the domain layer.
//
// Responses are the backend's JSON bodies passed through untouched; the
// client performs no schema validation on what the service returns.
#[async_trait]
pub trait ProctoringApi: Send + Sync {
    // Store a face reference image for later identity checks against frames.
    async fn register_face(&self, user_id: &str, face_image: Vec<u8>) -> Result<Value, ApiError>;

    // Open a proctoring session for one test attempt. `config` carries
    // backend-defined options (sampling interval, violation thresholds).
    async fn start_session(
        &self,
        session_id: &str,
        user_id: &str,
        test_session_id: &str,
        config: Value,
    ) -> Result<Value, ApiError>;

    // Close a session; frames submitted afterwards are rejected upstream.
    async fn stop_session(&self, session_id: &str) -> Result<Value, ApiError>;

    // Submit one video frame against a live session.
    async fn process_frame(&self, session_id: &str, frame_data: Vec<u8>)
    -> Result<Value, ApiError>;

    // Fetch the current server-side snapshot; no session state is cached locally.
    async fn get_session_status(&self, session_id: &str) -> Result<Value, ApiError>;

    async fn get_active_sessions(&self) -> Result<Value, ApiError>;

    // Persist a completed test attempt summary.
    async fn save_test_session(&self, record: Value) -> Result<Value, ApiError>;

    // Issue a certificate from test outcome data; the response carries the
    // certificate id and its public verification code.
    async fn issue_certificate(&self, request: Value) -> Result<Value, ApiError>;

    async fn get_certificate(&self, certificate_id: &str) -> Result<Value, ApiError>;

    async fn get_user_certificates(&self, user_id: &str) -> Result<Value, ApiError>;

    // Third-party authenticity check by the shareable verification code.
    async fn verify_certificate(&self, verification_code: &str) -> Result<Value, ApiError>;

    async fn get_user_test_sessions(&self, user_id: &str) -> Result<Value, ApiError>;
}
