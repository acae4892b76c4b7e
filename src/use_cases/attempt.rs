use serde_json::Value;

use crate::domain::api::ProctoringApi;
use crate::domain::errors::ApiError;

// Drives one proctored test attempt against the remote service. Frame
// submission borrows the attempt mutably, so frames belonging to a single
// attempt are awaited in order instead of racing each other; the backend
// gives no ordering guarantee across concurrent requests.
pub struct ProctoredAttempt<A> {
    api: A,
    session_id: String,
    frames_submitted: u64,
}

impl<A: ProctoringApi> ProctoredAttempt<A> {
    pub async fn start(
        api: A,
        session_id: impl Into<String>,
        user_id: &str,
        test_session_id: &str,
        config: Value,
    ) -> Result<Self, ApiError> {
        let session_id = session_id.into();
        api.start_session(&session_id, user_id, test_session_id, config)
            .await?;
        Ok(Self {
            api,
            session_id,
            frames_submitted: 0,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    // Frames acknowledged by the backend so far, from this attempt's view.
    pub fn frames_submitted(&self) -> u64 {
        self.frames_submitted
    }

    pub async fn submit_frame(&mut self, frame_data: Vec<u8>) -> Result<Value, ApiError> {
        let result = self.api.process_frame(&self.session_id, frame_data).await?;
        self.frames_submitted += 1;
        Ok(result)
    }

    pub async fn status(&self) -> Result<Value, ApiError> {
        self.api.get_session_status(&self.session_id).await
    }

    // Consumes the attempt; a finished attempt cannot submit further frames.
    pub async fn finish(self) -> Result<Value, ApiError> {
        self.api.stop_session(&self.session_id).await
    }
}
