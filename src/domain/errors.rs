use serde_json::Value;
use std::fmt;

// Failure taxonomy for calls against the proctoring service. Classified
// variants keep the backend's response body untouched when one was readable,
// so the UI layer decides user-visible messaging.
#[derive(Debug)]
pub enum ApiError {
    // Transport failure (`status: None`) or a non-2xx response with no
    // closer classification.
    RequestFailed {
        status: Option<u16>,
        body: Option<Value>,
    },
    Unauthorized {
        body: Option<Value>,
    },
    // Malformed payload, rejected by the backend (400) or by the local
    // empty-identifier guard before any request is sent.
    Validation {
        body: Option<Value>,
    },
    NotFound {
        body: Option<Value>,
    },
    Conflict {
        body: Option<Value>,
    },
    // The session stopped accepting frames.
    Expired {
        body: Option<Value>,
    },
}

impl ApiError {
    // Classify a non-2xx response by its status code.
    pub fn from_status(status: u16, body: Option<Value>) -> Self {
        match status {
            400 => ApiError::Validation { body },
            401 => ApiError::Unauthorized { body },
            404 => ApiError::NotFound { body },
            409 => ApiError::Conflict { body },
            410 => ApiError::Expired { body },
            _ => ApiError::RequestFailed {
                status: Some(status),
                body,
            },
        }
    }

    // Backend response body, when one was captured.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::RequestFailed { body, .. }
            | ApiError::Unauthorized { body }
            | ApiError::Validation { body }
            | ApiError::NotFound { body }
            | ApiError::Conflict { body }
            | ApiError::Expired { body } => body.as_ref(),
        }
    }

    fn backend_message(&self) -> Option<&str> {
        self.body()?.get("message")?.as_str()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed {
                status: Some(status),
                ..
            } => write!(f, "request failed with status {status}")?,
            ApiError::RequestFailed { status: None, .. } => {
                write!(f, "request failed before a response arrived")?
            }
            ApiError::Unauthorized { .. } => write!(f, "unauthorized")?,
            ApiError::Validation { .. } => write!(f, "invalid request payload")?,
            ApiError::NotFound { .. } => write!(f, "resource not found")?,
            ApiError::Conflict { .. } => write!(f, "conflicting resource state")?,
            ApiError::Expired { .. } => write!(f, "session no longer active")?,
        }
        if let Some(message) = self.backend_message() {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
