use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "DECODE_ERROR".to_string(),
        }
    }
}
