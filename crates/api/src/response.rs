//! Shared response envelope types for API handlers.
//!
//! Responses use a `{ "status": "success" | "error", "message": ..., ... }`
//! envelope, with the payload's own keys (`subject`, `trainer`, `trainers`,
//! ...) flattened alongside. Use [`ApiResponse`] instead of ad-hoc
//! `serde_json::json!` to get compile-time type safety and consistent
//! serialization.

use serde::Serialize;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// Standard status envelope around a flattened payload.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::success(SubjectPayload { subject }).with_message("Subject created successfully!")))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T = NoPayload> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

/// Payload for envelopes that carry only a status and message.
#[derive(Debug, Default, Serialize)]
pub struct NoPayload {}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(payload: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: None,
            payload,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<NoPayload> {
    /// A success envelope carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        ApiResponse::success(NoPayload {}).with_message(message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            message: Some(message.into()),
            payload: NoPayload {},
        }
    }
}
