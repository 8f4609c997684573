//! Request body extractor accepting JSON or form-encoded payloads.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A deserialized request body.
///
/// - `Content-Type: application/json` bodies are parsed as JSON.
/// - Any other content type is parsed as `application/x-www-form-urlencoded`.
/// - A request without a content type yields `T::default()`, as if an empty
///   form had been posted.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match content_type(req.headers()) {
            None => Ok(Payload(T::default())),
            Some(ct) if ct.starts_with("application/json") => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(json_rejection)?;
                Ok(Payload(value))
            }
            Some(_) => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                Ok(Payload(value))
            }
        }
    }
}

fn content_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_ascii_lowercase())
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonSyntaxError(_) => AppError::BadRequest("Invalid JSON format".into()),
        other => AppError::BadRequest(other.body_text()),
    }
}
