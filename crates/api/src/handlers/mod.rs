//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers validate input through `trainerhub_core`, delegate to
//! the corresponding repository in `trainerhub_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod subject;
pub mod trainer;

use crate::error::AppError;

/// Fallback for a known path requested with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
