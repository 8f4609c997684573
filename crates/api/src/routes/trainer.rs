//! Route definitions for trainers.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{method_not_allowed, trainer};
use crate::state::AppState;

/// Trainer routes. Paths keep their trailing slash.
///
/// ```text
/// POST        /trainer/create/                   -> create
/// GET         /trainers/                         -> list (paginated)
/// PUT, POST   /trainer/update/{trainer_code}/    -> update
/// DELETE      /trainer/delete/{trainer_code}/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/trainer/create/",
            post(trainer::create).fallback(method_not_allowed),
        )
        .route(
            "/trainers/",
            get(trainer::list).fallback(method_not_allowed),
        )
        .route(
            "/trainer/update/{trainer_code}/",
            post(trainer::update)
                .put(trainer::update)
                .fallback(method_not_allowed),
        )
        .route(
            "/trainer/delete/{trainer_code}/",
            delete(trainer::delete).fallback(method_not_allowed),
        )
}
