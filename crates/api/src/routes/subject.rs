//! Route definitions for subjects.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{method_not_allowed, subject};
use crate::state::AppState;

/// Subject routes. Paths keep their trailing slash.
///
/// ```text
/// POST        /subjects/create/                  -> create
/// GET         /subjects/                         -> list (bare array)
/// GET         /subjects/{subject_id}/            -> get_by_id
/// PUT, POST   /subjects/update/{subject_id}/     -> update
/// DELETE      /subjects/delete/{subject_id}/     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/subjects/create/",
            post(subject::create).fallback(method_not_allowed),
        )
        .route(
            "/subjects/",
            get(subject::list).fallback(method_not_allowed),
        )
        .route(
            "/subjects/{subject_id}/",
            get(subject::get_by_id).fallback(method_not_allowed),
        )
        .route(
            "/subjects/update/{subject_id}/",
            post(subject::update)
                .put(subject::update)
                .fallback(method_not_allowed),
        )
        .route(
            "/subjects/delete/{subject_id}/",
            delete(subject::delete).fallback(method_not_allowed),
        )
}
