pub mod health;
pub mod subject;
pub mod trainer;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree (everything except `/health`).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(subject::router())
        .merge(trainer::router())
}
