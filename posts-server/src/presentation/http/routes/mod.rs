use axum::{Router, routing::get};

use super::handlers::health::health_handler;
use crate::presentation::AppState;

pub(crate) mod posts;

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .merge(posts::router())
        .with_state(state)
}
