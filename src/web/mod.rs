pub mod assessments;
pub mod sessions;

use crate::state::SharedState;
use axum::{routing::get, Router};

async fn health() -> &'static str {
    "OK"
}

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/assessments", assessments::router(state.clone()))
        .nest("/sessions", sessions::router(state))
}
