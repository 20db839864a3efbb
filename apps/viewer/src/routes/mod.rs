pub mod health;
pub mod page;

use axum::{routing::get, Router};

use crate::render::FRAGMENT_PATH;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_index))
        .route(FRAGMENT_PATH, get(page::handle_fragment))
        .route("/health", get(health::health_handler))
        .with_state(state)
}
