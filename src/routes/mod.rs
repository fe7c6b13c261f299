pub mod index;
pub mod token_handler;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use index::index;
use token_handler::token_handler;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/token/{user}", get(token_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
