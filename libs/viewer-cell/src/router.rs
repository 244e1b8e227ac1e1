use std::sync::Arc;

use axum::{routing::get, Router};

use shared_database::ViewerState;

use crate::handlers;

pub fn viewer_routes(state: Arc<ViewerState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/doctors", get(handlers::list_doctors))
        .route("/products", get(handlers::list_products))
        .with_state(state)
}
