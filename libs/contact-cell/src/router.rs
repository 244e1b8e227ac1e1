use std::sync::Arc;

use axum::{routing::post, Router};

use shared_database::HospitalState;

use crate::handlers;

pub fn contact_routes(state: Arc<HospitalState>) -> Router {
    Router::new()
        .route("/", post(handlers::send_message))
        .with_state(state)
}
