use std::sync::Arc;

use axum::{routing::post, Router};

use shared_database::HospitalState;

use crate::handlers;

pub fn booking_routes(state: Arc<HospitalState>) -> Router {
    Router::new()
        .route("/labs/book", post(handlers::book_lab))
        .route("/checkup/book", post(handlers::book_checkup))
        .route("/surgery/book", post(handlers::book_surgery))
        .with_state(state)
}
