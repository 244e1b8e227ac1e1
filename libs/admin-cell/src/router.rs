use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_database::HospitalState;
use shared_utils::extractor::{auth_middleware, staff_only};

use crate::handlers;

/// Everything under /api/admin goes through the full gate pipeline.
pub fn admin_routes(state: Arc<HospitalState>) -> Router {
    Router::new()
        .route("/appointments", get(handlers::list_appointments))
        .route(
            "/medicines",
            get(handlers::list_medicines).post(handlers::create_medicine),
        )
        .layer(middleware::from_fn(staff_only))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
}
