use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_database::HospitalState;
use shared_utils::extractor::{auth_middleware, staff_only};

use crate::handlers;

pub fn doctor_routes(state: Arc<HospitalState>) -> Router {
    let public_routes = Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/export", get(handlers::export_doctors));

    // Ordered pipeline: resolve identity first, then gate on role.
    let protected_routes = Router::new()
        .route("/by-department", get(handlers::doctors_by_department))
        .layer(middleware::from_fn(staff_only))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
