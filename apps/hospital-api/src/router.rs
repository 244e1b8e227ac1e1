use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use admin_cell::router::admin_routes;
use auth_cell::router::auth_routes;
use booking_cell::router::booking_routes;
use contact_cell::router::contact_routes;
use doctor_cell::router::doctor_routes;
use shared_database::HospitalState;

use crate::docs;

pub fn create_router(state: Arc<HospitalState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Backend is running successfully!" }))
        .route("/docs", get(docs::api_docs))
        .nest("/api/auth", auth_routes(state.clone()))
        .nest("/api/doctors", doctor_routes(state.clone()))
        .nest("/api/contact", contact_routes(state.clone()))
        .nest("/api/admin", admin_routes(state.clone()))
        .nest("/api", booking_routes(state.clone()))
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
}
