use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;

use shared_database::ViewerState;
use viewer_cell::router::viewer_routes;

pub fn create_router(state: Arc<ViewerState>) -> Router {
    Router::new()
        .nest("/api", viewer_routes(state))
        // Single-page viewer front end; index.html is served for "/".
        .fallback_service(ServeDir::new("public"))
}
