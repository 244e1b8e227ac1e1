use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use shared_config::AppConfig;
use shared_database::ViewerState;
use viewer_cell::router::viewer_routes;

async fn disconnected_state() -> Arc<ViewerState> {
    let config = AppConfig {
        hospital_db_uri: String::new(),
        ecommerce_db_uri: String::new(),
        mongo_uri: String::new(),
        jwt_secret: "test-secret".to_string(),
        upload_dir: "uploads".to_string(),
        port: None,
    };
    Arc::new(ViewerState::init(config).await)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_disconnected_stores_without_failing() {
    let app = viewer_routes(disconnected_state().await);

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["connections"]["hospital"], "Disconnected");
    assert_eq!(body["connections"]["ecommerce"], "Disconnected");
}

#[tokio::test]
async fn doctor_listing_without_database_is_a_server_error() {
    let app = viewer_routes(disconnected_state().await);

    let request = Request::builder()
        .method("GET")
        .uri("/doctors")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Error fetching doctors");
}

#[tokio::test]
async fn product_listing_without_database_is_a_server_error() {
    let app = viewer_routes(disconnected_state().await);

    let request = Request::builder()
        .method("GET")
        .uri("/products")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Error fetching products");
}
