use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use booking_cell::router::booking_routes;
use shared_utils::test_utils::TestConfig;

#[tokio::test]
async fn lab_booking_with_non_object_body_is_rejected() {
    let config = TestConfig::default();
    let app = booking_routes(config.to_hospital_state().await);

    let request = Request::builder()
        .method("POST")
        .uri("/labs/book")
        .header("content-type", "application/json")
        .body(Body::from("[1, 2, 3]"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn checkup_booking_without_database_is_a_server_error() {
    let config = TestConfig::default();
    let app = booking_routes(config.to_hospital_state().await);

    let request = Request::builder()
        .method("POST")
        .uri("/checkup/book")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"A","date":"2024-01-01"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn surgery_multipart_without_file_reaches_the_store() {
    let upload_dir = tempfile::tempdir().unwrap();
    let config = TestConfig {
        upload_dir: upload_dir.path().to_str().unwrap().to_string(),
        ..TestConfig::default()
    };
    let app = booking_routes(config.to_hospital_state().await);

    let boundary = "X-BOOKING-TEST-BOUNDARY";
    let body = format!(
        "--{b}\r\ncontent-disposition: form-data; name=\"name\"\r\n\r\nA\r\n\
         --{b}\r\ncontent-disposition: form-data; name=\"surgeryType\"\r\n\r\nKnee\r\n\
         --{b}--\r\n",
        b = boundary
    );

    let request = Request::builder()
        .method("POST")
        .uri("/surgery/book")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    // Fields parse and no upload happens; the disconnected test store makes
    // the final insert fail with 500, and no file appears on disk.
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(std::fs::read_dir(upload_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn surgery_multipart_with_file_writes_the_upload_before_insert() {
    let upload_dir = tempfile::tempdir().unwrap();
    let config = TestConfig {
        upload_dir: upload_dir.path().to_str().unwrap().to_string(),
        ..TestConfig::default()
    };
    let app = booking_routes(config.to_hospital_state().await);

    let boundary = "X-BOOKING-TEST-BOUNDARY";
    let body = format!(
        "--{b}\r\ncontent-disposition: form-data; name=\"name\"\r\n\r\nA\r\n\
         --{b}\r\ncontent-disposition: form-data; name=\"prescription\"; filename=\"report.pdf\"\r\n\
         content-type: application/pdf\r\n\r\n%PDF-1.4\r\n\
         --{b}--\r\n",
        b = boundary
    );

    let request = Request::builder()
        .method("POST")
        .uri("/surgery/book")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    // Insert still fails against the disconnected store, but the file write
    // happened first with the time-qualified name.
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let entries: Vec<_> = std::fs::read_dir(upload_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].ends_with("-report.pdf"));
}
