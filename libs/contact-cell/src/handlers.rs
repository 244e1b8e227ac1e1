use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use mongodb::bson;
use serde_json::{json, Value};
use tracing::debug;

use shared_database::HospitalState;
use shared_models::error::AppError;

const CONTACTS: &str = "contacts";

#[axum::debug_handler]
pub async fn send_message(
    State(state): State<Arc<HospitalState>>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let message = bson::to_document(&payload)
        .map_err(|_| AppError::BadRequest("Invalid contact payload".to_string()))?;

    state
        .store
        .insert(CONTACTS, message)
        .await
        .map_err(|_| AppError::Database("Server error".to_string()))?;

    debug!("stored contact message");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Message sent successfully",
        })),
    ))
}
