use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use mongodb::bson::{self, doc};
use serde_json::{json, Value};

use shared_database::HospitalState;
use shared_models::error::AppError;

const LAB_APPOINTMENTS: &str = "labappointments";
const CHECKUP_APPOINTMENTS: &str = "checkupappointments";
const SURGERIES: &str = "surgeries";
const MEDICINES: &str = "medicines";

const LIST_LIMIT: i64 = 100;

fn server_error() -> AppError {
    AppError::Database("Server error".to_string())
}

/// Every appointment collection in one response, grouped by kind.
#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<HospitalState>>,
) -> Result<Json<Value>, AppError> {
    let labs = state
        .store
        .find(LAB_APPOINTMENTS, doc! {}, 0)
        .await
        .map_err(|_| server_error())?;
    let checkups = state
        .store
        .find(CHECKUP_APPOINTMENTS, doc! {}, 0)
        .await
        .map_err(|_| server_error())?;
    let surgeries = state
        .store
        .find(SURGERIES, doc! {}, 0)
        .await
        .map_err(|_| server_error())?;

    let count = labs.len() + checkups.len() + surgeries.len();

    Ok(Json(json!({
        "success": true,
        "count": count,
        "data": {
            "labs": labs,
            "checkups": checkups,
            "surgeries": surgeries,
        }
    })))
}

#[axum::debug_handler]
pub async fn list_medicines(
    State(state): State<Arc<HospitalState>>,
) -> Result<Json<Value>, AppError> {
    let medicines = state
        .store
        .find(MEDICINES, doc! {}, LIST_LIMIT)
        .await
        .map_err(|_| server_error())?;

    Ok(Json(json!({
        "success": true,
        "count": medicines.len(),
        "data": medicines,
    })))
}

#[axum::debug_handler]
pub async fn create_medicine(
    State(state): State<Arc<HospitalState>>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let medicine = bson::to_document(&payload)
        .map_err(|_| AppError::BadRequest("Invalid medicine payload".to_string()))?;

    let stored = state
        .store
        .insert(MEDICINES, medicine)
        .await
        .map_err(|_| server_error())?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Medicine saved successfully",
            "data": stored,
        })),
    ))
}
