use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use mongodb::bson::doc;
use serde_json::{json, Value};

use shared_database::HospitalState;
use shared_models::error::AppError;

use crate::models::{DepartmentQuery, LIST_LIMIT};

const DOCTORS: &str = "doctors";

#[axum::debug_handler]
pub async fn list_doctors(State(state): State<Arc<HospitalState>>) -> Result<Json<Value>, AppError> {
    let doctors = state
        .store
        .find(DOCTORS, doc! {}, LIST_LIMIT)
        .await
        .map_err(|_| AppError::Database("Error fetching doctors".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "count": doctors.len(),
        "data": doctors,
    })))
}

/// Full dump of the doctors collection, no cap.
#[axum::debug_handler]
pub async fn export_doctors(
    State(state): State<Arc<HospitalState>>,
) -> Result<Json<Value>, AppError> {
    let doctors = state
        .store
        .find(DOCTORS, doc! {}, 0)
        .await
        .map_err(|_| AppError::Database("Error exporting doctors".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "count": doctors.len(),
        "data": doctors,
    })))
}

#[axum::debug_handler]
pub async fn doctors_by_department(
    State(state): State<Arc<HospitalState>>,
    Query(query): Query<DepartmentQuery>,
) -> Result<Json<Value>, AppError> {
    let doctors = state
        .store
        .find(DOCTORS, doc! { "department": &query.department }, LIST_LIMIT)
        .await
        .map_err(|_| AppError::Database("Error fetching doctors".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "count": doctors.len(),
        "data": doctors,
    })))
}
