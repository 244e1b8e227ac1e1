use std::sync::Arc;

use axum::{extract::State, Json};
use mongodb::bson::doc;
use serde_json::{json, Value};

use shared_database::ViewerState;
use shared_models::error::AppError;

use crate::models::{ConnectionStatus, LIST_LIMIT};

/// Connectivity report for both configured connections. Never fails; an
/// unreachable database shows up as `Disconnected`.
#[axum::debug_handler]
pub async fn health(State(state): State<Arc<ViewerState>>) -> Json<Value> {
    let hospital = ConnectionStatus::from(state.hospital.ping().await);
    let ecommerce = ConnectionStatus::from(state.ecommerce.ping().await);

    Json(json!({
        "success": true,
        "connections": {
            "hospital": hospital,
            "ecommerce": ecommerce,
        }
    }))
}

#[axum::debug_handler]
pub async fn list_doctors(State(state): State<Arc<ViewerState>>) -> Result<Json<Value>, AppError> {
    let doctors = state
        .hospital
        .find("doctors", doc! {}, LIST_LIMIT)
        .await
        .map_err(|_| AppError::Database("Error fetching doctors".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "count": doctors.len(),
        "data": doctors,
    })))
}

#[axum::debug_handler]
pub async fn list_products(State(state): State<Arc<ViewerState>>) -> Result<Json<Value>, AppError> {
    let products = state
        .ecommerce
        .find("products", doc! {}, LIST_LIMIT)
        .await
        .map_err(|_| AppError::Database("Error fetching products".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "count": products.len(),
        "data": products,
    })))
}
