use std::sync::Arc;

use axum::{
    extract::{Json, Multipart, State},
    http::StatusCode,
};
use mongodb::bson;
use serde_json::{json, Value};
use tracing::debug;

use shared_database::HospitalState;
use shared_models::error::AppError;

use crate::models::{SurgeryBooking, PRESCRIPTION_FIELD};
use crate::services::upload;

const LAB_APPOINTMENTS: &str = "labappointments";
const CHECKUP_APPOINTMENTS: &str = "checkupappointments";
const SURGERIES: &str = "surgeries";

fn server_error() -> AppError {
    AppError::Database("Server error".to_string())
}

/// Persist the booking body verbatim; no field validation beyond what the
/// store accepts.
#[axum::debug_handler]
pub async fn book_lab(
    State(state): State<Arc<HospitalState>>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    debug!("lab booking data: {}", payload);

    let booking = bson::to_document(&payload)
        .map_err(|_| AppError::BadRequest("Invalid booking payload".to_string()))?;

    state
        .store
        .insert(LAB_APPOINTMENTS, booking)
        .await
        .map_err(|_| server_error())?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Appointment booked successfully!",
        })),
    ))
}

#[axum::debug_handler]
pub async fn book_checkup(
    State(state): State<Arc<HospitalState>>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let booking = bson::to_document(&payload)
        .map_err(|_| AppError::BadRequest("Invalid booking payload".to_string()))?;

    state
        .store
        .insert(CHECKUP_APPOINTMENTS, booking)
        .await
        .map_err(|_| server_error())?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Appointment booked successfully!",
        })),
    ))
}

/// Multipart booking with an optional `prescription` file. A failed disk
/// write aborts the whole booking; no surgery document is created.
#[axum::debug_handler]
pub async fn book_surgery(
    State(state): State<Arc<HospitalState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let mut booking = SurgeryBooking::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("Invalid multipart payload".to_string()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == PRESCRIPTION_FIELD {
            let original = field
                .file_name()
                .map(str::to_owned)
                .unwrap_or_else(|| PRESCRIPTION_FIELD.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|_| AppError::BadRequest("Invalid multipart payload".to_string()))?;

            if !bytes.is_empty() {
                let stored = upload::save_prescription(&state.config.upload_dir, &original, &bytes)
                    .await
                    .map_err(|err| {
                        tracing::error!("prescription upload failed: {}", err);
                        AppError::Internal("Server error".to_string())
                    })?;
                booking.prescription_file_name = Some(stored);
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|_| AppError::BadRequest("Invalid multipart payload".to_string()))?;
            booking.set_field(&name, value);
        }
    }

    let document = booking
        .to_document()
        .map_err(|_| AppError::Internal("Server error".to_string()))?;

    state
        .store
        .insert(SURGERIES, document)
        .await
        .map_err(|_| server_error())?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Surgery appointment booked successfully",
        })),
    ))
}
