use std::sync::Arc;

use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use mongodb::bson::{doc, DateTime};
use rand::Rng;
use serde_json::{json, Value};
use tracing::{debug, info};

use shared_database::HospitalState;
use shared_models::auth::{LoginRequest, RegisterRequest, TokenResponse, User};
use shared_models::error::AppError;
use shared_utils::{jwt, password};

const USERS: &str = "users";
const OTPS: &str = "otps";

fn server_error() -> AppError {
    AppError::Database("Server error".to_string())
}

fn invalid_credentials() -> AppError {
    // One message for both unknown email and wrong password.
    AppError::Auth("Invalid email or password".to_string())
}

#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<HospitalState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let existing = state
        .store
        .find_one(USERS, doc! { "email": &request.email })
        .await
        .map_err(|_| server_error())?;

    if existing.is_some() {
        return Err(AppError::Conflict("User already exists".to_string()));
    }

    let hashed = password::hash_password(&request.password)
        .map_err(|_| AppError::Internal("Failed to hash password".to_string()))?;

    let user = doc! {
        "email": &request.email,
        "password": hashed,
        "name": request.name.clone().unwrap_or_default(),
        "role": "patient",
        "created_at": DateTime::now(),
    };

    state
        .store
        .insert(USERS, user)
        .await
        .map_err(|_| server_error())?;

    info!("registered new user {}", request.email);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "User registered successfully",
        })),
    ))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<HospitalState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user = state
        .store
        .find_one(USERS, doc! { "email": &request.email })
        .await
        .map_err(|_| server_error())?
        .ok_or_else(invalid_credentials)?;

    let hash = user.get_str("password").map_err(|_| invalid_credentials())?;
    let verified = password::verify_password(&request.password, hash)
        .map_err(|_| AppError::Internal("Password verification failed".to_string()))?;

    if !verified {
        return Err(invalid_credentials());
    }

    let user_id = user
        .get_object_id("_id")
        .map(|id| id.to_hex())
        .map_err(|_| AppError::Internal("Stored user has no id".to_string()))?;

    let token = jwt::create_token(
        &user_id,
        user.get_str("email").ok(),
        user.get_str("name").ok(),
        user.get_str("role").ok(),
        &state.config.jwt_secret,
    )
    .map_err(AppError::Internal)?;

    debug!("issued token for user {}", user_id);

    Ok(Json(TokenResponse {
        success: true,
        token,
    }))
}

/// Records a verification code for the logged-in account. Delivery transport
/// is out of scope; the code only lives in the `otps` collection.
#[axum::debug_handler]
pub async fn send_verify_otp(
    State(state): State<Arc<HospitalState>>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let otp: u32 = rand::thread_rng().gen_range(100_000..1_000_000);

    let record = doc! {
        "user_id": &user.id,
        "email": user.email.clone().unwrap_or_default(),
        "otp": otp.to_string(),
        "created_at": DateTime::now(),
    };

    state
        .store
        .insert(OTPS, record)
        .await
        .map_err(|_| server_error())?;

    debug!("verification OTP recorded for user {}", user.id);

    Ok(Json(json!({
        "success": true,
        "message": "Verification OTP sent",
    })))
}

/// Tokens are stateless; logout is an acknowledgement and the token simply
/// ages out at its expiry.
#[axum::debug_handler]
pub async fn logout(Extension(user): Extension<User>) -> Json<Value> {
    info!("user {} logged out", user.id);

    Json(json!({
        "success": true,
        "message": "Logged out successfully",
    }))
}
