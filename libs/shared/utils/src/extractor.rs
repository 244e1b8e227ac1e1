use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use shared_database::HospitalState;
use shared_models::auth::User;
use shared_models::error::AppError;

use crate::jwt::validate_token;

/// Roles allowed through the staff gate.
const STAFF_ROLES: [&str; 2] = ["doctor", "viewer"];

/// First stage of the protected-route pipeline: resolve the bearer token to
/// an identity and attach it to the request, or reject with 401.
pub async fn auth_middleware(
    State(state): State<Arc<HospitalState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Auth("Invalid authorization header format".to_string()))?;

    let token = auth_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Auth("Invalid authorization header format".to_string()))?;

    let user = validate_token(token, &state.config.jwt_secret).map_err(AppError::Auth)?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Second stage: only identities carrying a staff role pass. Layered after
/// `auth_middleware`, so a missing identity here means the pipeline was
/// composed wrong and is treated as 401 rather than 403.
pub async fn staff_only(request: Request<Body>, next: Next) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<User>()
        .ok_or_else(|| AppError::Auth("User not found in request extensions".to_string()))?;

    let allowed = user
        .role
        .as_deref()
        .map(|role| STAFF_ROLES.contains(&role))
        .unwrap_or(false);

    if !allowed {
        return Err(AppError::Forbidden(
            "Access restricted to doctor/viewer accounts".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
