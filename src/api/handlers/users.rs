//! Account endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::api::{error::json_body, AppState};
use crate::models::user::{LoginRequest, RegisterUserRequest};
use crate::utils::errors::Result;

/// `POST /api/users/register`
pub async fn register(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>)> {
    let request = json_body(payload)?;
    let registration = state.services.auth_service.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User registered successfully",
            "user": registration.user,
            "token": registration.token,
        })),
    ))
}

/// `POST /api/users/login`
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let request = json_body(payload)?;
    let token = state.services.auth_service.login(request).await?;

    Ok(Json(json!({
        "message": "Login successful",
        "token": token,
    })))
}
