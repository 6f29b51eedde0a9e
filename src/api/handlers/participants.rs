//! Sign-up endpoint

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::api::{error::json_body, AppState};
use crate::middleware::MaybeAuthUser;
use crate::models::participant::SignupRequest;
use crate::utils::errors::Result;

use super::parse_event_id;

/// `POST /api/events/:id/signup`
pub async fn sign_up(
    State(state): State<AppState>,
    Path(id): Path<String>,
    MaybeAuthUser(claims): MaybeAuthUser,
    payload: std::result::Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>)> {
    let event_id = parse_event_id(&id)?;
    let request = json_body(payload)?;

    let confirmation = state
        .services
        .signup_service
        .sign_up(event_id, claims.map(|c| c.user_id), request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Signed up successfully",
            "participant": confirmation.participant,
            "spotsLeft": confirmation.spots_left,
        })),
    ))
}
