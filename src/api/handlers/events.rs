//! Event endpoints

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::api::AppState;
use crate::middleware::AuthUser;
use crate::models::event::{Event, EventForm, EventWithParticipants};
use crate::services::storage::UploadedImage;
use crate::utils::errors::{Result, TurnoutError};

use super::parse_event_id;

/// `POST /api/events`, a multipart form with an optional `image` file
pub async fn create_event(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Event>)> {
    let mut multipart = multipart
        .map_err(|rejection| TurnoutError::validation(format!("Expected a multipart form: {}", rejection.body_text())))?;
    let limit = state.settings.uploads.max_file_size_bytes;

    let mut form = EventForm::default();
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| multipart_error(e, limit))? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "image" {
            let file_name = field.file_name().unwrap_or("image.jpg").to_string();
            let bytes = field.bytes().await.map_err(|e| multipart_error(e, limit))?;
            if bytes.len() > limit {
                return Err(TurnoutError::PayloadTooLarge { limit });
            }
            if !bytes.is_empty() {
                image = Some(UploadedImage {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
        } else {
            let value = field.text().await.map_err(|e| multipart_error(e, limit))?;
            form.set(&name, value);
        }
    }

    let event = state
        .services
        .event_service
        .create_event(claims.user_id, form, image)
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// `GET /api/events`
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<EventWithParticipants>>> {
    let events = state.services.event_service.list_events().await?;
    Ok(Json(events))
}

/// `GET /api/events/:id`
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventWithParticipants>> {
    let event_id = parse_event_id(&id)?;
    let event = state.services.event_service.get_event(event_id).await?;
    Ok(Json(event))
}

fn multipart_error(err: MultipartError, limit: usize) -> TurnoutError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        TurnoutError::PayloadTooLarge { limit }
    } else {
        TurnoutError::validation(format!("Invalid multipart form: {}", err.body_text()))
    }
}
