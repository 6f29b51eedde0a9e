//! HTTP mapping for application errors.
//!
//! Client errors return their message; server errors are logged with their
//! cause and answered with an opaque message.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::utils::errors::{Result, TurnoutError};
use crate::utils::logging::log_request_error;

/// Message returned for every server-side failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error response body (JSON).
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Error code (for client error handling).
    pub code: String,
}

/// HTTP status for an application error
pub fn status_code(err: &TurnoutError) -> StatusCode {
    match err {
        TurnoutError::Validation(_) => StatusCode::BAD_REQUEST,
        TurnoutError::EventNotFound { .. } => StatusCode::NOT_FOUND,
        TurnoutError::Conflict(_) => StatusCode::CONFLICT,
        TurnoutError::CapacityExceeded { .. } => StatusCode::CONFLICT,
        TurnoutError::Authentication(_) => StatusCode::UNAUTHORIZED,
        TurnoutError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        TurnoutError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for TurnoutError {
    fn into_response(self) -> Response {
        log_request_error(&self);

        let status = status_code(&self);
        let error = if self.is_client_error() {
            self.to_string()
        } else {
            INTERNAL_ERROR_MESSAGE.to_string()
        };

        let body = ErrorResponse {
            error,
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Unwrap a JSON body, turning extractor rejections into validation errors
pub fn json_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| TurnoutError::validation(format!("Invalid JSON body: {}", rejection.body_text())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_code(&TurnoutError::validation("x")), StatusCode::BAD_REQUEST);
        assert_eq!(status_code(&TurnoutError::EventNotFound { event_id: 9 }), StatusCode::NOT_FOUND);
        assert_eq!(status_code(&TurnoutError::Conflict("x".to_string())), StatusCode::CONFLICT);
        assert_eq!(
            status_code(&TurnoutError::CapacityExceeded { event_id: 1, max_spots: 1 }),
            StatusCode::CONFLICT
        );
        assert_eq!(status_code(&TurnoutError::invalid_credentials()), StatusCode::UNAUTHORIZED);
        assert_eq!(status_code(&TurnoutError::RateLimitExceeded), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            status_code(&TurnoutError::Internal("x".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_details_hidden() {
        let response = TurnoutError::Internal("connection string leaked".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, INTERNAL_ERROR_MESSAGE);
        assert_eq!(body.code, "INTERNAL_ERROR");
    }

    #[test]
    fn test_capacity_message() {
        let err = TurnoutError::CapacityExceeded { event_id: 4, max_spots: 10 };
        assert_eq!(err.to_string(), "Event 4 is full (10 spots)");
        assert_eq!(err.code(), "CAPACITY_EXCEEDED");
    }
}
