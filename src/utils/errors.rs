//! Error handling for Turnout
//!
//! This module defines the main error type used throughout the application.
//! Client-facing variants carry a message that is safe to return verbatim;
//! everything else is reported to the client as an opaque internal error.

use thiserror::Error;

/// Main error type for Turnout application
#[derive(Error, Debug)]
pub enum TurnoutError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("{0}")]
    Validation(String),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("{0}")]
    Conflict(String),

    #[error("Event {event_id} is full ({max_spots} spots)")]
    CapacityExceeded { event_id: i64, max_spots: i32 },

    #[error("{0}")]
    Authentication(String),

    #[error("Too many attempts, try again later")]
    RateLimitExceeded,

    #[error("Upload exceeds the maximum size of {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Turnout operations
pub type Result<T> = std::result::Result<T, TurnoutError>;

impl TurnoutError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        TurnoutError::Validation(message.into())
    }

    /// The generic credential failure; never says which field was wrong
    pub fn invalid_credentials() -> Self {
        TurnoutError::Authentication("Invalid email or password".to_string())
    }

    /// Whether the caller can fix the request and try again
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TurnoutError::Validation(_)
                | TurnoutError::EventNotFound { .. }
                | TurnoutError::Conflict(_)
                | TurnoutError::CapacityExceeded { .. }
                | TurnoutError::Authentication(_)
                | TurnoutError::RateLimitExceeded
                | TurnoutError::PayloadTooLarge { .. }
        )
    }

    /// Stable machine-readable code for API consumers
    pub fn code(&self) -> &'static str {
        match self {
            TurnoutError::Validation(_) => "VALIDATION_ERROR",
            TurnoutError::EventNotFound { .. } => "NOT_FOUND",
            TurnoutError::Conflict(_) => "CONFLICT",
            TurnoutError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            TurnoutError::Authentication(_) => "UNAUTHORIZED",
            TurnoutError::RateLimitExceeded => "RATE_LIMITED",
            TurnoutError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            _ => "INTERNAL_ERROR",
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TurnoutError::Database(_) => ErrorSeverity::Critical,
            TurnoutError::Migration(_) => ErrorSeverity::Critical,
            TurnoutError::Config(_) => ErrorSeverity::Critical,
            TurnoutError::ConfigLoad(_) => ErrorSeverity::Critical,
            TurnoutError::Authentication(_) => ErrorSeverity::Warning,
            TurnoutError::RateLimitExceeded => ErrorSeverity::Warning,
            TurnoutError::CapacityExceeded { .. } => ErrorSeverity::Info,
            TurnoutError::Validation(_) => ErrorSeverity::Info,
            TurnoutError::EventNotFound { .. } => ErrorSeverity::Info,
            TurnoutError::Conflict(_) => ErrorSeverity::Info,
            TurnoutError::PayloadTooLarge { .. } => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
