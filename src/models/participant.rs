//! Participant model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: i64,
    pub event_id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// Sign-up body as submitted by the client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Validated input for inserting a participant
#[derive(Debug, Clone)]
pub struct RegisterParticipantRequest {
    pub event_id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub reject_duplicate_email: bool,
}

/// Result of the locked capacity check and insert
#[derive(Debug, Clone)]
pub enum SignupOutcome {
    Registered { participant: Participant, spots_left: i64 },
    EventNotFound,
    Full { max_spots: i32 },
    DuplicateEmail,
}
