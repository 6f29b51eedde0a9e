//! HTTP handlers

pub mod events;
pub mod health;
pub mod participants;
pub mod users;

use crate::utils::errors::{Result, TurnoutError};

/// Parse an event id path segment.
///
/// Any integer is accepted; ids with no matching row surface as not found.
pub(crate) fn parse_event_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| TurnoutError::validation(format!("Invalid event id: {}", raw)))
}
