//! Helper functions and utilities
//!
//! Input normalisation and parsing shared by the services.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::utils::errors::{Result, TurnoutError};

/// Extensions accepted for uploaded event images
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "heic"];

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Lower-case and trim an email so lookups are case-insensitive
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Trim a submitted field and reject it when absent or blank
pub fn require_field(name: &str, value: Option<&str>) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(TurnoutError::validation(format!("Missing required field: {}", name))),
    }
}

/// Parse the capacity of an event; must be a positive integer
pub fn parse_max_spots(raw: &str) -> Result<i32> {
    let value: i32 = raw
        .trim()
        .parse()
        .map_err(|_| TurnoutError::validation("maxSpots must be a positive integer"))?;

    if value <= 0 {
        return Err(TurnoutError::validation("maxSpots must be a positive integer"));
    }

    Ok(value)
}

/// Parse an event timestamp.
///
/// Accepts RFC 3339 (`2025-06-01T18:30:00Z`, `2025-06-01T18:30:00+02:00`) and
/// offset-less `YYYY-MM-DDTHH:MM[:SS]` values, which are taken as UTC.
pub fn parse_date_time(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(TurnoutError::validation("dateTime must be a valid ISO 8601 timestamp"))
}

/// Lower-cased extension of an uploaded file name, if it is an allowed image type
pub fn image_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}
