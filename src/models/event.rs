//! Event model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::participant::Participant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub user_id: Option<i64>,
    pub creator_name: String,
    pub event_name: String,
    pub location: String,
    pub image: Option<String>,
    pub date_time: DateTime<Utc>,
    pub max_spots: i32,
    pub contact: String,
    pub created_at: DateTime<Utc>,
}

/// An event together with its sign-ups, as returned by the read endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWithParticipants {
    #[serde(flatten)]
    pub event: Event,
    pub participants: Vec<Participant>,
    pub spots_left: i64,
}

impl EventWithParticipants {
    pub fn new(event: Event, participants: Vec<Participant>) -> Self {
        let spots_left = (i64::from(event.max_spots) - participants.len() as i64).max(0);
        Self {
            event,
            participants,
            spots_left,
        }
    }
}

/// Validated input for inserting an event
#[derive(Debug, Clone)]
pub struct CreateEventRequest {
    pub user_id: Option<i64>,
    pub creator_name: String,
    pub event_name: String,
    pub location: String,
    pub image: Option<String>,
    pub date_time: DateTime<Utc>,
    pub max_spots: i32,
    pub contact: String,
}

/// Raw text fields of the event creation form, before validation
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub creator_name: Option<String>,
    pub event_name: Option<String>,
    pub location: Option<String>,
    pub date_time: Option<String>,
    pub max_spots: Option<String>,
    pub contact: Option<String>,
}

impl EventForm {
    /// Record a multipart text field; unknown names are ignored
    pub fn set(&mut self, name: &str, value: String) {
        let slot = match name {
            "creatorName" => &mut self.creator_name,
            "eventName" => &mut self.event_name,
            "location" => &mut self.location,
            "dateTime" => &mut self.date_time,
            "maxSpots" => &mut self.max_spots,
            "contact" => &mut self.contact,
            _ => return,
        };
        *slot = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(max_spots: i32) -> Event {
        Event {
            id: 1,
            user_id: Some(3),
            creator_name: "Grace".to_string(),
            event_name: "Beach cleanup".to_string(),
            location: "North pier".to_string(),
            image: None,
            date_time: Utc::now(),
            max_spots,
            contact: "grace@example.com".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_event_serializes_camel_case() {
        let json = serde_json::to_value(EventWithParticipants::new(sample_event(4), vec![])).unwrap();
        assert_eq!(json["eventName"], "Beach cleanup");
        assert_eq!(json["maxSpots"], 4);
        assert_eq!(json["spotsLeft"], 4);
        assert!(json["participants"].as_array().unwrap().is_empty());
        assert!(json["image"].is_null());
    }

    #[test]
    fn test_form_ignores_unknown_fields() {
        let mut form = EventForm::default();
        form.set("eventName", "Picnic".to_string());
        form.set("userId", "42".to_string());
        assert_eq!(form.event_name.as_deref(), Some("Picnic"));
        assert!(form.creator_name.is_none());
    }
}
