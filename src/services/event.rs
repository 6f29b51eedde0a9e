//! Event service implementation
//!
//! Creation validates the submitted form, stores an optional image and
//! persists the event. Reads always include the participant list.

use tracing::{debug, warn};

use crate::database::repositories::EventRepository;
use crate::models::event::{CreateEventRequest, Event, EventForm, EventWithParticipants};
use crate::services::storage::{ImageStore, UploadedImage};
use crate::utils::errors::{Result, TurnoutError};
use crate::utils::helpers::{parse_date_time, parse_max_spots, require_field};
use crate::utils::logging::log_event_action;

#[derive(Clone)]
pub struct EventService {
    events: EventRepository,
    images: ImageStore,
}

impl EventService {
    pub fn new(events: EventRepository, images: ImageStore) -> Self {
        Self { events, images }
    }

    /// Check a creation form without touching storage
    pub fn validate_form(form: &EventForm) -> Result<ValidatedEvent> {
        Ok(ValidatedEvent {
            creator_name: require_field("creatorName", form.creator_name.as_deref())?,
            event_name: require_field("eventName", form.event_name.as_deref())?,
            location: require_field("location", form.location.as_deref())?,
            date_time: parse_date_time(&require_field("dateTime", form.date_time.as_deref())?)?,
            max_spots: parse_max_spots(&require_field("maxSpots", form.max_spots.as_deref())?)?,
            contact: require_field("contact", form.contact.as_deref())?,
        })
    }

    /// Create an event owned by `creator_id`
    pub async fn create_event(&self, creator_id: i64, form: EventForm, image: Option<UploadedImage>) -> Result<Event> {
        let valid = Self::validate_form(&form)?;

        let image_path = match &image {
            Some(image) => Some(self.images.save(image).await?),
            None => None,
        };

        let request = CreateEventRequest {
            user_id: Some(creator_id),
            creator_name: valid.creator_name,
            event_name: valid.event_name,
            location: valid.location,
            image: image_path.clone(),
            date_time: valid.date_time,
            max_spots: valid.max_spots,
            contact: valid.contact,
        };

        match self.events.create(request).await {
            Ok(event) => {
                log_event_action(event.id, "create", Some(creator_id), image_path.as_deref());
                Ok(event)
            }
            Err(e) => {
                if let Some(path) = image_path {
                    warn!(image = %path, "Event insert failed, removing stored image");
                    self.images.remove(&path).await;
                }
                Err(e)
            }
        }
    }

    /// All events with their participants
    pub async fn list_events(&self) -> Result<Vec<EventWithParticipants>> {
        let events = self.events.list_with_participants().await?;
        debug!(count = events.len(), "Listed events");
        Ok(events)
    }

    /// One event with its participants
    pub async fn get_event(&self, event_id: i64) -> Result<EventWithParticipants> {
        self.events
            .find_with_participants(event_id)
            .await?
            .ok_or(TurnoutError::EventNotFound { event_id })
    }
}

/// Event fields after validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEvent {
    pub creator_name: String,
    pub event_name: String,
    pub location: String,
    pub date_time: chrono::DateTime<chrono::Utc>,
    pub max_spots: i32,
    pub contact: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn complete_form() -> EventForm {
        EventForm {
            creator_name: Some("Grace".to_string()),
            event_name: Some(" Beach cleanup ".to_string()),
            location: Some("North pier".to_string()),
            date_time: Some("2030-05-04T09:00:00.000Z".to_string()),
            max_spots: Some("25".to_string()),
            contact: Some("grace@example.com".to_string()),
        }
    }

    #[test]
    fn test_valid_form() {
        let valid = EventService::validate_form(&complete_form()).unwrap();
        assert_eq!(valid.event_name, "Beach cleanup");
        assert_eq!(valid.max_spots, 25);
    }

    #[test]
    fn test_each_field_required() {
        let clears: [fn(&mut EventForm); 6] = [
            |f| f.creator_name = None,
            |f| f.event_name = None,
            |f| f.location = Some("   ".to_string()),
            |f| f.date_time = None,
            |f| f.max_spots = Some(String::new()),
            |f| f.contact = None,
        ];

        for clear in clears {
            let mut form = complete_form();
            clear(&mut form);
            assert_matches!(EventService::validate_form(&form), Err(TurnoutError::Validation(_)));
        }
    }

    #[test]
    fn test_malformed_values() {
        let mut form = complete_form();
        form.max_spots = Some("0".to_string());
        assert!(EventService::validate_form(&form).is_err());

        let mut form = complete_form();
        form.date_time = Some("soon".to_string());
        assert!(EventService::validate_form(&form).is_err());
    }
}
