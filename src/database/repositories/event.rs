//! Event repository implementation

use std::collections::HashMap;

use sqlx::PgPool;
use chrono::Utc;
use crate::models::event::{Event, EventWithParticipants, CreateEventRequest};
use crate::models::participant::Participant;
use crate::utils::errors::TurnoutError;

const EVENT_COLUMNS: &str =
    "id, user_id, creator_name, event_name, location, image, date_time, max_spots, contact, created_at";

const PARTICIPANT_COLUMNS: &str = "id, event_id, user_id, name, email, phone, created_at";

#[derive(Clone, Debug)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event, TurnoutError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (user_id, creator_name, event_name, location, image, date_time, max_spots, contact, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(request.user_id)
        .bind(request.creator_name)
        .bind(request.event_name)
        .bind(request.location)
        .bind(request.image)
        .bind(request.date_time)
        .bind(request.max_spots)
        .bind(request.contact)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, TurnoutError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID together with its participants
    pub async fn find_with_participants(&self, id: i64) -> Result<Option<EventWithParticipants>, TurnoutError> {
        let Some(event) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let participants = self.get_participants(id).await?;
        Ok(Some(EventWithParticipants::new(event, participants)))
    }

    /// List every event with its participants, soonest first
    pub async fn list_with_participants(&self) -> Result<Vec<EventWithParticipants>, TurnoutError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY date_time ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        if events.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = events.iter().map(|e| e.id).collect();
        let participants = sqlx::query_as::<_, Participant>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participants WHERE event_id = ANY($1) ORDER BY created_at ASC, id ASC"
        ))
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_event: HashMap<i64, Vec<Participant>> = HashMap::new();
        for participant in participants {
            by_event.entry(participant.event_id).or_default().push(participant);
        }

        Ok(events
            .into_iter()
            .map(|event| {
                let participants = by_event.remove(&event.id).unwrap_or_default();
                EventWithParticipants::new(event, participants)
            })
            .collect())
    }

    /// Get event participants
    pub async fn get_participants(&self, event_id: i64) -> Result<Vec<Participant>, TurnoutError> {
        let participants = sqlx::query_as::<_, Participant>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participants WHERE event_id = $1 ORDER BY created_at ASC, id ASC"
        ))
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(participants)
    }

    /// Count total events
    pub async fn count(&self) -> Result<i64, TurnoutError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
