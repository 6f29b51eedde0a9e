//! Participant repository implementation
//!
//! Sign-ups are the only write path that has to respect an invariant spanning
//! rows: an event never holds more participants than `max_spots`. The check
//! and the insert run in one transaction holding the event row lock, so
//! concurrent sign-ups for the same event are serialised.

use sqlx::PgPool;
use chrono::Utc;
use crate::models::participant::{Participant, RegisterParticipantRequest, SignupOutcome};
use crate::utils::errors::TurnoutError;

#[derive(Clone, Debug)]
pub struct ParticipantRepository {
    pool: PgPool,
}

impl ParticipantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a participant if the event exists and still has room.
    ///
    /// Rejections roll the transaction back, so nothing is written.
    pub async fn register_within_capacity(&self, request: RegisterParticipantRequest) -> Result<SignupOutcome, TurnoutError> {
        let mut tx = self.pool.begin().await?;

        let max_spots: Option<(i32,)> = sqlx::query_as(
            "SELECT max_spots FROM events WHERE id = $1 FOR UPDATE"
        )
        .bind(request.event_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((max_spots,)) = max_spots else {
            tx.rollback().await?;
            return Ok(SignupOutcome::EventNotFound);
        };

        let (taken,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM participants WHERE event_id = $1"
        )
        .bind(request.event_id)
        .fetch_one(&mut *tx)
        .await?;

        if taken >= i64::from(max_spots) {
            tx.rollback().await?;
            return Ok(SignupOutcome::Full { max_spots });
        }

        if request.reject_duplicate_email {
            let (already,): (bool,) = sqlx::query_as(
                "SELECT EXISTS (SELECT 1 FROM participants WHERE event_id = $1 AND LOWER(email) = LOWER($2))"
            )
            .bind(request.event_id)
            .bind(&request.email)
            .fetch_one(&mut *tx)
            .await?;

            if already {
                tx.rollback().await?;
                return Ok(SignupOutcome::DuplicateEmail);
            }
        }

        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (event_id, user_id, name, email, phone, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, event_id, user_id, name, email, phone, created_at
            "#
        )
        .bind(request.event_id)
        .bind(request.user_id)
        .bind(request.name)
        .bind(request.email)
        .bind(request.phone)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(SignupOutcome::Registered {
            participant,
            spots_left: i64::from(max_spots) - taken - 1,
        })
    }

    /// Get participant count for event
    pub async fn count_for_event(&self, event_id: i64) -> Result<i64, TurnoutError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM participants WHERE event_id = $1"
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    /// Count all participants
    pub async fn count(&self) -> Result<i64, TurnoutError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM participants")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
