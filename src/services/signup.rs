//! Participant sign-up service
//!
//! Validates the sign-up form and hands the capacity-checked insert to the
//! participant repository.

use serde::Serialize;
use tracing::info;

use crate::database::repositories::ParticipantRepository;
use crate::models::participant::{Participant, RegisterParticipantRequest, SignupOutcome, SignupRequest};
use crate::utils::errors::{Result, TurnoutError};
use crate::utils::helpers::{is_valid_email, require_field};
use crate::utils::logging::log_event_action;

/// Accepted sign-up
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupConfirmation {
    pub participant: Participant,
    pub spots_left: i64,
}

#[derive(Clone)]
pub struct SignupService {
    participants: ParticipantRepository,
    reject_duplicate_emails: bool,
}

impl SignupService {
    pub fn new(participants: ParticipantRepository, reject_duplicate_emails: bool) -> Self {
        Self {
            participants,
            reject_duplicate_emails,
        }
    }

    /// Sign someone up for an event, optionally linked to an account
    pub async fn sign_up(&self, event_id: i64, user_id: Option<i64>, request: SignupRequest) -> Result<SignupConfirmation> {
        let name = require_field("name", request.name.as_deref())?;
        let email = require_field("email", request.email.as_deref())?;
        let phone = require_field("phone", request.phone.as_deref())?;

        if !is_valid_email(&email) {
            return Err(TurnoutError::validation("Invalid email format."));
        }

        let outcome = self
            .participants
            .register_within_capacity(RegisterParticipantRequest {
                event_id,
                user_id,
                name,
                email,
                phone,
                reject_duplicate_email: self.reject_duplicate_emails,
            })
            .await?;

        match outcome {
            SignupOutcome::Registered { participant, spots_left } => {
                log_event_action(event_id, "signup", user_id, None);
                info!(event_id = event_id, participant_id = participant.id, spots_left = spots_left, "Participant signed up");
                Ok(SignupConfirmation { participant, spots_left })
            }
            SignupOutcome::EventNotFound => Err(TurnoutError::EventNotFound { event_id }),
            SignupOutcome::Full { max_spots } => {
                log_event_action(event_id, "signup_rejected", user_id, Some("event full"));
                Err(TurnoutError::CapacityExceeded { event_id, max_spots })
            }
            SignupOutcome::DuplicateEmail => Err(TurnoutError::Conflict(
                "This email is already signed up for the event.".to_string(),
            )),
        }
    }
}
