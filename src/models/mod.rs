//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod event;
pub mod participant;

// Re-export commonly used models
pub use user::{User, UserProfile, CreateUserRequest, RegisterUserRequest, LoginRequest};
pub use event::{Event, EventWithParticipants, CreateEventRequest, EventForm};
pub use participant::{Participant, RegisterParticipantRequest, SignupRequest, SignupOutcome};
