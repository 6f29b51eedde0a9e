//! Database service layer
//!
//! This module bundles the repositories around one shared pool so the
//! persistence handle can be constructed once and passed down.

use crate::database::{DatabasePool, UserRepository, EventRepository, ParticipantRepository};
use crate::utils::errors::TurnoutError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub events: EventRepository,
    pub participants: ParticipantRepository,
    pool: DatabasePool,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            participants: ParticipantRepository::new(pool.clone()),
            pool,
        }
    }

    /// Check that the database answers queries
    pub async fn health_check(&self) -> Result<(), TurnoutError> {
        super::connection::health_check(&self.pool).await
    }
}
