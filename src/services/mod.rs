//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod event;
pub mod password;
pub mod signup;
pub mod storage;
pub mod token;

// Re-export commonly used services
pub use auth::{AuthService, Registration};
pub use event::EventService;
pub use password::{Argon2Hasher, PasswordHasher};
pub use signup::{SignupConfirmation, SignupService};
pub use storage::{ImageStore, UploadedImage};
pub use token::{Claims, TokenIssuer};

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::database::DatabaseService;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub event_service: EventService,
    pub signup_service: SignupService,
    pub auth_service: AuthService,
    pub image_store: ImageStore,
    pub database: DatabaseService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings, database: DatabaseService) -> Self {
        Self::with_hasher(settings, database, Arc::new(Argon2Hasher::new()))
    }

    /// Create a ServiceFactory with a specific password hasher
    pub fn with_hasher(settings: &Settings, database: DatabaseService, hasher: Arc<dyn PasswordHasher>) -> Self {
        let image_store = ImageStore::new(&settings.uploads.directory);
        let event_service = EventService::new(database.events.clone(), image_store.clone());
        let signup_service = SignupService::new(
            database.participants.clone(),
            settings.signup.reject_duplicate_emails,
        );
        let auth_service = AuthService::new(database.users.clone(), hasher, &settings.auth);

        Self {
            event_service,
            signup_service,
            auth_service,
            image_store,
            database,
        }
    }

    /// Health check for all services
    pub async fn health_check(&self) -> ServiceHealthStatus {
        let database_healthy = match self.database.health_check().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        };

        ServiceHealthStatus { database_healthy }
    }
}

/// Health status for all services
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub database_healthy: bool,
}

impl ServiceHealthStatus {
    /// Check if all critical services are healthy
    pub fn is_healthy(&self) -> bool {
        self.database_healthy
    }

    /// Get list of unhealthy services
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.database_healthy {
            issues.push("Database connection failed".to_string());
        }

        issues
    }
}
