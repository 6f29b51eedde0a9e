//! Turnout
//!
//! A REST backend for publishing community events and collecting participant
//! sign-ups against a fixed number of spots. Accounts authenticate with
//! bearer tokens; event images are stored on local disk.

pub mod api;
pub mod config;
pub mod database;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, TurnoutError};

// Re-export main components for easy access
pub use api::{create_router, AppState};
pub use database::DatabaseService;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
