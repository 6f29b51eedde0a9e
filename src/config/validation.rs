//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured before the
//! server starts.

use crate::utils::errors::{TurnoutError, Result};
use super::Settings;

/// Shortest accepted credential signing secret, in bytes
pub const MIN_SECRET_LENGTH: usize = 16;

/// Longest accepted credential lifetime (one year)
pub const MAX_TOKEN_TTL_SECONDS: u64 = 365 * 24 * 60 * 60;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_auth_config(&settings.auth)?;
    validate_upload_config(&settings.uploads)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(TurnoutError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.request_timeout_seconds == 0 {
        return Err(TurnoutError::Config(
            "Request timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(TurnoutError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(TurnoutError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(TurnoutError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    Ok(())
}

/// Validate credential configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.jwt_secret.is_empty() {
        return Err(TurnoutError::Config(
            "JWT secret is required (set JWT_SECRET or TURNOUT__AUTH__JWT_SECRET)".to_string()
        ));
    }

    if config.jwt_secret.len() < MIN_SECRET_LENGTH {
        return Err(TurnoutError::Config(
            format!("JWT secret must be at least {} bytes", MIN_SECRET_LENGTH)
        ));
    }

    if config.token_ttl_seconds == 0 {
        return Err(TurnoutError::Config(
            "Token lifetime must be greater than 0".to_string()
        ));
    }

    if config.token_ttl_seconds > MAX_TOKEN_TTL_SECONDS {
        return Err(TurnoutError::Config(
            format!("Token lifetime cannot exceed {} seconds", MAX_TOKEN_TTL_SECONDS)
        ));
    }

    if config.min_password_length == 0 {
        return Err(TurnoutError::Config(
            "Minimum password length must be greater than 0".to_string()
        ));
    }

    if config.login_attempts_per_minute == 0 {
        return Err(TurnoutError::Config(
            "Login attempts per minute must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate upload configuration
fn validate_upload_config(config: &super::UploadConfig) -> Result<()> {
    if config.directory.is_empty() {
        return Err(TurnoutError::Config(
            "Upload directory is required".to_string()
        ));
    }

    if config.max_file_size_bytes == 0 {
        return Err(TurnoutError::Config(
            "Max upload size must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(TurnoutError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(TurnoutError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
