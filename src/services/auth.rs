//! Authentication service implementation
//!
//! This service handles account registration, login, and verification of
//! the bearer credentials issued to clients.

use std::sync::{Arc, OnceLock};

use serde::Serialize;
use tracing::{debug, info};

use crate::config::AuthConfig;
use crate::database::repositories::UserRepository;
use crate::middleware::rate_limit::LoginRateLimiter;
use crate::models::user::{CreateUserRequest, LoginRequest, RegisterUserRequest, UserProfile};
use crate::services::password::PasswordHasher;
use crate::services::token::{Claims, TokenIssuer};
use crate::utils::errors::{Result, TurnoutError};
use crate::utils::helpers::{is_valid_email, normalize_email};
use crate::utils::logging::log_account_action;

/// Outcome of a successful registration
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub user: UserProfile,
    pub token: String,
}

/// Authentication service for accounts and credentials
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    hasher: Arc<dyn PasswordHasher>,
    tokens: TokenIssuer,
    login_limiter: LoginRateLimiter,
    min_password_length: usize,
    // Verified against when the email is unknown so both failure paths cost the same.
    decoy_hash: Arc<OnceLock<String>>,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(users: UserRepository, hasher: Arc<dyn PasswordHasher>, config: &AuthConfig) -> Self {
        Self {
            users,
            hasher,
            tokens: TokenIssuer::new(config),
            login_limiter: LoginRateLimiter::new(config.login_attempts_per_minute),
            min_password_length: config.min_password_length,
            decoy_hash: Arc::new(OnceLock::new()),
        }
    }

    /// Register a new account and issue its first credential
    pub async fn register(&self, request: RegisterUserRequest) -> Result<Registration> {
        let (full_name, email, password) = match (
            request.full_name.as_deref().map(str::trim),
            request.email.as_deref().map(str::trim),
            request.password,
        ) {
            (Some(name), Some(email), Some(password))
                if !name.is_empty() && !email.is_empty() && !password.is_empty() =>
            {
                (name.to_string(), normalize_email(email), password)
            }
            _ => return Err(TurnoutError::validation("All fields are required.")),
        };

        if !is_valid_email(&email) {
            return Err(TurnoutError::validation("Invalid email format."));
        }

        if password.chars().count() < self.min_password_length {
            return Err(TurnoutError::validation(format!(
                "Password must be at least {} characters long.",
                self.min_password_length
            )));
        }

        if self.users.find_by_email(&email).await?.is_some() {
            log_account_action(&email, "register", false);
            return Err(TurnoutError::Conflict("Email is already registered.".to_string()));
        }

        let password_hash = self.hash_password(password).await?;
        let user = self
            .users
            .create(CreateUserRequest {
                full_name,
                email,
                password_hash,
            })
            .await?;

        let token = self.tokens.issue(user.id, &user.email)?;
        info!(user_id = user.id, "New user registered successfully");

        Ok(Registration {
            user: user.into(),
            token,
        })
    }

    /// Check credentials and issue a bearer credential.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, request: LoginRequest) -> Result<String> {
        let (email, password) = match (request.email.as_deref().map(str::trim), request.password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                (normalize_email(email), password)
            }
            _ => return Err(TurnoutError::validation("Email and password are required.")),
        };

        self.login_limiter.check(&email)?;

        let user = self.users.find_by_email(&email).await?;
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());

        let matches = self.verify_password(password, stored_hash).await?;

        match user {
            Some(user) if matches => {
                log_account_action(&email, "login", true);
                self.tokens.issue(user.id, &user.email)
            }
            _ => {
                log_account_action(&email, "login", false);
                Err(TurnoutError::invalid_credentials())
            }
        }
    }

    /// Verify a bearer credential
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        self.tokens.verify(token)
    }

    async fn hash_password(&self, password: String) -> Result<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| TurnoutError::Internal(format!("Password hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: String, stored_hash: Option<String>) -> Result<bool> {
        let hasher = Arc::clone(&self.hasher);
        let decoy = Arc::clone(&self.decoy_hash);

        tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => hasher.verify(&password, &hash),
            None => {
                let decoy = match decoy.get() {
                    Some(hash) => hash.clone(),
                    None => {
                        let hash = hasher.hash("decoy-password-never-matches")?;
                        decoy.get_or_init(|| hash).clone()
                    }
                };
                debug!("Verifying against decoy hash for unknown account");
                hasher.verify(&password, &decoy).map(|_| false)
            }
        })
        .await
        .map_err(|e| TurnoutError::Internal(format!("Password verification task failed: {}", e)))?
    }
}
