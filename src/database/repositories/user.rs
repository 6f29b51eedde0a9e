//! User repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::user::{User, CreateUserRequest};
use crate::utils::errors::TurnoutError;

const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
#[derive(Debug)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user.
    ///
    /// A concurrent registration of the same email surfaces as a `Conflict`.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, TurnoutError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (full_name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, full_name, email, password_hash, created_at
            "#
        )
        .bind(request.full_name)
        .bind(request.email)
        .bind(request.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                TurnoutError::Conflict("Email is already registered.".to_string())
            }
            _ => TurnoutError::Database(e),
        })?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, TurnoutError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, full_name, email, password_hash, created_at FROM users WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by (normalised) email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, TurnoutError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, full_name, email, password_hash, created_at FROM users WHERE email = $1"
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Count total users
    pub async fn count(&self) -> Result<i64, TurnoutError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
