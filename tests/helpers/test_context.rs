//! Test context for unified test setup
//!
//! Builds settings, services and the HTTP router the same way the binary
//! does, pointed at a test database (or none) and a temporary upload directory.

use axum_test::TestServer;
use tempfile::TempDir;
use turnout::{
    config::Settings,
    create_router,
    database::{create_lazy_pool, DatabaseService},
    services::TokenIssuer,
    AppState, ServiceFactory,
};

use super::database_helper::{init_test_logging, TestDatabase};

pub const TEST_JWT_SECRET: &str = "integration-test-signing-secret";

/// Knobs for a test context
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub login_attempts_per_minute: u32,
    pub reject_duplicate_emails: bool,
    pub max_file_size_bytes: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            login_attempts_per_minute: 100,
            reject_duplicate_emails: false,
            max_file_size_bytes: 1024 * 1024,
        }
    }
}

/// Unified test context that manages all test components
pub struct TestContext {
    pub server: TestServer,
    pub state: AppState,
    pub settings: Settings,
    pub database: Option<TestDatabase>,
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Context backed by a real database, `None` when none is available
    pub async fn with_database() -> Option<Self> {
        Self::with_database_config(TestConfig::default()).await
    }

    pub async fn with_database_config(config: TestConfig) -> Option<Self> {
        let database = TestDatabase::try_new().await?;
        let mut settings = Self::create_test_settings(&config);
        settings.database.url = database.database_url.clone();

        let pool = database.pool.clone();
        Some(Self::build(settings, DatabaseService::new(pool), Some(database)))
    }

    /// Context whose pool never connects; for requests rejected before any query
    pub fn offline() -> Self {
        Self::offline_with_config(TestConfig::default())
    }

    pub fn offline_with_config(config: TestConfig) -> Self {
        let mut settings = Self::create_test_settings(&config);
        settings.database.url = "postgresql://nobody@127.0.0.1:1/unreachable".to_string();
        settings.database.min_connections = 0;
        settings.database.acquire_timeout_seconds = 1;

        let pool = create_lazy_pool(&settings.database).expect("Failed to create lazy pool");
        Self::build(settings, DatabaseService::new(pool), None)
    }

    fn build(mut settings: Settings, database_service: DatabaseService, database: Option<TestDatabase>) -> Self {
        init_test_logging();

        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        settings.uploads.directory = temp_dir.path().join("uploads").to_string_lossy().into_owned();

        let services = ServiceFactory::new(&settings, database_service);
        let state = AppState::new(services, settings.clone());
        let server = TestServer::new(create_router(state.clone())).expect("Failed to start test server");

        Self {
            server,
            state,
            settings,
            database,
            temp_dir,
        }
    }

    fn create_test_settings(config: &TestConfig) -> Settings {
        let mut settings = Settings::default();
        settings.auth.jwt_secret = TEST_JWT_SECRET.to_string();
        settings.auth.login_attempts_per_minute = config.login_attempts_per_minute;
        settings.signup.reject_duplicate_emails = config.reject_duplicate_emails;
        settings.uploads.max_file_size_bytes = config.max_file_size_bytes;
        settings
    }

    /// Bearer credential for an account id, signed with the test secret
    pub fn token_for(&self, user_id: i64, email: &str) -> String {
        TokenIssuer::new(&self.settings.auth)
            .issue(user_id, email)
            .expect("Failed to issue token")
    }

    pub fn db(&self) -> &TestDatabase {
        self.database.as_ref().expect("Context has no database")
    }

    /// Repositories behind the running services
    pub fn repos(&self) -> &DatabaseService {
        &self.state.services.database
    }
}

impl TestContext {
    /// Register an account through the API and return its token
    pub async fn register_user(&self, full_name: &str, email: &str) -> String {
        let response = self
            .server
            .post("/api/users/register")
            .json(&super::test_data::registration(full_name, email, "correct-horse-battery"))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: serde_json::Value = response.json();
        body["token"].as_str().expect("Registration returned no token").to_string()
    }

    /// Create an event through the API and return its id
    pub async fn create_event(&self, token: &str, event_name: &str, max_spots: i32) -> i64 {
        let response = self
            .server
            .post("/api/events")
            .authorization_bearer(token)
            .multipart(super::test_data::event_form(event_name, max_spots))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: serde_json::Value = response.json();
        body["id"].as_i64().expect("Event has no id")
    }
}
