//! Turnout
//!
//! Main application entry point

use std::future::Future;

use tokio::net::TcpListener;
use tracing::{error, info};

use turnout::{
    config::Settings,
    create_router,
    database::{create_pool, run_migrations, DatabaseService},
    utils::logging,
    AppState, ServiceFactory,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file writer on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", turnout::info());

    // Initialize database connection
    info!("Connecting to database...");
    let db_pool = create_pool(&settings.database).await?;

    // Run database migrations
    info!("Running database migrations...");
    run_migrations(&db_pool).await?;

    let database_service = DatabaseService::new(db_pool.clone());

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(&settings, database_service);
    services.image_store.ensure_directory().await?;

    let address = settings.bind_address();
    let state = AppState::new(services, settings);
    let app = create_router(state);

    let listener = TcpListener::bind(&address).await?;
    info!(address = %address, "Listening for requests");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        return Err(e.into());
    }

    db_pool.close().await;
    info!("Turnout stopped");
    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await
}

/// Resolve once `signal` fires; if it cannot be listened for, never resolve
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        // Without a signal handler keep serving until the process is killed.
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, finishing in-flight requests");
}
