//! # assetdeskd: assetdesk daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars) and initialise logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), then close the pool
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use assetdesk_adapter_http_axum::state::AppState;
use assetdesk_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteAccountRepository, SqliteAssignmentRepository,
    SqliteDepartmentRepository, SqliteDeviceRepository, SqliteEmployeeRepository,
};
use assetdesk_app::services::account_service::AccountService;
use assetdesk_app::services::assignment_service::AssignmentService;
use assetdesk_app::services::department_service::DepartmentService;
use assetdesk_app::services::device_service::DeviceService;
use assetdesk_app::services::employee_service::EmployeeService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database.url.clone(),
        max_connections: config.database.max_connections,
    }
    .build()
    .await?;
    tracing::info!(url = %config.database.url, "database ready");
    let pool = db.pool().clone();

    // Repositories
    let employee_repo = SqliteEmployeeRepository::new(pool.clone());
    let department_repo = SqliteDepartmentRepository::new(pool.clone());
    let device_repo = SqliteDeviceRepository::new(pool.clone());
    let assignment_repo = SqliteAssignmentRepository::new(pool.clone());
    let account_repo = SqliteAccountRepository::new(pool);

    // HTTP
    let state = AppState::new(
        EmployeeService::new(employee_repo),
        DepartmentService::new(department_repo),
        DeviceService::new(device_repo),
        AssignmentService::new(assignment_repo),
        AccountService::new(account_repo),
    );
    let app = assetdesk_adapter_http_axum::router::build(state, &config.server.base_path);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        base_path = %config.server.base_path,
        "assetdeskd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("assetdeskd stopped");

    Ok(())
}

/// Resolve on Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
