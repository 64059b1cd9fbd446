//! Database connection bootstrap.

use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

/// Connect with the given profile and owner. Does not run migrations.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile, owner)?;
    connect_with_retry(&database_url).await
}

/// Single startup entrypoint: migrate with owner credentials, then hand back
/// an app-credentialed pool for runtime traffic.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let owner = connect_db(profile.clone(), DbOwner::Owner).await?;
    Migrator::up(&owner, None).await?;
    info!("migrations=applied");
    drop(owner);

    connect_db(profile, DbOwner::App).await
}

/// In-memory SQLite, migrated and ready. The pool is pinned to a single
/// connection: every fresh in-memory connection is its own empty database.
pub async fn connect_sqlite_memory() -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.min_connections(1)
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(2))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    Migrator::up(&conn, None).await?;
    Ok(conn)
}

/// Retry startup connections at a fixed interval; Postgres may still be
/// coming up when the backend container starts.
async fn connect_with_retry(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url);
    opt.min_connections(1)
        .acquire_timeout(Duration::from_secs(2))
        .sqlx_logging(true);

    let mut last_error = None;
    for attempt in 1..=CONNECT_ATTEMPTS {
        match Database::connect(opt.clone()).await {
            Ok(conn) => {
                if attempt > 1 {
                    info!(attempt, "connection_retry=success");
                }
                return Ok(conn);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < CONNECT_ATTEMPTS {
                    warn!(
                        attempt,
                        max_attempts = CONNECT_ATTEMPTS,
                        interval_ms = CONNECT_INTERVAL_MS,
                        "connection_retry=failed"
                    );
                    tokio::time::sleep(Duration::from_millis(CONNECT_INTERVAL_MS)).await;
                }
            }
        }
    }

    Err(match last_error {
        Some(e) => AppError::from(e),
        None => AppError::config("database connection failed with no recorded error"),
    })
}
