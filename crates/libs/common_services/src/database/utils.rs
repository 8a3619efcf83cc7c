use app_state::DatabaseSettings;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Schema migrations, embedded at compile time from the workspace `migrations` folder.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../../migrations");

/// Build the connection pool described by the database settings.
///
/// The database file is created when it does not exist yet.
pub async fn get_db_pool(db_settings: &DatabaseSettings) -> color_eyre::Result<SqlitePool> {
    info!("Connecting to database.");
    let connect_options = SqliteConnectOptions::from_str(&db_settings.url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(db_settings.max_connections)
        .min_connections(db_settings.min_connections)
        .max_lifetime(Duration::from_secs(db_settings.max_lifetime))
        .idle_timeout(Duration::from_secs(db_settings.idle_timeout))
        .acquire_timeout(Duration::from_secs(db_settings.acquire_timeout))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await?;
    Ok(pool)
}

/// Run pending migrations against the pool.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), crate::database::DbError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations are up to date.");
    Ok(())
}

/// Single-connection in-memory database with the schema applied.
///
/// An in-memory database lives as long as its connection, so the pool never recycles it.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    run_migrations(&pool).await.expect("migrations");
    pool
}
