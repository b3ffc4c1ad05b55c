use std::time::Duration;

use anyhow::Result;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

/// Embed all diesel migrations at compile time
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// URL of a private in-memory database
pub const IN_MEMORY_URL: &str = ":memory:";

/// Type alias for SQLite connection pool
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Create database connection pool and run migrations
///
/// Responsibilities:
/// - Build r2d2 connection pool
/// - Automatically run all pending Diesel migrations
///
/// Every SQLite `:memory:` connection is a separate database, so in-memory
/// pools hold exactly one connection and never reap it.
pub fn init_db_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let builder = Pool::builder().connection_timeout(Duration::from_secs(5));
    let builder = if database_url == IN_MEMORY_URL {
        builder
            .max_size(1)
            .min_idle(Some(1))
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        builder.max_size(4)
    };

    let pool = builder
        .build(manager)
        .map_err(|e| anyhow::anyhow!("Failed to create database pool: {}", e))?;

    run_migrations(&pool)?;

    Ok(pool)
}

/// Run embedded Diesel migrations
///
/// Already applied migrations are skipped, and the SQL itself only creates
/// missing objects, so this is safe to run on every start.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get()?;

    info!("Running database migrations...");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    info!("Database migrations completed");

    Ok(())
}
