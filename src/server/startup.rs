use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

/// Opens the store and brings its schema up to date.
///
/// An in-memory SQLite database exists once per connection, so the pool is pinned to
/// a single connection for `sqlite::memory:` URLs; otherwise the migrations would run
/// against a database the repositories never see.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool with guild, usage, moderation and stats tables
/// - `Err(AppError::DbErr)` - Connecting or migrating failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);
    if is_in_memory(&config.database_url) {
        opt.min_connections(1).max_connections(1);
    }

    let db = Database::connect(opt).await?;
    Migrator::up(&db, None).await?;

    tracing::info!("Store ready at {}", config.database_url);

    Ok(db)
}

fn is_in_memory(url: &str) -> bool {
    url.starts_with("sqlite::memory:") || url.contains("mode=memory")
}
