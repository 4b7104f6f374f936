use log::LevelFilter;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Creates a database connection pool.
///
/// The returned handle is cheap to clone and is meant to be owned by the
/// application state rather than opened per request.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging_level(LevelFilter::Debug);

    Database::connect(options).await
}
