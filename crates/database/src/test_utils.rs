use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// Fresh in-memory SQLite database with every migration applied
pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    db
}
