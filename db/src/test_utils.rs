use migration::Migrator;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::path::Path;

/// Fresh in-memory database with every migration applied.
///
/// Each call returns an isolated database, so tests never share state.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Migrated database backed by a file at `path`.
///
/// Unlike the in-memory database this pool hands out several connections, so
/// tasks spawned on a multi-threaded runtime really do write concurrently.
pub async fn setup_file_db(path: &Path) -> DatabaseConnection {
    let url = format!("sqlite://{}?mode=rwc", path.display());
    let db = Database::connect(&url)
        .await
        .expect("Failed to connect to file db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}
