pub mod models;
pub mod test_utils;

pub use sea_orm::DbErr;

use sea_orm::{Database, DatabaseConnection};
use std::path::Path;
use util::config::AppConfig;

/// Opens the connection pool for the configured SQLite database.
///
/// Plain file paths get their parent directory created first, since SQLite
/// will not create intermediate directories on its own.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let (path, url) = {
        let config = AppConfig::global();
        (config.database_path.clone(), config.database_url())
    };

    if !path.starts_with("sqlite:") {
        if let Some(parent) = Path::new(&path).parent() {
            std::fs::create_dir_all(parent).map_err(|err| {
                DbErr::Custom(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    err
                ))
            })?;
        }
    }

    let db = Database::connect(&url).await?;
    tracing::info!(database = %path, "Connected to database");
    Ok(db)
}
