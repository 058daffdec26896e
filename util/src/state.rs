//! Application state container shared across Axum route handlers.
//!
//! Holds the database connection pool. Handlers receive it through Axum's
//! `State<T>` extractor and pass the connection into every service call.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around an established connection pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
