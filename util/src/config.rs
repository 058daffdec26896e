//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton holding the
//! runtime settings of the review server and its bootstrap tools. Values come
//! from a `.env` file (if present) and the process environment. Tests can
//! override individual fields through the per-field setters.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

/// Complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
}

static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every setting has a default, and malformed numeric values fall back to it,
    /// so loading never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: var_or("APP_ENV", "development"),
            project_name: var_or("PROJECT_NAME", "course-reviews"),
            log_level: var_or("LOG_LEVEL", "api=info,services=info,db=info"),
            log_file: var_or("LOG_FILE", "api.log"),
            log_to_stdout: var_or("LOG_TO_STDOUT", "false") == "true",
            database_path: var_or("DATABASE_PATH", "data/reviews.db"),
            host: var_or("HOST", "127.0.0.1"),
            port: parsed_or("PORT", 5000),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Reloads the configuration from the environment, dropping any overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock
                .write()
                .expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    /// `true` unless running with `APP_ENV=production`.
    pub fn is_development(&self) -> bool {
        !self.env.eq_ignore_ascii_case("production")
    }

    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// SQLite connection URL for `database_path`.
    ///
    /// Values that already look like a DSN are passed through untouched; plain
    /// paths get `mode=rwc` so the file is created on first use.
    pub fn database_url(&self) -> String {
        let path = self.database_path.as_str();
        if path.starts_with("sqlite:") {
            path.to_string()
        } else {
            format!("sqlite://{path}?mode=rwc")
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_project_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.project_name = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_file(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_file = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_host(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.host = value.into());
    }

    pub fn set_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }
}
