// Environment-driven configuration

pub mod app;
pub mod database;

pub use app::AppConfig;
pub use database::{run_migrations, DatabaseConfig};

use std::env;

/// Read an environment variable, falling back to a default.
pub(crate) fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
