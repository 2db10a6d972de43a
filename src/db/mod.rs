pub mod contacts;
pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use crate::config::Config;
use crate::models::{Contact, NewContact};

pub use contacts::PgContactStore;
pub use memory::MemoryContactStore;

#[derive(Debug)]
pub enum StoreError {
    Database(sqlx::Error),
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(err) => write!(f, "Database error: {err}"),
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Database(err) => Some(err),
            StoreError::Unavailable(_) => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Persistence backend for contact submissions.
///
/// Implementations assign `id` and `timestamp` on insert and never mutate a
/// stored record afterwards.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert(&self, contact: &NewContact) -> Result<Contact, StoreError>;

    /// All submissions, most recent `timestamp` first.
    async fn list_newest_first(&self) -> Result<Vec<Contact>, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Contact>, StoreError>;
}

/// Build a pool that connects on first use, so an unreachable database does
/// not prevent the process from starting.
pub fn connect_lazy(config: &Config) -> Result<PgPool, sqlx::Error> {
    let options: PgConnectOptions = config.database_url.parse()?;
    let ssl_mode = if config.environment.requires_tls() {
        PgSslMode::Require
    } else {
        PgSslMode::Disable
    };

    Ok(PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy_with(options.ssl_mode(ssl_mode)))
}

/// Create the `contacts` table if it does not exist yet. Safe to run on every
/// startup.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
