use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact-form submission. Append-only once written.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    /// `None` only for rows written without the column default.
    pub timestamp: Option<DateTime<Utc>>,
}

/// A validated submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}
