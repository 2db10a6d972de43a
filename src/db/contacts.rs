use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Contact, NewContact};

use super::{ContactStore, StoreError};

#[derive(Clone)]
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn insert(&self, contact: &NewContact) -> Result<Contact, StoreError> {
        let created = sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (name, email, message)
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.message)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn list_newest_first(&self) -> Result<Vec<Contact>, StoreError> {
        let contacts = sqlx::query_as::<_, Contact>(
            "SELECT * FROM contacts ORDER BY timestamp DESC NULLS LAST, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(contacts)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Contact>, StoreError> {
        let contact = sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(contact)
    }
}
