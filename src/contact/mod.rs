pub mod fields;
pub mod parser;

use std::sync::Arc;

use serde_json::Value;

use crate::db::{ContactStore, StoreError};
use crate::models::Contact;

#[derive(Debug)]
pub enum ServiceError {
    /// One of `name`, `email` or `message` was missing or empty.
    Validation,
    NotFound(i32),
    Storage(StoreError),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Validation => write!(f, "All fields are required"),
            ServiceError::NotFound(id) => write!(f, "Contact {id} not found"),
            ServiceError::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Storage(err)
    }
}

/// Validates and stores contact submissions, and reads them back.
///
/// Holds no state of its own; every call goes straight to the store.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Store a submission from a parsed request body.
    pub async fn create(&self, data: &Value) -> Result<Contact, ServiceError> {
        let Some(new_contact) = fields::extract(data) else {
            tracing::debug!("Rejected contact submission with missing fields");
            return Err(ServiceError::Validation);
        };

        let contact = self.store.insert(&new_contact).await?;
        tracing::info!(contact_id = contact.id, "Contact saved");
        Ok(contact)
    }

    pub async fn list_all(&self) -> Result<Vec<Contact>, ServiceError> {
        Ok(self.store.list_newest_first().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Contact, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }
}
