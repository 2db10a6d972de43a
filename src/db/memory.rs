use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{Contact, NewContact};

use super::{ContactStore, StoreError};

/// In-process stand-in for the Postgres store, used by tests.
#[derive(Default)]
pub struct MemoryContactStore {
    inner: Mutex<Inner>,
    unavailable: AtomicBool,
}

#[derive(Default)]
struct Inner {
    rows: Vec<Contact>,
    next_id: i32,
    last_timestamp: Option<DateTime<Utc>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn insert(&self, contact: &NewContact) -> Result<Contact, StoreError> {
        let mut inner = self.lock()?;

        inner.next_id += 1;
        // Clock steps backwards must not reorder submissions.
        let now = Utc::now();
        let timestamp = inner.last_timestamp.map_or(now, |last| last.max(now));
        inner.last_timestamp = Some(timestamp);

        let created = Contact {
            id: inner.next_id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            message: contact.message.clone(),
            timestamp: Some(timestamp),
        };
        inner.rows.push(created.clone());
        Ok(created)
    }

    async fn list_newest_first(&self) -> Result<Vec<Contact>, StoreError> {
        let inner = self.lock()?;
        let mut contacts = inner.rows.clone();
        contacts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(contacts)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Contact>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.rows.iter().find(|c| c.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_contact(name: &str) -> NewContact {
        NewContact {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            message: "hello".to_string(),
        }
    }

    #[tokio::test]
    async fn assigns_increasing_ids_from_one() {
        let store = MemoryContactStore::new();
        let first = store.insert(&new_contact("Ada")).await.unwrap();
        let second = store.insert(&new_contact("Grace")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.timestamp >= first.timestamp);
    }

    #[tokio::test]
    async fn lists_most_recent_first() {
        let store = MemoryContactStore::new();
        for name in ["Ada", "Grace", "Linus"] {
            store.insert(&new_contact(name)).await.unwrap();
        }
        let names: Vec<String> = store
            .list_newest_first()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Linus", "Grace", "Ada"]);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_operation() {
        let store = MemoryContactStore::new();
        store.insert(&new_contact("Ada")).await.unwrap();
        store.set_unavailable(true);

        assert!(matches!(
            store.insert(&new_contact("Grace")).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.list_newest_first().await.is_err());
        assert!(store.find_by_id(1).await.is_err());

        store.set_unavailable(false);
        assert_eq!(store.len(), 1);
    }
}
