#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use folio::config::{Config, Environment};
use folio::db::{ContactStore, MemoryContactStore};

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<MemoryContactStore>,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body to the contact endpoint, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST form-urlencoded data to the contact endpoint, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a valid contact and return the stored record.
    pub async fn create_contact(&self, name: &str, email: &str, message: &str) -> Value {
        let (body, status) = self
            .submit_json(&json!({ "name": name, "email": email, "message": message }))
            .await;
        assert_eq!(status, StatusCode::OK, "create contact failed: {body}");
        body["contact"].clone()
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        environment: Environment::Development,
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/public").to_string(),
        max_body_size: 65_536,
        db_max_connections: 1,
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app backed by an in-memory store.
pub async fn spawn_app() -> TestApp {
    let store = Arc::new(MemoryContactStore::new());
    let dyn_store: Arc<dyn ContactStore> = store.clone();
    let app = folio::build_app(dyn_store, &test_config());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        store,
        client: Client::new(),
    }
}
