pub mod contacts;

use axum::Router;
use axum::routing::{get, post};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/contact", post(contacts::create))
        .route("/api/contacts", get(contacts::list))
        .route("/api/contact/{id}", get(contacts::get))
}
