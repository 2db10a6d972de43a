use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use serde_json::{Map, Value, json};

use crate::contact::parser;
use crate::error::AppError;
use crate::state::SharedState;

pub async fn create(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    // An unreadable body carries no fields, so it fails validation below.
    let data = parser::parse_body(content_type, &body).unwrap_or_else(|e| {
        tracing::debug!("Unparseable contact body: {e}");
        Value::Object(Map::new())
    });

    let contact = state
        .contacts
        .create(&data)
        .await
        .map_err(|e| AppError::from_service(e, "Failed to save contact"))?;

    Ok(Json(json!({
        "success": true,
        "message": "Contact saved successfully",
        "contact": contact,
    })))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Value>, AppError> {
    let contacts = state
        .contacts
        .list_all()
        .await
        .map_err(|e| AppError::from_service(e, "Failed to retrieve contacts"))?;

    Ok(Json(json!({ "success": true, "contacts": contacts })))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    // Ids outside the integer domain can never match a stored row.
    let id: i32 = id
        .parse()
        .map_err(|_| AppError::NotFound("Contact not found".to_string()))?;

    let contact = state
        .contacts
        .get_by_id(id)
        .await
        .map_err(|e| AppError::from_service(e, "Failed to retrieve contact"))?;

    Ok(Json(json!({ "success": true, "contact": contact })))
}
