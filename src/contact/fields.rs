use serde_json::Value;

use crate::models::NewContact;

/// Read a submitted field the way a browser form handler would judge it:
/// absent, `null`, `false`, `0` and `""` count as not provided.
///
/// Whitespace-only strings are kept as submitted.
pub fn field_text(data: &Value, name: &str) -> Option<String> {
    match data.get(name)? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Pull `name`, `email` and `message` out of a submitted body. Returns `None`
/// if any of them is missing.
pub fn extract(data: &Value) -> Option<NewContact> {
    Some(NewContact {
        name: field_text(data, "name")?,
        email: field_text(data, "email")?,
        message: field_text(data, "message")?,
    })
}
