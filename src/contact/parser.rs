use serde_json::{Map, Value};

/// Parse a request body based on its Content-Type header.
///
/// JSON and url-encoded form bodies are both accepted, matching what the
/// portfolio's contact form and `fetch` clients send.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, String> {
    let ct = content_type.unwrap_or("");

    if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)
    } else {
        // Try JSON first, then form-urlencoded
        serde_json::from_slice(body)
            .or_else(|_| parse_form_urlencoded(body))
            .map_err(|e| format!("Unable to parse body: {e}"))
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body_str.as_bytes()) {
        map.insert(k.into_owned(), Value::String(v.into_owned()));
    }
    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_json_body() {
        let value = parse_body(Some("application/json"), br#"{"name":"Ada"}"#).unwrap();
        assert_eq!(value, json!({ "name": "Ada" }));
    }

    #[test]
    fn parses_form_body() {
        let value = parse_body(
            Some("application/x-www-form-urlencoded"),
            b"name=Ada+Lovelace&email=ada%40x.com",
        )
        .unwrap();
        assert_eq!(value, json!({ "name": "Ada Lovelace", "email": "ada@x.com" }));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_body(Some("application/json"), b"{name:").is_err());
    }

    #[test]
    fn sniffs_body_without_content_type() {
        let json_value = parse_body(None, br#"{"message":"hi"}"#).unwrap();
        assert_eq!(json_value["message"], "hi");

        let form_value = parse_body(None, b"message=hi").unwrap();
        assert_eq!(form_value["message"], "hi");
    }
}
