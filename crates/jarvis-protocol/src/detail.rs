//! Error bodies returned by the auth backend
//!
//! The backend reports failures as `{"detail": ...}`, but the payload under
//! `detail` changes with the failure: a plain string for domain errors, a list
//! of validation errors each carrying `msg`, or an object with `code` and
//! `reason` when a password is rejected.

use serde_json::Value;

/// Extract a human-readable message from an error body.
///
/// Returns `None` when no known shape is present.
pub fn error_detail(body: &Value) -> Option<String> {
    let detail = body.get("detail")?;

    match detail {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .filter(|msg| !msg.trim().is_empty())
                .collect();

            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        Value::Object(fields) => fields
            .get("reason")
            .or_else(|| fields.get("code"))
            .and_then(Value::as_str)
            .map(String::from),
        _ => None,
    }
}

/// Parse raw bytes as JSON and extract the detail, if any.
pub fn error_detail_from_slice(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| error_detail(&value))
}
