//! Raw request-record validation.
//!
//! Validates patch request records (as `serde_json::Value` maps) before
//! decoding, so callers can reject untrusted input early with an error
//! naming the offending record.

use serde_json::{Map, Value};

// ── Error ──────────────────────────────────────────────────────────────────

/// Error returned by validation functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ValidationError {}

fn err(msg: &str) -> ValidationError {
    ValidationError(msg.to_string())
}

// ── Public API ─────────────────────────────────────────────────────────────

/// Validate a batch of raw request records.
///
/// Errors include the index of the failing record:
/// `"Error in request [index = N] (reason)."`.
pub fn validate_requests(reqs: &Value) -> Result<(), ValidationError> {
    let arr = reqs.as_array().ok_or_else(|| err("Not an array."))?;
    if arr.is_empty() {
        return Err(err("Empty request batch."));
    }
    for (i, req) in arr.iter().enumerate() {
        validate_request(req).map_err(|e| {
            ValidationError(format!("Error in request [index = {}] ({}).", i, e.0))
        })?;
    }
    Ok(())
}

/// Validate a single request record.
pub fn validate_request(req: &Value) -> Result<(), ValidationError> {
    let map = req.as_object().ok_or_else(|| err("REQUEST_INVALID"))?;

    let name = map.get("name").ok_or_else(|| err("NAME_INVALID"))?;
    let name_str = name.as_str().ok_or_else(|| err("NAME_INVALID"))?;
    if name_str.is_empty() {
        return Err(err("NAME_EMPTY"));
    }

    validate_prev(map)?;

    let kind = map.get("kind").and_then(|v| v.as_str()).unwrap_or("");
    match kind {
        "set" => validate_has_value(map),
        "unset" => Ok(()),
        "inc" => validate_numeric_value(map),
        "copy" | "rename" => validate_from(map),
        _ => Err(err("KIND_UNKNOWN")),
    }
}

// ── Field validators ───────────────────────────────────────────────────────

fn validate_prev(map: &Map<String, Value>) -> Result<(), ValidationError> {
    if let Some(pa) = map.get("prev_absent") {
        if !pa.is_boolean() {
            return Err(err("Expected \"prev_absent\" to be a boolean."));
        }
        if pa.as_bool() == Some(true) && map.contains_key("prev") {
            return Err(err("Cannot assert both \"prev\" and \"prev_absent\"."));
        }
    }
    Ok(())
}

fn validate_has_value(map: &Map<String, Value>) -> Result<(), ValidationError> {
    if !map.contains_key("value") {
        return Err(err("VALUE_MISSING"));
    }
    Ok(())
}

fn validate_numeric_value(map: &Map<String, Value>) -> Result<(), ValidationError> {
    let val = map.get("value").ok_or_else(|| err("VALUE_MISSING"))?;
    if !val.is_number() {
        return Err(err("Value must be a number."));
    }
    Ok(())
}

fn validate_from(map: &Map<String, Value>) -> Result<(), ValidationError> {
    let from = map.get("from").ok_or_else(|| err("FROM_INVALID"))?;
    let from_str = from.as_str().ok_or_else(|| err("FROM_INVALID"))?;
    if from_str.is_empty() {
        return Err(err("FROM_EMPTY"));
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
