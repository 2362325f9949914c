//! JSON codec for patch requests.
//!
//! A request record is an object tagged by `kind`:
//!
//! ```json
//! {"kind": "set", "name": "title", "value": "another"}
//! {"kind": "inc", "name": "blog_id", "value": 1}
//! {"kind": "rename", "name": "headline", "from": "title"}
//! ```
//!
//! The optional prior-value assertion uses two fields, because JSON text
//! cannot say "undefined": `"prev": <value>` asserts the property currently
//! holds that value (a JSON `null` asserts an explicit null), while
//! `"prev_absent": true` asserts the property does not exist. The two are
//! mutually exclusive.

use serde_json::{json, Map, Value};

use docpatch_value::FieldValue;

use crate::types::{PatchError, PatchRequest};

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize a request to its JSON record.
pub fn to_json(req: &PatchRequest) -> Value {
    let mut m = Map::new();
    m.insert("kind".into(), json!(req.kind()));
    m.insert("name".into(), json!(req.name()));
    match req {
        PatchRequest::Set { value, .. } => {
            m.insert("value".into(), value.clone());
        }
        PatchRequest::Unset { .. } => {}
        PatchRequest::Inc { amount, .. } => {
            m.insert("value".into(), Value::Number(amount.clone()));
        }
        PatchRequest::Copy { from, .. } | PatchRequest::Rename { from, .. } => {
            m.insert("from".into(), json!(from));
        }
    }
    match req.prev() {
        Some(FieldValue::Value(v)) => {
            m.insert("prev".into(), v.clone());
        }
        Some(FieldValue::Absent) => {
            m.insert("prev_absent".into(), json!(true));
        }
        None => {}
    }
    Value::Object(m)
}

/// Serialize a batch to a JSON array.
pub fn to_json_batch(reqs: &[PatchRequest]) -> Value {
    Value::Array(reqs.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize a JSON record into a request.
///
/// Unrecognized `kind` tags map to [`PatchError::UnknownKind`]; structural
/// problems map to [`PatchError::InvalidRequest`].
pub fn from_json(v: &Value) -> Result<PatchRequest, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidRequest("request must be an object".into()))?;
    let kind = obj
        .get("kind")
        .and_then(|v| v.as_str())
        .ok_or_else(|| PatchError::InvalidRequest("missing 'kind' field".into()))?;
    let name = obj
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| PatchError::InvalidRequest("missing 'name' field".into()))?
        .to_string();
    let prev = decode_prev(obj)?;

    match kind {
        "set" => {
            let value = obj
                .get("value")
                .ok_or_else(|| PatchError::InvalidRequest("set requires 'value'".into()))?
                .clone();
            Ok(PatchRequest::Set { name, value, prev })
        }
        "unset" => Ok(PatchRequest::Unset { name, prev }),
        "inc" => {
            let amount = match obj.get("value") {
                Some(Value::Number(n)) => n.clone(),
                Some(_) => {
                    return Err(PatchError::InvalidRequest(
                        "inc requires a numeric 'value'".into(),
                    ))
                }
                None => return Err(PatchError::InvalidRequest("inc requires 'value'".into())),
            };
            Ok(PatchRequest::Inc { name, amount, prev })
        }
        "copy" => {
            let from = decode_from(obj, "copy")?;
            Ok(PatchRequest::Copy { name, from, prev })
        }
        "rename" => {
            let from = decode_from(obj, "rename")?;
            Ok(PatchRequest::Rename { name, from, prev })
        }
        other => Err(PatchError::UnknownKind(other.to_string())),
    }
}

/// Deserialize a JSON array into a batch.
pub fn from_json_batch(v: &Value) -> Result<Vec<PatchRequest>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::InvalidRequest("batch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}

fn decode_from(obj: &Map<String, Value>, kind: &str) -> Result<String, PatchError> {
    obj.get("from")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| PatchError::InvalidRequest(format!("{kind} requires 'from'")))
}

fn decode_prev(obj: &Map<String, Value>) -> Result<Option<FieldValue>, PatchError> {
    let absent = match obj.get("prev_absent") {
        None => false,
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            return Err(PatchError::InvalidRequest(
                "'prev_absent' must be a boolean".into(),
            ))
        }
    };
    match (obj.get("prev"), absent) {
        (Some(_), true) => Err(PatchError::InvalidRequest(
            "'prev' and 'prev_absent' are mutually exclusive".into(),
        )),
        (Some(v), false) => Ok(Some(FieldValue::Value(v.clone()))),
        (None, true) => Ok(Some(FieldValue::Absent)),
        (None, false) => Ok(None),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
