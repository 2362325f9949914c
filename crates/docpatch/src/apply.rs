//! Batch application: prior-value checks and per-kind mutation.

use serde_json::{Map, Number, Value};

use docpatch_value::{compare, resolve, FieldValue};

use crate::types::{ApplyBatchOptions, BatchResult, PatchError, PatchRequest, RequestResult};

// ── Per-kind applicators ──────────────────────────────────────────────────

fn apply_set(obj: &mut Map<String, Value>, name: &str, value: &Value) -> Option<Value> {
    obj.insert(name.to_string(), value.clone())
}

fn apply_unset(obj: &mut Map<String, Value>, name: &str) -> Option<Value> {
    // shift_remove keeps the remaining keys in their original order; plain
    // remove would swap the last entry into the hole.
    obj.shift_remove(name)
}

fn apply_inc(
    obj: &mut Map<String, Value>,
    name: &str,
    amount: &Number,
) -> Result<Option<Value>, PatchError> {
    let sum = match resolve(obj, name) {
        None => amount.clone(),
        Some(Value::Number(n)) => {
            add_numbers(n, amount).ok_or_else(|| PatchError::NotANumber(name.to_string()))?
        }
        Some(_) => return Err(PatchError::NotANumber(name.to_string())),
    };
    Ok(obj.insert(name.to_string(), Value::Number(sum)))
}

fn apply_copy(
    obj: &mut Map<String, Value>,
    name: &str,
    from: &str,
) -> Result<Option<Value>, PatchError> {
    let value = resolve(obj, from)
        .cloned()
        .ok_or_else(|| PatchError::NotFound(from.to_string()))?;
    Ok(obj.insert(name.to_string(), value))
}

fn apply_rename(
    obj: &mut Map<String, Value>,
    name: &str,
    from: &str,
) -> Result<Option<Value>, PatchError> {
    let value = obj
        .shift_remove(from)
        .ok_or_else(|| PatchError::NotFound(from.to_string()))?;
    Ok(obj.insert(name.to_string(), value))
}

/// Integer-preserving addition: i64/u64 sums stay integral, with checked
/// overflow falling back to float arithmetic. Returns `None` when the sum
/// is not representable as a JSON number.
fn add_numbers(a: &Number, b: &Number) -> Option<Number> {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        if let Some(sum) = x.checked_add(y) {
            return Some(Number::from(sum));
        }
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        if let Some(sum) = x.checked_add(y) {
            return Some(Number::from(sum));
        }
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => Number::from_f64(x + y),
        _ => None,
    }
}

// ── Coordinator ───────────────────────────────────────────────────────────

/// Apply a single request to the document (in-place mutation).
///
/// Runs the prior-value check first, then dispatches on the request kind.
/// Returns the value the request replaced or removed, if any.
pub fn apply_request(
    obj: &mut Map<String, Value>,
    req: &PatchRequest,
) -> Result<Option<Value>, PatchError> {
    if let Some(expected) = req.prev() {
        let current = resolve(obj, req.name());
        if !compare::matches(current, expected) {
            return Err(PatchError::Concurrency {
                name: req.name().to_string(),
                expected: expected.clone(),
                actual: FieldValue::of(current),
            });
        }
    }
    match req {
        PatchRequest::Set { name, value, .. } => Ok(apply_set(obj, name, value)),
        PatchRequest::Unset { name, .. } => Ok(apply_unset(obj, name)),
        PatchRequest::Inc { name, amount, .. } => apply_inc(obj, name, amount),
        PatchRequest::Copy { name, from, .. } => apply_copy(obj, name, from),
        PatchRequest::Rename { name, from, .. } => apply_rename(obj, name, from),
    }
}

/// Apply an ordered batch, returning the final document and per-request
/// results.
///
/// Requests are applied strictly in order; each sees the effects of the
/// previous ones. The first failure aborts the batch — earlier requests
/// stay applied, later ones never run.
pub fn apply_requests(
    mut doc: Map<String, Value>,
    reqs: &[PatchRequest],
) -> Result<BatchResult, PatchError> {
    let mut results = Vec::with_capacity(reqs.len());
    for req in reqs {
        let old = apply_request(&mut doc, req)?;
        results.push(RequestResult {
            doc: doc.clone(),
            old,
        });
    }
    Ok(BatchResult { doc, res: results })
}

/// Apply a batch with options.
///
/// When `mutate: true`, requests are applied without capturing per-request
/// snapshots. When `mutate: false`, the full `apply_requests` path is used,
/// which records the document state after each request.
pub fn apply_batch(
    doc: Map<String, Value>,
    reqs: &[PatchRequest],
    options: &ApplyBatchOptions,
) -> Result<BatchResult, PatchError> {
    if options.mutate {
        let mut working = doc;
        for req in reqs {
            apply_request(&mut working, req)?;
        }
        Ok(BatchResult {
            doc: working,
            res: vec![],
        })
    } else {
        apply_requests(doc, reqs)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
