//! Helpers for working with request batches.

use crate::types::PatchRequest;

/// Creates a closure that returns `true` for requests touching the given
/// property — as the target, or as the source of a `copy`/`rename`.
///
/// Useful for narrowing a batch to the requests relevant to one field, e.g.
/// when reporting which parts of a rejected batch conflicted.
///
/// # Example
///
/// ```
/// use docpatch::util::matcher;
/// use docpatch::PatchRequest;
/// use serde_json::json;
///
/// let touches_body = matcher("body");
///
/// let set_body = PatchRequest::Set {
///     name: "body".into(),
///     value: json!("x"),
///     prev: None,
/// };
/// assert!(touches_body(&set_body));
///
/// let set_title = PatchRequest::Set {
///     name: "title".into(),
///     value: json!("y"),
///     prev: None,
/// };
/// assert!(!touches_body(&set_title));
/// ```
pub fn matcher(name: &str) -> impl Fn(&PatchRequest) -> bool + '_ {
    move |req: &PatchRequest| touches(req, name)
}

/// Returns `true` if the request reads or writes the given property.
pub fn touches(req: &PatchRequest, name: &str) -> bool {
    if req.name() == name {
        return true;
    }
    match req {
        PatchRequest::Copy { from, .. } | PatchRequest::Rename { from, .. } => from == name,
        _ => false,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
