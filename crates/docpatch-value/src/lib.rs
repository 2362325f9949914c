//! Field lookup and value comparison for the docpatch engine.
//!
//! The engine's concurrency checks need two primitives: resolving a named
//! property inside an object context (reporting presence as well as the
//! value), and comparing a field's current state against an expected prior
//! value where "the property does not exist" is distinct from "the property
//! holds an explicit null".
//!
//! # Example
//!
//! ```
//! use docpatch_value::{matches, resolve, FieldValue};
//! use serde_json::json;
//!
//! let doc = json!({"title": "A Blog Post", "draft": null});
//! let obj = doc.as_object().unwrap();
//!
//! // Present property: compares by value.
//! assert!(matches(resolve(obj, "title"), &FieldValue::Value(json!("A Blog Post"))));
//!
//! // Missing property: matches only the absent marker, never a null.
//! assert!(matches(resolve(obj, "blog_id"), &FieldValue::Absent));
//! assert!(!matches(resolve(obj, "blog_id"), &FieldValue::Value(json!(null))));
//!
//! // An explicit null is a stored value, not an absence.
//! assert!(matches(resolve(obj, "draft"), &FieldValue::Value(json!(null))));
//! assert!(!matches(resolve(obj, "draft"), &FieldValue::Absent));
//! ```

use serde_json::{Map, Value};

pub mod compare;
pub use compare::{equal, matches, values_equal, FieldValue};

/// Looks up a top-level property of an object context.
///
/// Returns `None` when the property is not a key of the object, which is
/// how the engine encodes "absent". Does not mutate.
pub fn resolve<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    obj.get(name)
}

/// Mutable counterpart of [`resolve`].
pub fn resolve_mut<'a>(obj: &'a mut Map<String, Value>, name: &str) -> Option<&'a mut Value> {
    obj.get_mut(name)
}
