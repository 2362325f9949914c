//! docpatch — field-level patch engine for JSON documents.
//!
//! Applies an ordered batch of patch requests to a parsed document (a
//! `serde_json` tree whose top level is an object), enforcing per-field
//! optimistic-concurrency checks: a request may assert the value it expects
//! the field to currently hold — or that the field does not exist yet — and
//! the whole batch fails fast on the first mismatch. Later requests in a
//! batch see the effects of earlier ones.
//!
//! # Operation kinds
//!
//! `set`, `unset`, `inc`, `copy`, `rename`.
//!
//! # Example
//!
//! ```
//! use docpatch::{apply_requests, FieldValue, PatchRequest};
//! use serde_json::json;
//!
//! let doc = json!({"title": "A Blog Post", "body": "html markup"});
//! let batch = vec![PatchRequest::Set {
//!     name: "body".into(),
//!     value: json!("different markup"),
//!     prev: Some(FieldValue::Value(json!("html markup"))),
//! }];
//!
//! let result = apply_requests(doc.as_object().unwrap().clone(), &batch).unwrap();
//! assert_eq!(result.doc["body"], json!("different markup"));
//! ```

pub mod types;
pub mod apply;
pub mod codec;
pub mod validate;
pub mod util;
pub mod cli;

pub use types::{
    ApplyBatchOptions, BatchResult, FieldValue, PatchError, PatchRequest, RequestResult,
};
pub use apply::{apply_batch, apply_request, apply_requests};
pub use codec::json::{from_json, from_json_batch, to_json, to_json_batch};
