//! Core types for the patch engine.

use serde_json::{Map, Number, Value};
use thiserror::Error;

pub use docpatch_value::FieldValue;

// ── Error ─────────────────────────────────────────────────────────────────

/// Errors surfaced by batch application and request decoding.
#[derive(Debug, Error, PartialEq)]
pub enum PatchError {
    /// A prior-value assertion failed. The batch is aborted; requests
    /// applied before the failing one stay applied.
    #[error("CONCURRENCY: \"{name}\" expected {expected}, found {actual}")]
    Concurrency {
        name: String,
        expected: FieldValue,
        actual: FieldValue,
    },
    /// Unrecognized operation kind tag in a request record.
    #[error("UNKNOWN_KIND: {0}")]
    UnknownKind(String),
    /// `inc` against a non-numeric field, or a sum that is not a
    /// representable JSON number.
    #[error("NOT_A_NUMBER: \"{0}\"")]
    NotANumber(String),
    /// `copy` or `rename` named a source field that does not exist.
    #[error("NOT_FOUND: \"{0}\"")]
    NotFound(String),
    /// Structurally malformed request record.
    #[error("INVALID_REQUEST: {0}")]
    InvalidRequest(String),
}

// ── PatchRequest enum ─────────────────────────────────────────────────────

/// One requested field-level mutation.
///
/// Every kind targets the top-level property `name` and carries an optional
/// prior-value assertion `prev`. When `prev` is present, the field's current
/// state must match it before the mutation is allowed; `FieldValue::Absent`
/// asserts the property must not currently exist.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchRequest {
    /// Write `value` at `name`. A new property is appended at the end of
    /// the object's key order; an existing one is replaced in place.
    Set {
        name: String,
        value: Value,
        prev: Option<FieldValue>,
    },
    /// Remove `name`. Removing an absent property is a silent no-op.
    Unset {
        name: String,
        prev: Option<FieldValue>,
    },
    /// Add `amount` to the numeric value at `name`. When the property does
    /// not exist, the amount becomes its initial value.
    Inc {
        name: String,
        amount: Number,
        prev: Option<FieldValue>,
    },
    /// Write the current value of `from` at `name`. Fails when `from` does
    /// not exist.
    Copy {
        name: String,
        from: String,
        prev: Option<FieldValue>,
    },
    /// Remove `from` and write its value at `name`. Fails when `from` does
    /// not exist.
    Rename {
        name: String,
        from: String,
        prev: Option<FieldValue>,
    },
}

impl PatchRequest {
    /// Returns the operation kind tag used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            PatchRequest::Set { .. } => "set",
            PatchRequest::Unset { .. } => "unset",
            PatchRequest::Inc { .. } => "inc",
            PatchRequest::Copy { .. } => "copy",
            PatchRequest::Rename { .. } => "rename",
        }
    }

    /// Returns the target property name.
    pub fn name(&self) -> &str {
        match self {
            PatchRequest::Set { name, .. } => name,
            PatchRequest::Unset { name, .. } => name,
            PatchRequest::Inc { name, .. } => name,
            PatchRequest::Copy { name, .. } => name,
            PatchRequest::Rename { name, .. } => name,
        }
    }

    /// Returns the prior-value assertion, if any.
    pub fn prev(&self) -> Option<&FieldValue> {
        match self {
            PatchRequest::Set { prev, .. } => prev.as_ref(),
            PatchRequest::Unset { prev, .. } => prev.as_ref(),
            PatchRequest::Inc { prev, .. } => prev.as_ref(),
            PatchRequest::Copy { prev, .. } => prev.as_ref(),
            PatchRequest::Rename { prev, .. } => prev.as_ref(),
        }
    }
}

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a single request within a captured batch.
#[derive(Debug, Clone)]
pub struct RequestResult {
    /// The document after this request.
    pub doc: Map<String, Value>,
    /// The value the request replaced or removed, if any.
    pub old: Option<Value>,
}

/// Result of applying a full batch.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub doc: Map<String, Value>,
    pub res: Vec<RequestResult>,
}

/// Options for `apply_batch`.
#[derive(Debug, Clone)]
pub struct ApplyBatchOptions {
    /// If true, apply in place without capturing per-request snapshots.
    /// If false, the document state after each request is recorded in the
    /// batch result.
    pub mutate: bool,
}

impl Default for ApplyBatchOptions {
    fn default() -> Self {
        Self { mutate: false }
    }
}
