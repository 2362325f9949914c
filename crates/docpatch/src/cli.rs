//! Core logic for the `doc-patch` binary.
//!
//! Parses a JSON document and a JSON patch array from text, applies the
//! batch, and serializes the patched document back to text. Kept out of
//! `bin/` so it can be tested without spawning a process.

use serde_json::Value;

use crate::apply::apply_batch;
use crate::codec::json::from_json_batch;
use crate::types::{ApplyBatchOptions, PatchError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    NotAnObject,
    Patch(PatchError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "{e}"),
            CliError::NotAnObject => write!(f, "Document must be a JSON object."),
            CliError::Patch(e) => write!(f, "{e}"),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<PatchError> for CliError {
    fn from(e: PatchError) -> Self {
        CliError::Patch(e)
    }
}

// ── doc-patch ─────────────────────────────────────────────────────────────

/// Apply a patch batch to a document, both given as JSON text.
///
/// Returns the patched document serialized compactly, with its key order
/// preserved.
pub fn apply_patch_json(doc_json: &str, patch_json: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let obj = match doc {
        Value::Object(m) => m,
        _ => return Err(CliError::NotAnObject),
    };
    let patch: Value = serde_json::from_str(patch_json)?;
    let reqs = from_json_batch(&patch)?;
    let result = apply_batch(obj, &reqs, &ApplyBatchOptions { mutate: true })?;
    Ok(serde_json::to_string(&Value::Object(result.doc))?)
}

// ── Tests ─────────────────────────────────────────────────────────────────
