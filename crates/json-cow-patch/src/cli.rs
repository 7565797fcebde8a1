//! Core logic behind the `json-patch` and `json-pointer` binaries.
//!
//! Both tools read a document as JSON text and print JSON text, so the
//! functions here take and return strings and leave I/O to the binaries.

use json_cow_pointer::{get, to_safe_path, validate_json_pointer};
use json_cow_value::Doc;
use serde_json::Value;
use thiserror::Error;

use crate::apply::apply_patch_json_with;
use crate::types::{ApplyPatchOptions, PatchError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Patch(#[from] PatchError),
    #[error("patch must be a JSON array")]
    PatchNotArray,
    #[error("{0}")]
    Pointer(#[from] json_cow_pointer::JsonPointerError),
    #[error("NOT_FOUND")]
    NotFound,
}

// ── json-patch ────────────────────────────────────────────────────────────

/// Apply a JSON Patch to a document.
///
/// `doc_json` is the document and `patch_json` the operation array, both as
/// JSON text. Returns the patched document pretty-printed.
pub fn apply_json_patch(doc_json: &str, patch_json: &str, options: &ApplyPatchOptions) -> Result<String, CliError> {
    let doc: Doc = serde_json::from_str(doc_json)?;
    let ops: Value = serde_json::from_str(patch_json)?;
    // `apply_patch_json` ignores non-array patches; the CLI rejects them.
    if !ops.is_array() {
        return Err(CliError::PatchNotArray);
    }
    let out = apply_patch_json_with(&doc, &ops, options)?;
    Ok(serde_json::to_string_pretty(&out)?)
}

// ── json-pointer ──────────────────────────────────────────────────────────

/// Look up a JSON Pointer in a document and pretty-print what it finds.
pub fn lookup_pointer(doc_json: &str, pointer: &str) -> Result<String, CliError> {
    let doc: Doc = serde_json::from_str(doc_json)?;
    validate_json_pointer(pointer)?;
    let path = to_safe_path(pointer)?;
    let found = get(&doc, &path).ok_or(CliError::NotFound)?;
    Ok(serde_json::to_string_pretty(found)?)
}
