//! Copy-on-write JSON Patch (RFC 6902).
//!
//! # Operations
//!
//! All standard RFC 6902 operations are supported:
//! `add`, `remove`, `replace`, `copy`, `move`, `test`.
//!
//! # Sharing
//!
//! Patches are applied to [`Doc`](json_cow_value::Doc) trees without touching
//! the input. Only the containers on the path to an edited location are
//! copied; every other subtree of the result is the same allocation as in the
//! input.
//!
//! ```
//! use json_cow_patch::apply_patch_json;
//! use json_cow_value::Doc;
//! use serde_json::json;
//!
//! let doc = Doc::from(json!({"items": [{"id": "1"}], "payments": []}));
//! let patch = json!([{"op": "add", "path": "/items/1", "value": {"id": "2"}}]);
//! let out = apply_patch_json(&doc, &patch).unwrap();
//!
//! assert!(out.get("payments").unwrap().ptr_eq(doc.get("payments").unwrap()));
//! assert!(!out.get("items").unwrap().ptr_eq(doc.get("items").unwrap()));
//! ```
//!
//! # Banned keys
//!
//! Pointers whose steps include `__proto__`, `constructor` or `prototype`
//! are refused with [`PatchError::BannedKey`] before anything is edited.

pub mod apply;
pub mod cli;
pub mod codec;
pub mod types;
pub mod validate;
mod walk;

pub use apply::{
    apply_op, apply_ops, apply_patch, apply_patch_json, apply_patch_json_with, apply_patch_with,
};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{ApplyPatchOptions, Op, OpKind, OpResult, PatchError, PatchResult};
