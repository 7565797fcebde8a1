//! JSON codec for JSON Patch operations.
//!
//! Converts operations to/from `serde_json::Value` in RFC 6902 format.

use json_cow_pointer::{ensure_allowed, parse_json_pointer};
use json_cow_value::Doc;
use serde_json::{json, Map, Value};

use crate::types::{Op, OpKind, PatchError};

// ── Field helpers ─────────────────────────────────────────────────────────

/// Reads a pointer field. Pointers are screened for banned keys as soon as
/// they are decoded, so a record is refused before any of its other fields
/// are looked at.
fn decode_pointer(obj: &Map<String, Value>, field: &str, kind: OpKind) -> Result<String, PatchError> {
    let pointer = obj
        .get(field)
        .ok_or_else(|| PatchError::InvalidOperation(format!("{kind} requires '{field}'")))?
        .as_str()
        .ok_or_else(|| PatchError::InvalidOperation(format!("'{field}' must be a string")))?;
    ensure_allowed(&parse_json_pointer(pointer))?;
    Ok(pointer.to_string())
}

fn decode_value(obj: &Map<String, Value>, kind: OpKind) -> Result<Doc, PatchError> {
    obj.get("value")
        .map(Doc::from)
        .ok_or_else(|| PatchError::InvalidOperation(format!("{kind} requires 'value'")))
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to a `serde_json::Value` in the JSON Patch format.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({
            "op": "add",
            "path": path,
            "value": Value::from(value)
        }),
        Op::Remove { path } => json!({
            "op": "remove",
            "path": path
        }),
        Op::Replace { path, value } => json!({
            "op": "replace",
            "path": path,
            "value": Value::from(value)
        }),
        Op::Move { from, path } => json!({
            "op": "move",
            "from": from,
            "path": path
        }),
        Op::Copy { from, path } => json!({
            "op": "copy",
            "from": from,
            "path": path
        }),
        Op::Test { path, value } => json!({
            "op": "test",
            "path": path,
            "value": Value::from(value)
        }),
    }
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize a `serde_json::Value` into an `Op`.
///
/// Unknown `op` names and records missing a field their kind needs are
/// rejected with [`PatchError::InvalidOperation`]. Extra fields are ignored.
pub fn from_json(v: &Value) -> Result<Op, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidOperation("operation must be an object".into()))?;
    let kind: OpKind = obj
        .get("op")
        .and_then(|v| v.as_str())
        .ok_or_else(|| PatchError::InvalidOperation("missing 'op' field".into()))?
        .parse()?;

    match kind {
        OpKind::Add => Ok(Op::Add {
            path: decode_pointer(obj, "path", kind)?,
            value: decode_value(obj, kind)?,
        }),
        OpKind::Remove => Ok(Op::Remove {
            path: decode_pointer(obj, "path", kind)?,
        }),
        OpKind::Replace => Ok(Op::Replace {
            path: decode_pointer(obj, "path", kind)?,
            value: decode_value(obj, kind)?,
        }),
        OpKind::Move => Ok(Op::Move {
            from: decode_pointer(obj, "from", kind)?,
            path: decode_pointer(obj, "path", kind)?,
        }),
        OpKind::Copy => Ok(Op::Copy {
            from: decode_pointer(obj, "from", kind)?,
            path: decode_pointer(obj, "path", kind)?,
        }),
        OpKind::Test => Ok(Op::Test {
            path: decode_pointer(obj, "path", kind)?,
            value: decode_value(obj, kind)?,
        }),
    }
}

/// Serialize a list of operations to a JSON array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

/// Deserialize a JSON array into a list of operations.
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::InvalidOperation("patch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}
