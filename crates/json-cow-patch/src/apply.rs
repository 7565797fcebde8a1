//! JSON Patch apply logic.
//!
//! Operations are folded over a private accumulator that starts as a cheap
//! clone of the input root. Every edit goes through the copy-on-write walker,
//! so the input is never modified and the result shares every untouched
//! subtree with it.

use std::mem;

use json_cow_pointer::parse_array_index;
use json_cow_value::{deep_equal, Doc};
use serde_json::Value;
use tracing::{debug, trace};

use crate::codec::json::from_json;
use crate::types::{ApplyPatchOptions, Op, OpResult, PatchError, PatchResult};
use crate::validate::resolve_pointer;
use crate::walk::{resolve, walk_mut, Parent, Slot};

// ── Slot editors ──────────────────────────────────────────────────────────

/// Inserts `value` at the slot. Arrays accept `-` (append) or an index up to
/// and including the length; objects create or overwrite the key.
fn insert(slot: Slot<'_, '_>, value: Doc, pointer: &str) -> Result<Option<Doc>, PatchError> {
    match slot.parent {
        Parent::Array(items) => {
            if slot.key == "-" {
                items.push(value);
                return Ok(None);
            }
            let index = parse_array_index(slot.key)
                .filter(|&i| i <= items.len())
                .ok_or_else(|| PatchError::not_found(pointer))?;
            items.insert(index, value);
            Ok(None)
        }
        Parent::Object(map) => Ok(map.insert(slot.key.to_string(), value)),
    }
}

/// Overwrites an existing element or member in place.
fn overwrite(slot: Slot<'_, '_>, value: Doc, pointer: &str) -> Result<Doc, PatchError> {
    let target = match slot.parent {
        Parent::Array(items) => match parse_array_index(slot.key) {
            Some(index) => items.get_mut(index),
            None => None,
        },
        Parent::Object(map) => map.get_mut(slot.key),
    };
    let target = target.ok_or_else(|| PatchError::not_found(pointer))?;
    Ok(mem::replace(target, value))
}

/// Takes an existing element or member out of its container. Later array
/// elements shift left; remaining object members keep their order.
fn take(slot: Slot<'_, '_>, pointer: &str) -> Result<Doc, PatchError> {
    let taken = match slot.parent {
        Parent::Array(items) => parse_array_index(slot.key)
            .filter(|&i| i < items.len())
            .map(|i| items.remove(i)),
        Parent::Object(map) => map.shift_remove(slot.key),
    };
    taken.ok_or_else(|| PatchError::not_found(pointer))
}

/// Walks to the slot for `path`, copying shared containers on the way.
fn walk<'d, 'p>(doc: &'d mut Doc, path: &'p [String], pointer: &str) -> Result<Slot<'d, 'p>, PatchError> {
    let slot = walk_mut(doc, path, pointer)?;
    trace!(path = pointer, sequence = slot.is_array(), "walked to slot");
    Ok(slot)
}

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &mut Doc, path: &[String], pointer: &str, value: Doc) -> Result<Option<Doc>, PatchError> {
    if path.is_empty() {
        return Ok(Some(mem::replace(doc, value)));
    }
    let slot = walk(doc, path, pointer)?;
    insert(slot, value, pointer)
}

fn apply_replace(doc: &mut Doc, path: &[String], pointer: &str, value: Doc) -> Result<Option<Doc>, PatchError> {
    if path.is_empty() {
        return Ok(Some(mem::replace(doc, value)));
    }
    let slot = walk(doc, path, pointer)?;
    overwrite(slot, value, pointer).map(Some)
}

fn apply_remove(doc: &mut Doc, path: &[String], pointer: &str) -> Result<Doc, PatchError> {
    // The whole document has no parent to be removed from.
    if path.is_empty() {
        return Err(PatchError::not_found(pointer));
    }
    let slot = walk(doc, path, pointer)?;
    take(slot, pointer)
}

fn apply_test(doc: &Doc, path: &[String], pointer: &str, expected: &Doc) -> Result<(), PatchError> {
    let actual = resolve(doc, path, pointer)?;
    if deep_equal(actual, expected) {
        Ok(())
    } else {
        Err(PatchError::AssertionFailed {
            expected: expected.clone(),
            actual: actual.clone(),
        })
    }
}

/// Applies one operation to an accumulator, returning the value displaced at
/// `path`, if any.
fn execute(doc: &mut Doc, op: &Op, options: &ApplyPatchOptions) -> Result<Option<Doc>, PatchError> {
    match op {
        Op::Add { path: pointer, value } => {
            let path = resolve_pointer(pointer, options)?;
            apply_add(doc, &path, pointer, value.clone())
        }
        Op::Replace { path: pointer, value } => {
            let path = resolve_pointer(pointer, options)?;
            apply_replace(doc, &path, pointer, value.clone())
        }
        Op::Remove { path: pointer } => {
            let path = resolve_pointer(pointer, options)?;
            apply_remove(doc, &path, pointer).map(Some)
        }
        Op::Test { path: pointer, value } => {
            let path = resolve_pointer(pointer, options)?;
            apply_test(doc, &path, pointer, value)?;
            Ok(None)
        }
        Op::Move { from, path: pointer } => {
            let from_path = resolve_pointer(from, options)?;
            let path = resolve_pointer(pointer, options)?;
            if from_path == path && !path.is_empty() {
                // Same location: only the source has to exist.
                resolve(doc, &from_path, from)?;
                return Ok(None);
            }
            // Removal completes before the destination is walked. If the
            // destination then fails, the accumulator is rolled back.
            let before = doc.clone();
            let target = apply_remove(doc, &from_path, from)?;
            match apply_add(doc, &path, pointer, target) {
                Ok(displaced) => Ok(displaced),
                Err(err) => {
                    *doc = before;
                    Err(err)
                }
            }
        }
        Op::Copy { from, path: pointer } => {
            let from_path = resolve_pointer(from, options)?;
            let path = resolve_pointer(pointer, options)?;
            let target = resolve(doc, &from_path, from)?.shallow_clone();
            apply_add(doc, &path, pointer, target)
        }
    }
}

/// Runs one fold step with tracing around it.
fn step(doc: &mut Doc, index: usize, op: &Op, options: &ApplyPatchOptions) -> Result<Option<Doc>, PatchError> {
    trace!(index, op = %op.kind(), path = op.path(), "applying operation");
    execute(doc, op, options).map_err(|err| {
        debug!(index, op = %op.kind(), path = op.path(), error = %err, "patch operation failed");
        err
    })
}

// ── Public API ────────────────────────────────────────────────────────────

/// Apply a single operation to `doc` in place.
///
/// Containers of `doc` that are shared with other documents are copied before
/// being edited, so no other document observes the change. Returns the value
/// displaced at `path` (replace, remove, move, or add over an existing key).
///
/// If the operation fails, `doc` still holds the same content it had before,
/// though some of its containers may have been swapped for private copies.
pub fn apply_op(doc: &mut Doc, op: &Op) -> Result<Option<Doc>, PatchError> {
    execute(doc, op, &ApplyPatchOptions::default())
}

/// Apply `ops` to `doc` and return the patched document.
///
/// # Example
///
/// ```
/// use json_cow_patch::{apply_patch, Op};
/// use json_cow_value::Doc;
/// use serde_json::json;
///
/// let doc = Doc::from(json!({"a": 1, "b": {"c": 2}, "d": [1]}));
/// let out = apply_patch(&doc, &[Op::replace("/b/c", json!(3))]).unwrap();
///
/// assert_eq!(out, Doc::from(json!({"a": 1, "b": {"c": 3}, "d": [1]})));
/// assert!(out.get("d").unwrap().ptr_eq(doc.get("d").unwrap()));
/// assert_eq!(doc, Doc::from(json!({"a": 1, "b": {"c": 2}, "d": [1]})));
/// ```
pub fn apply_patch(doc: &Doc, ops: &[Op]) -> Result<Doc, PatchError> {
    apply_patch_with(doc, ops, &ApplyPatchOptions::default())
}

/// Apply `ops` to `doc` with explicit options.
///
/// The first failing operation aborts the whole patch; the input is left
/// untouched and no partial result is returned.
pub fn apply_patch_with(doc: &Doc, ops: &[Op], options: &ApplyPatchOptions) -> Result<Doc, PatchError> {
    if ops.is_empty() {
        return Ok(doc.clone());
    }
    debug!(ops = ops.len(), "applying patch");
    let mut acc = doc.clone();
    for (index, op) in ops.iter().enumerate() {
        step(&mut acc, index, op, options)?;
    }
    Ok(acc)
}

/// Apply operation records in RFC 6902 JSON form.
///
/// An empty or non-array `ops` returns `doc` unchanged. Records are decoded
/// one at a time as the fold reaches them; an unknown `op` aborts the patch
/// with [`PatchError::InvalidOperation`].
pub fn apply_patch_json(doc: &Doc, ops: &Value) -> Result<Doc, PatchError> {
    apply_patch_json_with(doc, ops, &ApplyPatchOptions::default())
}

/// [`apply_patch_json`] with explicit options.
pub fn apply_patch_json_with(doc: &Doc, ops: &Value, options: &ApplyPatchOptions) -> Result<Doc, PatchError> {
    let records = match ops.as_array() {
        Some(records) if !records.is_empty() => records,
        _ => return Ok(doc.clone()),
    };
    debug!(ops = records.len(), "applying json patch");
    let mut acc = doc.clone();
    for (index, record) in records.iter().enumerate() {
        let op = from_json(record)?;
        step(&mut acc, index, &op, options)?;
    }
    Ok(acc)
}

/// Apply a sequence of operations, returning the final document and a
/// snapshot of the document after each operation.
///
/// Snapshots share structure with each other and with the input; later
/// operations copy whatever they touch instead of editing earlier snapshots.
pub fn apply_ops(doc: &Doc, ops: &[Op]) -> Result<PatchResult, PatchError> {
    let options = ApplyPatchOptions::default();
    let mut acc = doc.clone();
    let mut res = Vec::with_capacity(ops.len());
    for (index, op) in ops.iter().enumerate() {
        let old = step(&mut acc, index, op, &options)?;
        res.push(OpResult {
            doc: acc.clone(),
            old,
        });
    }
    Ok(PatchResult { doc: acc, res })
}

// ── Tests ─────────────────────────────────────────────────────────────────
