//! Copy-on-write path walking.
//!
//! Mutating operations never edit a container that the input document can
//! still see. Walking a path calls [`Arc::make_mut`] on every container from
//! the root down to the parent of the final step, which copies exactly the
//! containers that are still shared and rewrites each ancestor to point at
//! the copy. Siblings of the path are left untouched, so they remain the same
//! allocations as in the input.
//!
//! Containers copied by an earlier operation of the same patch are already
//! owned by the accumulator, and `make_mut` edits them in place.

use std::sync::Arc;

use json_cow_pointer::{get, parse_array_index};
use json_cow_value::{Doc, Map};

use crate::types::PatchError;

/// The container that holds the final step of a walked path.
pub(crate) enum Parent<'d> {
    Array(&'d mut Vec<Doc>),
    Object(&'d mut Map),
}

/// A writable location: a privately owned parent container and the final
/// unescaped step inside it.
pub(crate) struct Slot<'d, 'p> {
    pub parent: Parent<'d>,
    pub key: &'p str,
}

impl Slot<'_, '_> {
    pub fn is_array(&self) -> bool {
        matches!(self.parent, Parent::Array(_))
    }
}

/// Walks `path` from `doc`, copying shared containers along the way, and
/// returns the slot for the final step.
///
/// Every intermediate step must resolve to an existing container; the final
/// step may be absent, since whether that is allowed depends on the caller.
/// `pointer` is only used for error messages.
pub(crate) fn walk_mut<'d, 'p>(
    doc: &'d mut Doc,
    path: &'p [String],
    pointer: &str,
) -> Result<Slot<'d, 'p>, PatchError> {
    let (key, ancestors) = path
        .split_last()
        .ok_or_else(|| PatchError::not_found(pointer))?;

    let mut current = doc;
    for step in ancestors {
        current = match current {
            Doc::Array(items) => {
                let index = parse_array_index(step).ok_or_else(|| PatchError::not_found(pointer))?;
                Arc::make_mut(items)
                    .get_mut(index)
                    .ok_or_else(|| PatchError::not_found(pointer))?
            }
            Doc::Object(map) => Arc::make_mut(map)
                .get_mut(step.as_str())
                .ok_or_else(|| PatchError::not_found(pointer))?,
            _ => return Err(PatchError::not_found(pointer)),
        };
    }

    let parent = match current {
        Doc::Array(items) => Parent::Array(Arc::make_mut(items)),
        Doc::Object(map) => Parent::Object(Arc::make_mut(map)),
        _ => return Err(PatchError::not_found(pointer)),
    };
    Ok(Slot {
        parent,
        key: key.as_str(),
    })
}

/// Read-only resolution of an existing location. Never copies anything.
pub(crate) fn resolve<'d>(doc: &'d Doc, path: &[String], pointer: &str) -> Result<&'d Doc, PatchError> {
    get(doc, path).ok_or_else(|| PatchError::not_found(pointer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(steps: &[&str]) -> Vec<String> {
        steps.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn walk_copies_only_the_path() {
        let input = Doc::from(json!({"a": {"b": {"c": 1}}, "x": {"y": 2}}));
        let mut acc = input.clone();
        let p = path(&["a", "b", "c"]);
        {
            let slot = walk_mut(&mut acc, &p, "/a/b/c").unwrap();
            assert!(!slot.is_array());
            assert_eq!(slot.key, "c");
        }

        assert!(!acc.ptr_eq(&input));
        assert!(!acc.get("a").unwrap().ptr_eq(input.get("a").unwrap()));
        let (acc_b, input_b) = (
            acc.get("a").unwrap().get("b").unwrap(),
            input.get("a").unwrap().get("b").unwrap(),
        );
        assert!(!acc_b.ptr_eq(input_b));
        assert!(acc.get("x").unwrap().ptr_eq(input.get("x").unwrap()));
    }

    fn object_addr(doc: &Doc) -> *const Map {
        match doc {
            Doc::Object(map) => Arc::as_ptr(map),
            _ => std::ptr::null(),
        }
    }

    #[test]
    fn walk_reuses_containers_already_owned() {
        let input = Doc::from(json!({"a": {"b": 1}}));
        let mut acc = input.clone();
        let p = path(&["a", "b"]);
        walk_mut(&mut acc, &p, "/a/b").unwrap();
        let owned = object_addr(acc.get("a").unwrap());
        assert_ne!(owned, object_addr(input.get("a").unwrap()));

        walk_mut(&mut acc, &p, "/a/b").unwrap();
        assert_eq!(object_addr(acc.get("a").unwrap()), owned);
    }

    #[test]
    fn walk_through_arrays() {
        let mut acc = Doc::from(json!({"arr": [{"id": 1}, {"id": 2}]}));
        let p = path(&["arr", "1", "id"]);
        let slot = walk_mut(&mut acc, &p, "/arr/1/id").unwrap();
        assert_eq!(slot.key, "id");

        let p = path(&["arr", "-"]);
        assert!(walk_mut(&mut acc, &p, "/arr/-").unwrap().is_array());
    }

    #[test]
    fn walk_rejects_missing_intermediate() {
        let mut acc = Doc::from(json!({"a": {}}));
        let p = path(&["a", "b", "c"]);
        assert_eq!(
            walk_mut(&mut acc, &p, "/a/b/c").err(),
            Some(PatchError::not_found("/a/b/c"))
        );
    }

    #[test]
    fn walk_rejects_malformed_intermediate_index() {
        let mut acc = Doc::from(json!({"arr": [{"a": 1}]}));
        for pointer in ["/arr/1e0/a", "/arr/-/a", "/arr/-0/a", "/arr/5/a"] {
            let p = json_cow_pointer::parse_json_pointer(pointer);
            assert_eq!(
                walk_mut(&mut acc, &p, pointer).err(),
                Some(PatchError::not_found(pointer))
            );
        }
    }

    #[test]
    fn walk_rejects_scalar_parent() {
        let mut acc = Doc::from(json!({"a": 1}));
        let p = path(&["a", "b"]);
        assert!(walk_mut(&mut acc, &p, "/a/b").is_err());
    }

    #[test]
    fn resolve_does_not_copy() {
        let doc = Doc::from(json!({"a": {"b": [1]}}));
        let found = resolve(&doc, &path(&["a", "b"]), "/a/b").unwrap();
        assert!(found.ptr_eq(doc.get("a").unwrap().get("b").unwrap()));
        assert_eq!(
            resolve(&doc, &path(&["a", "c"]), "/a/c").err(),
            Some(PatchError::not_found("/a/c"))
        );
    }
}
