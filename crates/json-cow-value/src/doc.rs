use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Number;

use crate::json_equal::number_equal;

/// Object entries, kept in insertion order.
pub type Map = IndexMap<String, Doc>;

/// A JSON value with reference-counted containers.
///
/// Scalars are stored inline. Arrays and objects are stored behind [`Arc`],
/// so `clone()` is cheap and two documents may share any number of subtrees.
#[derive(Debug, Clone, Default)]
pub enum Doc {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(Arc<str>),
    Array(Arc<Vec<Doc>>),
    Object(Arc<Map>),
}

impl Doc {
    /// Builds an array document from its elements.
    pub fn array(items: impl IntoIterator<Item = Doc>) -> Self {
        Doc::Array(Arc::new(items.into_iter().collect()))
    }

    /// Builds an object document from `(key, value)` entries.
    ///
    /// A repeated key keeps its first position and its last value.
    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Doc)>) -> Self {
        Doc::Object(Arc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Doc::String(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Doc::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Doc::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Doc::Object(_))
    }

    /// Returns true for arrays and objects.
    pub fn is_container(&self) -> bool {
        matches!(self, Doc::Array(_) | Doc::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Doc::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Doc::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Doc::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Doc]> {
        match self {
            Doc::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Doc::Object(map) => Some(map.as_ref()),
            _ => None,
        }
    }

    /// Looks up an object member. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Doc> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Looks up an array element. Returns `None` for non-arrays.
    pub fn get_index(&self, index: usize) -> Option<&Doc> {
        self.as_array().and_then(|items| items.get(index))
    }

    /// Reports whether both documents are the same container allocation.
    ///
    /// Scalars are stored inline and never share an allocation, so this is
    /// always `false` when either side is a scalar.
    pub fn ptr_eq(&self, other: &Doc) -> bool {
        match (self, other) {
            (Doc::Array(a), Doc::Array(b)) => Arc::ptr_eq(a, b),
            (Doc::Object(a), Doc::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Copies the top-level container into a fresh allocation.
    ///
    /// The children of the copy are the same allocations as the children of
    /// `self`. Scalars are returned as-is.
    pub fn shallow_clone(&self) -> Doc {
        match self {
            Doc::Array(items) => Doc::Array(Arc::new(items.as_ref().clone())),
            Doc::Object(map) => Doc::Object(Arc::new(map.as_ref().clone())),
            scalar => scalar.clone(),
        }
    }
}

/// Exact structural equality: same variants, same array lengths, same
/// object key sets. Numbers compare by value and key order is ignored.
///
/// Unlike [`deep_equal`](crate::deep_equal), a `null` member is never equal
/// to a missing one.
impl PartialEq for Doc {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Doc::Null, Doc::Null) => true,
            (Doc::Bool(a), Doc::Bool(b)) => a == b,
            (Doc::Number(a), Doc::Number(b)) => number_equal(a, b),
            (Doc::String(a), Doc::String(b)) => a == b,
            (Doc::Array(a), Doc::Array(b)) => Arc::ptr_eq(a, b) || a == b,
            (Doc::Object(a), Doc::Object(b)) => {
                Arc::ptr_eq(a, b)
                    || (a.len() == b.len()
                        && a.iter().all(|(key, val)| b.get(key).is_some_and(|other| val == other)))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
