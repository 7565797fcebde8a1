use std::sync::Arc;

use serde_json::Number;

use crate::doc::{Doc, Map};

/// Performs a deep equality check between two documents.
///
/// - Scalars must have the same type; numbers compare numerically, so `1`
///   and `1.0` are equal.
/// - Arrays compare element by element and must have the same length.
/// - Objects compare key by key, ignoring key order. A key that holds `null`
///   on one side and is absent on the other is treated as equal.
///
/// Containers that are the same allocation are equal without being walked.
///
/// # Examples
///
/// ```
/// use json_cow_value::{deep_equal, Doc};
/// use serde_json::json;
///
/// let a = Doc::from(json!({"foo": [1, 2, 3]}));
/// let b = Doc::from(json!({"foo": [1, 2, 3]}));
/// let c = Doc::from(json!({"foo": [1, 2, 4]}));
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Doc, b: &Doc) -> bool {
    match (a, b) {
        (Doc::Null, Doc::Null) => true,
        (Doc::Bool(a), Doc::Bool(b)) => a == b,
        (Doc::Number(a), Doc::Number(b)) => number_equal(a, b),
        (Doc::String(a), Doc::String(b)) => a == b,

        (Doc::Array(arr_a), Doc::Array(arr_b)) => {
            if Arc::ptr_eq(arr_a, arr_b) {
                return true;
            }
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b.iter()).all(|(x, y)| deep_equal(x, y))
        }

        (Doc::Object(obj_a), Doc::Object(obj_b)) => {
            Arc::ptr_eq(obj_a, obj_b) || (members_match(obj_a, obj_b) && members_match(obj_b, obj_a))
        }

        // Different types are never equal
        _ => false,
    }
}

/// Every member of `left` has an equal counterpart in `right`, where an
/// absent counterpart stands in for `null`.
fn members_match(left: &Map, right: &Map) -> bool {
    left.iter().all(|(key, val)| match right.get(key) {
        Some(other) => deep_equal(val, other),
        None => val.is_null(),
    })
}

/// Compares two JSON numbers by numeric value rather than by representation.
///
/// Integers compare exactly. An integer equals a float only when the float
/// is integral and has exactly that value, so no precision is lost to an
/// `f64` cast of the integer.
pub fn number_equal(a: &Number, b: &Number) -> bool {
    match (as_integer(a), as_integer(b)) {
        (Some(x), Some(y)) => x == y,
        (Some(x), None) => float_is_integer(b.as_f64(), x),
        (None, Some(y)) => float_is_integer(a.as_f64(), y),
        (None, None) => matches!((a.as_f64(), b.as_f64()), (Some(x), Some(y)) if x == y),
    }
}

fn as_integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn float_is_integer(float: Option<f64>, int: i128) -> bool {
    match float {
        // Every i64/u64 lies well inside this range, so the cast is exact.
        Some(f) if f.fract() == 0.0 && f >= -(2f64.powi(64)) && f <= 2f64.powi(64) => f as i128 == int,
        _ => false,
    }
}
