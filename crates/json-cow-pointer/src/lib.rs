//! JSON Pointer (RFC 6901) utilities for [`Doc`](json_cow_value::Doc) trees.
//!
//! # Example
//!
//! ```
//! use json_cow_pointer::{format_json_pointer, get, parse_json_pointer};
//! use json_cow_value::Doc;
//!
//! // Parse a JSON pointer string into path components
//! let path = parse_json_pointer("/foo/bar");
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//!
//! // Format path components back to a JSON pointer string
//! let pointer = format_json_pointer(&path);
//! assert_eq!(pointer, "/foo/bar");
//!
//! // Get a value from a document
//! let doc = Doc::from(serde_json::json!({"foo": {"bar": 42}}));
//! let val = get(&doc, &path);
//! assert_eq!(val, Some(&Doc::from(42i64)));
//! ```

use thiserror::Error;

pub mod banned;
pub mod get;
pub mod util;
pub mod validate;

pub use banned::{ensure_allowed, is_banned_key, to_safe_path, BANNED_KEYS};
pub use get::get;
pub use util::{
    escape_component, format_json_pointer, is_array_index, is_root, parse_array_index,
    parse_json_pointer, unescape_component,
};
pub use validate::{validate_json_pointer, validate_path, MAX_PATH_LENGTH, MAX_POINTER_LENGTH};

/// One unescaped step of a pointer: an object key, an array index, or `-`.
pub type PathStep = String;

/// A parsed pointer. The empty path addresses the whole document.
pub type Path = Vec<PathStep>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("pointer {0:?} must be empty or start with '/'")]
    PointerInvalid(String),
    #[error("pointer is longer than {} bytes", MAX_POINTER_LENGTH)]
    PointerTooLong,
    #[error("path is deeper than {} steps", MAX_PATH_LENGTH)]
    PathTooLong,
    #[error("can't mutate {0}, it is banned")]
    BannedKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_cow_value::Doc;
    use serde_json::json;

    fn path(steps: &[&str]) -> Vec<String> {
        steps.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unescape_component() {
        // No escapes needed
        assert_eq!(unescape_component("foo"), "foo");

        // Escape sequences
        assert_eq!(unescape_component("a~0b"), "a~b");
        assert_eq!(unescape_component("c~1d"), "c/d");
        assert_eq!(unescape_component("a~0b~1c"), "a~b/c");

        // Multiple of same
        assert_eq!(unescape_component("~0~0"), "~~");
        assert_eq!(unescape_component("~1~1"), "//");

        // ~01 is "~" followed by "1", not "/"
        assert_eq!(unescape_component("~01"), "~1");
    }

    #[test]
    fn test_escape_component() {
        assert_eq!(escape_component("foo"), "foo");
        assert_eq!(escape_component("a~b"), "a~0b");
        assert_eq!(escape_component("c/d"), "c~1d");
        assert_eq!(escape_component("~/"), "~0~1");
    }

    #[test]
    fn test_parse_json_pointer() {
        assert_eq!(parse_json_pointer(""), Vec::<String>::new());
        assert_eq!(parse_json_pointer("/"), path(&[""]));
        assert_eq!(parse_json_pointer("/foo/bar"), path(&["foo", "bar"]));
        assert_eq!(parse_json_pointer("/a~0b/c~1d"), path(&["a~b", "c/d"]));
        assert_eq!(parse_json_pointer("/foo//"), path(&["foo", "", ""]));
    }

    #[test]
    fn test_parse_drops_first_char_without_slash() {
        assert_eq!(parse_json_pointer("xfoo/bar"), path(&["foo", "bar"]));
        assert_eq!(parse_json_pointer("éa"), path(&["a"]));
    }

    #[test]
    fn test_format_json_pointer() {
        assert_eq!(format_json_pointer(&[]), "");
        assert_eq!(format_json_pointer(&path(&["foo"])), "/foo");
        assert_eq!(format_json_pointer(&path(&["a~b", "c/d"])), "/a~0b/c~1d");
        assert_eq!(format_json_pointer(&path(&[""])), "/");
    }

    #[test]
    fn test_is_root() {
        assert!(is_root(&[]));
        assert!(!is_root(&path(&["foo"])));
    }

    #[test]
    fn test_is_array_index() {
        assert!(is_array_index("0"));
        assert!(is_array_index("123"));
        assert!(is_array_index("01"));
        assert!(!is_array_index(""));
        assert!(!is_array_index("-"));
        assert!(!is_array_index("-1"));
        assert!(!is_array_index("+1"));
        assert!(!is_array_index("1e3"));
        assert!(!is_array_index("1.5"));
        assert!(!is_array_index(" 1"));
        assert!(!is_array_index("abc"));
    }

    #[test]
    fn test_parse_array_index() {
        assert_eq!(parse_array_index("0"), Some(0));
        assert_eq!(parse_array_index("007"), Some(7));
        assert_eq!(parse_array_index("1e3"), None);
        assert_eq!(parse_array_index("99999999999999999999999999"), None);
    }

    #[test]
    fn test_get_scalar_root() {
        let doc = Doc::from(json!(42));
        assert_eq!(get(&doc, &[]), Some(&doc));
    }

    #[test]
    fn test_get_nested() {
        let doc = Doc::from(json!({"a": {"b": [10, {"c": "x"}]}}));
        assert_eq!(
            get(&doc, &path(&["a", "b", "1", "c"])),
            Some(&Doc::from("x"))
        );
        assert_eq!(get(&doc, &path(&["a", "b", "0"])), Some(&Doc::from(10i64)));
    }

    #[test]
    fn test_get_missing() {
        let doc = Doc::from(json!({"a": [1, 2]}));
        assert_eq!(get(&doc, &path(&["b"])), None);
        assert_eq!(get(&doc, &path(&["a", "2"])), None);
        assert_eq!(get(&doc, &path(&["a", "0", "x"])), None);
    }

    #[test]
    fn test_get_array_dash_and_malformed_index() {
        let doc = Doc::from(json!([1, 2, 3]));
        assert_eq!(get(&doc, &path(&["-"])), None);
        assert_eq!(get(&doc, &path(&["1e0"])), None);
        assert_eq!(get(&doc, &path(&["01"])), Some(&Doc::from(2i64)));
    }

    #[test]
    fn test_get_explicit_null() {
        let doc = Doc::from(json!({"a": null}));
        assert_eq!(get(&doc, &path(&["a"])), Some(&Doc::Null));
    }

    #[test]
    fn test_roundtrip() {
        for pointer in ["", "/", "/foo", "/a~0b/c~1d", "/arr/0", "/~0/~1"] {
            assert_eq!(format_json_pointer(&parse_json_pointer(pointer)), pointer);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            JsonPointerError::BannedKey("__proto__".into()).to_string(),
            "can't mutate __proto__, it is banned"
        );
        assert_eq!(
            JsonPointerError::PointerTooLong.to_string(),
            "pointer is longer than 1024 bytes"
        );
    }
}
