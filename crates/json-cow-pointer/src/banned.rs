//! Screening of pointer steps that must never be used as keys.

use crate::Path;
use crate::util::parse_json_pointer;
use crate::JsonPointerError;

/// Keys that could redirect a write onto an object's prototype or
/// constructor slot in a dynamic host. They are rejected unconditionally.
pub const BANNED_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

pub fn is_banned_key(step: &str) -> bool {
    BANNED_KEYS.contains(&step)
}

/// Fails on the first step of `path` that is a banned key.
pub fn ensure_allowed(path: &[String]) -> Result<(), JsonPointerError> {
    match path.iter().find(|step| is_banned_key(step)) {
        Some(step) => Err(JsonPointerError::BannedKey(step.clone())),
        None => Ok(()),
    }
}

/// Parses `pointer` and rejects it if any unescaped step is banned.
///
/// # Example
///
/// ```
/// use json_cow_pointer::{to_safe_path, JsonPointerError};
///
/// assert_eq!(to_safe_path("/a~1b/0").unwrap(), vec!["a/b", "0"]);
/// assert_eq!(
///     to_safe_path("/x/__proto__"),
///     Err(JsonPointerError::BannedKey("__proto__".into()))
/// );
/// ```
pub fn to_safe_path(pointer: &str) -> Result<Path, JsonPointerError> {
    let path = parse_json_pointer(pointer);
    ensure_allowed(&path)?;
    Ok(path)
}
