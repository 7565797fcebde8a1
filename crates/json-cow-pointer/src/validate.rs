//! Size and syntax limits for pointers taken from untrusted patches.

use crate::JsonPointerError;

/// Longest accepted pointer, counted in UTF-8 bytes.
pub const MAX_POINTER_LENGTH: usize = 1024;

/// Deepest accepted path, counted in steps.
pub const MAX_PATH_LENGTH: usize = 256;

/// Checks that `pointer` is either empty or an absolute pointer no longer
/// than [`MAX_POINTER_LENGTH`].
///
/// ```
/// use json_cow_pointer::{validate_json_pointer, JsonPointerError};
///
/// assert!(validate_json_pointer("").is_ok());
/// assert!(validate_json_pointer("/items/0").is_ok());
/// assert_eq!(
///     validate_json_pointer("items/0"),
///     Err(JsonPointerError::PointerInvalid("items/0".into()))
/// );
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), JsonPointerError> {
    match pointer.as_bytes().first() {
        None => Ok(()),
        Some(b'/') if pointer.len() <= MAX_POINTER_LENGTH => Ok(()),
        Some(b'/') => Err(JsonPointerError::PointerTooLong),
        Some(_) => Err(JsonPointerError::PointerInvalid(pointer.to_string())),
    }
}

/// Checks that a parsed path has at most [`MAX_PATH_LENGTH`] steps.
pub fn validate_path(path: &[String]) -> Result<(), JsonPointerError> {
    if path.len() > MAX_PATH_LENGTH {
        Err(JsonPointerError::PathTooLong)
    } else {
        Ok(())
    }
}
