//! Pointer checks run before an operation touches the document.

use json_cow_pointer::{to_safe_path, validate_json_pointer, validate_path, Path};

use crate::types::{ApplyPatchOptions, PatchError};

/// Turns an operation pointer into a path that is safe to walk.
///
/// Banned keys are always rejected. Syntax and size limits are enforced only
/// when `options.validate` is set.
pub fn resolve_pointer(pointer: &str, options: &ApplyPatchOptions) -> Result<Path, PatchError> {
    if options.validate {
        validate_json_pointer(pointer)?;
    }
    let path = to_safe_path(pointer)?;
    if options.validate {
        validate_path(&path)?;
    }
    Ok(path)
}
