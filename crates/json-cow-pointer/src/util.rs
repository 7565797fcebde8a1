use crate::Path;

/// Decodes one pointer step: `~1` becomes `/`, then `~0` becomes `~`.
///
/// Doing it in the other order would turn `~01` into `/` instead of `~1`.
pub fn unescape_component(component: &str) -> String {
    if component.contains('~') {
        component.replace("~1", "/").replace("~0", "~")
    } else {
        component.to_owned()
    }
}

/// Encodes one pointer step, the inverse of [`unescape_component`].
pub fn escape_component(component: &str) -> String {
    if component.contains(['~', '/']) {
        component.replace('~', "~0").replace('/', "~1")
    } else {
        component.to_owned()
    }
}

/// Parse a JSON Pointer string into path components.
///
/// - Empty string returns an empty path (the whole document)
/// - The first character, normally `/`, is dropped
/// - Each component is unescaped
///
/// Syntax is not checked here; see [`validate_json_pointer`](crate::validate_json_pointer).
pub fn parse_json_pointer(pointer: &str) -> Path {
    if pointer.is_empty() {
        return Vec::new();
    }
    let rest = match pointer.strip_prefix('/') {
        Some(rest) => rest,
        None => {
            let mut chars = pointer.chars();
            chars.next();
            chars.as_str()
        }
    };
    rest.split('/').map(unescape_component).collect()
}

/// Builds a pointer from unescaped steps. The empty path gives `""`.
pub fn format_json_pointer(path: &[String]) -> String {
    path.iter()
        .map(|step| format!("/{}", escape_component(step)))
        .collect()
}

/// True for the path of the whole document.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Check if a step is a usable array index: one or more ASCII digits.
///
/// Signs, exponents, fractions and whitespace are all rejected, so `"1e3"`,
/// `"+1"` and `"-1"` are not indices. Leading zeros are accepted.
pub fn is_array_index(step: &str) -> bool {
    !step.is_empty() && step.bytes().all(|b| b.is_ascii_digit())
}

/// Parses an array index step, returning `None` when the step is not an
/// index or does not fit in `usize`.
pub fn parse_array_index(step: &str) -> Option<usize> {
    if !is_array_index(step) {
        return None;
    }
    step.parse().ok()
}
