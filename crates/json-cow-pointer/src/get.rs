use json_cow_value::Doc;

use crate::util::parse_array_index;

/// Get a value from a document by path.
///
/// Returns `None` if any step does not exist. Array steps must be plain
/// digit strings; `-` never resolves because it names the slot past the end.
pub fn get<'a>(doc: &'a Doc, path: &[String]) -> Option<&'a Doc> {
    let mut current = doc;
    for path_step in path {
        current = match current {
            Doc::Array(items) => items.get(parse_array_index(path_step)?)?,
            Doc::Object(map) => map.get(path_step.as_str())?,
            _ => return None,
        };
    }
    Some(current)
}
