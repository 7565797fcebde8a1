//! Conversions between [`Doc`] and `serde_json::Value`, plus serde support.

use std::sync::Arc;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map as JsonMap, Value};

use crate::doc::{Doc, Map};

impl From<Value> for Doc {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Doc::Null,
            Value::Bool(b) => Doc::Bool(b),
            Value::Number(n) => Doc::Number(n),
            Value::String(s) => Doc::String(s.into()),
            Value::Array(arr) => Doc::Array(Arc::new(arr.into_iter().map(Doc::from).collect())),
            Value::Object(obj) => Doc::Object(Arc::new(
                obj.into_iter().map(|(k, v)| (k, Doc::from(v))).collect::<Map>(),
            )),
        }
    }
}

impl From<&Value> for Doc {
    fn from(value: &Value) -> Self {
        Doc::from(value.clone())
    }
}

impl From<&Doc> for Value {
    fn from(doc: &Doc) -> Self {
        match doc {
            Doc::Null => Value::Null,
            Doc::Bool(b) => Value::Bool(*b),
            Doc::Number(n) => Value::Number(n.clone()),
            Doc::String(s) => Value::String(s.to_string()),
            Doc::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            Doc::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect::<JsonMap<String, Value>>(),
            ),
        }
    }
}

impl From<Doc> for Value {
    fn from(doc: Doc) -> Self {
        Value::from(&doc)
    }
}

impl From<bool> for Doc {
    fn from(b: bool) -> Self {
        Doc::Bool(b)
    }
}

impl From<i64> for Doc {
    fn from(n: i64) -> Self {
        Doc::Number(n.into())
    }
}

impl From<u64> for Doc {
    fn from(n: u64) -> Self {
        Doc::Number(n.into())
    }
}

impl From<&str> for Doc {
    fn from(s: &str) -> Self {
        Doc::String(s.into())
    }
}

impl From<String> for Doc {
    fn from(s: String) -> Self {
        Doc::String(s.into())
    }
}

impl Serialize for Doc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Doc::Null => serializer.serialize_unit(),
            Doc::Bool(b) => serializer.serialize_bool(*b),
            Doc::Number(n) => n.serialize(serializer),
            Doc::String(s) => serializer.serialize_str(s),
            Doc::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Doc::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Doc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Doc::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn value_conversion_preserves_key_order() {
        let value = json!({"z": 1, "a": {"y": 2, "b": 3}});
        let doc = Doc::from(&value);
        let back = Value::from(&doc);
        assert_eq!(serde_json::to_string(&back).unwrap(), r#"{"z":1,"a":{"y":2,"b":3}}"#);
    }

    #[test]
    fn serialize_matches_value() {
        let value = json!([1, "two", {"three": [true, null, 4.5]}]);
        let doc = Doc::from(value.clone());
        assert_eq!(serde_json::to_value(&doc).unwrap(), value);
    }

    #[test]
    fn deserialize_from_text() {
        let doc: Doc = serde_json::from_str(r#"{"a":[1,2],"b":"c"}"#).unwrap();
        assert_eq!(doc, Doc::from(json!({"a": [1, 2], "b": "c"})));
        assert!(doc.get("a").unwrap().is_array());
    }

    #[test]
    fn scalar_conversions() {
        assert_eq!(Doc::from(true), Doc::Bool(true));
        assert_eq!(Doc::from(3i64), Doc::from(json!(3)));
        assert_eq!(Doc::from(3u64), Doc::from(json!(3)));
        assert_eq!(Doc::from("s"), Doc::from(json!("s")));
        assert_eq!(Doc::from(String::from("s")), Doc::string("s"));
    }
}
