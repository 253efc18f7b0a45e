//! Schema-less records as returned by the data layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of domain data: a JSON object whose shape is not known up front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Wrap a JSON value, returning `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Walk a dot-separated path (e.g. `"region.name"`) through nested objects.
    ///
    /// Returns `None` when a segment is missing or an intermediate value is
    /// not an object.
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

/// Render a raw value the way the table shows unformatted cells.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn resolves_top_level_and_nested_paths() {
        let r = record(json!({"name": "X", "region": {"name": "R"}}));
        assert_eq!(r.resolve("name"), Some(&json!("X")));
        assert_eq!(r.resolve("region.name"), Some(&json!("R")));
    }

    #[test]
    fn missing_segments_resolve_to_none() {
        let r = record(json!({"name": "X"}));
        assert_eq!(r.resolve("region.name"), None);
        assert_eq!(r.resolve(""), None);
        assert_eq!(r.resolve("name.first"), None);
    }

    #[test]
    fn non_object_intermediate_resolves_to_none() {
        let r = record(json!({"region": ["R"], "subcity": null}));
        assert_eq!(r.resolve("region.name"), None);
        assert_eq!(r.resolve("subcity.name"), None);
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(Record::from_value(json!([1, 2])).is_none());
        assert!(Record::from_value(json!("row")).is_none());
    }

    #[test]
    fn display_of_scalars() {
        assert_eq!(display_value(&json!(null)), "");
        assert_eq!(display_value(&json!("abc")), "abc");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(1.5)), "1.5");
        assert_eq!(display_value(&json!(true)), "true");
    }

    #[test]
    fn records_deserialize_from_object_arrays() {
        let rows: Vec<Record> =
            serde_json::from_str(r#"[{"name":"a"},{"name":"b","region":{"name":"R"}}]"#).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].resolve("region.name"), Some(&json!("R")));
    }
}
