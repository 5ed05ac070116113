use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ChartError, ChartResult};

use super::{ChartConfiguration, JsonFormat};

/// Mutable JSON form of an assembled configuration.
///
/// This is what extension hooks receive. Being a plain JSON object, any field
/// can be added, replaced with a value of another shape, or removed, and every
/// key appears at most once in the serialized output. Key order is insertion
/// order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartDocument(Map<String, Value>);

impl ChartDocument {
    pub fn from_configuration(config: &ChartConfiguration) -> ChartResult<Self> {
        match serde_json::to_value(config)
            .map_err(|e| ChartError::Serialization(format!("chart configuration: {e}")))?
        {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ChartError::Serialization(format!(
                "chart configuration serialized to non-object json: {other}"
            ))),
        }
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Looks up a nested value by JSON pointer, e.g. `/options/responsive`.
    #[must_use]
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        let mut tokens = pointer_tokens(pointer)?;
        let first = tokens.next()?;
        let root = self.0.get(&first)?;
        tokens.try_fold(root, |value, token| step(value, &token))
    }

    pub fn pointer_mut(&mut self, pointer: &str) -> Option<&mut Value> {
        let mut tokens = pointer_tokens(pointer)?;
        let first = tokens.next()?;
        let root = self.0.get_mut(&first)?;
        tokens.try_fold(root, |value, token| step_mut(value, &token))
    }

    /// The `type` field, when it is still a string.
    #[must_use]
    pub fn chart_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    #[must_use]
    pub fn labels(&self) -> Option<&Vec<Value>> {
        self.pointer("/data/labels").and_then(Value::as_array)
    }

    #[must_use]
    pub fn datasets(&self) -> Option<&Vec<Value>> {
        self.pointer("/data/datasets").and_then(Value::as_array)
    }

    pub fn datasets_mut(&mut self) -> Option<&mut Vec<Value>> {
        self.pointer_mut("/data/datasets")
            .and_then(Value::as_array_mut)
    }

    #[must_use]
    pub fn options(&self) -> Option<&Map<String, Value>> {
        self.0.get("options").and_then(Value::as_object)
    }

    pub fn options_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.0.get_mut("options").and_then(Value::as_object_mut)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string(self)
            .map_err(|e| ChartError::Serialization(format!("chart document: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("chart document: {e}")))
    }

    pub fn to_json(&self, format: JsonFormat) -> ChartResult<String> {
        match format {
            JsonFormat::Compact => self.to_json_string(),
            JsonFormat::Pretty => self.to_json_pretty(),
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart document json: {e}")))
    }

    /// Reads the document back into the typed form. Fails when a hook removed
    /// or reshaped a field the typed form requires.
    pub fn to_configuration(&self) -> ChartResult<ChartConfiguration> {
        serde_json::from_value(Value::Object(self.0.clone())).map_err(|e| {
            ChartError::InvalidData(format!("chart document is not a typed configuration: {e}"))
        })
    }
}

impl From<ChartDocument> for Value {
    fn from(document: ChartDocument) -> Self {
        document.into_value()
    }
}

/// Splits an RFC 6901 pointer into unescaped tokens. `None` unless it starts
/// with `/`.
fn pointer_tokens(pointer: &str) -> Option<impl Iterator<Item = String> + '_> {
    let rest = pointer.strip_prefix('/')?;
    Some(
        rest.split('/')
            .map(|token| token.replace("~1", "/").replace("~0", "~")),
    )
}

fn step<'a>(value: &'a Value, token: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(token),
        Value::Array(items) => token.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn step_mut<'a>(value: &'a mut Value, token: &str) -> Option<&'a mut Value> {
    match value {
        Value::Object(map) => map.get_mut(token),
        Value::Array(items) => token.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> ChartDocument {
        serde_json::from_value(value).expect("object document")
    }

    #[test]
    fn pointer_walks_objects_and_arrays() {
        let doc = document(json!({
            "options": {"scales": {"yAxes": [{"ticks": {"min": 0}}]}},
            "a/b": {"~": 1}
        }));
        assert_eq!(doc.pointer("/options/scales/yAxes/0/ticks/min"), Some(&json!(0)));
        assert_eq!(doc.pointer("/a~1b/~0"), Some(&json!(1)));
        assert_eq!(doc.pointer("/options/missing"), None);
        assert_eq!(doc.pointer("options"), None);
        assert_eq!(doc.pointer(""), None);
    }

    #[test]
    fn pointer_mut_edits_in_place() {
        let mut doc = document(json!({"options": {"responsive": true}}));
        *doc.pointer_mut("/options/responsive").expect("present") = json!("auto");
        assert_eq!(doc.to_json_string().expect("json"), r#"{"options":{"responsive":"auto"}}"#);
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert!(ChartDocument::from_json_str("[1,2]").is_err());
    }
}
