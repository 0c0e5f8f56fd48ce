//! Read-only request data handed to a view.

use std::sync::atomic::{AtomicU32, Ordering};

use serde_json::{Map, Value};

use crate::error::{RenderError, RenderResult};

/// Unique invocation identifier for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        let id = format!(
            "{:x}-{:x}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
            SEQUENCE.fetch_add(1, Ordering::Relaxed)
        );
        Self(id)
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structured input passed into a view's entry point.
///
/// Views only read from it. When a value needs reshaping (a date column,
/// a byte count) the view builds a new structure instead of editing this one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderRequest {
    data: Map<String, Value>,
}

impl RenderRequest {
    /// Create an empty request.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create from a JSON value. The value must be an object.
    pub fn from_value(value: Value) -> RenderResult<Self> {
        match value {
            Value::Object(data) => Ok(Self { data }),
            _ => Err(RenderError::TypeMismatch {
                field: "<root>".to_string(),
                expected: "object",
            }),
        }
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> RenderResult<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Get a raw value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Check whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Get a required string field.
    pub fn str(&self, key: &str) -> RenderResult<&str> {
        field_str(&self.data, key)
    }

    /// Get an optional string field.
    pub fn opt_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Get a required integer field.
    pub fn i64(&self, key: &str) -> RenderResult<i64> {
        field_i64(&self.data, key)
    }

    /// Get a boolean field, falling back to `default` when absent.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.data
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    /// Get a required array field.
    pub fn array(&self, key: &str) -> RenderResult<&[Value]> {
        match self.data.get(key) {
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(type_mismatch(key, "array")),
            None => Err(RenderError::MissingField(key.to_string())),
        }
    }

    /// Get a required nested object field.
    pub fn object(&self, key: &str) -> RenderResult<&Map<String, Value>> {
        match self.data.get(key) {
            Some(Value::Object(map)) => Ok(map),
            Some(_) => Err(type_mismatch(key, "object")),
            None => Err(RenderError::MissingField(key.to_string())),
        }
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.data
    }
}

/// Read a required string from a nested record.
pub fn field_str<'a>(record: &'a Map<String, Value>, key: &str) -> RenderResult<&'a str> {
    match record.get(key) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(type_mismatch(key, "string")),
        None => Err(RenderError::MissingField(key.to_string())),
    }
}

/// Read a required integer from a nested record.
///
/// Numeric strings are accepted since row data often arrives stringly typed.
pub fn field_i64(record: &Map<String, Value>, key: &str) -> RenderResult<i64> {
    match record.get(key) {
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| type_mismatch(key, "integer")),
        Some(Value::String(s)) => s.trim().parse().map_err(|_| type_mismatch(key, "integer")),
        Some(_) => Err(type_mismatch(key, "integer")),
        None => Err(RenderError::MissingField(key.to_string())),
    }
}

/// View an array element as a record.
pub fn as_record<'a>(value: &'a Value, context: &str) -> RenderResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| type_mismatch(context, "object"))
}

fn type_mismatch(key: &str, expected: &'static str) -> RenderError {
    RenderError::TypeMismatch {
        field: key.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> RenderRequest {
        RenderRequest::from_value(json!({
            "title": "Library",
            "count": 3,
            "page": "2",
            "flag": true,
            "items": [{"id": 7, "title": "T"}],
            "meta": {"author": "A"}
        }))
        .unwrap()
    }

    #[test]
    fn test_request_id_unique() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_value_requires_object() {
        assert!(RenderRequest::from_value(json!([1, 2])).is_err());
        assert!(RenderRequest::from_json("{}").is_ok());
    }

    #[test]
    fn test_accessors() {
        let req = request();
        assert_eq!(req.str("title").unwrap(), "Library");
        assert_eq!(req.i64("count").unwrap(), 3);
        assert_eq!(req.i64("page").unwrap(), 2);
        assert!(req.bool_or("flag", false));
        assert!(req.bool_or("absent", true));
        assert_eq!(req.array("items").unwrap().len(), 1);
        assert_eq!(req.object("meta").unwrap()["author"], "A");
        assert_eq!(req.opt_str("missing"), None);
    }

    #[test]
    fn test_missing_and_mismatch() {
        let req = request();
        assert!(matches!(
            req.str("missing"),
            Err(RenderError::MissingField(ref k)) if k == "missing"
        ));
        assert!(matches!(
            req.array("title"),
            Err(RenderError::TypeMismatch { expected: "array", .. })
        ));
    }

    #[test]
    fn test_record_helpers() {
        let req = request();
        let record = as_record(&req.array("items").unwrap()[0], "items").unwrap();
        assert_eq!(field_i64(record, "id").unwrap(), 7);
        assert_eq!(field_str(record, "title").unwrap(), "T");
        assert!(field_str(record, "abstract").is_err());
    }
}
