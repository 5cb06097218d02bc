//! Request body map and JSON helpers.
//!
//! Letmein request payloads are flat, single-level JSON objects with
//! string values only. [`BodyMap`] renders that shape directly instead
//! of going through serde: the wire format (spacing, quote-only
//! escaping) is normative for the service, so the rendering is spelled
//! out by hand. Responses are parsed with serde as usual.

use std::collections::BTreeMap;

use bytes::Bytes;

use crate::Result;
use crate::escape::escape_body_value;

/// Flat string-to-string association rendered as a JSON object.
///
/// Later inserts for the same key overwrite earlier ones. Keys are kept
/// in a `BTreeMap` so the rendered body is deterministic; callers must
/// not depend on field order in the wire payload regardless.
///
/// Numeric or boolean fields must be stringified by the caller before
/// insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyMap {
    fields: BTreeMap<String, String>,
}

impl BodyMap {
    /// Creates an empty body map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// No fields inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Renders the map as a JSON object string.
    ///
    /// Values get their embedded double quotes escaped; everything else
    /// passes through verbatim. An empty map renders as `{}`.
    #[must_use]
    pub fn render(&self) -> String {
        let fields = self
            .fields
            .iter()
            .map(|(key, value)| format!("\"{key}\": \"{}\"", escape_body_value(value)))
            .collect::<Vec<_>>()
            .join(", ");

        format!("{{{fields}}}")
    }

    /// Renders the map as JSON bytes for the wire.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(self.render().into_bytes())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BodyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so failures name the exact field that did
/// not deserialize (e.g., "data.pagination.per_page").
///
/// # Errors
///
/// Returns an error if JSON deserialization fails.
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_renders_empty_object() {
        assert_eq!(BodyMap::new().render(), "{}");
    }

    #[test]
    fn renders_fields_with_spacing() {
        let mut body = BodyMap::new();
        body.insert("name", "My Organization");
        assert_eq!(body.render(), r#"{"name": "My Organization"}"#);
    }

    #[test]
    fn escapes_quotes_in_values() {
        let mut body = BodyMap::new();
        body.insert("name", r#"O'Brien "Inc""#);
        assert_eq!(body.render(), r#"{"name": "O'Brien \"Inc\""}"#);
    }

    #[test]
    fn last_insert_wins() {
        let mut body = BodyMap::new();
        body.insert("name", "first");
        body.insert("name", "second");
        assert_eq!(body.render(), r#"{"name": "second"}"#);
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn rendered_body_reparses_to_inserted_pairs() {
        let mut body = BodyMap::new();
        body.insert("email", "test@test.com");
        body.insert("note", r#"a "quoted" word"#);

        let value: serde_json::Value =
            serde_json::from_str(&body.render()).expect("valid JSON");
        assert_eq!(value["email"], "test@test.com");
        assert_eq!(value["note"], r#"a "quoted" word"#);
        assert_eq!(value.as_object().expect("object").len(), 2);
    }

    #[test]
    fn from_iterator() {
        let body: BodyMap = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(body.get("a"), Some("1"));
        assert_eq!(body.get("b"), Some("2"));
    }

    #[test]
    fn from_json_reports_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Data {
            #[allow(dead_code)]
            token: String,
        }

        let err = from_json::<Data>(br#"{"token": 42}"#).expect_err("type mismatch");
        assert!(err.to_string().contains("token"));
    }
}
