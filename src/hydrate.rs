//! Lenient JSON hydration for catalog records
//!
//! External frontends exchange catalog records as plain JSON: a single
//! object, an array of objects, or a string containing serialized JSON.
//! Hydration turns such a value into typed instances without validating it.
//! Missing or mistyped fields come out as zero values, null and scalars
//! pass through untouched, and nothing is ever fabricated for absent input.
//! The only failure mode is malformed JSON text on the string-input path.

use std::collections::BTreeMap;

use serde_json::Value;

/// A record shape that can be built leniently from a raw JSON value.
pub trait Hydrate: Sized {
    /// Build an instance from a raw JSON value.
    ///
    /// Never fails: fields that are missing or carry the wrong type take
    /// their zero value instead.
    fn from_raw(raw: &Value) -> Self;

    /// Hydrate from JSON text, parsing it first.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `text` is not valid JSON; no partial
    /// instance is produced.
    fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let raw: Value = serde_json::from_str(text)?;
        Ok(Self::from_raw(&raw))
    }

    /// Build an instance from an empty object: every field takes its zero
    /// value.
    fn create_from() -> Self {
        Self::from_raw(&Value::Object(serde_json::Map::new()))
    }
}

/// Outcome of hydrating an arbitrary JSON value.
///
/// Mirrors the shape of the input: sequences stay sequences (hydrated
/// element-wise, order preserved), keyed maps stay keyed, and anything
/// that is not an object passes through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Hydrated<T> {
    /// Input was null; nothing is fabricated.
    Absent,
    /// A single instance hydrated from an object.
    One(T),
    /// A sequence, each element hydrated independently in order.
    Seq(Vec<Hydrated<T>>),
    /// An object treated as a map from keys to hydrated values.
    ByKey(BTreeMap<String, T>),
    /// A scalar, passed through untouched.
    Raw(Value),
}

impl<T> Hydrated<T> {
    /// Flatten into a plain vector of instances, dropping null and scalar
    /// passthroughs.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Hydrated::One(value) => vec![value],
            Hydrated::Seq(items) => items.into_iter().flat_map(Hydrated::into_vec).collect(),
            Hydrated::ByKey(map) => map.into_values().collect(),
            Hydrated::Absent | Hydrated::Raw(_) => Vec::new(),
        }
    }
}

/// Recursively hydrate `raw` into instances of `T`.
///
/// Arrays hydrate element-wise with order preserved; an object hydrates to
/// a single instance, or to a key-to-instance map when `as_map` is set;
/// null and scalars pass through unchanged.
pub fn convert_values<T: Hydrate>(raw: &Value, as_map: bool) -> Hydrated<T> {
    match raw {
        Value::Null => Hydrated::Absent,
        Value::Array(items) => Hydrated::Seq(
            items
                .iter()
                .map(|item| convert_values(item, false))
                .collect(),
        ),
        Value::Object(map) if as_map => Hydrated::ByKey(
            map.iter()
                .map(|(key, value)| (key.clone(), T::from_raw(value)))
                .collect(),
        ),
        Value::Object(_) => Hydrated::One(T::from_raw(raw)),
        scalar => Hydrated::Raw(scalar.clone()),
    }
}

/// Read a string field from a raw object, defaulting to empty when the
/// field is missing or not a string.
#[must_use]
pub fn str_field(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::commands::command::Command;
    use crate::commands::item::CommandItem;

    #[test]
    fn test_item_fields_survive_hydration() {
        let raw = json!({"desc": "say hi", "cmd": "echo hi"});
        let item = CommandItem::from_raw(&raw);
        assert_eq!(item.desc, "say hi");
        assert_eq!(item.cmd, "echo hi");
    }

    #[test]
    fn test_sequence_preserves_order() {
        let raw = json!({
            "name": "setup",
            "command": [
                {"desc": "first", "cmd": "echo 1"},
                {"desc": "second", "cmd": "echo 2"},
                {"desc": "third", "cmd": "echo 3"},
            ],
        });
        let command = Command::from_raw(&raw);
        assert_eq!(command.command.len(), 3);
        let descs: Vec<&str> = command.command.iter().map(|i| i.desc.as_str()).collect();
        assert_eq!(descs, ["first", "second", "third"]);
    }

    #[test]
    fn test_null_hydrates_to_absent() {
        let result = convert_values::<CommandItem>(&Value::Null, false);
        assert_eq!(result, Hydrated::Absent);
        assert!(result.into_vec().is_empty());
    }

    #[test]
    fn test_scalar_passes_through() {
        let result = convert_values::<CommandItem>(&json!(42), false);
        assert_eq!(result, Hydrated::Raw(json!(42)));
    }

    #[test]
    fn test_as_map_hydrates_values_by_key() {
        let raw = json!({
            "greet": {"desc": "say hi", "cmd": "echo hi"},
            "part": {"desc": "say bye", "cmd": "echo bye"},
        });
        let result = convert_values::<CommandItem>(&raw, true);
        let Hydrated::ByKey(map) = result else {
            panic!("Expected ByKey, got: {result:?}");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map["greet"].cmd, "echo hi");
        assert_eq!(map["part"].cmd, "echo bye");
    }

    #[test]
    fn test_json_text_matches_parsed_value() {
        let text = r#"{"name":"Greet","command":[{"desc":"say hi","cmd":"echo hi"}]}"#;
        let from_text = Command::from_json_str(text).unwrap();
        let from_value = Command::from_raw(&serde_json::from_str(text).unwrap());
        assert_eq!(from_text, from_value);
        assert_eq!(from_text.name, "Greet");
        assert_eq!(from_text.command.len(), 1);
        assert_eq!(from_text.command[0].desc, "say hi");
        assert_eq!(from_text.command[0].cmd, "echo hi");
    }

    #[test]
    fn test_invalid_json_text_errors() {
        let result = Command::from_json_str("{\"name\": ");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_object_yields_zero_values() {
        let command = Command::from_raw(&json!({}));
        assert_eq!(command.name, "");
        assert!(command.command.is_empty());
    }

    #[test]
    fn test_create_from_equals_empty_object() {
        assert_eq!(Command::create_from(), Command::from_raw(&json!({})));
        assert_eq!(
            CommandItem::create_from(),
            CommandItem::from_raw(&json!({}))
        );
    }

    #[test]
    fn test_mistyped_fields_fall_back_to_zero_values() {
        let raw = json!({"name": 7, "command": "not a list"});
        let command = Command::from_raw(&raw);
        assert_eq!(command.name, "");
        assert!(command.command.is_empty());
    }

    #[test]
    fn test_nested_sequences_hydrate_recursively() {
        let raw = json!([[{"desc": "inner", "cmd": "echo"}], {"desc": "outer", "cmd": "ls"}]);
        let items = convert_values::<CommandItem>(&raw, false).into_vec();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].desc, "inner");
        assert_eq!(items[1].desc, "outer");
    }
}
