//! Property Bag - a read-only, typed view over one decoded JSON object.
//!
//! Every getter is total: a missing key, an explicit `null`, or a value of
//! an incompatible JSON type all yield `None`. Picking a default is left to
//! the caller so each decoder states its fallback at the call site.

use serde_json::{Map, Value};

/// Borrowed view over a JSON object.
#[derive(Debug, Clone, Copy)]
pub struct PropertyBag<'a> {
    properties: &'a Map<String, Value>,
}

impl<'a> PropertyBag<'a> {
    pub fn new(properties: &'a Map<String, Value>) -> Self {
        Self { properties }
    }

    /// View `value` as a bag if it is a JSON object.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(Self::new)
    }

    /// Raw value under `key`, `None` for missing or `null`.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.properties.get(key).filter(|v| !v.is_null())
    }

    pub fn get_string(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    /// 32-bit integer. Values outside the `i32` range are treated as mistyped.
    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.get(key).and_then(<i32 as FromProperty>::from_property)
    }

    pub fn get_long(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn get_boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Array whose elements convert to `T`.
    ///
    /// `None` if the key is missing or not an array. Elements that do not
    /// convert to `T` are skipped; the convertible ones keep their order.
    pub fn get_array<T: FromProperty<'a>>(&self, key: &str) -> Option<Vec<T>> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(T::from_property).collect())
    }

    pub fn get_object(&self, key: &str) -> Option<PropertyBag<'a>> {
        self.get(key).and_then(PropertyBag::from_value)
    }

    /// Entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Owned copy of the underlying object, verbatim.
    pub fn to_map(&self) -> Map<String, Value> {
        self.properties.clone()
    }
}

/// Conversion of one JSON value into a typed bag element.
pub trait FromProperty<'a>: Sized {
    fn from_property(value: &'a Value) -> Option<Self>;
}

impl<'a> FromProperty<'a> for i32 {
    fn from_property(value: &'a Value) -> Option<Self> {
        value.as_i64().and_then(|v| i32::try_from(v).ok())
    }
}

impl<'a> FromProperty<'a> for i64 {
    fn from_property(value: &'a Value) -> Option<Self> {
        value.as_i64()
    }
}

impl<'a> FromProperty<'a> for bool {
    fn from_property(value: &'a Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> FromProperty<'a> for &'a str {
    fn from_property(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> FromProperty<'a> for String {
    fn from_property(value: &'a Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl<'a> FromProperty<'a> for PropertyBag<'a> {
    fn from_property(value: &'a Value) -> Option<Self> {
        PropertyBag::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "name": "Baron",
            "level": 7,
            "gameId": 6_543_210_987_i64,
            "basic": true,
            "nothing": null,
            "ids": [1, 2, "three", 4],
            "nested": { "x": 50, "y": 60 },
            "entries": [{ "a": 1 }, 5, { "a": 2 }],
            "ratio": 0.5,
        })
    }

    #[test]
    fn test_typed_getters() {
        let doc = sample();
        let bag = PropertyBag::from_value(&doc).unwrap();

        assert_eq!(bag.get_string("name"), Some("Baron"));
        assert_eq!(bag.get_int("level"), Some(7));
        assert_eq!(bag.get_long("gameId"), Some(6_543_210_987));
        assert_eq!(bag.get_boolean("basic"), Some(true));
        assert_eq!(bag.get_object("nested").and_then(|n| n.get_int("y")), Some(60));
    }

    #[test]
    fn test_missing_null_and_mistyped_are_absent() {
        let doc = sample();
        let bag = PropertyBag::from_value(&doc).unwrap();

        assert_eq!(bag.get_int("missing"), None);
        assert_eq!(bag.get_int("nothing"), None);
        assert_eq!(bag.get_string("nothing"), None);
        assert_eq!(bag.get_int("name"), None);
        assert_eq!(bag.get_string("level"), None);
        assert_eq!(bag.get_boolean("level"), None);
        assert_eq!(bag.get_int("ratio"), None);
        assert!(bag.get_object("name").is_none());
        assert!(bag.get_array::<i32>("nested").is_none());
    }

    #[test]
    fn test_int_out_of_range_is_absent() {
        let doc = sample();
        let bag = PropertyBag::from_value(&doc).unwrap();

        assert_eq!(bag.get_int("gameId"), None);
        assert_eq!(bag.get_long("level"), Some(7));
    }

    #[test]
    fn test_get_array_skips_mistyped_elements() {
        let doc = sample();
        let bag = PropertyBag::from_value(&doc).unwrap();

        assert_eq!(bag.get_array::<i32>("ids"), Some(vec![1, 2, 4]));
        assert_eq!(bag.get_array::<&str>("ids"), Some(vec!["three"]));

        let entries = bag.get_array::<PropertyBag>("entries").unwrap();
        let values: Vec<_> = entries.iter().filter_map(|e| e.get_int("a")).collect();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_non_object_is_not_a_bag() {
        assert!(PropertyBag::from_value(&json!([1, 2])).is_none());
        assert!(PropertyBag::from_value(&json!("text")).is_none());
        assert!(PropertyBag::from_value(&Value::Null).is_none());
    }

    #[test]
    fn test_to_map_is_verbatim() {
        let doc = sample();
        let bag = PropertyBag::from_value(&doc).unwrap();

        assert_eq!(Value::Object(bag.to_map()), doc);
    }

    #[test]
    fn test_entries_keep_document_order() {
        let doc: Value = serde_json::from_str(r#"{ "zeta": 1, "alpha": 2, "mid": null }"#).unwrap();
        let bag = PropertyBag::from_value(&doc).unwrap();

        let keys: Vec<_> = bag.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
