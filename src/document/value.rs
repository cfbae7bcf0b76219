//! Frontmatter values

use serde::Serialize;
use serde_yaml::{Number, Value as YamlValue};

use super::Metadata;
use crate::error::{Result, frontmatter::unsupported_key};

/// A single frontmatter value.
///
/// Numbers keep YAML's integer/float distinction but compare numerically
/// against plain Rust numbers, so `1970` equals both `1970_i64` and `1970.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Metadata),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Metadata> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Human readable name of the variant, used in messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// Convert a parsed YAML value, stripping tags and stringifying scalar keys.
    pub(crate) fn from_yaml(value: YamlValue) -> Result<Self> {
        Ok(match value {
            YamlValue::Null => Value::Null,
            YamlValue::Bool(b) => Value::Bool(b),
            YamlValue::Number(n) => Value::Number(n),
            YamlValue::String(s) => Value::String(s),
            YamlValue::Sequence(items) => Value::Sequence(
                items
                    .into_iter()
                    .map(Value::from_yaml)
                    .collect::<Result<Vec<_>>>()?,
            ),
            YamlValue::Mapping(mapping) => Value::Mapping(Metadata::from_yaml_mapping(mapping)?),
            YamlValue::Tagged(tagged) => Value::from_yaml(tagged.value)?,
        })
    }
}

/// Turn a YAML mapping key into a metadata key.
pub(crate) fn key_to_string(key: YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => key_to_string(tagged.value),
        other => Err(unsupported_key(
            serde_json::to_string(&other).unwrap_or_else(|_| "<complex key>".to_string()),
        )),
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialEq<f64> for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == Some(*other)
    }
}

impl<T> PartialEq<[T]> for Value
where
    Value: PartialEq<T>,
{
    fn eq(&self, other: &[T]) -> bool {
        self.as_sequence().is_some_and(|items| {
            items.len() == other.len() && items.iter().zip(other).all(|(a, b)| a == b)
        })
    }
}

impl<T, const N: usize> PartialEq<[T; N]> for Value
where
    Value: PartialEq<T>,
{
    fn eq(&self, other: &[T; N]) -> bool {
        <Value as PartialEq<[T]>>::eq(self, other.as_slice())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<Metadata> for Value {
    fn from(map: Metadata) -> Self {
        Value::Mapping(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_across_int_and_float() {
        let int = Value::from(1970_i64);
        assert_eq!(int, 1970_i64);
        assert_eq!(int, 1970.0);
        assert_eq!(Value::from(2.5), 2.5);
        assert_ne!(Value::from(2.5), 2_i64);
    }

    #[test]
    fn test_sequence_compares_with_slices() {
        let tags = Value::from(vec!["rust", "yaml"]);
        assert_eq!(tags, ["rust", "yaml"]);
        assert_ne!(tags, ["rust"]);
        assert_ne!(Value::from("rust"), ["rust"]);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from(true).kind(), "boolean");
        assert_eq!(Value::from(vec![1_i64]).kind(), "sequence");
        assert_eq!(Value::from(Metadata::new()).kind(), "mapping");
    }

    #[test]
    fn test_from_yaml_strips_tags() {
        let yaml: YamlValue = serde_yaml::from_str("!custom hello").unwrap();
        assert_eq!(Value::from_yaml(yaml).unwrap(), "hello");
    }

    #[test]
    fn test_scalar_keys_are_stringified() {
        assert_eq!(key_to_string(YamlValue::Number(2024_i64.into())).unwrap(), "2024");
        assert_eq!(key_to_string(YamlValue::Bool(true)).unwrap(), "true");
        assert_eq!(key_to_string(YamlValue::Null).unwrap(), "null");
    }

    #[test]
    fn test_sequence_key_is_rejected() {
        let key: YamlValue = serde_yaml::from_str("[a, b]").unwrap();
        let err = key_to_string(key).unwrap_err();
        assert!(err.to_string().contains("[\"a\",\"b\"]"));
    }

    #[test]
    fn test_null_serializes_as_json_null() {
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Value::from(vec![1_i64, 2])).unwrap(),
            "[1,2]"
        );
    }
}
