use std::ffi::OsString;

use indexmap::IndexMap;

use crate::Value;

/// Option values from one parse
///
/// Holds every non-optional option (defaulted when absent) plus the optional ones that were
/// given, in declaration order. Each [`Parser::process`][crate::Parser::process] call returns a
/// new one; nothing else holds on to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseResult {
    values: IndexMap<String, Value>,
    remaining: Vec<OsString>,
}

impl ParseResult {
    pub(crate) fn new(values: IndexMap<String, Value>, remaining: Vec<OsString>) -> Self {
        Self { values, remaining }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(Value::as_list)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(name, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Positional arguments, in order; they are not options and are otherwise ignored
    pub fn remaining(&self) -> &[OsString] {
        &self.remaining
    }

    pub fn into_values(self) -> IndexMap<String, Value> {
        self.values
    }

    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.values)
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for ParseResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.values.serialize(serializer)
    }
}

impl std::ops::Index<&str> for ParseResult {
    type Output = Value;

    /// # Panics
    ///
    /// When `name` is not in the result
    fn index(&self, name: &str) -> &Value {
        match self.values.get(name) {
            Some(value) => value,
            None => panic!("`{name}` is not in the parse result"),
        }
    }
}
