//! Attribute lists carried by [`super::data_array::DataArray`] nodes and [`super::data_grid::DataGrid`]s.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Attribute name used to hide an array from encoders.
pub const HIDDEN_ATTRIBUTE: &str = "RAPIO_HIDDEN";

/// A tagged scalar attribute value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AttributeValue {
    String(String),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Long(v) => Some(*v as f64),
            AttributeValue::Float(v) => Some(*v as f64),
            AttributeValue::Double(v) => Some(*v),
            AttributeValue::String(_) => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Long(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Double(value)
    }
}

/// An ordered-by-name list of key/value attributes.
///
/// A `BTreeMap` is used rather than a `HashMap` so attribute emission order is
/// deterministic, which keeps encoder output and snapshot tests stable.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attributes(BTreeMap<String, AttributeValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.0.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.0.iter()
    }

    /// Whether the `RAPIO_HIDDEN` marker attribute is set.
    pub fn is_hidden(&self) -> bool {
        self.contains(HIDDEN_ATTRIBUTE)
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        if hidden {
            self.set(HIDDEN_ATTRIBUTE, "true");
        } else {
            self.remove(HIDDEN_ATTRIBUTE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_flag_round_trips() {
        let mut attrs = Attributes::new();
        assert!(!attrs.is_hidden());
        attrs.set_hidden(true);
        assert!(attrs.is_hidden());
        attrs.set_hidden(false);
        assert!(!attrs.is_hidden());
    }

    #[test]
    fn attribute_lookup() {
        let mut attrs = Attributes::new();
        attrs.set("Units", "dBZ");
        attrs.set("BackgroundValue", -99900.0_f64);
        assert_eq!(attrs.get("Units").and_then(|v| v.as_str()), Some("dBZ"));
        assert_eq!(attrs.get("BackgroundValue").and_then(|v| v.as_f64()), Some(-99900.0));
        assert!(attrs.get("Missing").is_none());
    }
}
