//! Picker values
//!
//! Values are compared strictly: there is no coercion between kinds, so
//! `Null` never matches an empty string and `Bool(false)` never matches `Int(0)`.
//! Numbers form a single kind: `Int(2)` equals `Float(2.0)`, and `NaN` equals
//! nothing. A value that was never provided at all is modelled one level up as
//! `Option<PickerValue>::None`, which no item can match.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A selectable value carried by an item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PickerValue {
    /// Explicit null (the default placeholder's value)
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// UTF-8 string
    String(String),
}

impl PickerValue {
    /// Extract as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PickerValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract as i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PickerValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract as f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PickerValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PickerValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PickerValue::Null)
    }

    /// Get type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            PickerValue::Null => "Null",
            PickerValue::Bool(_) => "Bool",
            PickerValue::Int(_) => "Int",
            PickerValue::Float(_) => "Float",
            PickerValue::String(_) => "String",
        }
    }
}

impl PartialEq for PickerValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PickerValue::Null, PickerValue::Null) => true,
            (PickerValue::Bool(a), PickerValue::Bool(b)) => a == b,
            (PickerValue::Int(a), PickerValue::Int(b)) => a == b,
            (PickerValue::Float(a), PickerValue::Float(b)) => a == b,
            (PickerValue::Int(i), PickerValue::Float(f))
            | (PickerValue::Float(f), PickerValue::Int(i)) => *i as f64 == *f,
            (PickerValue::String(a), PickerValue::String(b)) => a == b,
            _ => false,
        }
    }
}

/// Text form used when deriving list keys (`label + value`)
impl fmt::Display for PickerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerValue::Null => f.write_str("null"),
            PickerValue::Bool(v) => write!(f, "{}", v),
            PickerValue::Int(v) => write!(f, "{}", v),
            PickerValue::Float(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            PickerValue::Float(v) => write!(f, "{}", v),
            PickerValue::String(v) => f.write_str(v),
        }
    }
}

impl From<bool> for PickerValue {
    fn from(v: bool) -> Self {
        PickerValue::Bool(v)
    }
}

impl From<i32> for PickerValue {
    fn from(v: i32) -> Self {
        PickerValue::Int(v as i64)
    }
}

impl From<i64> for PickerValue {
    fn from(v: i64) -> Self {
        PickerValue::Int(v)
    }
}

impl From<f64> for PickerValue {
    fn from(v: f64) -> Self {
        PickerValue::Float(v)
    }
}

impl From<&str> for PickerValue {
    fn from(v: &str) -> Self {
        PickerValue::String(v.to_string())
    }
}

impl From<String> for PickerValue {
    fn from(v: String) -> Self {
        PickerValue::String(v)
    }
}

impl<T: Into<PickerValue>> From<Option<T>> for PickerValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(PickerValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_equality() {
        assert_eq!(PickerValue::from(1), PickerValue::Int(1));
        assert_ne!(PickerValue::Int(1), PickerValue::Float(1.5));
        assert_ne!(PickerValue::Null, PickerValue::from(""));
        assert_ne!(PickerValue::Bool(false), PickerValue::Int(0));
        assert_ne!(PickerValue::Float(f64::NAN), PickerValue::Float(f64::NAN));
    }

    #[test]
    fn test_numbers_compare_across_representations() {
        assert_eq!(PickerValue::Int(2), PickerValue::Float(2.0));
        assert_eq!(PickerValue::Float(-3.0), PickerValue::Int(-3));
        assert_ne!(PickerValue::Int(0), PickerValue::Float(f64::NAN));
        assert_ne!(PickerValue::Float(2.0), PickerValue::from("2"));
    }

    #[test]
    fn test_display_for_keys() {
        assert_eq!(PickerValue::Null.to_string(), "null");
        assert_eq!(PickerValue::Int(42).to_string(), "42");
        assert_eq!(PickerValue::Float(2.0).to_string(), "2");
        assert_eq!(PickerValue::Float(1.5).to_string(), "1.5");
        assert_eq!(PickerValue::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(PickerValue::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(PickerValue::Bool(true).as_bool(), Some(true));
        assert_eq!(PickerValue::Int(7).as_i64(), Some(7));
        assert_eq!(PickerValue::Int(7).as_f64(), None);
        assert_eq!(PickerValue::from("x").as_str(), Some("x"));
        assert!(PickerValue::from(None::<i64>).is_null());
    }

    #[test]
    fn test_json_shapes() {
        let values: Vec<PickerValue> =
            serde_json::from_str(r#"[null, true, 3, 2.5, "java"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                PickerValue::Null,
                PickerValue::Bool(true),
                PickerValue::Int(3),
                PickerValue::Float(2.5),
                PickerValue::from("java"),
            ]
        );
    }
}
