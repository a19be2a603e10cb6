//! Parameter value type
//!
//! This module defines `ParamValue`, the scalar value type flowing from the
//! declaration (choice lists, constants) through the sampler into render
//! routines. Four variants only; no implicit coercion on equality.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar value of a parameter.
///
/// YAML scalars in `choices` and `value` positions deserialize onto this
/// enum untagged: `true` → `Bool`, `42` → `Int`, `0.5` → `Float`,
/// everything else → `Str`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// UTF-8 string
    Str(String),
}

impl ParamValue {
    /// The value as `f64`, widening `Int`. `None` for other variants.
    ///
    /// Widening integers is deliberate: render routines treat numeric
    /// parameters uniformly whether declared as `constant: 512` or sampled
    /// from a continuous distribution.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Float(f) => Some(*f),
            ParamValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// The value as `i64`, or `None` if not an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The value as `&str`, or `None` if not a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The value as `bool`, or `None` if not a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_yaml_scalars() {
        let v: ParamValue = serde_yaml::from_str("true").unwrap();
        assert_eq!(v, ParamValue::Bool(true));

        let v: ParamValue = serde_yaml::from_str("42").unwrap();
        assert_eq!(v, ParamValue::Int(42));

        let v: ParamValue = serde_yaml::from_str("0.25").unwrap();
        assert_eq!(v, ParamValue::Float(0.25));

        let v: ParamValue = serde_yaml::from_str("ochre").unwrap();
        assert_eq!(v, ParamValue::Str("ochre".to_string()));
    }

    #[test]
    fn test_as_f64_widens_int() {
        assert_eq!(ParamValue::Int(512).as_f64(), Some(512.0));
        assert_eq!(ParamValue::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(ParamValue::Str("x".into()).as_f64(), None);
    }

    #[test]
    fn test_as_i64_does_not_truncate_floats() {
        assert_eq!(ParamValue::Float(1.9).as_i64(), None);
        assert_eq!(ParamValue::Int(7).as_i64(), Some(7));
    }

    #[test]
    fn test_no_cross_type_equality() {
        assert_ne!(ParamValue::Int(1), ParamValue::Float(1.0));
        assert_ne!(ParamValue::Str("1".into()), ParamValue::Int(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(ParamValue::Float(0.5).to_string(), "0.5");
        assert_eq!(ParamValue::Str("coral".into()).to_string(), "coral");
    }
}
