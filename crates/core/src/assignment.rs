//! Parameter assignments
//!
//! One concrete sample: a value per declared parameter, in declaration
//! order. Produced fresh per sample by the sampler and never mutated
//! afterward.

use crate::value::ParamValue;

/// Mapping from parameter name to sampled value, in declaration order.
///
/// The sampler pushes entries in the space's declaration order, so
/// iteration over an assignment mirrors the space it was drawn from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterAssignment {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterAssignment {
    /// Create an empty assignment with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        ParameterAssignment {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry. Order of insertion is preserved.
    pub fn push(&mut self, name: impl Into<String>, value: ParamValue) {
        self.entries.push((name.into(), value));
    }

    /// Look up a value by parameter name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Numeric value by name, widening `Int` to `f64`.
    pub fn f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(ParamValue::as_f64)
    }

    /// Integer value by name.
    pub fn i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ParamValue::as_i64)
    }

    /// String value by name.
    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, ParamValue)> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the assignment is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParameterAssignment {
    type Item = &'a (String, ParamValue);
    type IntoIter = std::slice::Iter<'a, (String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
