//! Parameter space types
//!
//! A script declares its parameter space as a YAML list inside its leading
//! documentation block. Each entry names one parameter and its sampling
//! rule (`distribution`). The declaration order is significant: it is the
//! deterministic sampling order, so a fixed-length draw from the random
//! stream maps predictably onto parameters.
//!
//! ## Declaration shape
//!
//! ```yaml
//! parameters:
//!   - name: radius
//!     distribution: uniform
//!     min: 0.05
//!     max: 0.4
//!   - name: palette
//!     distribution: choice
//!     choices: [dusk, coral, mono]
//! ```
//!
//! ## Validation
//!
//! - `name` unique across the space
//! - `uniform` / `randint`: `min <= max`
//! - `choice`: non-empty choice list
//! - `normal`: `stddev > 0`
//! - `beta`: `alpha > 0` and `beta > 0`
//! - `poisson`: `rate > 0`

use crate::error::{Error, Result};
use crate::value::ParamValue;
use serde::Deserialize;
use std::collections::HashSet;

/// Sampling rule for a single parameter.
///
/// The YAML `distribution` field selects the variant; the remaining fields
/// of the entry are the variant's payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "distribution", rename_all = "lowercase")]
pub enum ParameterKind {
    /// Uniform-continuous over `[min, max]`, both ends inclusive
    Uniform {
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },
    /// Uniform-discrete over the integer range `[min, max]`, both ends inclusive
    Randint {
        /// Lower bound (inclusive)
        min: i64,
        /// Upper bound (inclusive)
        max: i64,
    },
    /// Categorical: uniform over the listed choices, equal probability each
    Choice {
        /// The candidate values
        choices: Vec<ParamValue>,
    },
    /// Fixed value; consumes zero random-stream state
    Constant {
        /// The fixed value
        value: ParamValue,
    },
    /// Normal (Gaussian) with the given mean and standard deviation
    Normal {
        /// Mean of the distribution
        mean: f64,
        /// Standard deviation, must be positive
        stddev: f64,
    },
    /// Beta distribution over `[0, 1]` with shape parameters `alpha`, `beta`
    Beta {
        /// First shape parameter, must be positive
        alpha: f64,
        /// Second shape parameter, must be positive
        beta: f64,
    },
    /// Poisson-distributed non-negative integer with the given rate
    Poisson {
        /// Expected number of events, must be positive
        rate: f64,
    },
}

/// One declared parameter: a unique name plus its sampling rule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name, unique within its space
    pub name: String,
    /// Sampling rule
    #[serde(flatten)]
    pub kind: ParameterKind,
}

impl ParameterSpec {
    /// Check that the kind's payload is internally consistent.
    ///
    /// Called at parse time and again at sample time (defense in depth).
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MalformedSpec(
                "parameter with empty name".to_string(),
            ));
        }
        match &self.kind {
            ParameterKind::Uniform { min, max } => {
                if !min.is_finite() || !max.is_finite() {
                    return Err(Error::MalformedSpec(format!(
                        "uniform parameter '{}': bounds must be finite",
                        self.name
                    )));
                }
                if min > max {
                    return Err(Error::MalformedSpec(format!(
                        "uniform parameter '{}': min {} > max {}",
                        self.name, min, max
                    )));
                }
            }
            ParameterKind::Randint { min, max } => {
                if min > max {
                    return Err(Error::MalformedSpec(format!(
                        "randint parameter '{}': min {} > max {}",
                        self.name, min, max
                    )));
                }
            }
            ParameterKind::Choice { choices } => {
                if choices.is_empty() {
                    return Err(Error::MalformedSpec(format!(
                        "choice parameter '{}': empty choice list",
                        self.name
                    )));
                }
            }
            ParameterKind::Constant { .. } => {}
            ParameterKind::Normal { mean, stddev } => {
                if !mean.is_finite() || !stddev.is_finite() || *stddev <= 0.0 {
                    return Err(Error::MalformedSpec(format!(
                        "normal parameter '{}': stddev must be positive and finite",
                        self.name
                    )));
                }
            }
            ParameterKind::Beta { alpha, beta } => {
                if !(alpha.is_finite() && beta.is_finite() && *alpha > 0.0 && *beta > 0.0) {
                    return Err(Error::MalformedSpec(format!(
                        "beta parameter '{}': alpha and beta must be positive",
                        self.name
                    )));
                }
            }
            ParameterKind::Poisson { rate } => {
                if !(rate.is_finite() && *rate > 0.0) {
                    return Err(Error::MalformedSpec(format!(
                        "poisson parameter '{}': rate must be positive",
                        self.name
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Ordered, validated sequence of parameter specs.
///
/// Created once per invocation by the script parser; immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpace {
    specs: Vec<ParameterSpec>,
}

impl ParameterSpace {
    /// Build a space from specs, validating each spec and name uniqueness.
    pub fn new(specs: Vec<ParameterSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        for spec in &specs {
            spec.validate()?;
            if !seen.insert(spec.name.as_str()) {
                return Err(Error::MalformedSpec(format!(
                    "duplicate parameter name '{}'",
                    spec.name
                )));
            }
        }
        Ok(ParameterSpace { specs })
    }

    /// Specs in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ParameterSpec> {
        self.specs.iter()
    }

    /// Look up a spec by name.
    pub fn get(&self, name: &str) -> Option<&ParameterSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    /// Number of declared parameters.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the space declares no parameters.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParameterSpace {
    type Item = &'a ParameterSpec;
    type IntoIter = std::slice::Iter<'a, ParameterSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_specs(yaml: &str) -> Vec<ParameterSpec> {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_parse_all_kinds() {
        let specs = parse_specs(
            r#"
- name: x
  distribution: uniform
  min: 0.0
  max: 1.0
- name: n
  distribution: randint
  min: 1
  max: 10
- name: palette
  distribution: choice
  choices: [dusk, coral]
- name: size
  distribution: constant
  value: 512
- name: drift
  distribution: normal
  mean: 0.0
  stddev: 0.1
- name: density
  distribution: beta
  alpha: 2.0
  beta: 5.0
- name: bursts
  distribution: poisson
  rate: 5.0
"#,
        );
        assert_eq!(specs.len(), 7);
        assert_eq!(specs[6].kind, ParameterKind::Poisson { rate: 5.0 });
        assert_eq!(
            specs[0].kind,
            ParameterKind::Uniform { min: 0.0, max: 1.0 }
        );
        assert_eq!(specs[1].kind, ParameterKind::Randint { min: 1, max: 10 });
        assert_eq!(
            specs[3].kind,
            ParameterKind::Constant {
                value: ParamValue::Int(512)
            }
        );
    }

    #[test]
    fn test_unknown_distribution_fails_to_parse() {
        let result: std::result::Result<Vec<ParameterSpec>, _> = serde_yaml::from_str(
            "- name: x\n  distribution: zipf\n  s: 2.0\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_uniform_min_above_max_rejected() {
        let spec = ParameterSpec {
            name: "x".to_string(),
            kind: ParameterKind::Uniform { min: 2.0, max: 1.0 },
        };
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("min 2 > max 1"));
    }

    #[test]
    fn test_randint_min_above_max_rejected() {
        let spec = ParameterSpec {
            name: "n".to_string(),
            kind: ParameterKind::Randint { min: 5, max: 4 },
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_empty_choices_rejected() {
        let spec = ParameterSpec {
            name: "palette".to_string(),
            kind: ParameterKind::Choice { choices: vec![] },
        };
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("empty choice list"));
    }

    #[test]
    fn test_nonpositive_stddev_rejected() {
        let spec = ParameterSpec {
            name: "drift".to_string(),
            kind: ParameterKind::Normal {
                mean: 0.0,
                stddev: 0.0,
            },
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_nonpositive_poisson_rate_rejected() {
        let spec = ParameterSpec {
            name: "bursts".to_string(),
            kind: ParameterKind::Poisson { rate: 0.0 },
        };
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("rate must be positive"));
    }

    #[test]
    fn test_nonpositive_beta_shape_rejected() {
        let spec = ParameterSpec {
            name: "density".to_string(),
            kind: ParameterKind::Beta {
                alpha: -1.0,
                beta: 2.0,
            },
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let specs = vec![
            ParameterSpec {
                name: "x".to_string(),
                kind: ParameterKind::Constant {
                    value: ParamValue::Int(1),
                },
            },
            ParameterSpec {
                name: "x".to_string(),
                kind: ParameterKind::Constant {
                    value: ParamValue::Int(2),
                },
            },
        ];
        let err = ParameterSpace::new(specs).unwrap_err();
        assert!(err.to_string().contains("duplicate parameter name 'x'"));
    }

    #[test]
    fn test_space_preserves_declaration_order() {
        let specs = parse_specs(
            "- name: b\n  distribution: constant\n  value: 1\n- name: a\n  distribution: constant\n  value: 2\n",
        );
        let space = ParameterSpace::new(specs).unwrap();
        let names: Vec<&str> = space.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(space.get("a").is_some());
        assert!(space.get("missing").is_none());
    }

    #[test]
    fn test_infinite_bounds_rejected() {
        let spec = ParameterSpec {
            name: "x".to_string(),
            kind: ParameterKind::Uniform {
                min: f64::NEG_INFINITY,
                max: 1.0,
            },
        };
        assert!(spec.validate().is_err());
    }
}
