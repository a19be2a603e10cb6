//! Core types for gen-art
//!
//! This crate defines the foundational types used throughout the system:
//! - ParamValue: Scalar value type for parameters
//! - ParameterKind: Sampling rule for a single parameter
//! - ParameterSpec / ParameterSpace: Declared parameter space of a script
//! - ParameterAssignment: One concrete sampled assignment
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assignment;
pub mod error;
pub mod space;
pub mod value;

pub use assignment::ParameterAssignment;
pub use error::{Error, RenderFailure, Result};
pub use space::{ParameterKind, ParameterSpace, ParameterSpec};
pub use value::ParamValue;
