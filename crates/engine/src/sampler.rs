//! Parameter sampler
//!
//! Draws one concrete value per declared parameter, in declaration order,
//! consuming the per-sample stream deterministically. Replaying the same
//! stream state yields the same assignment.
//!
//! ## Stream-consumption policy
//!
//! `constant` parameters consume **zero** stream state. Adding or removing
//! a constant therefore never perturbs the draws of other parameters for a
//! fixed seed.

use genart_core::{
    Error, ParamValue, ParameterAssignment, ParameterKind, ParameterSpace, Result,
};
use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Beta, Normal, Poisson};

/// Draw one assignment from the space using the given stream.
///
/// Each spec is re-validated before its draw (defense in depth beyond
/// parse-time validation); a violation surfaces as
/// [`Error::MalformedSpec`].
pub fn sample<R: Rng>(space: &ParameterSpace, rng: &mut R) -> Result<ParameterAssignment> {
    let mut assignment = ParameterAssignment::with_capacity(space.len());
    for spec in space {
        spec.validate()?;
        let value = match &spec.kind {
            ParameterKind::Uniform { min, max } => {
                ParamValue::Float(rng.sample(Uniform::new_inclusive(*min, *max)))
            }
            ParameterKind::Randint { min, max } => ParamValue::Int(rng.gen_range(*min..=*max)),
            ParameterKind::Choice { choices } => {
                // Draw the index as u64: usize draws would consume
                // different stream state on 32- and 64-bit targets.
                let index = rng.gen_range(0..choices.len() as u64) as usize;
                choices[index].clone()
            }
            // Zero stream consumption, by policy.
            ParameterKind::Constant { value } => value.clone(),
            ParameterKind::Normal { mean, stddev } => {
                let dist = Normal::new(*mean, *stddev)
                    .map_err(|e| Error::MalformedSpec(format!("normal '{}': {e}", spec.name)))?;
                ParamValue::Float(rng.sample(dist))
            }
            ParameterKind::Beta { alpha, beta } => {
                let dist = Beta::new(*alpha, *beta)
                    .map_err(|e| Error::MalformedSpec(format!("beta '{}': {e}", spec.name)))?;
                ParamValue::Float(rng.sample(dist))
            }
            ParameterKind::Poisson { rate } => {
                let dist = Poisson::new(*rate)
                    .map_err(|e| Error::MalformedSpec(format!("poisson '{}': {e}", spec.name)))?;
                ParamValue::Int(rng.sample(dist) as i64)
            }
        };
        assignment.push(spec.name.clone(), value);
    }
    Ok(assignment)
}
