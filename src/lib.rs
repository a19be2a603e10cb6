//! gen-art — deterministic parameter-space sampling for generative art
//!
//! A script declares a parameter space as YAML inside its leading
//! documentation block and names a rendering entry point. gen-art samples
//! that space, derives one seed per sample from the base seed, renders
//! each assignment under its own ChaCha8 stream, and writes
//! `{script_name}_{index}_{seed}.png` — so any past output is exactly
//! reproducible from (script, base seed, index).
//!
//! # Quick start
//!
//! ```ignore
//! use gen_art::{run_batch, BatchOptions, RoutineRegistry, Script};
//!
//! let script = Script::load("demos/circles.genart")?;
//! let registry = RoutineRegistry::with_builtins();
//! let summary = run_batch(&script, &registry, &BatchOptions::default(), |_, _| {})?;
//! eprintln!("base seed: {}", summary.base_seed.value());
//! ```
//!
//! The engine internals live in `genart-engine`, the foundational types in
//! `genart-core`; both are re-exported here.

pub use genart_core::*;
pub use genart_engine::*;
