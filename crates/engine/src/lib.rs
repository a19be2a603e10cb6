//! Sampling-and-reproducibility engine for gen-art
//!
//! The engine turns a script with an embedded parameter-space declaration
//! into a batch of reproducible images:
//!
//! 1. [`script`] parses the declaration out of the script's leading
//!    documentation block (as data, never executed).
//! 2. [`seed`] resolves the base seed and derives one seed per sample
//!    index; same `(base, index)` pair, same seed, always.
//! 3. [`sampler`] draws one concrete assignment per sample from a
//!    ChaCha8 stream seeded with the sample seed.
//! 4. [`render`] invokes the script's render routine with the assignment
//!    and the *same* stream, continued where the sampler left off.
//! 5. [`output`] names and writes the PNG as
//!    `{script_name}_{index}_{seed}.png`.
//!
//! [`batch::run_batch`] drives the whole sequence and aborts on the first
//! failure.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod output;
pub mod render;
pub mod routines;
pub mod sampler;
pub mod script;
pub mod seed;

pub use batch::{run_batch, BatchOptions, BatchSummary};
pub use output::{filename, write_png};
pub use render::{RenderRoutine, RenderedImage, RoutineRegistry};
pub use sampler::sample;
pub use script::Script;
pub use seed::{derive_sample_seed, sample_stream, BaseSeed};
