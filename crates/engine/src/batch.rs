//! Batch generation loop
//!
//! Drives the whole pipeline for `index in 0..count`: derive the sample
//! seed, build the stream, sample the space, render, write. Samples are
//! mutually independent — each has its own seed and stream — but the loop
//! is sequential and aborts on the first failure: later samples' seeds do
//! not depend on earlier results, and a silent partial batch would
//! undermine the reproducibility contract of "`count` seeds from this
//! base produce these `count` images".

use crate::output::write_png;
use crate::render::{RenderedImage, RoutineRegistry};
use crate::sampler::sample;
use crate::script::Script;
use crate::seed::{derive_sample_seed, sample_stream, BaseSeed};
use genart_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Options for one generation batch.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Number of samples to generate
    pub count: u64,
    /// Directory receiving the PNG files
    pub output_dir: PathBuf,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            count: 1,
            output_dir: PathBuf::from("."),
        }
    }
}

/// What a completed batch produced.
#[derive(Debug)]
pub struct BatchSummary {
    /// Paths written, in index order
    pub written: Vec<PathBuf>,
    /// The base seed the batch ran under
    pub base_seed: BaseSeed,
}

/// Generate `options.count` images from `script` into `options.output_dir`.
///
/// `base_seed` is resolved by the caller (see [`BaseSeed::resolve`]) so it
/// can be surfaced to the operator before rendering starts; the summary
/// carries it back unchanged, explicitness included.
///
/// `on_image` is called after each image is written (index, path) so the
/// caller can report progress without the engine owning stdout.
///
/// Aborts on the first failure; the error carries the failing index for
/// render failures.
pub fn run_batch(
    script: &Script,
    registry: &RoutineRegistry,
    options: &BatchOptions,
    base_seed: BaseSeed,
    mut on_image: impl FnMut(u64, &Path),
) -> Result<BatchSummary> {
    let routine = registry.get(script.renderer())?;

    tracing::info!(
        script = script.name(),
        renderer = script.renderer(),
        base_seed = base_seed.value(),
        count = options.count,
        "starting batch"
    );

    let mut written = Vec::with_capacity(options.count as usize);
    for index in 0..options.count {
        let seed = derive_sample_seed(base_seed.value(), index);
        let mut stream = sample_stream(seed);

        let assignment = sample(script.space(), &mut stream)?;
        let pixels = routine
            .render(&assignment, &mut stream)
            .map_err(|source| Error::Render { index, source })?;

        let rendered = RenderedImage {
            pixels,
            script_name: script.name().to_string(),
            index,
            seed,
        };
        let path = write_png(&rendered, &options.output_dir)?;

        tracing::debug!(index, seed, path = %path.display(), "sample written");
        on_image(index, &path);
        written.push(path);
    }

    Ok(BatchSummary { written, base_seed })
}
