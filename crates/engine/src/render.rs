//! Render invocation
//!
//! The rendering entry point is a capability, not a linkage detail: any
//! value implementing [`RenderRoutine`] is acceptable, however it is
//! packaged. Scripts name their routine in the header (`renderer:` key,
//! defaulting to the file stem) and the name is resolved against a
//! [`RoutineRegistry`] at invocation time.
//!
//! A routine receives the sampled assignment and the per-sample ChaCha8
//! stream, continued from where the sampler left off. Everything a routine
//! draws from that stream is therefore reproducible from the sample seed
//! alone.

use genart_core::{Error, ParameterAssignment, RenderFailure, Result};
use image::RgbaImage;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::sync::Arc;

/// The rendering capability: turn an assignment plus a seeded stream into
/// image pixels.
pub trait RenderRoutine: Send + Sync {
    /// Render one sample.
    ///
    /// `stream` is the per-sample stream, already consumed by the sampler;
    /// draw from it for any randomness beyond the sampled parameters.
    fn render(
        &self,
        assignment: &ParameterAssignment,
        stream: &mut ChaCha8Rng,
    ) -> std::result::Result<RgbaImage, RenderFailure>;
}

impl std::fmt::Debug for dyn RenderRoutine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RenderRoutine")
    }
}

/// Closures with the right shape are routines too.
impl<F> RenderRoutine for F
where
    F: Fn(&ParameterAssignment, &mut ChaCha8Rng) -> std::result::Result<RgbaImage, RenderFailure>
        + Send
        + Sync,
{
    fn render(
        &self,
        assignment: &ParameterAssignment,
        stream: &mut ChaCha8Rng,
    ) -> std::result::Result<RgbaImage, RenderFailure> {
        self(assignment, stream)
    }
}

/// Name → routine table.
///
/// The CLI registers the built-in routines at startup; library users may
/// register their own under any free name.
#[derive(Default, Clone)]
pub struct RoutineRegistry {
    routines: HashMap<String, Arc<dyn RenderRoutine>>,
}

impl RoutineRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the built-in routines.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::routines::register_builtins(&mut registry);
        registry
    }

    /// Register a routine under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, routine: Arc<dyn RenderRoutine>) {
        self.routines.insert(name.into(), routine);
    }

    /// Resolve a routine by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn RenderRoutine>> {
        self.routines
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownRoutine {
                name: name.to_string(),
            })
    }

    /// Registered routine names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.routines.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// One rendered sample: pixels plus the naming triple.
///
/// Produced by the render invoker, consumed immediately by output writing,
/// then discarded.
pub struct RenderedImage {
    /// The image pixels
    pub pixels: RgbaImage,
    /// Script name (file stem) for the output filename
    pub script_name: String,
    /// Sample index within the batch
    pub index: u64,
    /// The sample seed that produced this image
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn one_pixel(
        _assignment: &ParameterAssignment,
        stream: &mut ChaCha8Rng,
    ) -> std::result::Result<RgbaImage, RenderFailure> {
        let shade = stream.gen::<u8>();
        Ok(RgbaImage::from_pixel(1, 1, image::Rgba([shade, 0, 0, 255])))
    }

    #[test]
    fn test_registry_resolves_registered_routine() {
        let mut registry = RoutineRegistry::new();
        registry.register("pixel", Arc::new(one_pixel));
        assert!(registry.get("pixel").is_ok());
        assert_eq!(registry.names(), vec!["pixel"]);
    }

    #[test]
    fn test_unknown_routine_is_an_error() {
        let registry = RoutineRegistry::new();
        let err = registry.get("voronoi").unwrap_err();
        assert!(matches!(err, Error::UnknownRoutine { name } if name == "voronoi"));
    }

    #[test]
    fn test_builtins_present() {
        let registry = RoutineRegistry::with_builtins();
        assert!(registry.get("circles").is_ok());
        assert!(registry.get("scatter").is_ok());
    }
}
