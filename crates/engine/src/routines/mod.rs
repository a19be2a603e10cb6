//! Built-in render routines
//!
//! Two small routines ship with the tool so scripts work out of the box:
//! `circles` (layered translucent discs) and `scatter` (a dot field).
//! Both draw all of their placement randomness from the per-sample stream,
//! so their output is fully determined by the sample seed.

mod circles;
mod scatter;

pub use circles::Circles;
pub use scatter::Scatter;

use crate::render::RoutineRegistry;
use std::sync::Arc;

/// Register the built-in routines under their canonical names.
pub fn register_builtins(registry: &mut RoutineRegistry) {
    registry.register("circles", Arc::new(Circles));
    registry.register("scatter", Arc::new(Scatter));
}

/// Named color palettes shared by the built-ins.
///
/// Returns `None` for unknown palette names; routines surface that as a
/// render failure rather than guessing.
pub(crate) fn palette(name: &str) -> Option<&'static [[u8; 3]]> {
    match name {
        "dusk" => Some(&[
            [38, 70, 83],
            [42, 157, 143],
            [233, 196, 106],
            [244, 162, 97],
            [231, 111, 81],
        ]),
        "coral" => Some(&[
            [255, 111, 105],
            [255, 204, 92],
            [136, 216, 176],
            [255, 238, 173],
        ]),
        "mono" => Some(&[
            [34, 34, 34],
            [85, 85, 85],
            [136, 136, 136],
            [204, 204, 204],
        ]),
        _ => None,
    }
}

/// Canvas side length from the assignment's `size` parameter.
///
/// Defaults to 512; rejected outside `[1, 4096]` to keep accidental
/// constants from allocating absurd buffers.
pub(crate) fn canvas_size(
    assignment: &genart_core::ParameterAssignment,
) -> Result<u32, genart_core::RenderFailure> {
    let size = assignment.i64("size").unwrap_or(512);
    if (1..=4096).contains(&size) {
        Ok(size as u32)
    } else {
        Err(genart_core::RenderFailure(format!(
            "canvas size {size} out of range [1, 4096]"
        )))
    }
}
