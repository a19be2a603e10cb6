//! Dot field.
//!
//! Parameters (all optional):
//! - `size` — canvas side length in pixels (default 512)
//! - `points` — number of dots (default 400)
//! - `palette` — color palette name (default `mono`)
//! - `dot_size` — dot radius in pixels (default 2)

use super::{canvas_size, palette};
use crate::render::RenderRoutine;
use genart_core::{ParameterAssignment, RenderFailure};
use image::{Rgba, RgbaImage};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// The `scatter` built-in.
pub struct Scatter;

impl RenderRoutine for Scatter {
    fn render(
        &self,
        assignment: &ParameterAssignment,
        stream: &mut ChaCha8Rng,
    ) -> Result<RgbaImage, RenderFailure> {
        let size = canvas_size(assignment)?;
        let points = assignment.i64("points").unwrap_or(400);
        if !(1..=1_000_000).contains(&points) {
            return Err(RenderFailure(format!(
                "point count {points} out of range [1, 1000000]"
            )));
        }
        let dot_size = assignment.i64("dot_size").unwrap_or(2);
        if !(1..=64).contains(&dot_size) {
            return Err(RenderFailure(format!(
                "dot size {dot_size} out of range [1, 64]"
            )));
        }
        let palette_name = assignment.str("palette").unwrap_or("mono");
        let colors = palette(palette_name)
            .ok_or_else(|| RenderFailure(format!("unknown palette '{palette_name}'")))?;

        let mut canvas = RgbaImage::from_pixel(size, size, Rgba([245, 243, 238, 255]));
        let radius = dot_size as i64;

        for _ in 0..points {
            let cx = stream.gen_range(0..size) as i64;
            let cy = stream.gen_range(0..size) as i64;
            let color = colors[stream.gen_range(0..colors.len())];
            stamp_dot(&mut canvas, cx, cy, radius, color);
        }

        Ok(canvas)
    }
}

/// Stamp an opaque filled dot, clipped to the canvas.
fn stamp_dot(canvas: &mut RgbaImage, cx: i64, cy: i64, radius: i64, color: [u8; 3]) {
    let (width, height) = canvas.dimensions();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
                continue;
            }
            canvas.put_pixel(x as u32, y as u32, Rgba([color[0], color[1], color[2], 255]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_stream;

    #[test]
    fn test_deterministic_for_fixed_stream() {
        let assignment = ParameterAssignment::default();
        let a = Scatter
            .render(&assignment, &mut sample_stream(9))
            .unwrap();
        let b = Scatter
            .render(&assignment, &mut sample_stream(9))
            .unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_point_count_validated() {
        let mut assignment = ParameterAssignment::default();
        assignment.push("points", genart_core::ParamValue::Int(0));
        assert!(Scatter
            .render(&assignment, &mut sample_stream(1))
            .is_err());
    }
}
