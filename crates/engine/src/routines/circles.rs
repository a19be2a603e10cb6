//! Layered translucent discs.
//!
//! Parameters (all optional, sampled or constant per the script):
//! - `size` — canvas side length in pixels (default 512)
//! - `discs` — number of discs (default 48)
//! - `min_radius` / `max_radius` — disc radius as a fraction of the canvas
//!   (defaults 0.02 / 0.25)
//! - `palette` — color palette name (default `dusk`)
//!
//! Disc placement, radius jitter, color pick, and opacity all come from
//! the per-sample stream.

use super::{canvas_size, palette};
use crate::render::RenderRoutine;
use genart_core::{ParameterAssignment, RenderFailure};
use image::{Rgba, RgbaImage};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// The `circles` built-in.
pub struct Circles;

impl RenderRoutine for Circles {
    fn render(
        &self,
        assignment: &ParameterAssignment,
        stream: &mut ChaCha8Rng,
    ) -> Result<RgbaImage, RenderFailure> {
        let size = canvas_size(assignment)?;
        let discs = assignment.i64("discs").unwrap_or(48);
        if !(1..=10_000).contains(&discs) {
            return Err(RenderFailure(format!(
                "disc count {discs} out of range [1, 10000]"
            )));
        }
        let min_radius = assignment.f64("min_radius").unwrap_or(0.02);
        let max_radius = assignment.f64("max_radius").unwrap_or(0.25);
        if !(0.0 < min_radius && min_radius <= max_radius && max_radius <= 1.0) {
            return Err(RenderFailure(format!(
                "radius fractions [{min_radius}, {max_radius}] must satisfy 0 < min <= max <= 1"
            )));
        }
        let palette_name = assignment.str("palette").unwrap_or("dusk");
        let colors = palette(palette_name)
            .ok_or_else(|| RenderFailure(format!("unknown palette '{palette_name}'")))?;

        let mut canvas = RgbaImage::from_pixel(size, size, Rgba([18, 18, 24, 255]));
        let side = size as f64;

        for _ in 0..discs {
            let cx = stream.gen_range(0.0..side);
            let cy = stream.gen_range(0.0..side);
            let radius = stream.gen_range(min_radius * side..=max_radius * side);
            let color = colors[stream.gen_range(0..colors.len())];
            let opacity = stream.gen_range(0.15..0.65);
            blend_disc(&mut canvas, cx, cy, radius, color, opacity);
        }

        Ok(canvas)
    }
}

/// Source-over blend of one disc onto the canvas.
fn blend_disc(canvas: &mut RgbaImage, cx: f64, cy: f64, radius: f64, color: [u8; 3], opacity: f64) {
    let (width, height) = canvas.dimensions();
    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil() as u32).min(width.saturating_sub(1));
    let y1 = ((cy + radius).ceil() as u32).min(height.saturating_sub(1));
    let r2 = radius * radius;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let pixel = canvas.get_pixel_mut(x, y);
            for channel in 0..3 {
                let base = pixel[channel] as f64;
                let over = color[channel] as f64;
                pixel[channel] = (base + (over - base) * opacity).round() as u8;
            }
        }
    }
}
