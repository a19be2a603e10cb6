//! Output naming and writing
//!
//! The filename encodes everything needed to reproduce an image:
//! script name, sample index, and sample seed. Collisions across
//! invocations with the same triple are accepted — identical inputs are
//! supposed to overwrite identically.

use crate::render::RenderedImage;
use genart_core::{Error, Result};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Destination filename for one sample: `{script_name}_{index}_{seed}.png`.
pub fn filename(script_name: &str, index: u64, seed: u64) -> String {
    format!("{script_name}_{index}_{seed}.png")
}

/// Encode a rendered image as PNG and write it into `dir`.
///
/// Encoding happens fully in memory before the file is touched, so a
/// failed render or encode never leaves a partially written output file.
pub fn write_png(image: &RenderedImage, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(filename(&image.script_name, image.index, image.seed));

    let mut encoded = Vec::new();
    image
        .pixels
        .write_to(&mut Cursor::new(&mut encoded), image::ImageOutputFormat::Png)
        .map_err(|e| Error::Encode(e.to_string()))?;
    fs::write(&path, encoded)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_filename_exactness() {
        assert_eq!(
            filename("circles", 0, 1847293847),
            "circles_0_1847293847.png"
        );
    }

    #[test]
    fn test_filename_is_pure() {
        assert_eq!(filename("a", 3, 9), filename("a", 3, 9));
        assert_ne!(filename("a", 3, 9), filename("a", 4, 9));
    }

    #[test]
    fn test_write_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let rendered = RenderedImage {
            pixels: RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255])),
            script_name: "dot".to_string(),
            index: 1,
            seed: 99,
        };
        let path = write_png(&rendered, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "dot_1_99.png");

        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back.dimensions(), (2, 2));
        assert_eq!(back.get_pixel(0, 0), &image::Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_write_into_missing_dir_fails_cleanly() {
        let rendered = RenderedImage {
            pixels: RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 255])),
            script_name: "dot".to_string(),
            index: 0,
            seed: 1,
        };
        let err = write_png(&rendered, Path::new("/nonexistent/gen-art-out")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
