//! Image decoding, palette resolution, and PNG export
//!
//! Owns the matching policy that turns source pixels into board color
//! indices: nearest palette color by per-channel absolute difference, with
//! anything short of full alpha mapping to "no color". An optional ordered
//! dithering pass perturbs the matched color before a second match.

use std::path::Path;

use image::RgbaImage;

use crate::catalog::{BrickColor, Palette};
use crate::io::error::{PlanError, Result};
use crate::spatial::{ColorBoard, Point};

// 8x8 Bayer threshold matrix; thresholds are entry/128
const DITHER_MATRIX: [[u8; 8]; 8] = [
    [1, 49, 13, 61, 4, 52, 16, 64],
    [33, 17, 45, 29, 36, 20, 48, 32],
    [9, 57, 5, 53, 12, 60, 8, 56],
    [41, 25, 37, 21, 44, 28, 40, 24],
    [3, 51, 15, 63, 2, 50, 14, 62],
    [35, 19, 47, 31, 34, 18, 46, 30],
    [11, 59, 7, 55, 10, 58, 6, 54],
    [43, 27, 39, 23, 42, 26, 38, 22],
];

const DITHER_DIVISOR: f32 = 128.0;

/// Decode an image file into an RGBA pixel buffer
///
/// # Errors
///
/// Returns [`PlanError::ImageLoad`] when the file cannot be opened or
/// decoded.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|e| PlanError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(image.to_rgba8())
}

/// Resolve a decoded image into a color-indexed board
///
/// Every pixel maps to its nearest palette color, or to the no-color
/// sentinel when it lacks full alpha. With `dither` enabled, the matched
/// color is darkened by the Bayer threshold at `(x mod 8, y mod 8)` and
/// re-matched, trading flat regions for a banded texture.
pub fn resolve_board(image: &RgbaImage, palette: &Palette, dither: bool) -> ColorBoard {
    ColorBoard::new(image.width(), image.height(), |pos| {
        let pixel = image.get_pixel(pos.x as u32, pos.y as u32);
        let color = BrickColor::from_rgba(pixel.0[0], pixel.0[1], pixel.0[2], pixel.0[3]);

        let index = palette.nearest_index(color);
        if !dither || index < 0 {
            return index;
        }

        match palette.color(index) {
            Some(matched) => palette.nearest_index(dithered(matched, pos)),
            None => index,
        }
    })
}

// Darkens each channel by its own magnitude times the threshold, keeping
// alpha untouched
fn dithered(color: BrickColor, pos: Point) -> BrickColor {
    let threshold = DITHER_MATRIX
        .get(pos.x as usize % 8)
        .and_then(|row| row.get(pos.y as usize % 8))
        .map_or(0.0, |&entry| f32::from(entry) / DITHER_DIVISOR);

    let darken = |channel: u8| -> u8 {
        let value = f32::from(channel) / 255.0;
        ((value - value * threshold) * 255.0) as u8
    };

    BrickColor::from_rgba(
        darken(color.red()),
        darken(color.green()),
        darken(color.blue()),
        color.alpha(),
    )
}

/// Save an RGBA buffer as a PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns [`PlanError::FileSystem`] when the parent directory cannot be
/// created and [`PlanError::ImageExport`] when encoding or writing fails.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| PlanError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| PlanError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::resolve_board;
    use crate::catalog::{BrickColor, Palette};
    use crate::spatial::{NO_COLOR, Point};
    use image::{Rgba, RgbaImage};

    fn two_color_palette() -> Palette {
        let mut palette = Palette::new();
        palette.push("black", BrickColor::from_rgb(0, 0, 0));
        palette.push("white", BrickColor::from_rgb(255, 255, 255));
        palette
    }

    #[test]
    fn transparent_pixels_resolve_to_no_color() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([200, 200, 200, 255]));
        image.put_pixel(1, 0, Rgba([200, 200, 200, 0]));

        let board = resolve_board(&image, &two_color_palette(), false);
        assert_eq!(board.color_index(Point::new(0, 0)), 1);
        assert_eq!(board.color_index(Point::new(1, 0)), NO_COLOR);
    }

    #[test]
    fn dithering_is_deterministic() {
        let mut image = RgbaImage::new(8, 8);
        for (index, pixel) in image.pixels_mut().enumerate() {
            let value = (index * 3 % 256) as u8;
            *pixel = Rgba([value, value, value, 255]);
        }

        let palette = two_color_palette();
        let first = resolve_board(&image, &palette, true);
        let second = resolve_board(&image, &palette, true);

        for pos in first.cells() {
            assert_eq!(first.color_index(pos), second.color_index(pos));
            assert!(first.color_index(pos) >= 0);
        }
    }
}
