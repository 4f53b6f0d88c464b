//! Plain-text catalog parsing
//!
//! The format is whitespace-delimited and bit-insensitive: an integer color
//! count followed by `name r g b` rows (channels 0-255), then an integer
//! brick count followed by `width height cost_cents` rows. Bricks costing
//! more than a dollar are still written in cents (a $1.25 brick is `125`).

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::catalog::bricks::BrickCatalog;
use crate::catalog::colors::{BrickColor, Palette};
use crate::io::error::{PlanError, Result, catalog_parse_error};

/// A fully parsed catalog file
#[derive(Debug, Clone)]
pub struct CatalogFile {
    /// Ordered brick colors with display names
    pub palette: Palette,
    /// Brick shapes, rotation variants included
    pub catalog: BrickCatalog,
}

/// Load and parse a catalog definition file
///
/// # Errors
///
/// Returns [`PlanError::CatalogRead`] when the file cannot be read and
/// [`PlanError::CatalogParse`] when its contents are malformed.
pub fn load_catalog(path: &Path) -> Result<CatalogFile> {
    let text = fs::read_to_string(path).map_err(|e| PlanError::CatalogRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_catalog(&text)
}

/// Parse catalog text
///
/// # Errors
///
/// Returns [`PlanError::CatalogParse`] on missing tokens, unparsable
/// numbers, out-of-range channels, or non-positive brick dimensions.
pub fn parse_catalog(text: &str) -> Result<CatalogFile> {
    let mut tokens = Tokens::new(text);

    let color_count: usize = tokens.next_number("color count")?;
    let mut palette = Palette::new();
    for _ in 0..color_count {
        let name = tokens.next_token("color name")?.to_string();
        let r: u8 = tokens.next_number("red channel")?;
        let g: u8 = tokens.next_number("green channel")?;
        let b: u8 = tokens.next_number("blue channel")?;
        palette.push(name, BrickColor::from_rgb(r, g, b));
    }

    let brick_count: usize = tokens.next_number("brick count")?;
    let mut shapes = Vec::with_capacity(brick_count);
    for _ in 0..brick_count {
        let width: i32 = tokens.next_number("brick width")?;
        let height: i32 = tokens.next_number("brick height")?;
        let cost: u32 = tokens.next_number("brick cost")?;
        if width < 1 || height < 1 {
            return Err(catalog_parse_error(format!(
                "brick shape {width}x{height} has a non-positive dimension"
            )));
        }
        shapes.push((width, height, cost));
    }

    if palette.is_empty() {
        return Err(catalog_parse_error("catalog defines no colors"));
    }
    if shapes.is_empty() {
        return Err(catalog_parse_error("catalog defines no bricks"));
    }

    Ok(CatalogFile {
        palette,
        catalog: BrickCatalog::from_shapes(&shapes),
    })
}

// Whitespace token cursor tracking how far parsing got, for error messages
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            consumed: 0,
        }
    }

    fn next_token(&mut self, expected: &str) -> Result<&'a str> {
        let token = self.inner.next().ok_or_else(|| {
            catalog_parse_error(format!(
                "expected {expected}, found end of file after {} tokens",
                self.consumed
            ))
        })?;
        self.consumed += 1;
        Ok(token)
    }

    fn next_number<T>(&mut self, expected: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let token = self.next_token(expected)?;
        token
            .parse()
            .map_err(|e| catalog_parse_error(format!("bad {expected} '{token}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::parse_catalog;

    const SAMPLE: &str = "2\nblack 0 0 0\nred 255 0 0\n2\n1 1 10\n2 1 15\n";

    #[test]
    fn parses_colors_and_augmented_bricks() {
        let file = parse_catalog(SAMPLE).unwrap();

        assert_eq!(file.palette.len(), 2);
        assert_eq!(file.palette.name(1), Some("red"));
        // 1x1, 2x1, and the synthesized 1x2 rotation
        assert_eq!(file.catalog.len(), 3);
    }

    #[test]
    fn truncated_input_names_the_missing_field() {
        let err = parse_catalog("1\nblack 0 0").unwrap_err();

        assert!(err.to_string().contains("blue channel"));
    }

    #[test]
    fn out_of_range_channel_is_rejected() {
        assert!(parse_catalog("1\nloud 0 999 0\n0").is_err());
    }

    #[test]
    fn zero_sized_brick_is_rejected() {
        let err = parse_catalog("1\nblack 0 0 0\n1\n0 2 10").unwrap_err();

        assert!(err.to_string().contains("non-positive"));
    }
}
