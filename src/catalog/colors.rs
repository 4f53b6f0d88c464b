//! Brick colors and the fixed palette

use crate::spatial::NO_COLOR;

/// An RGBA color packed as `A << 24 | R << 16 | G << 8 | B`
///
/// Carries equality semantics only; the sole ordering notion is the
/// per-channel distance used by [`Palette::nearest_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrickColor(u32);

impl BrickColor {
    /// Pack the four channels into a color value
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Pack an opaque color (full alpha)
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 255)
    }

    /// Red channel
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Alpha channel
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// All four channels as `[r, g, b, a]`
    pub const fn channels(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// Sum of absolute per-channel differences over R, G, and B
    pub const fn distance(self, other: Self) -> u32 {
        (self.red().abs_diff(other.red()) as u32)
            + (self.green().abs_diff(other.green()) as u32)
            + (self.blue().abs_diff(other.blue()) as u32)
    }
}

/// One named color available for bricks
#[derive(Debug, Clone)]
pub struct PaletteEntry {
    /// Display name used in the parts list
    pub name: String,
    /// Color value
    pub color: BrickColor,
}

/// The fixed, ordered list of brick colors
///
/// Entry order defines the palette indices stored in the color board and on
/// placed bricks.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create an empty palette
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a named color, assigning it the next index
    pub fn push(&mut self, name: impl Into<String>, color: BrickColor) {
        self.entries.push(PaletteEntry {
            name: name.into(),
            color,
        });
    }

    /// Number of palette colors
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette holds no colors
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color value for a palette index
    pub fn color(&self, index: i32) -> Option<BrickColor> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.entries.get(i))
            .map(|entry| entry.color)
    }

    /// Display name for a palette index
    pub fn name(&self, index: i32) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.entries.get(i))
            .map(|entry| entry.name.as_str())
    }

    /// Iterate over entries in index order
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Index of the nearest palette color by per-channel difference sum
    ///
    /// Pixels without full alpha never match and map to [`NO_COLOR`], as does
    /// any lookup against an empty palette. Ties keep the earliest entry.
    pub fn nearest_index(&self, color: BrickColor) -> i32 {
        if color.alpha() != 255 {
            return NO_COLOR;
        }

        let mut best_distance = u32::MAX;
        let mut best_index = NO_COLOR;
        for (index, entry) in self.entries.iter().enumerate() {
            let distance = entry.color.distance(color);
            if distance < best_distance {
                best_distance = distance;
                best_index = index as i32;
            }
        }

        best_index
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
