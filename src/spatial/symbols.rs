//! Ordered mapping from tile values to display glyphs

use std::str::FromStr;

use num_traits::PrimInt;

use crate::io::configuration::{DEFAULT_SYMBOLS, UNKNOWN_GLYPH};
use crate::io::error::{GridError, invalid_parameter};

/// Glyph table indexed by tile value
///
/// Index 0 is the glyph for value 0, index 1 for value 1 and so on. The table
/// carries no relation to the values actually stored in a grid; values it
/// cannot map render as [`UNKNOWN_GLYPH`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    glyphs: Vec<char>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS.to_vec())
    }
}

impl SymbolTable {
    /// Create a table from glyphs in tile-value order
    pub const fn new(glyphs: Vec<char>) -> Self {
        Self { glyphs }
    }

    /// Glyph for a tile value, if the table covers it
    ///
    /// Negative values and values at or past the table length are unmapped.
    pub fn glyph<T: PrimInt>(&self, value: T) -> Option<char> {
        value
            .to_usize()
            .and_then(|index| self.glyphs.get(index))
            .copied()
    }

    /// Glyph for a tile value, falling back to [`UNKNOWN_GLYPH`]
    pub fn glyph_or_unknown<T: PrimInt>(&self, value: T) -> char {
        self.glyph(value).unwrap_or(UNKNOWN_GLYPH)
    }

    /// Append a glyph for the next tile value
    pub fn push(&mut self, glyph: char) {
        self.glyphs.push(glyph);
    }

    /// Replace the glyph at an existing index
    ///
    /// Returns `false` when the index is not yet covered by the table.
    pub fn set(&mut self, index: usize, glyph: char) -> bool {
        self.glyphs.get_mut(index).is_some_and(|slot| {
            *slot = glyph;
            true
        })
    }

    /// Number of mapped tile values
    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the table maps nothing
    pub const fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyphs in tile-value order
    pub const fn as_slice(&self) -> &[char] {
        self.glyphs.as_slice()
    }
}

impl FromStr for SymbolTable {
    type Err = GridError;

    /// Every character of the input becomes one glyph, in order
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(invalid_parameter(
                "symbols",
                &s,
                &"at least one glyph is required",
            ));
        }
        Ok(Self::new(s.chars().collect()))
    }
}

impl From<Vec<char>> for SymbolTable {
    fn from(glyphs: Vec<char>) -> Self {
        Self::new(glyphs)
    }
}
