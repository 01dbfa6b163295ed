//! Fixed-size tile grid with bounds-checked access and text layouts
//!
//! Cells are stored row-major in an `Array2` of shape `(height, width)` and
//! addressed by `(x, y)` coordinates, x growing rightwards and y downwards.
//! Both layouts walk rows top-to-bottom and columns left-to-right.

use std::fmt;

use ndarray::Array2;
use num_traits::{PrimInt, Signed};
use rand::Rng;

use crate::io::configuration::ROW_SEPARATOR;
use crate::io::error::{GridError, Result};
use crate::spatial::symbols::SymbolTable;

/// Rectangular grid of integer tiles with a glyph table for rendering
///
/// Dimensions are fixed at construction. Tile values are unconstrained; the
/// symbol table only decides how they render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T = i32> {
    cells: Array2<T>,
    symbols: SymbolTable,
    width: usize,
    height: usize,
}

impl<T> Grid<T>
where
    T: PrimInt + Signed + fmt::Display,
{
    /// Create a grid with every cell set to zero and the default symbols
    ///
    /// Zero dimensions are accepted and yield an empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::zeros((height, width)),
            symbols: SymbolTable::default(),
            width,
            height,
        }
    }

    /// Replace the symbol table, builder style
    #[must_use]
    pub fn with_symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Read-only view of the storage, indexed `[y, x]`
    pub const fn cells(&self) -> &Array2<T> {
        &self.cells
    }

    /// Whether `(x, y)` addresses a cell
    ///
    /// Valid coordinates are `0..width` and `0..height`; `x == width` and
    /// `y == height` are outside.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    fn index(&self, x: i32, y: i32) -> Option<[usize; 2]> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (col < self.width && row < self.height).then_some([row, col])
    }

    /// Tile at `(x, y)`, or `None` outside the grid
    pub fn get_tile(&self, x: i32, y: i32) -> Option<T> {
        self.index(x, y)
            .and_then(|index| self.cells.get(index))
            .copied()
    }

    /// Tile at `(x, y)`, or `-1` outside the grid
    ///
    /// The sentinel collides with a legal tile value; prefer [`Self::get_tile`]
    /// when negative tiles are in play.
    pub fn tile_or_sentinel(&self, x: i32, y: i32) -> T {
        self.get_tile(x, y).unwrap_or_else(|| -T::one())
    }

    /// Store `value` at `(x, y)`
    ///
    /// Returns `false` and leaves the grid untouched when out of bounds.
    pub fn set_tile(&mut self, x: i32, y: i32, value: T) -> bool {
        self.index(x, y)
            .and_then(|index| self.cells.get_mut(index))
            .is_some_and(|cell| {
                *cell = value;
                true
            })
    }

    /// Store `value` at `(x, y)`, reporting the coordinates on failure
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `(x, y)` is outside the grid
    pub fn try_set_tile(&mut self, x: i32, y: i32, value: T) -> Result<()> {
        if self.set_tile(x, y, value) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                position: [x, y],
                dimensions: self.dimensions(),
            })
        }
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Reset every cell to zero
    pub fn clear(&mut self) {
        self.fill(T::zero());
    }

    /// Write `value` into each cell independently with the given probability
    ///
    /// Probabilities outside `[0, 1]` are clamped and NaN counts as zero.
    /// Returns how many cells were written.
    pub fn scatter<R: Rng>(&mut self, rng: &mut R, value: T, probability: f64) -> usize {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };

        let mut written = 0;
        for cell in &mut self.cells {
            if rng.random_bool(probability) {
                *cell = value;
                written += 1;
            }
        }
        written
    }

    /// Glyph table used by the formatted layout
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Mutable access to the glyph table, for extending it in place
    pub const fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    /// Replace the glyph table
    pub fn set_symbols(&mut self, symbols: SymbolTable) {
        self.symbols = symbols;
    }

    /// Decimal tile values, one line per row
    ///
    /// Values are concatenated without separators, so the result is only
    /// unambiguous while every tile is a single digit from 0 to 9.
    pub fn layout_raw(&self) -> String {
        self.render_rows(|layout, value| layout.push_str(&value.to_string()))
    }

    /// Tile glyphs, one line per row
    ///
    /// Values the symbol table does not cover, including negatives and a
    /// value equal to the table length, render as `?`.
    pub fn layout_formatted(&self) -> String {
        self.render_rows(|layout, value| layout.push(self.symbols.glyph_or_unknown(value)))
    }

    // Rows joined by the separator, no trailing separator
    fn render_rows(&self, mut render_cell: impl FnMut(&mut String, T)) -> String {
        let mut layout = String::with_capacity(self.height * (self.width + 1));
        for y in 0..self.height {
            if y > 0 {
                layout.push(ROW_SEPARATOR);
            }
            for x in 0..self.width {
                if let Some(&value) = self.cells.get([y, x]) {
                    render_cell(&mut layout, value);
                }
            }
        }
        layout
    }
}

impl<T> fmt::Display for Grid<T>
where
    T: PrimInt + Signed + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.layout_formatted())
    }
}
