//! Spatial data structures
//!
//! This module contains:
//! - The fixed-size tile grid
//! - Symbol tables mapping tile values to glyphs

/// Grid storage, bounds-checked access and layouts
pub mod grid;
/// Tile value to glyph mapping
pub mod symbols;

pub use grid::Grid;
pub use symbols::SymbolTable;
