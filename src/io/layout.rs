//! Layout selection for rendering a grid as text

use std::fmt;

use clap::ValueEnum;
use num_traits::{PrimInt, Signed};

use crate::spatial::Grid;

/// Which text rendering of a grid to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LayoutMode {
    /// Decimal tile values
    Raw,
    /// Glyphs from the symbol table
    #[default]
    Formatted,
}

impl LayoutMode {
    /// Render `grid` in this mode
    pub fn render<T>(self, grid: &Grid<T>) -> String
    where
        T: PrimInt + Signed + fmt::Display,
    {
        match self {
            Self::Raw => grid.layout_raw(),
            Self::Formatted => grid.layout_formatted(),
        }
    }
}
