//! Fixed-size 2D tile grid for game boards and similar tile maps
//!
//! A [`Grid`] holds integer tiles with bounds-checked access and renders as
//! either raw decimal values or glyphs looked up in a [`SymbolTable`].

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Grid storage and symbol tables
pub mod spatial;

pub use io::error::{GridError, Result};
pub use spatial::{Grid, SymbolTable};
