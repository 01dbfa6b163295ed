//! Grid constants and runtime configuration defaults

// Tile codes with a fixed meaning
/// Sentinel returned by sentinel-style reads outside the grid
pub const OUT_OF_BOUNDS_TILE: i32 = -1;
/// Value written by random scattering
pub const SCATTER_TILE: i32 = 1;

// Rendering
/// Default glyphs: index 0 = empty, index 1 = wall
pub const DEFAULT_SYMBOLS: [char; 2] = [' ', '#'];
/// Glyph emitted for tiles the symbol table cannot map
pub const UNKNOWN_GLYPH: char = '?';
/// Separator placed between rows (never after the last one)
pub const ROW_SEPARATOR: char = '\n';

// Default values for configurable parameters
/// Default grid width when none is given
pub const DEFAULT_WIDTH: usize = 10;
/// Default grid height when none is given
pub const DEFAULT_HEIGHT: usize = 10;
/// Fixed seed for reproducible scattering
pub const DEFAULT_SEED: u64 = 42;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension on the command line
pub const MAX_GRID_DIMENSION: usize = 10_000;
