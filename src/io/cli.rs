//! Command-line interface for building a grid and writing its layout

use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, MAX_GRID_DIMENSION, SCATTER_TILE,
};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::io::layout::LayoutMode;
use crate::io::placement::Placement;
use crate::spatial::{Grid, SymbolTable};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tilegrid")]
#[command(author, version, about = "Build a tile grid and print its layout")]
/// Command-line arguments for the grid renderer
pub struct Cli {
    /// Grid width in tiles
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Tile placement as X,Y,VALUE (repeatable, applied last)
    #[arg(
        short = 's',
        long = "set",
        value_name = "X,Y,VALUE",
        allow_hyphen_values = true
    )]
    pub placements: Vec<Placement>,

    /// Value written to every cell before anything else
    #[arg(short, long, allow_hyphen_values = true)]
    pub fill: Option<i32>,

    /// Glyphs in tile-value order, e.g. " #~"
    #[arg(short = 'y', long)]
    pub symbols: Option<SymbolTable>,

    /// Layout to print
    #[arg(short, long, value_enum, default_value_t = LayoutMode::Formatted)]
    pub mode: LayoutMode,

    /// Probability of turning each cell into a wall after filling
    #[arg(long, value_name = "PROBABILITY")]
    pub scatter: Option<f64>,

    /// Random seed for reproducible scattering
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write the layout to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail on placements outside the grid instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Suppress warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if skipped placements should be reported
    pub const fn should_warn(&self) -> bool {
        !self.quiet
    }
}

/// Builds the grid described by CLI arguments and writes its layout
pub struct GridRenderer {
    cli: Cli,
}

impl GridRenderer {
    /// Create a renderer for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the grid: fill, then scatter, then placements
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A dimension exceeds `MAX_GRID_DIMENSION`
    /// - The scatter probability is outside `[0, 1]`
    /// - A placement is out of bounds while `--strict` is set
    pub fn build(&self) -> Result<Grid> {
        self.validate()?;

        let mut grid = Grid::new(self.cli.width, self.cli.height);
        if let Some(symbols) = &self.cli.symbols {
            grid.set_symbols(symbols.clone());
        }

        if let Some(value) = self.cli.fill {
            grid.fill(value);
        }

        if let Some(probability) = self.cli.scatter {
            let mut rng = StdRng::seed_from_u64(self.cli.seed);
            grid.scatter(&mut rng, SCATTER_TILE, probability);
        }

        for placement in &self.cli.placements {
            if self.cli.strict {
                grid.try_set_tile(placement.x, placement.y, placement.value)?;
            } else if !placement.apply(&mut grid) {
                self.warn_skipped(placement, &grid);
            }
        }

        Ok(grid)
    }

    /// Build the grid and render it in the selected mode
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::build`]
    pub fn render(&self) -> Result<String> {
        let grid = self.build()?;
        Ok(self.cli.mode.render(&grid))
    }

    /// Render and write the layout to the output file or stdout
    ///
    /// # Errors
    ///
    /// Returns an error if building fails or the layout cannot be written
    pub fn run(&self) -> Result<()> {
        let layout = self.render()?;

        match &self.cli.output {
            Some(path) => write_layout_file(path, &layout),
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{layout}")?;
                Ok(())
            }
        }
    }

    fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.cli.width), ("height", self.cli.height)] {
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if let Some(probability) = self.cli.scatter {
            if !(0.0..=1.0).contains(&probability) {
                return Err(invalid_parameter(
                    "scatter",
                    &probability,
                    &"must be between 0 and 1",
                ));
            }
        }

        Ok(())
    }

    // Allow print for user feedback on skipped placements
    #[allow(clippy::print_stderr)]
    fn warn_skipped(&self, placement: &Placement, grid: &Grid) {
        if self.cli.should_warn() {
            eprintln!(
                "Skipping placement ({}, {}) = {}: outside the {}x{} grid",
                placement.x,
                placement.y,
                placement.value,
                grid.width(),
                grid.height()
            );
        }
    }
}

fn write_layout_file(path: &Path, layout: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    std::fs::write(path, format!("{layout}\n")).map_err(|source| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}
