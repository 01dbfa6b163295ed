//! Tile placements given as `x,y,value` text

use std::str::FromStr;

use crate::io::error::{GridError, invalid_placement};
use crate::spatial::Grid;

/// Single tile write requested from outside the library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
    /// Tile value to store
    pub value: i32,
}

impl Placement {
    /// Write this placement into `grid`
    ///
    /// Returns `false` when the coordinates fall outside the grid.
    pub fn apply(&self, grid: &mut Grid) -> bool {
        grid.set_tile(self.x, self.y, self.value)
    }
}

impl FromStr for Placement {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let &[x, y, value] = parts.as_slice() else {
            return Err(invalid_placement(
                s,
                &format!("expected 3 comma-separated integers, found {}", parts.len()),
            ));
        };

        let parse = |name: &str, part: &str| {
            part.parse::<i32>()
                .map_err(|e| invalid_placement(s, &format!("{name} '{part}': {e}")))
        };

        Ok(Self {
            x: parse("x", x)?,
            y: parse("y", y)?,
            value: parse("value", value)?,
        })
    }
}
