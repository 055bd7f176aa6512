//! Grid dimension and styling value objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target grid dimensions for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    /// Columns.
    pub x: u32,
    /// Rows.
    pub y: u32,
}

impl GridSize {
    /// Creates a new grid size. Both dimensions must be positive.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Option<Self> {
        if x == 0 || y == 0 {
            return None;
        }
        Some(Self { x, y })
    }

    /// Number of cells to fill.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        (self.x as usize) * (self.y as usize)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// Error returned when parsing a grid size from text fails.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid grid size {input:?}: expected COLSxROWS with positive dimensions, e.g. 3x3")]
pub struct ParseGridSizeError {
    input: String,
}

impl FromStr for GridSize {
    type Err = ParseGridSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseGridSizeError {
            input: s.to_string(),
        };

        let (x, y) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let x: u32 = x.trim().parse().map_err(|_| invalid())?;
        let y: u32 = y.trim().parse().map_err(|_| invalid())?;

        Self::new(x, y).ok_or_else(invalid)
    }
}

/// Styling options passed through opaquely to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridStyle {
    /// Blend the two colors as a gradient.
    pub use_gradient: bool,
    /// Primary color.
    pub color1: String,
    /// Secondary color.
    pub color2: String,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            use_gradient: false,
            color1: "#1db954".to_string(),
            color2: "#191414".to_string(),
        }
    }
}
