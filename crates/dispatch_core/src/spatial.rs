//! Grid coordinates and the Manhattan distance metric.
//!
//! The simulation world is a rectangular integer grid. Every cost in the
//! system (ride length, approach distance, completion steps) is a Manhattan
//! distance on this grid; there is no other cost model.

use serde::{Deserialize, Serialize};

/// A cell on the simulation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPoint {
    pub row: u32,
    pub col: u32,
}

impl GridPoint {
    /// The corner every vehicle starts from.
    pub const ORIGIN: GridPoint = GridPoint { row: 0, col: 0 };

    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Manhattan distance between two grid cells.
pub fn manhattan_distance(a: GridPoint, b: GridPoint) -> u64 {
    u64::from(a.row.abs_diff(b.row)) + u64::from(a.col.abs_diff(b.col))
}
