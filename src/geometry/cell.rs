// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cell type for keypad positions.
//!
//! A cell is one of the 20 grid positions, numbered `y * WIDTH + x`.
//! Whether the cell holds a key is a property of the topology, not the cell.

use std::fmt;

use crate::geometry::constants::{HEIGHT, NCELLS, WIDTH};
use crate::geometry::KnightDelta;

/// A grid position in the range 0..NCELLS.
///
/// Newtype over the linear index so cells cannot be mixed up with lengths
/// or vowel counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Create a new cell, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NCELLS`.
    pub const fn new(index: usize) -> Self {
        assert!(index < NCELLS, "Cell out of range");
        Self(index as u8)
    }

    /// The cell at column `x`, row `y`, or None if outside the grid.
    pub fn from_xy(x: i32, y: i32) -> Option<Self> {
        if (0..WIDTH as i32).contains(&x) && (0..HEIGHT as i32).contains(&y) {
            Some(Self((y as usize * WIDTH + x as usize) as u8))
        } else {
            None
        }
    }

    /// Iterate over every cell in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..NCELLS).map(Cell::new)
    }

    /// Column, counting from the left.
    #[inline]
    pub fn x(self) -> i32 {
        (self.0 as usize % WIDTH) as i32
    }

    /// Row, counting from the top.
    #[inline]
    pub fn y(self) -> i32 {
        (self.0 as usize / WIDTH) as i32
    }

    /// The cell one knight move away, or None if that leaves the grid.
    pub fn offset(self, delta: KnightDelta) -> Option<Self> {
        let (dx, dy) = delta.offset();
        Self::from_xy(self.x() + dx, self.y() + dy)
    }

    /// Get the cell as a usize (for array indexing).
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({},{})", self.0, self.x(), self.y())
    }
}
