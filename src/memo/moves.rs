// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed knight moves.
//!
//! Every cell is examined many times during a count, so the legal moves
//! from each cell are computed once and stored. A move from `k` is legal when
//! the target lies within the grid and holds a live key.

use strum::IntoEnumIterator;

use crate::geometry::constants::{MAX_MOVES, NCELLS};
use crate::geometry::{Cell, KnightDelta};

/// Legal knight moves from every cell, in [`KnightDelta`] order.
///
/// Fixed-size storage: each row holds up to `MAX_MOVES` targets followed
/// by padding, with the live prefix length kept in `lengths`.
#[derive(Debug, Clone)]
pub struct MovesTable {
    targets: [[Cell; MAX_MOVES]; NCELLS],
    lengths: [u8; NCELLS],
}

impl MovesTable {
    /// Compute the move table for the given liveness mask.
    ///
    /// Dead cells receive an empty list; they are never a start or a target.
    pub fn initialize(live: &[bool; NCELLS]) -> Self {
        let mut targets = [[Cell::new(0); MAX_MOVES]; NCELLS];
        let mut lengths = [0u8; NCELLS];

        for from in Cell::all().filter(|cell| live[cell.as_usize()]) {
            let row = &mut targets[from.as_usize()];
            let mut n_moves = 0;
            for to in KnightDelta::iter().filter_map(|delta| from.offset(delta)) {
                if live[to.as_usize()] {
                    row[n_moves] = to;
                    n_moves += 1;
                }
            }
            lengths[from.as_usize()] = n_moves as u8;
        }

        Self { targets, lengths }
    }

    /// The legal moves from `cell`.
    #[inline]
    pub fn from(&self, cell: Cell) -> &[Cell] {
        let index = cell.as_usize();
        &self.targets[index][..self.lengths[index] as usize]
    }

    /// Total number of directed edges in the table.
    pub fn edge_count(&self) -> usize {
        self.lengths.iter().map(|&n| n as usize).sum()
    }
}
