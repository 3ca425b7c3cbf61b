// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A node of the sequence search tree.

use crate::geometry::Cell;
use crate::memo::GridTopology;

/// Where a partial sequence currently stands.
///
/// Search states are plain values passed down the call stack (or pushed on
/// a worklist); no state is shared between branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchState {
    /// The last key of the partial sequence.
    pub cell: Cell,
    /// Vowel keys in the partial sequence, including the start.
    pub vowels_used: usize,
    /// Keys in the partial sequence.
    pub length: usize,
}

impl SearchState {
    /// The one-key sequence starting at `cell`.
    pub fn start(topology: &GridTopology, cell: Cell) -> Self {
        Self {
            cell,
            vowels_used: topology.is_vowel(cell) as usize,
            length: 1,
        }
    }

    /// Extend by a move to `to`, or None if that would exceed `vowel_budget`.
    #[inline]
    pub fn step(self, topology: &GridTopology, to: Cell, vowel_budget: usize) -> Option<Self> {
        let vowels_used = self.vowels_used + topology.is_vowel(to) as usize;
        if vowels_used > vowel_budget {
            return None;
        }
        Some(Self {
            cell: to,
            vowels_used,
            length: self.length + 1,
        })
    }
}
