// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Table-driven count.
//!
//! The number of ways to finish a sequence depends only on the current key,
//! the vowels used so far and the number of keys still to place. The table
//! is filled one remaining length at a time, so only two layers are live:
//!
//! ```text
//! ways[0][cell][v] = 1
//! ways[r][cell][v] = Σ ways[r-1][m][v + vowel(m)]   over moves m within budget
//! ```

use crate::geometry::constants::NCELLS;
use crate::memo::GridTopology;
use crate::state::{Counters, SearchState, Statistics};

/// Completion counts for every `(cell, vowels_used)` at one remaining length.
struct Layer {
    ways: Vec<u64>,
    width: usize,
}

impl Layer {
    fn new(vowel_budget: usize, fill: u64) -> Self {
        let width = vowel_budget + 1;
        Self {
            ways: vec![fill; NCELLS * width],
            width,
        }
    }

    #[inline]
    fn get(&self, cell: usize, vowels_used: usize) -> u64 {
        self.ways[cell * self.width + vowels_used]
    }

    #[inline]
    fn set(&mut self, cell: usize, vowels_used: usize, value: u64) {
        self.ways[cell * self.width + vowels_used] = value;
    }
}

/// Count the sequences of exactly `max_length` keys from every start.
///
/// Starts whose own vowel count exceeds the budget must already be filtered
/// out. Requires `max_length >= 2`.
pub fn count_all(
    topology: &GridTopology,
    starts: &[SearchState],
    max_length: usize,
    vowel_budget: usize,
    statistics: &mut Statistics,
) -> u64 {
    debug_assert!(max_length >= 2);

    let mut previous = Layer::new(vowel_budget, 1);
    let mut current = Layer::new(vowel_budget, 0);

    for _remaining in 1..max_length {
        for &cell in topology.live_cells() {
            for vowels_used in 0..=vowel_budget {
                statistics.increment(Counters::StatesExpanded);
                let state = SearchState {
                    cell,
                    vowels_used,
                    length: 1,
                };
                let mut ways = 0;
                for &to in topology.moves_from(cell) {
                    match state.step(topology, to, vowel_budget) {
                        None => statistics.increment(Counters::VowelPrunes),
                        Some(next) => ways += previous.get(to.as_usize(), next.vowels_used),
                    }
                }
                current.set(cell.as_usize(), vowels_used, ways);
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    starts
        .iter()
        .map(|start| previous.get(start.cell.as_usize(), start.vowels_used))
        .sum()
}
