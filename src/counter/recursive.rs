// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first recursive count.
//!
//! The reference strategy: walk every sequence, one call per partial
//! sequence, pruning a move as soon as it would exceed the vowel budget.
//! Stack depth is bounded by the sequence length and fan-out by 8.

use crate::memo::GridTopology;
use crate::state::{Counters, SearchState, Statistics};

/// Count the sequences of exactly `max_length` keys that extend `state`.
///
/// Requires `state.length < max_length`.
pub fn count_from(
    topology: &GridTopology,
    state: SearchState,
    max_length: usize,
    vowel_budget: usize,
    statistics: &mut Statistics,
) -> u64 {
    debug_assert!(state.length < max_length);
    statistics.increment(Counters::StatesExpanded);

    let mut n_sequences = 0;
    for &to in topology.moves_from(state.cell) {
        match state.step(topology, to, vowel_budget) {
            None => statistics.increment(Counters::VowelPrunes),
            // Terminal: this move completes a sequence
            Some(next) if next.length == max_length => n_sequences += 1,
            Some(next) => {
                n_sequences += count_from(topology, next, max_length, vowel_budget, statistics)
            }
        }
    }
    n_sequences
}
