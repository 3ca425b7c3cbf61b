// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first count driven by an explicit worklist.
//!
//! Visits exactly the states the recursive strategy visits, so counts and
//! statistics match, but the depth of the walk never touches the call stack.

use crate::memo::GridTopology;
use crate::state::{Counters, SearchState, Statistics};

/// Count the sequences of exactly `max_length` keys that extend `start`.
///
/// Requires `start.length < max_length`.
pub fn count_from(
    topology: &GridTopology,
    start: SearchState,
    max_length: usize,
    vowel_budget: usize,
    statistics: &mut Statistics,
) -> u64 {
    debug_assert!(start.length < max_length);

    let mut n_sequences = 0;
    let mut worklist = Vec::new();
    worklist.push(start);

    while let Some(state) = worklist.pop() {
        statistics.increment(Counters::StatesExpanded);
        for &to in topology.moves_from(state.cell) {
            match state.step(topology, to, vowel_budget) {
                None => statistics.increment(Counters::VowelPrunes),
                Some(next) if next.length == max_length => n_sequences += 1,
                Some(next) => worklist.push(next),
            }
        }
    }
    n_sequences
}
