// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use knight_keys::geometry::constants::{KEYPAD_LABELS, NCELLS};
use knight_keys::geometry::Cell;
use knight_keys::GridTopology;

/// Count sequences by generating every knight walk of `length` keys and only
/// then checking the vowel total. Shares no pruning logic with the counter.
pub fn brute_force_count(topology: &GridTopology, length: usize, vowel_budget: usize) -> u64 {
    fn walk(
        topology: &GridTopology,
        path: &mut Vec<Cell>,
        length: usize,
        vowel_budget: usize,
    ) -> u64 {
        if path.len() == length {
            let vowels = path.iter().filter(|&&cell| topology.is_vowel(cell)).count();
            return (vowels <= vowel_budget) as u64;
        }
        let Some(&last) = path.last() else {
            return 0;
        };
        let mut total = 0;
        for &next in topology.moves_from(last) {
            path.push(next);
            total += walk(topology, path, length, vowel_budget);
            path.pop();
        }
        total
    }

    let mut total = 0;
    let mut path = Vec::with_capacity(length);
    for &start in topology.live_cells() {
        path.push(start);
        total += walk(topology, &mut path, length.max(1), vowel_budget);
        path.pop();
    }
    total
}

/// The standard keypad shape with every key relabelled as a vowel.
pub fn all_vowel_labels() -> [Option<char>; NCELLS] {
    KEYPAD_LABELS.map(|label| label.map(|_| 'A'))
}

/// A keypad with only `B` and `C` live: two keys a single step apart,
/// so neither has a knight move.
pub fn stranded_labels() -> [Option<char>; NCELLS] {
    let mut labels = [None; NCELLS];
    labels[1] = Some('B');
    labels[2] = Some('C');
    labels
}
