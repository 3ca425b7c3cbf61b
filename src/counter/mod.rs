// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sequence counting.
//!
//! A sequence is an ordered list of live keys in which every consecutive pair
//! is a knight's move apart and which contains at most `vowel_budget` vowel
//! keys, counting the start. [`SequenceCounter`] counts the sequences of an
//! exact length over a shared [`GridTopology`].
//!
//! # Strategies
//!
//! - `recursive`: depth-first recursion over every sequence
//! - `iterative`: the same walk with an explicit worklist
//! - `memoized`: a table keyed on `(key, vowels used, keys remaining)`
//!
//! All strategies return the same count. The first two visit every sequence
//! and grow exponentially with the length; the table is linear in it.
//!
//! # Example
//!
//! ```
//! use knight_keys::{GridTopology, SequenceCounter};
//!
//! let topology = GridTopology::new();
//! let counter = SequenceCounter::new(&topology);
//! assert_eq!(counter.count_sequences(1), 18);
//! assert_eq!(counter.count_sequences(2), 60);
//! ```

pub mod iterative;
pub mod memoized;
pub mod recursive;

use std::time::Instant;

use strum_macros::{Display, EnumIter, EnumString};

use crate::geometry::constants::{MAX_LENGTH, VOWEL_BUDGET};
use crate::memo::GridTopology;
use crate::state::{Counters, SearchState, Statistics};

/// How a count walks the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    #[default]
    Recursive,
    Iterative,
    Memoized,
}

/// Counts knight-move sequences over a borrowed topology.
///
/// Holds no mutable state, so one counter (or many sharing a topology) can
/// serve any number of counts, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct SequenceCounter<'a> {
    topology: &'a GridTopology,
    vowel_budget: usize,
    strategy: Strategy,
}

impl<'a> SequenceCounter<'a> {
    /// A counter with the standard vowel budget and the recursive strategy.
    pub fn new(topology: &'a GridTopology) -> Self {
        Self {
            topology,
            vowel_budget: VOWEL_BUDGET,
            strategy: Strategy::default(),
        }
    }

    pub fn with_vowel_budget(mut self, vowel_budget: usize) -> Self {
        self.vowel_budget = vowel_budget;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn topology(&self) -> &'a GridTopology {
        self.topology
    }

    pub fn vowel_budget(&self) -> usize {
        self.vowel_budget
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Count the sequences of exactly `max_length` keys.
    ///
    /// Any `max_length <= 1`, including zero and negative lengths, counts the
    /// single-key sequences: every live key within the vowel budget, which is
    /// all 18 keys with the standard budget.
    ///
    /// # Panics
    ///
    /// Counts beyond [`MAX_LENGTH`](crate::geometry::constants::MAX_LENGTH)
    /// overflow `u64`, which panics in debug builds.
    pub fn count_sequences(&self, max_length: i64) -> u64 {
        self.count_with_statistics(max_length).0
    }

    /// Count as [`count_sequences`](Self::count_sequences), also returning
    /// the search counters.
    pub fn count_with_statistics(&self, max_length: i64) -> (u64, Statistics) {
        let started = Instant::now();
        let mut statistics = Statistics::new();
        let vowel_budget = self.effective_vowel_budget(max_length);

        let starts: Vec<SearchState> = self
            .topology
            .live_cells()
            .iter()
            .map(|&cell| SearchState::start(self.topology, cell))
            .filter(|state| state.vowels_used <= vowel_budget)
            .collect();

        let count = if max_length <= 1 {
            starts.len() as u64
        } else {
            let max_length = max_length as usize;
            match self.strategy {
                Strategy::Recursive => starts
                    .iter()
                    .map(|&state| {
                        recursive::count_from(
                            self.topology,
                            state,
                            max_length,
                            vowel_budget,
                            &mut statistics,
                        )
                    })
                    .sum(),
                Strategy::Iterative => starts
                    .iter()
                    .map(|&state| {
                        iterative::count_from(
                            self.topology,
                            state,
                            max_length,
                            vowel_budget,
                            &mut statistics,
                        )
                    })
                    .sum(),
                Strategy::Memoized => memoized::count_all(
                    self.topology,
                    &starts,
                    max_length,
                    vowel_budget,
                    &mut statistics,
                ),
            }
        };
        statistics.add(Counters::SequencesCounted, count);

        tracing::debug!(
            max_length,
            strategy = %self.strategy,
            vowel_budget,
            count,
            elapsed_us = started.elapsed().as_micros() as u64,
            %statistics,
            "counted sequences"
        );

        (count, statistics)
    }

    /// The budget actually searched with.
    ///
    /// A sequence of `n` keys holds at most `n` vowels, so any budget of `n`
    /// or more is unlimited. Lengths past `MAX_LENGTH` overflow regardless,
    /// so the budget never needs to exceed it.
    fn effective_vowel_budget(&self, max_length: i64) -> usize {
        let longest = max_length.clamp(1, MAX_LENGTH) as usize;
        self.vowel_budget.min(longest)
    }
}
