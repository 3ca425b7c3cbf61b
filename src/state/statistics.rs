// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters gathered during a single count. Each count starts from fresh
//! statistics; nothing carries over between counts.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Display, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Complete sequences of the requested length.
    SequencesCounted,
    /// Moves skipped because they would exceed the vowel budget.
    VowelPrunes,
    /// Search states (or table entries) whose moves were examined.
    StatesExpanded,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    #[inline]
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Increment the specified counter by `amount`.
    #[inline]
    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={}", counter, self.get(counter))?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_statistics_are_zero() {
        let statistics = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(statistics.get(counter), 0);
        }
    }

    #[test]
    fn test_counters_are_independent() {
        let mut statistics = Statistics::new();
        statistics.increment(Counters::VowelPrunes);
        statistics.increment(Counters::VowelPrunes);
        statistics.add(Counters::SequencesCounted, 5);
        assert_eq!(statistics.get(Counters::VowelPrunes), 2);
        assert_eq!(statistics.get(Counters::SequencesCounted), 5);
        assert_eq!(statistics.get(Counters::StatesExpanded), 0);
    }

    #[test]
    fn test_display() {
        let mut statistics = Statistics::new();
        statistics.add(Counters::SequencesCounted, 60);
        statistics.add(Counters::StatesExpanded, 17);
        assert_eq!(
            statistics.to_string(),
            "sequences_counted=60 vowel_prunes=0 states_expanded=17"
        );
    }
}
