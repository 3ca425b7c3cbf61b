// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: per-count state.
//!
//! - SearchState: one node of the search tree
//! - Statistics: counters gathered while counting

pub mod search;
pub mod statistics;

pub use search::SearchState;
pub use statistics::{Counters, Statistics};
