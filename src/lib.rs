// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Count knight-move key sequences on a 5×4 keypad.
//!
//! ```text
//! A B C D E
//! F G H I J
//! K L M N O
//!   1 2 3
//! ```
//!
//! A sequence is an ordered list of keys where each key is a knight's move
//! from the one before, and which contains at most two vowels in total.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed once and shared by reference:
//! - Liveness and vowel flags for the 20 grid cells
//! - The legal knight moves from every cell
//!
//! ## Tier 2: Per-count State
//!
//! Values that live only for the duration of one count:
//! - SearchState - the current key, vowels used and length
//! - Statistics - search counters
//!
//! # Counting
//!
//! [`SequenceCounter`] walks the tree of partial sequences depth-first from
//! every live key, counting each move that completes a sequence of the
//! requested length and pruning each move that would use a third vowel.
//! A table-driven strategy gives the same counts in time linear in the length.

pub mod counter;
pub mod error;
pub mod geometry;
pub mod memo;
pub mod runner;
pub mod state;

// Re-export commonly used types
pub use counter::{SequenceCounter, Strategy};
pub use error::LengthError;
pub use memo::GridTopology;
pub use state::{Counters, Statistics};
