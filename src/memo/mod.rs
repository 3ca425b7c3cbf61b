// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! - MovesTable: legal knight moves from every cell
//! - GridTopology: liveness, vowels and moves for the whole keypad

pub mod moves;
pub mod topology;

pub use moves::MovesTable;
pub use topology::GridTopology;
