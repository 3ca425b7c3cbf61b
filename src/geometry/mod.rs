// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the keypad.
//!
//! - Cell: grid positions (0..NCELLS-1)
//! - KnightDelta: the eight knight move offsets
//! - constants: grid dimensions, labels and domain limits

pub mod cell;
pub mod constants;
pub mod delta;

// Re-export for convenience
pub use cell::Cell;
pub use constants::*;
pub use delta::KnightDelta;
