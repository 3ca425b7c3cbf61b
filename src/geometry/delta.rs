// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The eight knight moves.

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// A knight move, named by its long leg then its short leg.
///
/// Iteration order is fixed and determines the order of every move list.
/// It affects enumeration order only, never a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCountMacro)]
pub enum KnightDelta {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl KnightDelta {
    /// The `(dx, dy)` offset, with y positive as down.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            KnightDelta::UpLeft => (-1, -2),
            KnightDelta::UpRight => (1, -2),
            KnightDelta::DownLeft => (-1, 2),
            KnightDelta::DownRight => (1, 2),
            KnightDelta::LeftUp => (-2, -1),
            KnightDelta::LeftDown => (-2, 1),
            KnightDelta::RightUp => (2, -1),
            KnightDelta::RightDown => (2, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::constants::MAX_MOVES;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_eight_deltas() {
        assert_eq!(KnightDelta::COUNT, MAX_MOVES);
        assert_eq!(KnightDelta::iter().count(), MAX_MOVES);
    }

    #[test]
    fn test_deltas_are_knight_shaped() {
        for delta in KnightDelta::iter() {
            let (dx, dy) = delta.offset();
            let mut legs = [dx.abs(), dy.abs()];
            legs.sort();
            assert_eq!(legs, [1, 2], "{:?} is not a knight move", delta);
        }
    }

    #[test]
    fn test_deltas_are_distinct() {
        let offsets: Vec<(i32, i32)> = KnightDelta::iter().map(KnightDelta::offset).collect();
        for (i, a) in offsets.iter().enumerate() {
            for b in &offsets[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
