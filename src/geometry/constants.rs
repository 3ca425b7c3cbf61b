// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the keypad geometry.
//!
//! The keypad is a 5×4 grid, treated as a linear array of 20 cells with
//! `index = y * WIDTH + x`, taking y positive as down and x to the right:
//!
//! ```text
//! A B C D E
//! F G H I J
//! K L M N O
//!   1 2 3
//! ```
//!
//! The cells beside `1` and `3` are dead gaps with no key.

/// Number of columns in the keypad.
pub const WIDTH: usize = 5;

/// Number of rows in the keypad.
pub const HEIGHT: usize = 4;

/// Total number of grid cells, live or dead.
pub const NCELLS: usize = WIDTH * HEIGHT;

/// Maximum number of knight moves from any cell.
pub const MAX_MOVES: usize = 8;

/// Maximum number of vowel keys a counted sequence may contain,
/// including its starting key.
pub const VOWEL_BUDGET: usize = 2;

/// Sequence length counted when the runner receives no arguments.
pub const DEFAULT_LENGTH: i64 = 10;

/// Largest sequence length whose count fits in a `u64` on this keypad.
///
/// The count grows by a factor of about 3.1 per key: length 36 gives
/// 12,627,260,888,620,456,464 and length 37 overflows.
pub const MAX_LENGTH: i64 = 36;

/// The keypad labels in cell order. `None` marks a dead cell.
#[rustfmt::skip]
pub const KEYPAD_LABELS: [Option<char>; NCELLS] = [
    Some('A'), Some('B'), Some('C'), Some('D'), Some('E'),
    Some('F'), Some('G'), Some('H'), Some('I'), Some('J'),
    Some('K'), Some('L'), Some('M'), Some('N'), Some('O'),
    None,      Some('1'), Some('2'), Some('3'), None,
];

/// Labels classified as vowels.
pub const VOWEL_LABELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Whether a key label counts against the vowel budget.
pub fn is_vowel_label(label: char) -> bool {
    VOWEL_LABELS.contains(&label)
}

const _: () = assert!(NCELLS == 20, "keypad must have 20 cells");
const _: () = assert!(NCELLS <= u8::MAX as usize, "cell index must fit in u8");
