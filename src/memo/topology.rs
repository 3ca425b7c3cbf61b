// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The keypad topology: which cells hold keys, which keys are vowels, and
//! where a knight can go from each of them.

use std::fmt;

use crate::geometry::constants::{is_vowel_label, KEYPAD_LABELS, NCELLS};
use crate::geometry::Cell;
use crate::memo::MovesTable;

/// Immutable precomputed keypad data.
///
/// Built once at startup and only read afterwards, so a single value can be
/// shared by reference across any number of counts, including counts running
/// on other threads.
#[derive(Debug, Clone)]
pub struct GridTopology {
    labels: [Option<char>; NCELLS],
    live: [bool; NCELLS],
    vowels: [bool; NCELLS],
    live_cells: Vec<Cell>,
    moves: MovesTable,
}

impl GridTopology {
    /// The standard keypad.
    pub fn new() -> Self {
        Self::from_labels(KEYPAD_LABELS)
    }

    /// Build a topology over the 5×4 grid from an explicit labelling.
    ///
    /// `None` marks a dead cell. A live key is a vowel when its label is one
    /// of `A E I O U`.
    pub fn from_labels(labels: [Option<char>; NCELLS]) -> Self {
        let live = labels.map(|label| label.is_some());
        let vowels = labels.map(|label| label.is_some_and(is_vowel_label));
        let live_cells: Vec<Cell> = Cell::all().filter(|cell| live[cell.as_usize()]).collect();
        let moves = MovesTable::initialize(&live);

        tracing::debug!(
            live = live_cells.len(),
            vowels = vowels.iter().filter(|&&vowel| vowel).count(),
            edges = moves.edge_count(),
            "keypad topology initialized"
        );

        Self {
            labels,
            live,
            vowels,
            live_cells,
            moves,
        }
    }

    /// Whether `cell` holds a key.
    #[inline]
    pub fn is_live(&self, cell: Cell) -> bool {
        self.live[cell.as_usize()]
    }

    /// Whether `cell` holds a vowel key. Always false for dead cells.
    #[inline]
    pub fn is_vowel(&self, cell: Cell) -> bool {
        self.vowels[cell.as_usize()]
    }

    /// The legal knight moves from `cell`; empty for dead cells.
    #[inline]
    pub fn moves_from(&self, cell: Cell) -> &[Cell] {
        self.moves.from(cell)
    }

    /// All live cells in index order.
    pub fn live_cells(&self) -> &[Cell] {
        &self.live_cells
    }

    pub fn live_count(&self) -> usize {
        self.live_cells.len()
    }

    /// The key label at `cell`, or None for a dead cell.
    pub fn label(&self, cell: Cell) -> Option<char> {
        self.labels[cell.as_usize()]
    }

    /// Total number of directed knight moves between live keys.
    pub fn edge_count(&self) -> usize {
        self.moves.edge_count()
    }
}

impl Default for GridTopology {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per live key: its label, then the labels it can move to.
impl fmt::Display for GridTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.live_cells {
            write!(f, "{}:", self.labels[cell.as_usize()].unwrap_or('?'))?;
            for &to in self.moves_from(cell) {
                write!(f, " {}", self.labels[to.as_usize()].unwrap_or('?'))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels_of(topology: &GridTopology, moves: &[Cell]) -> String {
        moves
            .iter()
            .filter_map(|&cell| topology.label(cell))
            .collect()
    }

    #[test]
    fn test_eighteen_live_keys() {
        let topology = GridTopology::new();
        assert_eq!(topology.live_count(), 18);
        assert!(!topology.is_live(Cell::new(15)));
        assert!(!topology.is_live(Cell::new(19)));
        assert!(topology.is_live(Cell::new(16)));
        assert!(topology.is_live(Cell::new(18)));
    }

    #[test]
    fn test_four_vowels() {
        let topology = GridTopology::new();
        let vowels: Vec<usize> = Cell::all()
            .filter(|&cell| topology.is_vowel(cell))
            .map(Cell::as_usize)
            .collect();
        assert_eq!(vowels, vec![0, 4, 8, 14]);
    }

    #[test]
    fn test_dead_cells_have_no_moves() {
        let topology = GridTopology::new();
        assert!(topology.moves_from(Cell::new(15)).is_empty());
        assert!(topology.moves_from(Cell::new(19)).is_empty());
        assert!(!topology.is_vowel(Cell::new(15)));
    }

    #[test]
    fn test_moves_by_label() {
        let topology = GridTopology::new();
        assert_eq!(labels_of(&topology, topology.moves_from(Cell::new(0))), "LH");
        assert_eq!(labels_of(&topology, topology.moves_from(Cell::new(7))), "13AKEO");
        assert_eq!(labels_of(&topology, topology.moves_from(Cell::new(17))), "GIKO");
    }

    #[test]
    fn test_every_live_key_can_move() {
        let topology = GridTopology::new();
        for &cell in topology.live_cells() {
            assert!(!topology.moves_from(cell).is_empty(), "{} is stranded", cell);
        }
    }

    #[test]
    fn test_edge_count() {
        assert_eq!(GridTopology::new().edge_count(), 60);
    }

    #[test]
    fn test_display() {
        let text = GridTopology::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "A: L H");
        assert_eq!(lines[17], "3: H J L");
    }

    #[test]
    fn test_topology_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GridTopology>();
    }
}
