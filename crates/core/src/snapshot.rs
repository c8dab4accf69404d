use crate::shapes::PieceShape;
use crate::types::{Cell, PieceKind, Tint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkSnapshot {
    pub cell: Cell,
    pub tint: Tint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub tint: Tint,
    pub cells: [Cell; 4],
}

/// Preview of the upcoming piece: offsets only, it has no board position yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub tint: Tint,
    pub blocks: PieceShape,
}

/// Everything a renderer needs for one frame.
///
/// Reused across frames through [`crate::Game::snapshot_into`] so the mark
/// buffer keeps its allocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    /// Locked blocks sorted by (row, col)
    pub marks: Vec<MarkSnapshot>,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<NextSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub paused: bool,
    pub first_col: i32,
    pub first_row: i32,
    pub columns: i32,
    pub rows: i32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.marks.clear();
        self.active = None;
        self.next = None;
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.paused = false;
        self.first_col = 0;
        self.first_row = 0;
        self.columns = 0;
        self.rows = 0;
    }

    pub fn playable(&self) -> bool {
        !self.paused
    }

    /// Is `cell` inside the visible board extent?
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= self.first_col
            && cell.col < self.first_col + self.columns
            && cell.row >= self.first_row
            && cell.row < self.first_row + self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_respects_extent() {
        let snap = GameSnapshot {
            first_col: 2,
            first_row: 2,
            columns: 10,
            rows: 20,
            ..GameSnapshot::default()
        };
        assert!(snap.contains(Cell::new(2, 2)));
        assert!(snap.contains(Cell::new(11, 21)));
        assert!(!snap.contains(Cell::new(12, 21)));
        assert!(!snap.contains(Cell::new(6, 1)));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut snap = GameSnapshot {
            marks: vec![MarkSnapshot {
                cell: Cell::new(3, 4),
                tint: Tint(2),
            }],
            score: 9,
            paused: true,
            columns: 10,
            ..GameSnapshot::default()
        };
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
        assert!(snap.playable());
    }
}
