//! Locked blocks owned by the board.

use crate::types::{Cell, Tint, Vec2};

/// A settled block occupying exactly one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    tint: Tint,
    pos: Vec2,
    cell: Cell,
    /// Rows still to fall; only non-zero inside a row clear.
    descend: i32,
}

impl Mark {
    pub fn new(cell: Cell, tint: Tint) -> Self {
        Self {
            tint,
            pos: cell.to_pixel(),
            cell,
            descend: 0,
        }
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }

    /// Top-left pixel, always in sync with [`Mark::cell`].
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn descend(&self) -> i32 {
        self.descend
    }

    pub(crate) fn set_descend(&mut self, rows: i32) {
        self.descend = rows;
    }

    /// Apply the pending descent and reset the counter.
    pub(crate) fn settle(&mut self) {
        self.cell = self.cell.down_by(self.descend);
        self.pos = self.cell.to_pixel();
        self.descend = 0;
    }
}
