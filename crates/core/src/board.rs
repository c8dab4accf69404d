//! Board module - manages the occupancy grid
//!
//! The board is a box in pixel space (default `(20, 20, 100, 200)`) plus a map
//! from [`Cell`] to the [`Mark`] locked there. A cell is a key iff a block
//! occupies it. Cells above the box (negative or small rows) are legal keys: a
//! piece that locks while still poking out of the top keeps those blocks.
//!
//! Coordinates: `(col, row)` where both grow right/down. With the default box,
//! columns run `2..=11` and rows run `2..=21`.

use std::collections::HashMap;

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::mark::Mark;
use crate::tetromino::Tetromino;
use crate::types::{
    Cell, Rect, Tint, Vec2, BLOCK_SIZE, BOARD_ORIGIN, DEFAULT_BOARD_COLUMNS, DEFAULT_BOARD_ROWS,
};

/// The game board: pixel bounds plus the map of locked blocks
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    bounds: Rect,
    grid: HashMap<Cell, Mark>,
}

impl Board {
    /// Create an empty board of `columns` x `rows` cells at the standard origin
    pub fn new(columns: u8, rows: u8) -> Self {
        Self::with_bounds(Rect::new_at(
            BOARD_ORIGIN.x,
            BOARD_ORIGIN.y,
            f64::from(columns) * BLOCK_SIZE,
            f64::from(rows) * BLOCK_SIZE,
        ))
    }

    /// Create an empty board covering `bounds` (pixel units)
    pub fn with_bounds(bounds: Rect) -> Self {
        Self {
            bounds,
            grid: HashMap::new(),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// First column inside the box
    pub fn min_col(&self) -> i32 {
        (self.bounds.min_x() / BLOCK_SIZE) as i32
    }

    /// One past the last column inside the box
    pub fn end_col(&self) -> i32 {
        self.min_col() + (self.bounds.width() / BLOCK_SIZE) as i32
    }

    /// First row inside the box
    pub fn min_row(&self) -> i32 {
        (self.bounds.min_y() / BLOCK_SIZE) as i32
    }

    /// Last row a block may rest on
    pub fn max_row(&self) -> i32 {
        self.last_row() as i32
    }

    fn last_row(&self) -> f64 {
        (self.bounds.max_y() - BLOCK_SIZE) / BLOCK_SIZE
    }

    pub fn columns(&self) -> i32 {
        self.end_col() - self.min_col()
    }

    pub fn rows(&self) -> i32 {
        self.max_row() - self.min_row() + 1
    }

    /// Anchor for newly promoted pieces: top edge, left of centre.
    pub fn spawn_point(&self) -> Vec2 {
        let offset = f64::from(self.columns() / 2 - 1).max(0.0) * BLOCK_SIZE;
        Vec2::new(self.bounds.min_x() + offset, self.bounds.min_y())
    }

    /// Get the mark at `cell`, if any
    pub fn get(&self, cell: Cell) -> Option<&Mark> {
        self.grid.get(&cell)
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.grid.contains_key(&cell)
    }

    /// Lock a single block at `cell`.
    /// Returns false (and leaves the board untouched) if the cell is taken
    pub fn insert(&mut self, cell: Cell, tint: Tint) -> bool {
        if self.grid.contains_key(&cell) {
            return false;
        }
        self.grid.insert(cell, Mark::new(cell, tint));
        true
    }

    /// All locked blocks, in no particular order
    pub fn marks(&self) -> impl Iterator<Item = &Mark> + '_ {
        self.grid.values()
    }

    /// Number of locked blocks
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Remove every mark (new game / restart)
    pub fn reset(&mut self) {
        self.grid.clear();
    }

    /// Check if the piece could shift one block right.
    ///
    /// Probes from the piece's grid-aligned anchor; fails if any block would
    /// reach the right edge of the box or land on a mark.
    pub fn can_go_right(&self, piece: &Tetromino) -> bool {
        let anchor = piece.grid_pos() + Vec2::new(BLOCK_SIZE, 0.0);
        piece
            .block_positions(anchor, piece.rotation())
            .iter()
            .all(|p| p.x < self.bounds.max_x() && !self.is_occupied(Cell::from_pixel(*p)))
    }

    /// Check if the piece could shift one block left.
    pub fn can_go_left(&self, piece: &Tetromino) -> bool {
        let anchor = piece.grid_pos() - Vec2::new(BLOCK_SIZE, 0.0);
        piece
            .block_positions(anchor, piece.rotation())
            .iter()
            .all(|p| p.x >= self.bounds.min_x() && !self.is_occupied(Cell::from_pixel(*p)))
    }

    /// Check if the piece's next rotation state fits horizontally.
    ///
    /// Only horizontal containment is tested: a rotation that overlaps locked
    /// marks or sticks out of the bottom is not rejected here.
    pub fn can_rotate(&self, piece: &Tetromino) -> bool {
        let next = piece.rotation().next(piece.kind());
        piece
            .block_positions(piece.pos(), next)
            .iter()
            .all(|p| {
                let right = p.x + BLOCK_SIZE;
                right <= self.bounds.max_x() && right >= self.bounds.min_x()
            })
    }

    /// Per-tick resolution: freeze the piece if it fell through the floor or
    /// is about to land on a mark, then lock it.
    ///
    /// Returns true if the piece was frozen by this call.
    pub fn check_bounds(&mut self, piece: &mut Tetromino) -> bool {
        if piece.is_frozen() {
            return false;
        }

        let row = piece.pos().y / BLOCK_SIZE;
        let last_row = self.last_row();

        if row > last_row {
            piece.set_pos(Vec2::new(piece.pos().x, last_row * BLOCK_SIZE));
            debug!("{} hit the floor at x={}", piece.kind(), piece.pos().x);
        } else if self.collides_below(piece) {
            piece.round_pos_to_grid();
            debug!(
                "{} landed on the stack at ({}, {})",
                piece.kind(),
                piece.pos().x,
                piece.pos().y
            );
        } else {
            return false;
        }

        piece.freeze();
        let candidates = piece.cells();
        self.top_of_stack(piece, candidates);
        self.finalize_position(piece);
        true
    }

    /// Would the piece, one block lower, overlap a mark?
    fn collides_below(&self, piece: &Tetromino) -> bool {
        piece
            .cells_at(piece.pos() + Vec2::new(0.0, BLOCK_SIZE))
            .iter()
            .any(|c| self.is_occupied(*c))
    }

    /// Lift an overshooting piece until none of its cells overlap a mark.
    ///
    /// `candidates` are the piece's cells at its current position. Returns the
    /// number of rows the piece was lifted.
    pub fn top_of_stack(&self, piece: &mut Tetromino, mut candidates: [Cell; 4]) -> u32 {
        let mut lifted = 0u32;
        // Each pass moves every candidate strictly upward and the grid is finite,
        // so this ends once the candidates clear the highest mark.
        while candidates.iter().any(|c| self.is_occupied(*c)) {
            for c in candidates.iter_mut() {
                *c = c.up();
            }
            lifted += 1;
        }

        if lifted > 0 {
            trace!("lifted {} by {} rows", piece.kind(), lifted);
            let pos = piece.pos() - Vec2::new(0.0, f64::from(lifted) * BLOCK_SIZE);
            piece.set_pos(pos);
        }
        lifted
    }

    /// Write the piece's four cells into the grid.
    ///
    /// # Panics
    ///
    /// Panics if a target cell is already occupied.
    pub fn finalize_position(&mut self, piece: &Tetromino) {
        for cell in piece.cells() {
            if self.grid.contains_key(&cell) {
                panic!(
                    "cannot lock {} into occupied cell ({}, {})",
                    piece.kind(),
                    cell.col,
                    cell.row
                );
            }
            self.grid.insert(cell, Mark::new(cell, piece.tint()));
        }
    }

    /// Check if every column of `row` holds a mark
    pub fn is_row_full(&self, row: i32) -> bool {
        (self.min_col()..self.end_col()).all(|col| self.is_occupied(Cell::new(col, row)))
    }

    /// Clear the full rows among those the just-locked piece touches and
    /// collapse everything above them.
    ///
    /// Returns the cleared rows in the order the piece's blocks reached them.
    pub fn clear_full_rows(&mut self, piece: &Tetromino) -> ArrayVec<i32, 4> {
        let (min_row, max_row) = (self.min_row(), self.max_row());
        let mut seen = ArrayVec::<i32, 4>::new();
        let mut full = ArrayVec::<i32, 4>::new();

        for cell in piece.cells() {
            let row = cell.row;
            if row < min_row || row > max_row || seen.contains(&row) {
                continue;
            }
            seen.push(row);
            if self.is_row_full(row) {
                full.push(row);
            }
        }

        if full.is_empty() {
            return full;
        }

        for &row in &full {
            for col in self.min_col()..self.end_col() {
                self.grid.remove(&Cell::new(col, row));
            }
        }

        // Phase one: count how far each survivor falls and lift it out of the grid.
        let mut falling: Vec<Mark> = Vec::new();
        self.grid.retain(|cell, mark| {
            let below = full.iter().filter(|&&row| row > cell.row).count() as i32;
            if below == 0 {
                return true;
            }
            mark.set_descend(below);
            falling.push(*mark);
            false
        });

        // Phase two: drop every lifted mark into its new cell.
        for mut mark in falling {
            mark.settle();
            let prev = self.grid.insert(mark.cell(), mark);
            debug_assert!(prev.is_none(), "collapse collided at {:?}", mark.cell());
        }

        debug!("cleared rows {:?}", full.as_slice());
        full
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_COLUMNS, DEFAULT_BOARD_ROWS)
    }
}
