//! Tetromino module - the falling piece
//!
//! A piece moves in continuous pixel space: gravity integrates its position every
//! tick, so it is only guaranteed to sit on the grid once it freezes.

use std::time::Duration;

use crate::shapes::{block_position, get_shape, PieceShape, Rotation};
use crate::types::{Cell, PieceKind, Tint, Vec2, BLOCK_SIZE, SOFT_DROP_VELOCITY};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tetromino {
    kind: PieceKind,
    rotation: Rotation,
    tint: Tint,
    pos: Vec2,
    velocity: Vec2,
    frozen: bool,
}

impl Tetromino {
    /// Create an unfrozen piece in its spawn rotation.
    pub fn new(kind: PieceKind, tint: Tint, pos: Vec2, velocity: Vec2) -> Self {
        Self {
            kind,
            rotation: Rotation::SPAWN,
            tint,
            pos,
            velocity,
            frozen: false,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }

    /// Anchor position in pixels.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Block offsets for the current rotation.
    pub fn blocks(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Pixel positions of the four blocks for `rotation` anchored at `anchor`.
    pub fn block_positions(&self, anchor: Vec2, rotation: Rotation) -> [Vec2; 4] {
        get_shape(self.kind, rotation).map(|offset| block_position(anchor, offset))
    }

    /// Cells covered by the current rotation if the anchor were at `anchor`.
    pub fn cells_at(&self, anchor: Vec2) -> [Cell; 4] {
        self.block_positions(anchor, self.rotation)
            .map(Cell::from_pixel)
    }

    /// Cells covered right now.
    pub fn cells(&self) -> [Cell; 4] {
        self.cells_at(self.pos)
    }

    pub fn move_right(&mut self) {
        if self.frozen {
            return;
        }
        self.pos.x += BLOCK_SIZE;
    }

    pub fn move_left(&mut self) {
        if self.frozen {
            return;
        }
        self.pos.x -= BLOCK_SIZE;
    }

    /// Advance to the next rotation state, wrapping per kind.
    pub fn rotate_right(&mut self) {
        if self.frozen {
            return;
        }
        self.rotation = self.rotation.next(self.kind);
    }

    /// Switch to the soft-drop velocity.
    pub fn accelerate(&mut self) {
        self.velocity = SOFT_DROP_VELOCITY;
    }

    /// Integrate position by velocity over `elapsed`.
    pub fn update(&mut self, elapsed: Duration) {
        if self.frozen {
            return;
        }
        let dt = elapsed.as_secs_f64();
        self.pos += self.velocity.scale(dt, dt);
    }

    /// Floor the anchor down to the block grid on both axes.
    pub fn round_pos_to_grid(&mut self) {
        self.pos = self.pos.floor_to(BLOCK_SIZE);
    }

    /// Anchor floored to the block grid, without mutating.
    pub fn grid_pos(&self) -> Vec2 {
        self.pos.floor_to(BLOCK_SIZE)
    }

    pub(crate) fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub(crate) fn freeze(&mut self) {
        self.frozen = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(kind: PieceKind) -> Tetromino {
        Tetromino::new(kind, Tint(0), Vec2::new(60.0, 20.0), Vec2::new(0.0, 10.0))
    }

    #[test]
    fn test_new_piece_is_active_in_spawn_rotation() {
        let t = piece(PieceKind::L);
        assert!(!t.is_frozen());
        assert_eq!(t.rotation(), Rotation::SPAWN);
        assert_eq!(t.blocks(), get_shape(PieceKind::L, Rotation::SPAWN));
    }

    #[test]
    fn test_cells_follow_anchor() {
        let t = piece(PieceKind::I);
        assert_eq!(
            t.cells(),
            [
                Cell::new(6, 2),
                Cell::new(6, 1),
                Cell::new(6, 0),
                Cell::new(6, -1),
            ]
        );
    }

    #[test]
    fn test_lateral_moves() {
        let mut t = piece(PieceKind::T);
        t.move_right();
        assert_eq!(t.pos(), Vec2::new(70.0, 20.0));
        t.move_left();
        t.move_left();
        assert_eq!(t.pos(), Vec2::new(50.0, 20.0));
    }

    #[test]
    fn test_frozen_piece_ignores_moves_and_rotation() {
        let mut t = piece(PieceKind::T);
        t.freeze();
        let before = t;
        t.move_left();
        t.move_right();
        t.rotate_right();
        t.update(Duration::from_secs(1));
        assert_eq!(t, before);
    }

    #[test]
    fn test_update_integrates_velocity() {
        let mut t = piece(PieceKind::O);
        t.update(Duration::from_millis(500));
        assert_eq!(t.pos(), Vec2::new(60.0, 25.0));

        t.accelerate();
        assert_eq!(t.velocity(), SOFT_DROP_VELOCITY);
        t.update(Duration::from_millis(100));
        assert!((t.pos().y - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_pos_to_grid_floors() {
        let mut t = piece(PieceKind::O);
        t.set_pos(Vec2::new(63.2, 128.9));
        assert_eq!(t.grid_pos(), Vec2::new(60.0, 120.0));
        t.round_pos_to_grid();
        assert_eq!(t.pos(), Vec2::new(60.0, 120.0));
    }
}
