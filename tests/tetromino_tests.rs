//! Tetromino tests - rotation cycles, motion and freezing

use std::time::Duration;

use blockfall::core::{rotation_count, Board, Rotation, Tetromino};
use blockfall::types::{Cell, PieceKind, Tint, Vec2, SOFT_DROP_VELOCITY};

fn spawn(kind: PieceKind) -> Tetromino {
    Tetromino::new(kind, Tint(2), Vec2::new(60.0, 20.0), Vec2::new(0.0, 10.0))
}

#[test]
fn test_every_kind_cycles_back_to_spawn_state() {
    for kind in PieceKind::ALL {
        let mut piece = spawn(kind);
        let start = piece.blocks();
        for _ in 0..rotation_count(kind) {
            piece.rotate_right();
        }
        assert_eq!(piece.rotation(), Rotation::SPAWN, "{kind}");
        assert_eq!(piece.blocks(), start, "{kind}");
    }
}

#[test]
fn test_t_visits_four_distinct_states() {
    let mut t = spawn(PieceKind::T);
    let mut seen = Vec::new();
    for _ in 0..4 {
        let mut cells = t.cells();
        cells.sort();
        assert!(!seen.contains(&cells));
        seen.push(cells);
        t.rotate_right();
    }
    assert_eq!(t.rotation(), Rotation::SPAWN);
}

#[test]
fn test_o_rotation_does_not_move_blocks() {
    let mut o = spawn(PieceKind::O);
    let before = o.cells();
    o.rotate_right();
    assert_ne!(o.rotation(), Rotation::SPAWN);
    assert_eq!(o.cells(), before);
    o.rotate_right();
    assert_eq!(o.rotation(), Rotation::SPAWN);
}

#[test]
fn test_i_spawns_vertical_and_rotates_horizontal() {
    let mut i = spawn(PieceKind::I);
    assert_eq!(
        i.cells(),
        [
            Cell::new(6, 2),
            Cell::new(6, 1),
            Cell::new(6, 0),
            Cell::new(6, -1)
        ]
    );
    i.rotate_right();
    assert_eq!(
        i.cells(),
        [
            Cell::new(6, 2),
            Cell::new(7, 2),
            Cell::new(8, 2),
            Cell::new(9, 2)
        ]
    );
}

#[test]
fn test_update_integrates_velocity() {
    let mut piece = spawn(PieceKind::S);
    piece.update(Duration::from_millis(500));
    assert_eq!(piece.pos(), Vec2::new(60.0, 25.0));
    // Off-grid positions truncate to the cell they are in.
    assert_eq!(piece.cells()[0], Cell::new(6, 2));

    piece.accelerate();
    assert_eq!(piece.velocity(), SOFT_DROP_VELOCITY);
    piece.update(Duration::from_millis(250));
    assert_eq!(piece.pos(), Vec2::new(60.0, 175.0));
}

#[test]
fn test_lateral_moves_are_one_block() {
    let mut piece = spawn(PieceKind::Z);
    piece.move_left();
    assert_eq!(piece.pos(), Vec2::new(50.0, 20.0));
    piece.move_right();
    piece.move_right();
    assert_eq!(piece.pos(), Vec2::new(70.0, 20.0));
}

#[test]
fn test_round_pos_to_grid_floors_both_axes() {
    let mut piece = Tetromino::new(
        PieceKind::J,
        Tint(0),
        Vec2::new(67.5, 33.3),
        Vec2::ZERO,
    );
    assert_eq!(piece.grid_pos(), Vec2::new(60.0, 30.0));
    // grid_pos does not move the piece.
    assert_eq!(piece.pos(), Vec2::new(67.5, 33.3));
    piece.round_pos_to_grid();
    assert_eq!(piece.pos(), Vec2::new(60.0, 30.0));
}

#[test]
fn test_frozen_piece_ignores_motion() {
    let mut board = Board::default();
    let mut piece = Tetromino::new(
        PieceKind::L,
        Tint(4),
        Vec2::new(60.0, 215.0),
        Vec2::new(0.0, 10.0),
    );
    assert!(board.check_bounds(&mut piece));
    assert!(piece.is_frozen());

    let pos = piece.pos();
    let rotation = piece.rotation();
    piece.move_left();
    piece.move_right();
    piece.rotate_right();
    piece.update(Duration::from_secs(3));

    assert_eq!(piece.pos(), pos);
    assert_eq!(piece.rotation(), rotation);
}
