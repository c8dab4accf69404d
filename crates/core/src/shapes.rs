//! Shapes module - static tetromino block layouts
//!
//! Each kind owns an ordered list of rotation states; each state is exactly four
//! block offsets in grid units relative to the piece anchor. The y axis grows
//! downward and every offset has `dy <= 0`, so the anchor sits on the piece's
//! lowest row and leftmost column.
//!
//! I, O, S and Z cycle through two states; T, J and L through four.

use crate::types::{PieceKind, Vec2, BLOCK_SIZE};

/// Offset of a single block relative to the piece anchor, in grid units
pub type BlockOffset = (i8, i8);

/// Shape of a piece - 4 block offsets from the piece anchor
pub type PieceShape = [BlockOffset; 4];

/// Rotation state index within a kind's state list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rotation(u8);

impl Rotation {
    /// First state; every piece is created in it.
    pub const SPAWN: Rotation = Rotation(0);

    /// Build a rotation from a raw index.
    ///
    /// The index is not checked here; looking up a shape with an index the
    /// kind does not have panics in [`get_shape`].
    pub const fn new(index: u8) -> Self {
        Rotation(index)
    }

    /// Next state for `kind`, wrapping after the last one.
    pub fn next(self, kind: PieceKind) -> Rotation {
        Rotation((self.0 + 1) % rotation_count(kind))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

const I_STATES: [PieceShape; 2] = [
    // vertical
    [(0, 0), (0, -1), (0, -2), (0, -3)],
    // horizontal
    [(0, 0), (1, 0), (2, 0), (3, 0)],
];

// Both states are identical; O still cycles with period 2.
const O_STATES: [PieceShape; 2] = [
    [(0, 0), (0, -1), (1, 0), (1, -1)],
    [(0, 0), (0, -1), (1, 0), (1, -1)],
];

const T_STATES: [PieceShape; 4] = [
    [(0, -1), (1, 0), (1, -1), (2, -1)],
    [(1, 0), (0, -1), (1, -1), (1, -2)],
    [(0, 0), (1, 0), (2, 0), (1, -1)],
    [(0, 0), (0, -1), (0, -2), (1, -1)],
];

const S_STATES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, -1), (2, -1)],
    [(1, 0), (0, -1), (1, -1), (0, -2)],
];

const Z_STATES: [PieceShape; 2] = [
    [(0, -1), (1, 0), (2, 0), (1, -1)],
    [(0, 0), (0, -1), (1, -1), (1, -2)],
];

const J_STATES: [PieceShape; 4] = [
    [(0, 0), (1, 0), (1, -1), (1, -2)],
    [(0, 0), (1, 0), (2, 0), (0, -1)],
    [(0, 0), (0, -1), (0, -2), (1, -2)],
    [(0, -1), (1, -1), (2, -1), (2, 0)],
];

const L_STATES: [PieceShape; 4] = [
    [(0, 0), (0, -1), (0, -2), (1, 0)],
    [(0, 0), (0, -1), (1, -1), (2, -1)],
    [(1, 0), (1, -1), (1, -2), (0, -2)],
    [(0, 0), (1, 0), (2, 0), (2, -1)],
];

/// All rotation states of a kind, in rotation order.
pub fn shapes(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Number of rotation states for a kind (2 or 4).
pub fn rotation_count(kind: PieceKind) -> u8 {
    shapes(kind).len() as u8
}

/// Get the block offsets for a piece kind and rotation.
///
/// # Panics
///
/// Panics if `rotation` is not a valid state for `kind`.
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let states = shapes(kind);
    match states.get(rotation.index()) {
        Some(shape) => *shape,
        None => panic!(
            "rotation {} out of range for {} ({} states)",
            rotation.index(),
            kind,
            states.len()
        ),
    }
}

/// Pixel position of one block of a piece anchored at `anchor`.
#[inline]
pub fn block_position(anchor: Vec2, offset: BlockOffset) -> Vec2 {
    anchor + Vec2::new(f64::from(offset.0), f64::from(offset.1)).scale(BLOCK_SIZE, BLOCK_SIZE)
}
