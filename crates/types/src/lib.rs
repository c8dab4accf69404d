//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, input mapping, terminal rendering).
//!
//! # Board Geometry
//!
//! The board lives in pixel space. Every block is `BLOCK_SIZE` units square and
//! a [`Cell`] is derived from a pixel position by truncating division.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BLOCK_SIZE` | 10 | Side of one block in pixel units |
//! | `BOARD_ORIGIN` | (20, 20) | Top-left corner of the board box |
//! | `DEFAULT_BOARD_COLUMNS` | 10 | Board width in cells |
//! | `DEFAULT_BOARD_ROWS` | 20 | Board height in cells |
//!
//! With the defaults the board box is `(20, 20, 100, 200)`, so columns run
//! `2..=11` and rows run `2..=21`.
//!
//! # Motion
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SOFT_DROP_VELOCITY` | (0, 600) px/s | Velocity after `Accelerate` |
//! | `VELOCITY_PER_LEVEL` | 5 px/s | Gravity is `5 * (level + 1)` px/s |
//! | `TICK_MS` | 16 | Target frame interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, GameAction, PieceKind, Vec2};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! // Pixel (63.7, 128.2) lies in column 6, row 12.
//! assert_eq!(Cell::from_pixel(Vec2::new(63.7, 128.2)), Cell::new(6, 12));
//! ```

pub mod geom;

pub use geom::{Rect, Vec2};

/// Side of one block in pixel units, shared by the board and the pieces.
pub const BLOCK_SIZE: f64 = 10.0;

/// Integer form of [`BLOCK_SIZE`] used for cell arithmetic.
pub const BLOCK_PX: i32 = 10;

/// Top-left corner of the board box in pixel space.
pub const BOARD_ORIGIN: Vec2 = Vec2::new(20.0, 20.0);

/// Board width in cells (10 columns)
pub const DEFAULT_BOARD_COLUMNS: u8 = 10;

/// Board height in cells (20 rows)
pub const DEFAULT_BOARD_ROWS: u8 = 20;

/// Fixed "soft drop" velocity applied by `Accelerate` (pixels per second).
pub const SOFT_DROP_VELOCITY: Vec2 = Vec2::new(0.0, 600.0);

/// Gravity gained per level (pixels per second).
pub const VELOCITY_PER_LEVEL: f64 = 5.0;

/// Score needed per level step.
pub const LEVEL_SCORE_STEP: u32 = 10;

/// Seed used when the configured seed is negative.
pub const DEFAULT_SEED: u32 = 12231;

/// Target frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Number of distinct block tints a piece can be drawn with.
pub const TINT_COUNT: u8 = 7;

/// Minimum interval between two accepted `MoveLeft`/`MoveRight` inputs.
pub const MOVE_REARM_MS: u32 = 60;

/// Minimum interval between two accepted `Rotate` inputs.
pub const ROTATE_REARM_MS: u32 = 120;

/// Minimum interval between two accepted `Accelerate` inputs.
pub const ACCELERATE_REARM_MS: u32 = 120;

/// Minimum interval between two accepted `Pause`/`Restart` inputs.
pub const TOGGLE_REARM_MS: u32 = 250;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in generator order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single upper-case letter, as shown in the side panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player actions delivered to the game once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift the piece one block left
    MoveLeft,
    /// Shift the piece one block right
    MoveRight,
    /// Advance to the next rotation state
    Rotate,
    /// Switch to the fast soft-drop velocity
    Accelerate,
    /// Toggle pause
    Pause,
    /// Clear the board and start over
    Restart,
}

/// Number of [`GameAction`] variants.
pub const ACTION_COUNT: usize = 6;

impl GameAction {
    pub const ALL: [GameAction; ACTION_COUNT] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Rotate,
        GameAction::Accelerate,
        GameAction::Pause,
        GameAction::Restart,
    ];

    /// Dense index, stable for per-action tables.
    pub fn index(&self) -> usize {
        match self {
            GameAction::MoveLeft => 0,
            GameAction::MoveRight => 1,
            GameAction::Rotate => 2,
            GameAction::Accelerate => 3,
            GameAction::Pause => 4,
            GameAction::Restart => 5,
        }
    }

    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "accelerate" => Some(GameAction::Accelerate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::Accelerate => "accelerate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Integer (column, row) address on the board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Map a pixel position to its cell.
    ///
    /// Both axes are truncated toward zero before the integer division, so a
    /// pixel just above the origin (e.g. y = -5) still maps to row 0.
    pub fn from_pixel(p: Vec2) -> Self {
        Self {
            col: (p.x as i32) / BLOCK_PX,
            row: (p.y as i32) / BLOCK_PX,
        }
    }

    /// Top-left pixel of this cell.
    pub fn to_pixel(self) -> Vec2 {
        Vec2::new(
            f64::from(self.col) * BLOCK_SIZE,
            f64::from(self.row) * BLOCK_SIZE,
        )
    }

    /// The cell one row up.
    pub fn up(self) -> Self {
        Self::new(self.col, self.row - 1)
    }

    /// The cell `rows` rows down.
    pub fn down_by(self, rows: i32) -> Self {
        Self::new(self.col, self.row + rows)
    }
}

/// Visual identity of a block: an index into the renderer's palette.
///
/// Opaque to the simulation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tint(pub u8);
