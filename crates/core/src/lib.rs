//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board, the falling piece and the rules that connect
//! them. It has **no dependencies** on terminal, input or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Testable**: every rule is a plain function over plain data
//! - **Portable**: runs headless, in benches, or behind any renderer
//!
//! # Module Structure
//!
//! - [`shapes`]: static block layouts for every kind and rotation state
//! - [`tetromino`]: the falling piece (continuous position, velocity, freeze flag)
//! - [`mark`]: a locked block owned by the board
//! - [`board`]: occupancy grid, movement gates, locking, row clearing
//! - [`scoring`]: score / level / lines and the gravity they imply
//! - [`rng`]: seeded LCG and the kind/tint picker
//! - [`game`]: the per-tick orchestrator
//! - [`snapshot`]: a flat, renderer-facing copy of the game state
//!
//! # Game Rules
//!
//! - Pieces fall continuously; a piece only snaps to the grid when it freezes.
//! - A piece freezes when it passes the last row or is about to land on a block.
//!   If it overshot into the stack it is lifted back on top before locking.
//! - Rows touched by the locked piece are checked; full rows are removed and
//!   everything above them drops by the number of rows cleared beneath it.
//! - Each cleared row scores the current level; the level is `score / 10 + 1`.
//! - There is no game-over rule: the stack may grow past the spawn point.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use blockfall_core::{Game, GameConfig};
//! use blockfall_types::{GameAction, PieceKind};
//!
//! let mut game = Game::new(GameConfig {
//!     repeat_piece: Some(PieceKind::O),
//!     ..GameConfig::default()
//! });
//!
//! // Soft drop, then let one second pass: the O piece reaches the floor and locks.
//! let outcome = game.tick(Duration::from_secs(1), Some(GameAction::Accelerate));
//! assert!(outcome.locked);
//! assert_eq!(game.board().len(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`Game::tick`](game::Game::tick) once per frame with the real elapsed
//! time (the runner targets 16ms). Motion is integrated from that duration, so
//! the simulation does not depend on a fixed frame rate.

pub mod board;
pub mod config;
pub mod game;
pub mod mark;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod tetromino;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use game::{Game, TickOutcome};
pub use mark::Mark;
pub use rng::{PiecePicker, SimpleRng};
pub use scoring::ScoreBoard;
pub use shapes::{get_shape, rotation_count, PieceShape, Rotation};
pub use snapshot::{ActiveSnapshot, GameSnapshot, MarkSnapshot, NextSnapshot};
pub use tetromino::Tetromino;
