//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! and layout libraries and instead renders into a plain framebuffer that is
//! diffed and flushed through crossterm.
//!
//! - [`fb`]: styled glyph framebuffer
//! - [`game_view`]: snapshot to framebuffer (board, side panel, overlay)
//! - [`renderer`]: raw-mode terminal session and diff flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{tint_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
