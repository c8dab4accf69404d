//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and provides [`ActionQueue`], the
//! single-slot, re-arming buffer that sits between the key poller and the
//! once-per-tick game update.

pub mod map;
pub mod queue;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
pub use queue::{ActionQueue, RearmIntervals};
