use crate::types::{PieceKind, DEFAULT_BOARD_COLUMNS, DEFAULT_BOARD_ROWS, DEFAULT_SEED};

/// Everything the simulation needs to start a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the piece generator
    pub seed: u32,
    /// Hand out only this kind (deterministic testing)
    pub repeat_piece: Option<PieceKind>,
    pub columns: u8,
    pub rows: u8,
}

impl GameConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            repeat_piece: None,
            columns: DEFAULT_BOARD_COLUMNS,
            rows: DEFAULT_BOARD_ROWS,
        }
    }
}
