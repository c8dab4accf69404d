//! Game module - drives one board and its falling pieces
//!
//! One call to [`Game::tick`] is one frame, in a fixed order: apply at most one
//! player action, integrate the active piece, resolve it against the board, and
//! if it froze clear rows, score them and promote the next piece.

use std::time::Duration;

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::rng::PiecePicker;
use crate::scoring::ScoreBoard;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, MarkSnapshot, NextSnapshot};
use crate::tetromino::Tetromino;
use crate::types::GameAction;

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The active piece froze and was replaced
    pub locked: bool,
    /// Rows removed by that lock
    pub cleared_rows: ArrayVec<i32, 4>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    score: ScoreBoard,
    picker: PiecePicker,
    current: Tetromino,
    next: Tetromino,
    paused: bool,
    pieces_locked: u32,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.columns, config.rows);
        let score = ScoreBoard::new();
        let mut picker = PiecePicker::new(config.seed).with_repeat(config.repeat_piece);
        let current = Self::create_piece(&mut picker, &board, &score);
        let next = Self::create_piece(&mut picker, &board, &score);

        Self {
            config,
            board,
            score,
            picker,
            current,
            next,
            paused: false,
            pieces_locked: 0,
        }
    }

    fn create_piece(picker: &mut PiecePicker, board: &Board, score: &ScoreBoard) -> Tetromino {
        let (kind, tint) = picker.next_piece();
        Tetromino::new(kind, tint, board.spawn_point(), score.velocity())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access (for tests and scripted setups)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn current(&self) -> &Tetromino {
        &self.current
    }

    pub fn next(&self) -> &Tetromino {
        &self.next
    }

    /// Swap in a hand-placed active piece (for tests and scripted setups)
    pub fn replace_current(&mut self, piece: Tetromino) {
        self.current = piece;
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Pieces locked since the last restart
    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Apply a game action.
    ///
    /// Returns true if the action changed anything. While paused only
    /// `Pause` and `Restart` have an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.paused && !matches!(action, GameAction::Pause | GameAction::Restart) {
            return false;
        }

        match action {
            GameAction::MoveLeft => {
                if !self.board.can_go_left(&self.current) {
                    return false;
                }
                self.current.move_left();
                true
            }
            GameAction::MoveRight => {
                if !self.board.can_go_right(&self.current) {
                    return false;
                }
                self.current.move_right();
                true
            }
            GameAction::Rotate => {
                if !self.board.can_rotate(&self.current) {
                    return false;
                }
                self.current.rotate_right();
                true
            }
            GameAction::Accelerate => {
                self.current.accelerate();
                true
            }
            GameAction::Pause => {
                self.paused = !self.paused;
                info!("{}", if self.paused { "paused" } else { "resumed" });
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Main game tick: one action, then motion and resolution.
    pub fn tick(&mut self, elapsed: Duration, action: Option<GameAction>) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if let Some(action) = action {
            self.apply_action(action);
        }
        if self.paused {
            return outcome;
        }

        self.current.update(elapsed);
        self.board.check_bounds(&mut self.current);

        if self.current.is_frozen() {
            let rows = self.board.clear_full_rows(&self.current);
            self.score.add(rows.len());
            self.pieces_locked = self.pieces_locked.wrapping_add(1);
            if !rows.is_empty() {
                info!(
                    "cleared {} row(s), score {} level {} lines {}",
                    rows.len(),
                    self.score.score(),
                    self.score.level(),
                    self.score.lines()
                );
            }
            self.promote_next();
            outcome.locked = true;
            outcome.cleared_rows = rows;
        }

        outcome
    }

    /// Move the preview piece into play and draw a new preview.
    ///
    /// The promoted piece keeps the velocity it was created with.
    fn promote_next(&mut self) {
        let fresh = Self::create_piece(&mut self.picker, &self.board, &self.score);
        self.current = std::mem::replace(&mut self.next, fresh);
        self.current.set_pos(self.board.spawn_point());
        debug!(
            "promoted {} (next {})",
            self.current.kind(),
            self.next.kind()
        );
    }

    /// Empty the board, reset the score and deal two fresh pieces.
    ///
    /// The generator keeps its stream, so a restart does not replay the game.
    pub fn restart(&mut self) {
        self.board.reset();
        self.score.reset();
        self.paused = false;
        self.pieces_locked = 0;
        self.current = Self::create_piece(&mut self.picker, &self.board, &self.score);
        self.next = Self::create_piece(&mut self.picker, &self.board, &self.score);
        info!("restarted, first piece {}", self.current.kind());
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.marks.clear();
        out.marks.extend(self.board.marks().map(|m| MarkSnapshot {
            cell: m.cell(),
            tint: m.tint(),
        }));
        out.marks
            .sort_unstable_by_key(|m| (m.cell.row, m.cell.col));

        out.active = Some(ActiveSnapshot {
            kind: self.current.kind(),
            tint: self.current.tint(),
            cells: self.current.cells(),
        });
        out.next = Some(NextSnapshot {
            kind: self.next.kind(),
            tint: self.next.tint(),
            blocks: self.next.blocks(),
        });
        out.score = self.score.score();
        out.level = self.score.level();
        out.lines = self.score.lines();
        out.paused = self.paused;
        out.first_col = self.board.min_col();
        out.first_row = self.board.min_row();
        out.columns = self.board.columns();
        out.rows = self.board.rows();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
