//! Scoring module - score, level and line accounting
//!
//! Each cleared row is worth the current level. The level is derived from the
//! score (`score / 10 + 1`) and in turn sets the gravity of newly created pieces.

use log::info;

use crate::types::{Vec2, LEVEL_SCORE_STEP, VELOCITY_PER_LEVEL};

/// Score, level and cleared-line counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreBoard {
    score: u32,
    lines: u32,
    level: u32,
}

impl ScoreBoard {
    /// Fresh counters: score 0, lines 0, level 1
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: 1,
        }
    }

    /// Build a score board from explicit counters (used by tests and tools).
    pub fn with_values(score: u32, level: u32, lines: u32) -> Self {
        Self {
            score,
            lines,
            level,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Account for `rows` cleared rows.
    ///
    /// Returns true if the level changed.
    pub fn add(&mut self, rows: usize) -> bool {
        let rows = rows as u32;
        let before = self.level;
        self.score = self.score.saturating_add(self.level.saturating_mul(rows));
        self.level = self.score / LEVEL_SCORE_STEP + 1;
        self.lines = self.lines.saturating_add(rows);

        let changed = self.level != before;
        if changed {
            info!("level {} -> {} at score {}", before, self.level, self.score);
        }
        changed
    }

    /// Gravity for pieces created at the current level, in pixels per second.
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(0.0, VELOCITY_PER_LEVEL * f64::from(self.level + 1))
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}
