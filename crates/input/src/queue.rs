//! Single-slot action queue with per-action re-arm intervals.
//!
//! The key poller pushes actions as fast as the terminal reports them; the game
//! pops one per tick. Each action can be pending at most once, and after an
//! action is accepted it stays disarmed for its re-arm interval. Anything pushed
//! while pending or disarmed is dropped, never queued.

use arrayvec::ArrayVec;

use crate::types::{
    GameAction, ACCELERATE_REARM_MS, ACTION_COUNT, MOVE_REARM_MS, ROTATE_REARM_MS,
    TOGGLE_REARM_MS,
};

/// Minimum time between two accepted pushes of the same action, in ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RearmIntervals {
    /// `MoveLeft` / `MoveRight`
    pub move_ms: u32,
    pub rotate_ms: u32,
    pub accelerate_ms: u32,
    /// `Pause` / `Restart`
    pub toggle_ms: u32,
}

impl RearmIntervals {
    pub fn for_action(&self, action: GameAction) -> u32 {
        match action {
            GameAction::MoveLeft | GameAction::MoveRight => self.move_ms,
            GameAction::Rotate => self.rotate_ms,
            GameAction::Accelerate => self.accelerate_ms,
            GameAction::Pause | GameAction::Restart => self.toggle_ms,
        }
    }
}

impl Default for RearmIntervals {
    fn default() -> Self {
        Self {
            move_ms: MOVE_REARM_MS,
            rotate_ms: ROTATE_REARM_MS,
            accelerate_ms: ACCELERATE_REARM_MS,
            toggle_ms: TOGGLE_REARM_MS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActionQueue {
    /// Pending actions in arrival order; each action appears at most once.
    pending: ArrayVec<GameAction, ACTION_COUNT>,
    /// Remaining re-arm time per action, indexed by `GameAction::index`.
    cooldown_ms: [u32; ACTION_COUNT],
    intervals: RearmIntervals,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::with_intervals(RearmIntervals::default())
    }

    pub fn with_intervals(intervals: RearmIntervals) -> Self {
        Self {
            pending: ArrayVec::new(),
            cooldown_ms: [0; ACTION_COUNT],
            intervals,
        }
    }

    pub fn intervals(&self) -> RearmIntervals {
        self.intervals
    }

    /// Offer an action. Returns false if it was dropped.
    pub fn push(&mut self, action: GameAction) -> bool {
        let idx = action.index();
        if self.cooldown_ms[idx] > 0 || self.pending.contains(&action) {
            return false;
        }
        // Capacity equals the number of distinct actions, so this cannot fail.
        if self.pending.try_push(action).is_err() {
            return false;
        }
        self.cooldown_ms[idx] = self.intervals.for_action(action);
        true
    }

    /// Advance every re-arm countdown by `elapsed_ms`.
    pub fn update(&mut self, elapsed_ms: u32) {
        for remaining in self.cooldown_ms.iter_mut() {
            *remaining = remaining.saturating_sub(elapsed_ms);
        }
    }

    /// Take the oldest pending action.
    pub fn pop(&mut self) -> Option<GameAction> {
        if self.pending.is_empty() {
            return None;
        }
        Some(self.pending.remove(0))
    }

    /// Would a push of `action` be accepted right now?
    pub fn is_armed(&self, action: GameAction) -> bool {
        self.cooldown_ms[action.index()] == 0 && !self.pending.contains(&action)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop pending actions and re-arm everything.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.cooldown_ms = [0; ACTION_COUNT];
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
