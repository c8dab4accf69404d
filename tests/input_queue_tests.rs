//! Input pipeline tests - key mapping into the re-arming queue and the game

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use blockfall::core::{Game, GameConfig};
use blockfall::input::{handle_key_event, should_quit, ActionQueue, RearmIntervals};
use blockfall::types::{GameAction, PieceKind, TICK_MS};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// One runner frame: the key poller pushes, then the tick re-arms and pops.
fn frame(queue: &mut ActionQueue, game: &mut Game, pressed: Option<KeyEvent>) -> bool {
    let accepted = pressed
        .and_then(handle_key_event)
        .map(|action| queue.push(action))
        .unwrap_or(false);
    queue.update(TICK_MS);
    game.tick(Duration::ZERO, queue.pop());
    accepted
}

#[test]
fn test_held_key_moves_once_per_rearm_interval() {
    let mut game = Game::new(GameConfig {
        repeat_piece: Some(PieceKind::O),
        ..GameConfig::default()
    });
    let mut queue = ActionQueue::new();

    let accepted = (0..12)
        .filter(|_| frame(&mut queue, &mut game, Some(key(KeyCode::Right))))
        .count();

    // 60ms re-arm at 16ms frames: accepted on frames 0, 4 and 8.
    assert_eq!(accepted, 3);
    assert_eq!(game.current().pos().x, 90.0);
}

#[test]
fn test_different_actions_queue_in_arrival_order() {
    let mut queue = ActionQueue::new();
    assert!(queue.push(GameAction::Rotate));
    assert!(queue.push(GameAction::MoveLeft));
    assert!(!queue.push(GameAction::Rotate));
    assert_eq!(queue.len(), 2);

    assert_eq!(queue.pop(), Some(GameAction::Rotate));
    assert_eq!(queue.pop(), Some(GameAction::MoveLeft));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_custom_intervals_apply_per_action() {
    let mut queue = ActionQueue::with_intervals(RearmIntervals {
        move_ms: 10,
        rotate_ms: 100,
        accelerate_ms: 0,
        toggle_ms: 500,
    });
    assert!(queue.push(GameAction::MoveLeft));
    assert!(queue.push(GameAction::Rotate));
    queue.clear();

    queue.push(GameAction::MoveLeft);
    queue.push(GameAction::Rotate);
    queue.pop();
    queue.pop();
    queue.update(16);
    assert!(queue.is_armed(GameAction::MoveLeft));
    assert!(!queue.is_armed(GameAction::Rotate));

    // A zero interval only limits by the pending slot.
    assert!(queue.push(GameAction::Accelerate));
    assert!(!queue.push(GameAction::Accelerate));
    queue.pop();
    assert!(queue.push(GameAction::Accelerate));
}

#[test]
fn test_pause_key_toggles_game() {
    let mut game = Game::default();
    let mut queue = ActionQueue::new();

    assert!(frame(&mut queue, &mut game, Some(key(KeyCode::Char('p')))));
    assert!(game.paused());

    // Held key: swallowed until the toggle interval runs out.
    for _ in 0..10 {
        assert!(!frame(&mut queue, &mut game, Some(key(KeyCode::Char('p')))));
    }
    assert!(game.paused());

    for _ in 0..10 {
        frame(&mut queue, &mut game, None);
    }
    assert!(frame(&mut queue, &mut game, Some(key(KeyCode::Char('P')))));
    assert!(!game.paused());
}

#[test]
fn test_quit_keys_are_not_actions() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        assert!(should_quit(key(code)));
        assert_eq!(handle_key_event(key(code)), None);
    }
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(should_quit(ctrl_c));
    assert!(!should_quit(key(KeyCode::Char('c'))));
}
