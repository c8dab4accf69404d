//! Terminal runner (default binary).
//!
//! Crossterm for input, the framebuffer renderer for output, and one
//! [`Game::tick`] per 16ms frame with at most one queued action.

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, trace};

use blockfall::cli::Cli;
use blockfall::config::Settings;
use blockfall::core::{Game, GameSnapshot};
use blockfall::input::{handle_key_event, should_quit, ActionQueue};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;
    init_logging(settings.log_file.as_deref())?;
    info!(
        "starting: seed {} board {}x{} repeat {:?}",
        settings.game.seed, settings.game.columns, settings.game.rows, settings.game.repeat_piece
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to `log_file` when given; otherwise they are off unless `RUST_LOG`
/// asks for them, since the game owns the terminal.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("failed to install logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, settings: &Settings) -> Result<()> {
    let mut game = Game::new(settings.game);
    let view = GameView::default();
    let mut queue = ActionQueue::with_intervals(settings.rearm);

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();
    let mut fps_window = Instant::now();
    let mut frames = 0u32;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;
        frames += 1;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!(
                            "quit at score {} after {} pieces",
                            game.score().score(),
                            game.pieces_locked()
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if !queue.push(action) {
                            trace!("dropped {}", action.as_str());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            queue.update(elapsed.as_millis().min(u128::from(u32::MAX)) as u32);
            game.tick(elapsed, queue.pop());
        }

        if fps_window.elapsed() >= Duration::from_secs(1) {
            if settings.show_fps {
                info!("fps: {}", frames);
            }
            frames = 0;
            fps_window = Instant::now();
        }
    }
}
