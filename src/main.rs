//! Terminal picture quiz runner (default binary).
//!
//! The host drives the quiz from the keyboard; the screen is meant to be
//! projected for the players. Rendering goes through the framebuffer-based
//! renderer and only redraws when the snapshot changes.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, trace, warn};

use picture_quiz::core::{GameController, LevelCatalog, QuizConfig};
use picture_quiz::input::{handle_key_event, should_quit, KeyContext};
use picture_quiz::logging;
use picture_quiz::term::{fingerprint, FrameBuffer, QuizView, RenderThrottle, TerminalRenderer, Viewport};
use picture_quiz::types::{AudioCue, TICK_MS};

fn main() -> Result<()> {
    let config = QuizConfig::from_env();
    if let Err(err) = logging::setup_logging(config.log_dir.as_deref()) {
        // Not fatal: the quiz runs without a log file.
        eprintln!("picture-quiz: logging disabled: {err:#}");
    }
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        warn!(error = %err, "quiz exited with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: QuizConfig) -> Result<()> {
    let mut game = GameController::new(LevelCatalog::builtin(), config);

    let view = QuizView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::default();

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render when something visible changed.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = game.snapshot();
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint(&(snap, w, h))) {
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            let cells = term.draw_swap(&mut fb)?;
            trace!(cells, "frame drawn");
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game.round().score(), "quit requested");
                        return Ok(());
                    }
                    let ctx = KeyContext::new(game.screen(), game.admin().is_enabled());
                    if let Some(action) = handle_key_event(key, ctx) {
                        game.apply(action);
                    }
                }
                Event::Resize(w, h) => {
                    debug!(w, h, "terminal resized");
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }

        for cue in game.take_cues() {
            play_cue(cue);
        }
    }
}

/// Audio hook. Sound playback is not wired up; cues are only logged.
fn play_cue(cue: AudioCue) {
    debug!(cue = cue.as_str(), "audio cue");
}
