//! Terminal runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output, and a fixed
//! frame interval driving the session timer.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, is_actionable, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::Phase;
use blockfall::{EventLog, LogRecord, RunConfig};

type Log = EventLog<BufWriter<File>>;

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    let mut log = match config.log_path.as_deref() {
        Some(path) => EventLog::open(path)?,
        None => EventLog::disabled(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Session plus the bookkeeping needed to log what changed.
struct Session {
    game: GameState,
    started: Instant,
    phase: Phase,
}

impl Session {
    fn new(seed: u64) -> Self {
        let game = GameState::new(seed);
        let phase = game.phase();
        Self {
            game,
            started: Instant::now(),
            phase,
        }
    }

    fn t_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Log the lock event and phase transition produced by the last step.
    fn drain_events(&mut self, log: &mut Log) {
        let t_ms = self.t_ms();
        if let Some(lock) = self.game.take_last_event() {
            log.record(t_ms, &LogRecord::Lock { lock });
        }

        let phase = self.game.phase();
        if phase != self.phase {
            log.record(
                t_ms,
                &LogRecord::Phase {
                    from: self.phase,
                    to: phase,
                    score: self.game.score(),
                },
            );
            self.phase = phase;
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &RunConfig, log: &mut Log) -> Result<()> {
    let mut session = Session::new(config.seed);
    log.record(
        0,
        &LogRecord::SessionStart {
            seed: config.seed,
            tick_ms: config.tick_ms,
        },
    );

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_actionable(&key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.game.apply_action(action);
                        session.drain_events(log);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            session.game.tick(elapsed_ms);
            session.drain_events(log);
        }
    }
}
