//! Terminal memory game runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output, and a fixed
//! timestep driving the session clock and mismatch flip-backs.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use memory_match::core::{GameSnapshot, Session};
use memory_match::input::{handle_key_event, should_quit, Cursor};
use memory_match::term::{
    BoardView, FrameBuffer, RenderThrottle, TerminalRenderer, ViewState, Viewport,
};
use memory_match::{AppConfig, EventLog};

/// Repaint interval when nothing changed.
const IDLE_REFRESH_MS: u64 = 1000;

fn main() -> Result<()> {
    let config = AppConfig::from_env();

    let mut log = match config.event_log_path.as_deref() {
        Some(path) => match EventLog::open(path) {
            Ok(log) => Some(log),
            Err(e) => {
                eprintln!("[EventLog] disabled: {:#}", e);
                None
            }
        },
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, log.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Some(log) = log.as_mut() {
        log.flush();
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &AppConfig,
    mut log: Option<&mut EventLog<BufWriter<File>>>,
) -> Result<()> {
    let mut session = Session::new(config.seed);
    let view = BoardView::default();
    let mut cursor = Cursor::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(IDLE_REFRESH_MS);

    let started = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();
    let mut last_size = (0u16, 0u16);

    loop {
        session.snapshot_into(&mut snap);
        cursor.sync_stage(snap.stage);

        // Render.
        let size = crossterm::terminal::size().unwrap_or((80, 24));
        if size != last_size {
            last_size = size;
            term.invalidate();
            throttle.force();
        }
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint()) {
            let state = ViewState {
                categories: &config.categories,
                menu_index: cursor.menu_index(),
                cursor: Some(cursor.card()),
                asset_root: &config.asset_root,
            };
            view.render_into(&snap, &state, Viewport::new(size.0, size.1), &mut fb);
            term.draw(&fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(cmd) = handle_key_event(key) {
                        if let Some(action) = cursor.apply(cmd, &snap, &config.categories) {
                            session.apply_action(action)?;
                        }
                        // The cursor isn't part of the snapshot fingerprint.
                        throttle.force();
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.force();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(config.tick_ms);
        }

        let events = session.take_events();
        if let Some(log) = log.as_deref_mut() {
            let ts_ms = started.elapsed().as_millis() as u64;
            log.record_all(ts_ms, session.generation(), &events);
        }
    }
}
