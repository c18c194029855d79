//! Terminal Tetris runner (default binary).
//!
//! Reads settings from the environment, loads the score record, then drives a
//! [`Session`] from crossterm key events and the session's own tick deadline.
//! Host-side problems are reported on stderr once the terminal is restored.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use classic_tetris::core::Board;
use classic_tetris::engine::{EngineConfig, GameScore, ScoreStore, Session, Ticker};
use classic_tetris::input::{handle_key_event, should_quit, should_toggle_share};
use classic_tetris::term::{FrameBuffer, GameView, Hud, TerminalBell, TerminalRenderer, Viewport};
use classic_tetris::types::{GameEvent, Status};

/// Poll interval while no tick is scheduled (idle, paused, game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

type GameSession = Session<classic_tetris::core::SimpleRng, TerminalBell>;

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    let mut notes = Vec::new();

    let store = ScoreStore::from_config(&config);
    let score = store.load().unwrap_or_else(|err| {
        notes.push(format!("[Scores] {err}; starting from zero"));
        GameScore::default()
    });

    let seed = config.seed.unwrap_or_else(rand::random);
    let session = Session::new(
        Board::new(seed),
        score,
        Ticker::from_millis(config.tick_ms),
        TerminalBell::new(config.sound),
    )
    .with_store(store);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session, &mut notes);

    // Always try to restore terminal state.
    let _ = term.exit();
    for note in &notes {
        eprintln!("{note}");
    }
    result
}

/// What the side panel shows besides the board.
struct HudState {
    status: Option<Status>,
    last_points: u32,
    show_share: bool,
    error: Option<String>,
}

impl HudState {
    fn absorb(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::StatusChanged(status) => self.status = Some(status),
                GameEvent::LastScoreChanged(points) => self.last_points = points,
                _ => {}
            }
        }
    }
}

fn run(term: &mut TerminalRenderer, mut session: GameSession, notes: &mut Vec<String>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut hud = HudState {
        status: None,
        last_points: session.score().last_points,
        show_share: false,
        error: None,
    };

    loop {
        if let Err(err) = session.update(Instant::now()) {
            notes.push(format!("[Scores] {err}"));
            hud.error = Some(err.to_string());
        }
        hud.absorb(&session.drain_events());

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let share = hud.show_share.then(|| session.score().share_text());
        let panel = Hud {
            status: hud.status,
            last_points: hud.last_points,
            max_points: session.score().max_points,
            share_text: share.as_deref(),
            error: hud.error.as_deref(),
        };
        view.render_into(&session.snapshot(), &panel, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = session
            .next_tick_in(Instant::now())
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL));
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    return Ok(());
                }
                if should_toggle_share(key) {
                    hud.show_share = !hud.show_share;
                    continue;
                }
                if let Some(command) = handle_key_event(key) {
                    if let Err(err) = session.handle(command, Instant::now()) {
                        notes.push(format!("[Scores] {err}"));
                        hud.error = Some(err.to_string());
                    }
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
