//! Session - the board plus everything the host wires around it
//!
//! A [`Session`] drains the board's event queue after every command or tick
//! and routes each event: ticker control to the [`Ticker`], sound cues to the
//! [`AudioSink`], the game-over result to the [`GameScore`] and the
//! [`ScoreStore`]. Every event is then re-queued for the host (renderer,
//! status line) together with the score events the session adds.

use std::time::{Duration, Instant};

use classic_tetris_core::{Board, BoardSnapshot, KindSource, SimpleRng};
use classic_tetris_types::{GameCommand, GameEvent, Phase};

use crate::audio::{AudioSink, NullAudio};
use crate::score::{GameScore, ScoreStore, StoreError};
use crate::ticker::Ticker;

#[derive(Debug)]
pub struct Session<S = SimpleRng, A = NullAudio> {
    board: Board<S>,
    score: GameScore,
    store: Option<ScoreStore>,
    ticker: Ticker,
    audio: A,
    events: Vec<GameEvent>,
}

impl<S: KindSource, A: AudioSink> Session<S, A> {
    /// Session without persistence. Nothing runs until `Start`.
    pub fn new(board: Board<S>, score: GameScore, ticker: Ticker, audio: A) -> Self {
        Self {
            board,
            score,
            store: None,
            ticker,
            audio,
            events: Vec::new(),
        }
    }

    /// Save the score record here on game over and on restart.
    pub fn with_store(mut self, store: ScoreStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn board(&self) -> &Board<S> {
        &self.board
    }

    pub fn score(&self) -> &GameScore {
        &self.score
    }

    pub fn store(&self) -> Option<&ScoreStore> {
        self.store.as_ref()
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn phase(&self) -> Phase {
        self.board.phase()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Time the host may sleep before the next [`Session::update`].
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until(now)
    }

    /// Apply a player command.
    ///
    /// `Restart` saves the current record before starting over. The returned
    /// flag says whether the board accepted the command; a failed save is
    /// reported only after the board and its events were fully processed.
    pub fn handle(&mut self, command: GameCommand, now: Instant) -> Result<bool, StoreError> {
        let mut saved = Ok(());
        if command == GameCommand::Restart && self.board.phase() != Phase::Paused {
            saved = self.save();
        }

        let accepted = self.board.apply(command);
        let routed = self.route(now);
        saved?;
        routed?;
        Ok(accepted)
    }

    /// Fire a tick if one is due. Returns whether the board ticked.
    pub fn update(&mut self, now: Instant) -> Result<bool, StoreError> {
        if !self.ticker.poll(now) {
            return Ok(false);
        }
        let ticked = self.board.tick();
        self.route(now)?;
        Ok(ticked)
    }

    /// Events for the host, in the order they happened.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn save(&self) -> Result<(), StoreError> {
        match &self.store {
            Some(store) => store.save(&self.score),
            None => Ok(()),
        }
    }

    fn route(&mut self, now: Instant) -> Result<(), StoreError> {
        let mut result = Ok(());

        for event in self.board.drain_events() {
            self.events.push(event);
            match event {
                GameEvent::TickerStarted => self.ticker.start(now),
                GameEvent::TickerStopped => self.ticker.stop(),
                GameEvent::Sound(cue) => self.audio.play(cue),
                GameEvent::GameOver { lines_cleared } => {
                    let change = self.score.record(lines_cleared);
                    self.events
                        .push(GameEvent::LastScoreChanged(change.last_points));
                    if let Some(max) = change.new_max {
                        self.events.push(GameEvent::MaxScoreChanged(max));
                    }
                    if let Err(err) = self.save() {
                        if result.is_ok() {
                            result = Err(err);
                        }
                    }
                }
                _ => {}
            }
        }

        result
    }
}
