//! Board module - the game state machine
//!
//! The [`Board`] owns the grid, the falling piece, the line counter and the
//! phase. Every gameplay rule lives here; every movement and rotation funnels
//! through [`Board::try_move`].
//!
//! Coordinates: `x` grows to the right, `y` (row) grows **upward** with row 0 at
//! the bottom. A piece at pivot `(x, y)` covers `(x + ox, y - oy)` for each of
//! its offsets.
//!
//! The board never calls into rendering, audio or storage. State changes are
//! queued as [`GameEvent`]s and drained by the host with
//! [`Board::drain_events`].

use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::{KindSource, SimpleRng};
use crate::snapshot::{ActiveSnapshot, BoardSnapshot};
use crate::types::{
    GameCommand, GameEvent, Phase, SoundCue, Status, BOARD_HEIGHT, BOARD_WIDTH,
};

/// Complete game state.
#[derive(Debug, Clone)]
pub struct Board<S = SimpleRng> {
    grid: Grid,
    piece: Piece,
    x: i8,
    y: i8,
    lines_cleared: u32,
    phase: Phase,
    /// Phase to return to when unpausing.
    resume_phase: Phase,
    source: S,
    events: Vec<GameEvent>,
}

impl Board<SimpleRng> {
    /// Reference-sized board (10x22) with a seeded generator.
    pub fn new(seed: u32) -> Self {
        Self::with_source(BOARD_WIDTH, BOARD_HEIGHT, SimpleRng::new(seed))
    }
}

impl Default for Board<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: KindSource> Board<S> {
    /// Empty board of the given size.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= width, height <= 100`.
    pub fn with_source(width: u8, height: u8, source: S) -> Self {
        Self::with_grid(Grid::new(width, height), source)
    }

    /// Board over a preloaded grid, still `Idle`.
    ///
    /// Used to set up scenarios; `start()` clears the grid as usual.
    pub fn with_grid(grid: Grid, source: S) -> Self {
        assert!(
            (1..=100).contains(&grid.width()) && (1..=100).contains(&grid.height()),
            "board dimensions must be within 1..=100"
        );
        Self {
            grid,
            piece: Piece::none(),
            x: 0,
            y: 0,
            lines_cleared: 0,
            phase: Phase::Idle,
            resume_phase: Phase::Running,
            source,
            events: Vec::new(),
        }
    }

    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    pub fn height(&self) -> u8 {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The falling piece (kind `None` when nothing is in play).
    pub fn active_piece(&self) -> Piece {
        self.piece
    }

    /// Pivot position of the falling piece.
    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Events queued since the last drain.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Absolute cells of the falling piece, if any.
    pub fn active_cells(&self) -> Option<[(i8, i8); 4]> {
        if self.piece.is_none() {
            return None;
        }
        Some(self.piece.cells().map(|(ox, oy)| (self.x + ox, self.y - oy)))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            cells: self.grid.cells().to_vec(),
            active: self.active_cells().map(|cells| ActiveSnapshot {
                kind: self.piece.kind(),
                cells,
            }),
            phase: self.phase,
            lines_cleared: self.lines_cleared,
        }
    }

    /// Dispatch a command. `Restart` is treated as `Start` at this level.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::RotateCw => self.rotate_cw(),
            GameCommand::RotateCcw => self.rotate_ccw(),
            GameCommand::SoftDrop => self.soft_drop(),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::Pause => self.pause(),
            GameCommand::Start | GameCommand::Restart => self.start(),
        }
    }

    /// Begin a fresh game. Rejected while paused.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Paused {
            return false;
        }

        self.grid.clear();
        self.lines_cleared = 0;
        self.piece = Piece::none();
        self.x = 0;
        self.y = 0;
        self.phase = Phase::Running;
        self.resume_phase = Phase::Running;

        self.emit(GameEvent::StatusChanged(Status::InGame));
        self.emit(GameEvent::LastScoreChanged(0));
        self.emit(GameEvent::TickerStarted);
        self.emit(GameEvent::Redraw);

        self.spawn_piece();
        true
    }

    /// Toggle pause. Needs a game in progress (running, paused, or waiting for
    /// the next piece); a finished game cannot be paused.
    pub fn pause(&mut self) -> bool {
        match self.phase {
            Phase::Running | Phase::AwaitingNextPiece => {
                self.resume_phase = self.phase;
                self.phase = Phase::Paused;
                self.emit(GameEvent::TickerStopped);
                self.emit(GameEvent::StatusChanged(Status::Paused));
                self.emit(GameEvent::Redraw);
                true
            }
            Phase::Paused => {
                self.phase = self.resume_phase;
                self.emit(GameEvent::TickerStarted);
                self.emit(GameEvent::StatusChanged(Status::InGame));
                self.emit(GameEvent::Redraw);
                true
            }
            Phase::Idle | Phase::GameOver => false,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.accepts_input() && self.try_move(self.piece, self.x - 1, self.y)
    }

    pub fn move_right(&mut self) -> bool {
        self.accepts_input() && self.try_move(self.piece, self.x + 1, self.y)
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.accepts_input() && self.try_move(self.piece.rotate_right(), self.x, self.y)
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.accepts_input() && self.try_move(self.piece.rotate_left(), self.x, self.y)
    }

    /// One row down, locking the piece when it cannot descend.
    pub fn soft_drop(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.one_line_down();
        true
    }

    /// Straight to the lowest free position, then a single lock-in.
    pub fn hard_drop(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }

        let mut landing_y = self.y;
        while self.can_place(&self.piece, self.x, landing_y - 1) {
            landing_y -= 1;
        }
        if landing_y != self.y {
            self.try_move(self.piece, self.x, landing_y);
        }

        self.piece_dropped();
        true
    }

    /// Timer callback: spawn after a line-clear pause, otherwise gravity.
    pub fn tick(&mut self) -> bool {
        match self.phase {
            Phase::AwaitingNextPiece => {
                self.phase = Phase::Running;
                self.spawn_piece();
                true
            }
            Phase::Running if !self.piece.is_none() => {
                self.one_line_down();
                true
            }
            _ => false,
        }
    }

    /// Place `piece` at `(x, y)` if every cell is inside the grid and empty.
    ///
    /// On failure nothing changes.
    pub fn try_move(&mut self, piece: Piece, x: i8, y: i8) -> bool {
        if !self.can_place(&piece, x, y) {
            return false;
        }

        self.piece = piece;
        self.x = x;
        self.y = y;
        self.emit(GameEvent::Redraw);
        true
    }

    /// Remove every full row and add them to the line count.
    pub fn remove_full_lines(&mut self) -> u32 {
        let removed = self.grid.clear_full_rows() as u32;
        if removed > 0 {
            self.lines_cleared += removed;
            self.emit(GameEvent::LastScoreChanged(self.lines_cleared));
        }
        removed
    }

    /// Spawn a random piece at the top centre.
    ///
    /// Returns false and ends the game when the spawn cells are blocked.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = Piece::spawn_random(&mut self.source);
        let x = (self.grid.width() / 2) as i8 + 1;
        let y = self.grid.height() as i8 - 1 + piece.min_y();

        if self.try_move(piece, x, y) {
            self.phase = Phase::Running;
            return true;
        }

        self.piece = Piece::none();
        self.phase = Phase::GameOver;
        self.emit(GameEvent::TickerStopped);
        self.emit(GameEvent::StatusChanged(Status::GameOver));
        self.emit(GameEvent::Sound(SoundCue::GameOver));
        self.emit(GameEvent::GameOver {
            lines_cleared: self.lines_cleared,
        });
        self.emit(GameEvent::Redraw);
        false
    }

    fn accepts_input(&self) -> bool {
        self.phase == Phase::Running && !self.piece.is_none()
    }

    fn can_place(&self, piece: &Piece, x: i8, y: i8) -> bool {
        piece
            .cells()
            .iter()
            .all(|&(ox, oy)| self.grid.is_free(x + ox, y - oy))
    }

    fn one_line_down(&mut self) {
        if !self.try_move(self.piece, self.x, self.y - 1) {
            self.piece_dropped();
        }
    }

    /// Lock the falling piece into the grid.
    fn piece_dropped(&mut self) {
        let kind = self.piece.kind();
        for &(ox, oy) in self.piece.cells() {
            self.grid.set(self.x + ox, self.y - oy, kind);
        }
        self.emit(GameEvent::Sound(SoundCue::PieceLocked));

        if self.remove_full_lines() > 0 {
            // Next piece arrives on the following tick.
            self.piece = Piece::none();
            self.phase = Phase::AwaitingNextPiece;
            self.emit(GameEvent::Sound(SoundCue::LinesCleared));
            self.emit(GameEvent::Redraw);
        } else {
            self.spawn_piece();
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
