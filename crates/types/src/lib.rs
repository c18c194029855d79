//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no dependencies, so the same values can be
//! passed between the game core, the engine glue and the terminal front-end.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 22 rows (indexed 0-21, row 0 is the **bottom** row)
//!
//! # Timing
//!
//! The game advances on a single fixed-period timer ([`TICK_MS`], 300ms). Every
//! tick either moves the active piece down one row or, right after a line clear,
//! spawns the next piece.
//!
//! # Examples
//!
//! ```
//! use classic_tetris_types::{GameCommand, PieceKind, Status, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Kinds keep the palette order, None first.
//! assert_eq!(PieceKind::None.index(), 0);
//! assert_eq!(PieceKind::from_index(3), Some(PieceKind::I));
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameCommand::from_str("hardDrop"), Some(GameCommand::HardDrop));
//!
//! assert_eq!(Status::GameOver.as_str(), "Game Over!");
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 22));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (22 rows)
pub const BOARD_HEIGHT: u8 = 22;

/// Gravity timer period in milliseconds.
pub const TICK_MS: u32 = 300;


/// Piece kinds, including the `None` sentinel.
///
/// The discriminant order is fixed: it is the index into the colour palette and
/// the value stored in a board cell. `None` marks an empty cell or "no active
/// piece".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceKind {
    #[default]
    None,
    Z,
    S,
    I,
    T,
    O,
    L,
    J,
}

impl PieceKind {
    /// All kinds in index order.
    pub const ALL: [PieceKind; 8] = [
        PieceKind::None,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
    ];

    /// The seven spawnable tetrominoes.
    pub const SHAPES: [PieceKind; 7] = [
        PieceKind::Z,
        PieceKind::S,
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn is_none(self) -> bool {
        self == PieceKind::None
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("none"), Some(PieceKind::None));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(PieceKind::None),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "i" => Some(PieceKind::I),
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::None => "none",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }
}

/// A cell on the game board. `PieceKind::None` means empty.
pub type Cell = PieceKind;

/// Phase of the board state machine.
///
/// ```text
/// Idle -> Running <-> Paused
///         Running -> AwaitingNextPiece -> Running   (one tick after a line clear)
///         Running -> GameOver -> Running            (only via start)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
    AwaitingNextPiece,
    GameOver,
}

impl Phase {
    /// True once `start()` has run at least once.
    pub fn is_started(self) -> bool {
        self != Phase::Idle
    }

    /// Phases in which the tick source should be running.
    pub fn is_ticking(self) -> bool {
        matches!(self, Phase::Running | Phase::AwaitingNextPiece)
    }
}

/// Text shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InGame,
    Paused,
    GameOver,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InGame => "In game",
            Status::Paused => "Paused",
            Status::GameOver => "Game Over!",
        }
    }
}

/// Fire-and-forget audio cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    PieceLocked,
    LinesCleared,
    GameOver,
}

/// Commands accepted from the input source.
///
/// `Restart` is host-level: the session saves the score record and then issues
/// a regular start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameCommand {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Drop piece one row, locking it when blocked
    SoftDrop,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Toggle pause
    Pause,
    /// Begin a fresh game
    Start,
    /// Save scores, then begin a fresh game
    Restart,
}

impl GameCommand {
    /// Parse command from string (case-insensitive camelCase names)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "rotatecw" => Some(GameCommand::RotateCw),
            "rotateccw" => Some(GameCommand::RotateCcw),
            "softdrop" => Some(GameCommand::SoftDrop),
            "harddrop" => Some(GameCommand::HardDrop),
            "pause" => Some(GameCommand::Pause),
            "start" => Some(GameCommand::Start),
            "restart" => Some(GameCommand::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::RotateCw => "rotateCw",
            GameCommand::RotateCcw => "rotateCcw",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::HardDrop => "hardDrop",
            GameCommand::Pause => "pause",
            GameCommand::Start => "start",
            GameCommand::Restart => "restart",
        }
    }
}

/// Notifications emitted by the board (and forwarded by the session).
///
/// Observers drain these after every command or tick; nothing in the core
/// calls into rendering, audio or persistence directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// Grid or active piece changed; take a new snapshot.
    Redraw,
    StatusChanged(Status),
    LastScoreChanged(u32),
    MaxScoreChanged(u32),
    Sound(SoundCue),
    /// The tick source should (re)start with a fresh period.
    TickerStarted,
    /// The tick source should stop immediately.
    TickerStopped,
    /// Spawn failed. Carries the final line count of the game.
    GameOver { lines_cleared: u32 },
}
