//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every gameplay rule and nothing else. It has **no
//! dependencies** on UI, audio, storage or timers:
//!
//! - **Deterministic**: the spawn order comes from an injected [`KindSource`]
//! - **Observable**: state changes are queued as events, never pushed into
//!   callbacks
//! - **Testable**: scenarios can be built from a preloaded [`Grid`]
//!
//! # Module Structure
//!
//! - [`piece`]: shape table and pivot rotation
//! - [`grid`]: flat cell storage, full-row detection and compaction
//! - [`board`]: the phase state machine and the command surface
//! - [`rng`]: kind sources (seeded LCG, fixed sequences)
//! - [`snapshot`]: read-only copies for renderers
//!
//! # Game Rules
//!
//! Classic rules, no modern extras:
//!
//! - **Rotation**: quarter turns about a fixed pivot, no wall kicks; O never
//!   rotates
//! - **Gravity**: one row per tick; a blocked descent locks the piece
//! - **Line clears**: full rows vanish, the next piece arrives one tick later
//! - **Score**: the number of cleared lines
//! - **Game over**: the next piece cannot be placed at the spawn point
//!
//! # Example
//!
//! ```
//! use classic_tetris_core::{Board, FixedSequence};
//! use classic_tetris_types::{GameCommand, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let mut board = Board::with_source(BOARD_WIDTH, BOARD_HEIGHT, FixedSequence::repeat(PieceKind::O));
//! board.start();
//!
//! board.apply(GameCommand::MoveLeft);
//! board.apply(GameCommand::RotateCw);
//! board.apply(GameCommand::HardDrop);
//!
//! assert_eq!(board.phase(), Phase::Running);
//! assert_eq!(board.grid().occupied(), 4);
//! for _event in board.drain_events() {
//!     // hand to renderer / audio / score keeping
//! }
//! ```

pub mod board;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use classic_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use grid::Grid;
pub use piece::{shape_table, Piece};
pub use rng::{FixedSequence, KindSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, BoardSnapshot};
