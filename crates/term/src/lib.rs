//! Terminal front-end.
//!
//! Renders board snapshots into a simple framebuffer that is diff-flushed to
//! the terminal with crossterm. Cells are drawn 2 columns wide so blocks look
//! square in typical fonts.

pub mod bell;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use classic_tetris_core as core;
pub use classic_tetris_engine as engine;
pub use classic_tetris_types as types;

pub use bell::TerminalBell;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{kind_color, GameView, Hud, Viewport, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
