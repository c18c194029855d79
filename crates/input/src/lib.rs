//! Terminal input mapping.
//!
//! Maps `crossterm` key events onto [`GameCommand`](crate::types::GameCommand)s
//! plus the two host-only keys (quit and the share toggle).

pub mod map;

pub use classic_tetris_types as types;

pub use map::{handle_key_event, should_quit, should_toggle_share};
