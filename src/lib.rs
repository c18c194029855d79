//! Classic Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name:
//! `classic_tetris::{types, core, engine, input, term}`.

pub use classic_tetris_core as core;
pub use classic_tetris_engine as engine;
pub use classic_tetris_input as input;
pub use classic_tetris_term as term;
pub use classic_tetris_types as types;
