//! Host-side glue around the core board
//!
//! Everything the board deliberately leaves out lives here: the tick source,
//! the sound seam, the persisted score record and the configuration. The
//! [`Session`] ties them together for a front-end.

pub mod audio;
pub mod config;
pub mod score;
pub mod session;
pub mod ticker;

pub use audio::{AudioSink, NullAudio, RecordingAudio};
pub use config::EngineConfig;
pub use score::{GameScore, ScoreChange, ScoreStore, StoreError, DEFAULT_SCORE_FILE};
pub use session::Session;
pub use ticker::Ticker;
