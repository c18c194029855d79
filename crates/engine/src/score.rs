//! Score record and its JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;

/// Default score file name, relative to the working directory.
pub const DEFAULT_SCORE_FILE: &str = "data";

/// Best and most recent result, persisted between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameScore {
    #[serde(default)]
    pub max_points: u32,
    #[serde(default)]
    pub last_points: u32,
}

/// What changed when a game result was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChange {
    pub last_points: u32,
    /// New best, if this game beat the previous one.
    pub new_max: Option<u32>,
}

impl GameScore {
    pub fn new(max_points: u32, last_points: u32) -> Self {
        Self {
            max_points,
            last_points,
        }
    }

    /// Record the final line count of a game.
    pub fn record(&mut self, points: u32) -> ScoreChange {
        self.last_points = points;
        let new_max = if points > self.max_points {
            self.max_points = points;
            Some(points)
        } else {
            None
        };
        ScoreChange {
            last_points: points,
            new_max,
        }
    }

    /// Text for sharing results outside the game.
    pub fn share_text(&self) -> String {
        format!(
            "Your results in Tetris:\n\nMax score - {}\nLast score - {}",
            self.max_points, self.last_points
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("score file {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed score file {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode scores: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Location of the score file. One writer; every save overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(&config.score_file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record. A missing file is not an error and yields zeros.
    pub fn load(&self) -> Result<GameScore, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(GameScore::default()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, score: &GameScore) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(score)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        fs::write(&self.path, text).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_FILE)
    }
}
