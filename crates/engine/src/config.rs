use std::path::PathBuf;

use classic_tetris_types::TICK_MS;

use crate::score::DEFAULT_SCORE_FILE;

/// Host settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Gravity period in milliseconds.
    pub tick_ms: u32,
    pub score_file: PathBuf,
    pub sound: bool,
    /// Fixed generator seed; `None` lets the host pick one.
    pub seed: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            score_file: PathBuf::from(DEFAULT_SCORE_FILE),
            sound: true,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Environment variables:
    /// - `TETRIS_TICK_MS` (default 300, values below 1 ignored)
    /// - `TETRIS_SCORE_FILE` (default `data`)
    /// - `TETRIS_SOUND` (`0`, `false` or `off` mutes)
    /// - `TETRIS_SEED` (default random)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let tick_ms = lookup("TETRIS_TICK_MS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|&ms| ms >= 1)
            .unwrap_or(defaults.tick_ms);

        let score_file = lookup("TETRIS_SCORE_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.score_file);

        let sound = lookup("TETRIS_SOUND")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off"))
            .unwrap_or(defaults.sound);

        let seed = lookup("TETRIS_SEED").and_then(|v| v.trim().parse::<u32>().ok());

        Self {
            tick_ms,
            score_file,
            sound,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> EngineConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = config_from(&[]);
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.tick_ms, 300);
        assert_eq!(config.score_file, PathBuf::from("data"));
        assert!(config.sound);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_variables_override_defaults() {
        let config = config_from(&[
            ("TETRIS_TICK_MS", "120"),
            ("TETRIS_SCORE_FILE", "/tmp/scores.json"),
            ("TETRIS_SOUND", "Off"),
            ("TETRIS_SEED", "42"),
        ]);
        assert_eq!(config.tick_ms, 120);
        assert_eq!(config.score_file, PathBuf::from("/tmp/scores.json"));
        assert!(!config.sound);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("TETRIS_TICK_MS", "0"),
            ("TETRIS_SCORE_FILE", "  "),
            ("TETRIS_SOUND", "yes"),
            ("TETRIS_SEED", "abc"),
        ]);
        assert_eq!(config.tick_ms, 300);
        assert_eq!(config.score_file, PathBuf::from("data"));
        assert!(config.sound);
        assert_eq!(config.seed, None);
    }
}
