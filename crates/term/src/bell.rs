use std::io::{self, Write};

use crate::engine::AudioSink;
use crate::types::SoundCue;

/// Sound cues as terminal bells.
///
/// Only line clears and game over ring; a bell on every lock-in is noise.
/// Write failures are ignored, cues are fire-and-forget.
#[derive(Debug, Default)]
pub struct TerminalBell {
    muted: bool,
}

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        Self { muted: !enabled }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn rings_for(cue: SoundCue) -> bool {
        matches!(cue, SoundCue::LinesCleared | SoundCue::GameOver)
    }
}

impl AudioSink for TerminalBell {
    fn play(&mut self, cue: SoundCue) {
        if self.muted || !Self::rings_for(cue) {
            return;
        }
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07").and_then(|_| out.flush());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_loud_cues_ring() {
        assert!(!TerminalBell::rings_for(SoundCue::PieceLocked));
        assert!(TerminalBell::rings_for(SoundCue::LinesCleared));
        assert!(TerminalBell::rings_for(SoundCue::GameOver));
    }

    #[test]
    fn test_disabled_bell_is_muted() {
        assert!(TerminalBell::new(false).is_muted());
        assert!(!TerminalBell::new(true).is_muted());
    }
}
