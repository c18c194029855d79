use classic_tetris_types::SoundCue;

/// Receiver of fire-and-forget sound cues.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Keeps every cue, in order. Handy for tests and replays.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    pub played: Vec<SoundCue>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}

impl<A: AudioSink + ?Sized> AudioSink for Box<A> {
    fn play(&mut self, cue: SoundCue) {
        (**self).play(cue)
    }
}
