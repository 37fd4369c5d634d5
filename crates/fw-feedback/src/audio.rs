//! Audio feedback capability

use serde::{Deserialize, Serialize};

/// Named audio cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioCue {
    /// Wheel started spinning
    Spin,
    /// Wheel settled on the winner
    Win,
}

impl AudioCue {
    /// Cue event name
    pub fn name(&self) -> &'static str {
        match self {
            AudioCue::Spin => "spin",
            AudioCue::Win => "win",
        }
    }
}

/// Whether the audio backend is ready to produce sound.
///
/// An explicit capability state: audio backends typically need a user gesture
/// before they may start. While Unavailable, `play` is silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioStatus {
    /// Backend not initialized yet; cues are dropped
    #[default]
    Unavailable,
    /// Backend ready; cues play
    Ready,
}

/// The audio feedback generator.
///
/// Fire-and-forget: `play` must not block and must not propagate failures
/// into the caller. A cue that cannot be produced is simply lost.
pub trait AudioFeedback: Send + Sync {
    /// Current backend status
    fn status(&self) -> AudioStatus;

    /// Play a cue. No-op while the backend is Unavailable.
    fn play(&self, cue: AudioCue);
}

/// Audio double that is never ready — for headless runs and tests
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioFeedback for NullAudio {
    fn status(&self) -> AudioStatus {
        AudioStatus::Unavailable
    }

    fn play(&self, cue: AudioCue) {
        log::debug!("null audio: dropped cue {:?}", cue.name());
    }
}
