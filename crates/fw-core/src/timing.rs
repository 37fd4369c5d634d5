//! Timing profiles for spin animation and feedback

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing profile for spin pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimingProfile {
    /// Normal gameplay timing
    #[default]
    Normal,
    /// Fast mode (shorter spin, fewer turns)
    Turbo,
    /// Near-instant, for deterministic tests
    Studio,
    /// Custom timing
    Custom,
}

/// Detailed timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinTiming {
    /// Profile type
    pub profile: TimingProfile,

    /// Spin animation duration (ms)
    pub spin_duration_ms: f64,

    /// Full extra revolutions added to the target rotation (min 1)
    pub extra_turns: u32,

    /// Frame pacing for the animation loop (frames per second)
    pub frame_rate: f64,

    /// Winner banner display duration before auto-dismissal (ms)
    pub winner_banner_ms: f64,

    /// Timeout on the remote winning-value request (ms)
    pub request_timeout_ms: u64,
}

impl SpinTiming {
    /// Normal gameplay timing — the classic 5 s spin with 10 turns
    pub fn normal() -> Self {
        Self {
            profile: TimingProfile::Normal,
            spin_duration_ms: 5000.0,
            extra_turns: 10,
            frame_rate: 60.0,
            winner_banner_ms: 3000.0,
            request_timeout_ms: 10_000,
        }
    }

    /// Turbo mode
    pub fn turbo() -> Self {
        Self {
            profile: TimingProfile::Turbo,
            spin_duration_ms: 2000.0,
            extra_turns: 6,
            frame_rate: 60.0,
            winner_banner_ms: 1500.0,
            request_timeout_ms: 10_000,
        }
    }

    /// Studio mode — near-instant spin for deterministic testing
    pub fn studio() -> Self {
        Self {
            profile: TimingProfile::Studio,
            spin_duration_ms: 50.0,
            extra_turns: 1,
            frame_rate: 240.0,
            winner_banner_ms: 100.0,
            request_timeout_ms: 1000,
        }
    }

    /// Get config for profile
    pub fn from_profile(profile: TimingProfile) -> Self {
        match profile {
            TimingProfile::Normal => Self::normal(),
            TimingProfile::Turbo => Self::turbo(),
            TimingProfile::Studio => Self::studio(),
            TimingProfile::Custom => Self::normal(),
        }
    }

    /// Scale durations by factor (< 1.0 = faster); turns and pacing unchanged
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            profile: TimingProfile::Custom,
            spin_duration_ms: self.spin_duration_ms * factor,
            extra_turns: self.extra_turns,
            frame_rate: self.frame_rate,
            winner_banner_ms: self.winner_banner_ms * factor,
            request_timeout_ms: (self.request_timeout_ms as f64 * factor) as u64,
        }
    }

    /// Spin duration as a `Duration`
    pub fn spin_duration(&self) -> Duration {
        Duration::from_secs_f64((self.spin_duration_ms / 1000.0).max(0.0))
    }

    /// Interval between animation frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1.0))
    }

    /// Winner banner display duration
    pub fn winner_banner(&self) -> Duration {
        Duration::from_secs_f64((self.winner_banner_ms / 1000.0).max(0.0))
    }

    /// Remote request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self::normal()
    }
}
