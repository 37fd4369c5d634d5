//! Spin session — one state-machine instance per spin attempt

use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Session lifecycle state.
///
/// Transitions run strictly forward; there is no backward edge and no
/// self-loop. Completed and Failed are terminal — the session is superseded
/// by the next one, which carries forward only the terminal rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinState {
    /// No session yet, wheel at rest
    Idle,
    /// Winning value requested from the draw service
    AwaitingResult,
    /// Animation in progress; rotation is being written each frame
    Animating,
    /// Animation finished on the winning segment
    Completed,
    /// Request failed or winner was invalid; rotation unchanged
    Failed,
}

impl SpinState {
    /// State display name
    pub fn name(&self) -> &'static str {
        match self {
            SpinState::Idle => "idle",
            SpinState::AwaitingResult => "awaiting_result",
            SpinState::Animating => "animating",
            SpinState::Completed => "completed",
            SpinState::Failed => "failed",
        }
    }

    /// Can a new spin request be accepted in this state?
    ///
    /// The concurrency guard: at most one in-flight session.
    #[inline]
    pub fn accepts_spin(&self) -> bool {
        matches!(
            self,
            SpinState::Idle | SpinState::Completed | SpinState::Failed
        )
    }

    /// Is this a terminal state for the session?
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, SpinState::Completed | SpinState::Failed)
    }

    /// Is `next` a legal strictly-forward transition from `self`?
    pub fn can_advance_to(&self, next: SpinState) -> bool {
        matches!(
            (self, next),
            (SpinState::Idle, SpinState::AwaitingResult)
                | (SpinState::AwaitingResult, SpinState::Animating)
                | (SpinState::AwaitingResult, SpinState::Failed)
                | (SpinState::Animating, SpinState::Completed)
        )
    }
}

/// One spin attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinSession {
    /// Generated session id
    pub id: String,
    /// Remote draw identifier
    pub draw_code: String,
    /// Current state
    pub state: SpinState,
    /// Rotation at animation start — always the rotation left over from the
    /// previous session (continuity, no snap-back)
    pub start_rotation: f64,
    /// Computed once the winner is known; strictly greater than
    /// `start_rotation` by at least one full turn
    pub target_rotation: Option<f64>,
    /// The winning segment label, once known
    pub winning_value: Option<String>,
}

impl SpinSession {
    /// Open a new session in AwaitingResult, continuing from `start_rotation`
    pub fn open(draw_code: impl Into<String>, start_rotation: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            draw_code: draw_code.into(),
            state: SpinState::AwaitingResult,
            start_rotation,
            target_rotation: None,
            winning_value: None,
        }
    }
}

/// Animation progress as a ratio in [0, 1] — derived each frame, never stored
#[inline]
pub fn elapsed_ratio(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}
