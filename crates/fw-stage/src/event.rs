//! StageEvent — a stage occurrence with metadata, and the sink contract

use serde::{Deserialize, Serialize};

use crate::stage::SpinStage;

/// A stage occurrence with timing and session metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageEvent {
    /// The canonical stage
    pub stage: SpinStage,

    /// Milliseconds since the controller was created
    pub timestamp_ms: f64,

    /// Session this stage belongs to
    #[serde(default)]
    pub session_id: Option<String>,
}

impl StageEvent {
    /// Create a new stage event
    pub fn new(stage: SpinStage, timestamp_ms: f64) -> Self {
        Self {
            stage,
            timestamp_ms,
            session_id: None,
        }
    }

    /// Attach the owning session id
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Stage type name
    pub fn type_name(&self) -> &'static str {
        self.stage.type_name()
    }
}

/// Receiver of stage events.
///
/// Sinks are side-effect surfaces (audio, banners, notifications). A sink
/// must never influence the spin state machine: `on_stage` returns nothing
/// and the controller keeps emitting regardless of what sinks do.
pub trait StageSink: Send + Sync {
    /// Called synchronously at every lifecycle edge, in emission order
    fn on_stage(&self, event: &StageEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_attaches_session() {
        let event = StageEvent::new(
            SpinStage::SpinRequested {
                draw_code: "draw-1".into(),
            },
            12.5,
        )
        .with_session("abc");
        assert_eq!(event.session_id.as_deref(), Some("abc"));
        assert_eq!(event.type_name(), "spin_requested");
    }
}
