//! SpinStage — the canonical spin lifecycle phases

use serde::{Deserialize, Serialize};

/// Canonical spin stage
///
/// One spin session passes through these stages strictly forward:
/// requested → start → settled, or requested → failed. There is no backward
/// transition and no overlap between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpinStage {
    /// Spin accepted; the winning value has been requested from the draw
    /// service (session is AwaitingResult)
    SpinRequested {
        /// Remote draw identifier
        draw_code: String,
    },

    /// Winner known, animation started (session is Animating)
    SpinStart {
        /// Winning segment index the wheel will land on
        target_index: usize,
    },

    /// Animation finished, wheel at rest on the winning segment
    SpinSettled {
        /// Winning segment label
        winning_value: String,
        /// Winning segment index (0-based)
        segment_index: usize,
        /// Final resting rotation in radians
        final_rotation: f64,
    },

    /// Spin failed before or instead of animating; rotation unchanged
    SpinFailed {
        /// Human-readable failure description
        reason: String,
    },
}

impl SpinStage {
    /// Stage type name
    pub fn type_name(&self) -> &'static str {
        match self {
            SpinStage::SpinRequested { .. } => "spin_requested",
            SpinStage::SpinStart { .. } => "spin_start",
            SpinStage::SpinSettled { .. } => "spin_settled",
            SpinStage::SpinFailed { .. } => "spin_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_tag_round_trip() {
        let stage = SpinStage::SpinSettled {
            winning_value: "7".into(),
            segment_index: 6,
            final_rotation: 66.4,
        };
        let json = serde_json::to_string(&stage).unwrap();
        assert!(json.contains("\"type\":\"spin_settled\""));
        let back: SpinStage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stage);
    }

    #[test]
    fn type_names() {
        let s = SpinStage::SpinFailed {
            reason: "boom".into(),
        };
        assert_eq!(s.type_name(), "spin_failed");
    }
}
