//! # fw-stage — FortuneWheel Spin Lifecycle Stages
//!
//! Defines the canonical stages of a spin session. Feedback (audio, winner
//! banner, error notifications) responds to STAGES, never to controller
//! internals — a stage is the semantic meaning of a moment in the spin flow,
//! not an animation frame and not an engine event.

pub mod event;
pub mod stage;

pub use event::*;
pub use stage::*;
