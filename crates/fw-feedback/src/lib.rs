//! # fw-feedback — FortuneWheel Feedback Coordinator
//!
//! Subscribes to spin lifecycle stages and turns them into side effects:
//! audio cues, the transient winner banner, and platform error notifications.
//! Feedback is strictly one-way — nothing in this crate can influence the
//! spin state machine, and a misbehaving capability never propagates into the
//! controller.

pub mod audio;
pub mod coordinator;
pub mod platform;

pub use audio::*;
pub use coordinator::*;
pub use platform::*;
