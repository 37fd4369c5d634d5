//! # fw-engine — FortuneWheel Spin Controller
//!
//! Owns the only mutable state in the system: the wheel rotation and the
//! spin-session state machine. Everything around it is a capability trait.
//!
//! ## Architecture
//!
//! ```text
//!  spin(draw_code)
//!      │
//!      v
//!  SpinController ──── DrawService (async, timeout-guarded) ──> winning value
//!      │
//!      ├── fw-core geometry: target_rotation_for(winner, rotation)
//!      │
//!      ├── FrameScheduler: tick(elapsed) until duration elapses
//!      │        rotation = start + (target - start) * ease(elapsed_ratio)
//!      │
//!      └── StageSink fan-out: SpinRequested → SpinStart → SpinSettled
//!                                           └─────────→ SpinFailed
//! ```
//!
//! Lifecycle guard: at most one in-flight session; a spin requested while one
//! is AwaitingResult or Animating is rejected (a no-op), never queued.
//! Teardown stops further frames; late draw-service responses are discarded
//! via a session generation counter and never mutate released state.

pub mod controller;
pub mod scheduler;
pub mod service;
pub mod session;

pub use controller::*;
pub use scheduler::*;
pub use service::*;
pub use session::*;
