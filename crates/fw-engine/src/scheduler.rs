//! Frame scheduling abstraction
//!
//! The state machine never talks to a concrete pacing mechanism. A scheduler
//! drives a per-tick callback with elapsed time until the animation duration
//! has passed or the callback stops it — which makes the controller
//! deterministically testable by feeding synthetic time.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};

/// Outcome of one animation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Keep scheduling frames
    Continue,
    /// Stop the loop (animation finished or cancelled)
    Stop,
}

/// Per-tick callback receiving elapsed time since animation start
pub type TickFn<'a> = &'a mut (dyn FnMut(Duration) -> Tick + Send);

/// Drives an animation callback at some pace.
///
/// Implementations must call `tick` with monotonically non-decreasing elapsed
/// values and must deliver a final tick with `elapsed >= duration` unless the
/// callback stopped the loop earlier.
#[async_trait]
pub trait FrameScheduler: Send + Sync {
    /// Invoke `tick` until `duration` has elapsed or the callback returns
    /// [`Tick::Stop`].
    async fn animate(&self, duration: Duration, tick: TickFn<'_>);
}

/// Wall-clock scheduler paced at a fixed frame interval.
///
/// One tick per display-refresh-sized interval; elapsed time is measured, not
/// accumulated, so a skipped frame does not stretch the animation.
pub struct TickScheduler {
    frame_interval: Duration,
}

impl TickScheduler {
    /// Create a scheduler ticking every `frame_interval`
    pub fn new(frame_interval: Duration) -> Self {
        Self { frame_interval }
    }

    /// 60 frames per second
    pub fn at_60fps() -> Self {
        Self::new(Duration::from_secs_f64(1.0 / 60.0))
    }
}

#[async_trait]
impl FrameScheduler for TickScheduler {
    async fn animate(&self, duration: Duration, tick: TickFn<'_>) {
        let start = Instant::now();
        let mut interval = tokio::time::interval(self.frame_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            let elapsed = start.elapsed();
            let outcome = tick(elapsed);
            if outcome == Tick::Stop || elapsed >= duration {
                break;
            }
        }
    }
}

/// Deterministic scheduler feeding pre-set elapsed values.
///
/// Replays the configured steps in order, then delivers one final tick at
/// exactly `duration`. No waiting is involved; the whole animation resolves
/// synchronously within one poll.
pub struct ManualScheduler {
    steps: Vec<Duration>,
}

impl ManualScheduler {
    /// Replay the given elapsed values before the final tick
    pub fn new(steps: Vec<Duration>) -> Self {
        Self { steps }
    }

    /// No intermediate frames — a single tick at the full duration
    pub fn instant() -> Self {
        Self { steps: Vec::new() }
    }
}

#[async_trait]
impl FrameScheduler for ManualScheduler {
    async fn animate(&self, duration: Duration, tick: TickFn<'_>) {
        for step in &self.steps {
            if tick(*step) == Tick::Stop {
                return;
            }
        }
        tick(duration);
    }
}
