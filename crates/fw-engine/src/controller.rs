//! Spin controller — the state machine driving the wheel

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use tokio::time::timeout;

use fw_core::{geometry, EaseCurve, FwError, FwResult, SpinTiming, Wheel};
use fw_stage::{SpinStage, StageEvent, StageSink};

use crate::scheduler::{FrameScheduler, Tick};
use crate::service::DrawService;
use crate::session::{elapsed_ratio, SpinSession, SpinState};

/// Result of a spin request
#[derive(Debug, Clone, PartialEq)]
pub enum SpinOutcome {
    /// Animation ran to completion on the winning segment
    Completed {
        session_id: String,
        winning_value: String,
        segment_index: usize,
        final_rotation: f64,
    },
    /// A session was already in flight; this request was a no-op
    Rejected,
    /// The controller was shut down (or the session superseded) before the
    /// spin could finish; no state was mutated on this path
    Cancelled,
}

/// Mutable controller state — the single shared piece the render adapter
/// reads and only the animation loop writes.
struct ControllerState {
    rotation: f64,
    state: SpinState,
    session: Option<SpinSession>,
    /// Bumped per accepted spin; stale async continuations compare against it
    /// and discard themselves instead of mutating superseded state.
    generation: u64,
}

/// The spin controller.
///
/// Owns the session state machine and the wheel rotation. All collaborators
/// are injected capabilities: the draw service, the frame scheduler, and any
/// number of stage sinks. The controller never touches a host SDK, which is
/// what lets the whole engine run headless in tests.
pub struct SpinController {
    wheel: Wheel,
    timing: SpinTiming,
    curve: EaseCurve,
    service: Arc<dyn DrawService>,
    scheduler: Arc<dyn FrameScheduler>,
    sinks: Vec<Arc<dyn StageSink>>,
    session_context: Option<String>,
    inner: Mutex<ControllerState>,
    shutdown: AtomicBool,
    epoch: Instant,
}

impl SpinController {
    /// Create a controller at rotation 0, Idle
    pub fn new(
        wheel: Wheel,
        timing: SpinTiming,
        service: Arc<dyn DrawService>,
        scheduler: Arc<dyn FrameScheduler>,
    ) -> Self {
        Self {
            wheel,
            timing,
            curve: EaseCurve::default(),
            service,
            scheduler,
            sinks: Vec::new(),
            session_context: None,
            inner: Mutex::new(ControllerState {
                rotation: 0.0,
                state: SpinState::Idle,
                session: None,
                generation: 0,
            }),
            shutdown: AtomicBool::new(false),
            epoch: Instant::now(),
        }
    }

    /// Select the easing curve
    pub fn with_curve(mut self, curve: EaseCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Session-context token forwarded to the draw service with each request
    pub fn with_session_context(mut self, context: impl Into<String>) -> Self {
        self.session_context = Some(context.into());
        self
    }

    /// Subscribe a stage sink to lifecycle events
    pub fn add_sink(&mut self, sink: Arc<dyn StageSink>) {
        self.sinks.push(sink);
    }

    /// Current wheel rotation in radians (unbounded)
    pub fn rotation(&self) -> f64 {
        self.inner.lock().rotation
    }

    /// Current controller state
    pub fn state(&self) -> SpinState {
        self.inner.lock().state
    }

    /// Snapshot of the current/last session
    pub fn session(&self) -> Option<SpinSession> {
        self.inner.lock().session.clone()
    }

    /// The configured wheel
    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    /// Stop requesting further frames and reject future spins. An in-flight
    /// draw request is not cancelled; its late response is discarded.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    /// Has the controller been torn down?
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Run one spin: request the winner, animate to it, settle.
    ///
    /// Rejected (not queued) when a session is already AwaitingResult or
    /// Animating. On failure the session transitions to Failed with the
    /// rotation untouched and the error is returned after a single
    /// `SpinFailed` stage has been emitted.
    pub async fn spin(&self, draw_code: &str) -> FwResult<SpinOutcome> {
        // ── Guard + AwaitingResult ────────────────────────────────────────
        let (generation, session_id, start_rotation) = {
            let mut s = self.inner.lock();
            if self.is_shutdown() {
                return Ok(SpinOutcome::Cancelled);
            }
            if !s.state.accepts_spin() {
                log::debug!(
                    "spin request for {draw_code:?} rejected: state={}",
                    s.state.name()
                );
                return Ok(SpinOutcome::Rejected);
            }
            s.generation += 1;
            let session = SpinSession::open(draw_code, s.rotation);
            let id = session.id.clone();
            let start = s.rotation;
            s.state = SpinState::AwaitingResult;
            s.session = Some(session);
            (s.generation, id, start)
        };
        self.emit(
            SpinStage::SpinRequested {
                draw_code: draw_code.to_string(),
            },
            &session_id,
        );

        // ── Await the draw service (lock not held) ────────────────────────
        let request = self
            .service
            .request_winning_value(draw_code, self.session_context.as_deref());
        let winner = match timeout(self.timing.request_timeout(), request).await {
            Ok(Ok(winner)) => winner,
            Ok(Err(err)) => {
                return self.fail(generation, &session_id, FwError::Draw(err.to_string()));
            }
            Err(_) => {
                return self.fail(
                    generation,
                    &session_id,
                    FwError::Timeout(self.timing.request_timeout_ms),
                );
            }
        };

        // Winner must exist on the wheel; anything else is a fatal contract
        // violation, never clamped to a nearby segment.
        let segment_index = match self.wheel.require_index(&winner) {
            Ok(index) => index,
            Err(err) => return self.fail(generation, &session_id, err),
        };

        // ── Animating ─────────────────────────────────────────────────────
        let target_rotation = {
            let mut s = self.inner.lock();
            if self.is_shutdown() || s.generation != generation {
                log::warn!("discarding late draw response for session {session_id}");
                return Ok(SpinOutcome::Cancelled);
            }
            let target = geometry::target_rotation_for(
                segment_index,
                self.wheel.segment_count(),
                s.rotation,
                self.timing.extra_turns,
            );
            s.state = SpinState::Animating;
            if let Some(session) = s.session.as_mut() {
                session.state = SpinState::Animating;
                session.target_rotation = Some(target);
                session.winning_value = Some(winner.clone());
            }
            target
        };
        log::debug!(
            "session {session_id}: winner {winner:?} (index {segment_index}), \
             rotating {start_rotation:.3} -> {target_rotation:.3}"
        );
        self.emit(
            SpinStage::SpinStart {
                target_index: segment_index,
            },
            &session_id,
        );

        let duration = self.timing.spin_duration();
        let curve = self.curve;
        self.scheduler
            .animate(duration, &mut |elapsed| {
                let ratio = elapsed_ratio(elapsed, duration);
                let eased = curve.evaluate(ratio);
                let mut s = self.inner.lock();
                if self.shutdown.load(Ordering::SeqCst) || s.generation != generation {
                    return Tick::Stop;
                }
                if ratio >= 1.0 {
                    s.rotation = target_rotation;
                    s.state = SpinState::Completed;
                    if let Some(session) = s.session.as_mut() {
                        session.state = SpinState::Completed;
                    }
                    Tick::Stop
                } else {
                    s.rotation =
                        start_rotation + (target_rotation - start_rotation) * eased;
                    Tick::Continue
                }
            })
            .await;

        // ── Settle ────────────────────────────────────────────────────────
        {
            let s = self.inner.lock();
            if s.generation != generation || s.state != SpinState::Completed {
                // Torn down mid-animation; the loop already stopped.
                return Ok(SpinOutcome::Cancelled);
            }
        }
        self.emit(
            SpinStage::SpinSettled {
                winning_value: winner.clone(),
                segment_index,
                final_rotation: target_rotation,
            },
            &session_id,
        );
        Ok(SpinOutcome::Completed {
            session_id,
            winning_value: winner,
            segment_index,
            final_rotation: target_rotation,
        })
    }

    /// Fail the session: state → Failed, rotation untouched, one SpinFailed
    /// stage. Late failures for superseded sessions are discarded.
    fn fail(&self, generation: u64, session_id: &str, err: FwError) -> FwResult<SpinOutcome> {
        {
            let mut s = self.inner.lock();
            if self.is_shutdown() || s.generation != generation {
                log::warn!("discarding late failure for session {session_id}: {err}");
                return Ok(SpinOutcome::Cancelled);
            }
            s.state = SpinState::Failed;
            if let Some(session) = s.session.as_mut() {
                session.state = SpinState::Failed;
            }
        }
        log::error!("session {session_id} failed: {err}");
        self.emit(
            SpinStage::SpinFailed {
                reason: err.to_string(),
            },
            session_id,
        );
        Err(err)
    }

    /// Fan a stage event out to every sink, in subscription order
    fn emit(&self, stage: SpinStage, session_id: &str) {
        let timestamp_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        let event = StageEvent::new(stage, timestamp_ms).with_session(session_id);
        log::debug!("stage {} at {timestamp_ms:.1} ms", event.type_name());
        for sink in &self.sinks {
            sink.on_stage(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use crate::service::DrawServiceError;
    use async_trait::async_trait;

    struct FixedWinner(&'static str);

    #[async_trait]
    impl DrawService for FixedWinner {
        async fn request_winning_value(
            &self,
            _draw_code: &str,
            _session_context: Option<&str>,
        ) -> Result<String, DrawServiceError> {
            Ok(self.0.to_string())
        }
    }

    fn controller(winner: &'static str) -> SpinController {
        SpinController::new(
            Wheel::numeric(30).unwrap(),
            SpinTiming::studio(),
            Arc::new(FixedWinner(winner)),
            Arc::new(ManualScheduler::instant()),
        )
    }

    #[tokio::test]
    async fn spin_lands_on_winning_segment() {
        let ctl = controller("7");
        let outcome = ctl.spin("draw-1").await.unwrap();
        match outcome {
            SpinOutcome::Completed {
                segment_index,
                final_rotation,
                ..
            } => {
                assert_eq!(segment_index, 6);
                assert_eq!(
                    geometry::segment_under_pointer(final_rotation, 30),
                    6
                );
                assert_eq!(ctl.rotation(), final_rotation);
            }
            other => panic!("expected completion, got {other:?}"),
        }
        assert_eq!(ctl.state(), SpinState::Completed);
    }

    #[tokio::test]
    async fn invalid_winner_fails_without_rotation_change() {
        let ctl = controller("31");
        let before = ctl.rotation();
        let err = ctl.spin("draw-1").await.unwrap_err();
        assert!(matches!(err, FwError::InvalidWinningValue(_)));
        assert_eq!(ctl.rotation(), before);
        assert_eq!(ctl.state(), SpinState::Failed);
    }

    #[tokio::test]
    async fn shutdown_rejects_new_spins() {
        let ctl = controller("7");
        ctl.shutdown();
        assert_eq!(ctl.spin("draw-1").await.unwrap(), SpinOutcome::Cancelled);
        assert_eq!(ctl.state(), SpinState::Idle);
    }
}
