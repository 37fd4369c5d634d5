//! Feedback coordinator — lifecycle stages in, side effects out

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use fw_stage::{SpinStage, StageEvent, StageSink};

use crate::audio::{AudioCue, AudioFeedback, AudioStatus};
use crate::platform::PlatformCapability;

/// Transient winner announcement
#[derive(Debug, Clone)]
pub struct WinnerBanner {
    /// Winning segment label
    pub winning_value: String,
    /// When the banner went up
    pub shown_at: Instant,
    /// How long it stays up before auto-dismissal
    pub duration: Duration,
}

impl WinnerBanner {
    /// Has the display window elapsed?
    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration
    }
}

/// Subscribes to spin lifecycle stages and triggers feedback:
/// - SpinStart → "spin" audio cue (skipped while audio is Unavailable)
/// - SpinSettled → "win" cue + winner banner for a fixed duration
/// - SpinFailed → one user-visible error notification
///
/// All effects are fire-and-forget; no capability failure ever reaches the
/// spin state machine.
pub struct FeedbackCoordinator {
    audio: Arc<dyn AudioFeedback>,
    platform: Arc<dyn PlatformCapability>,
    banner_duration: Duration,
    close_on_dismiss: bool,
    banner: Mutex<Option<WinnerBanner>>,
    in_flight: AtomicBool,
}

impl FeedbackCoordinator {
    /// Create a coordinator with a 3 s winner banner
    pub fn new(audio: Arc<dyn AudioFeedback>, platform: Arc<dyn PlatformCapability>) -> Self {
        Self {
            audio,
            platform,
            banner_duration: Duration::from_secs(3),
            close_on_dismiss: false,
            banner: Mutex::new(None),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Override the winner banner display duration
    pub fn with_banner_duration(mut self, duration: Duration) -> Self {
        self.banner_duration = duration;
        self
    }

    /// Close the hosting window once the winner banner is dismissed — used
    /// when the wheel was launched from a host chat context.
    ///
    /// Dismissal is poll-driven: the close fires on the first [`banner`]
    /// call past the deadline, so the presentation layer must keep polling
    /// after the spin settles.
    ///
    /// [`banner`]: FeedbackCoordinator::banner
    pub fn with_close_on_dismiss(mut self, close: bool) -> Self {
        self.close_on_dismiss = close;
        self
    }

    /// Is a spin currently in flight (awaiting the draw or animating)?
    pub fn is_spin_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Current winner banner, auto-dismissing it once its window elapsed.
    ///
    /// The presentation layer polls this each frame; dismissal (and the
    /// optional host close) happens on the first poll past the deadline.
    pub fn banner(&self) -> Option<WinnerBanner> {
        let mut slot = self.banner.lock();
        let expired = slot
            .as_ref()
            .is_some_and(|banner| banner.expired(Instant::now()));
        if expired {
            let dismissed = slot.take();
            drop(slot);
            log::debug!(
                "winner banner dismissed: {:?}",
                dismissed.as_ref().map(|b| b.winning_value.as_str())
            );
            if self.close_on_dismiss {
                self.platform.close();
            }
            return None;
        }
        slot.clone()
    }

    /// Back-navigation policy: while a spin is in flight the window must not
    /// close — explain and stay; otherwise close.
    pub fn handle_back(&self) {
        if self.is_spin_in_flight() {
            self.platform.confirm_modal(
                "Animation in progress",
                "Please wait for the wheel animation to complete.",
            );
        } else {
            self.platform.close();
        }
    }

    fn play(&self, cue: AudioCue) {
        match self.audio.status() {
            AudioStatus::Ready => self.audio.play(cue),
            AudioStatus::Unavailable => {
                log::warn!("audio unavailable, skipping {:?} cue", cue.name());
            }
        }
    }
}

impl StageSink for FeedbackCoordinator {
    fn on_stage(&self, event: &StageEvent) {
        match &event.stage {
            SpinStage::SpinRequested { .. } => {
                self.in_flight.store(true, Ordering::SeqCst);
            }
            SpinStage::SpinStart { .. } => {
                self.play(AudioCue::Spin);
            }
            SpinStage::SpinSettled { winning_value, .. } => {
                self.in_flight.store(false, Ordering::SeqCst);
                self.play(AudioCue::Win);
                *self.banner.lock() = Some(WinnerBanner {
                    winning_value: winning_value.clone(),
                    shown_at: Instant::now(),
                    duration: self.banner_duration,
                });
            }
            SpinStage::SpinFailed { reason } => {
                self.in_flight.store(false, Ordering::SeqCst);
                self.platform.notify_error(reason);
            }
        }
    }
}
