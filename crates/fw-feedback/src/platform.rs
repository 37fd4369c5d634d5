//! Host-platform integration capability
//!
//! The engine never touches a concrete host SDK. Everything the host offers
//! (theme, notifications, modals, back navigation, window lifecycle) arrives
//! through this single injected capability, so the whole core runs headless
//! against a no-op double.

use fw_core::ThemeColors;

/// Back-navigation handler, registered by the coordinator
pub type BackHandler = Box<dyn Fn() + Send + Sync>;

/// What the host platform can do for us
pub trait PlatformCapability: Send + Sync {
    /// Theme palette extracted from the host
    fn theme_colors(&self) -> ThemeColors;

    /// Show a user-visible error notification
    fn notify_error(&self, message: &str);

    /// Show a blocking informational modal with an acknowledge button
    fn confirm_modal(&self, title: &str, message: &str);

    /// Register the handler invoked when the user navigates back
    fn on_back_requested(&self, handler: BackHandler);

    /// Close the hosting window
    fn close(&self);
}

/// No-op platform double for headless operation and tests
#[derive(Debug, Default)]
pub struct NoopPlatform;

impl PlatformCapability for NoopPlatform {
    fn theme_colors(&self) -> ThemeColors {
        ThemeColors::default()
    }

    fn notify_error(&self, message: &str) {
        log::debug!("noop platform: notify_error({message:?})");
    }

    fn confirm_modal(&self, title: &str, message: &str) {
        log::debug!("noop platform: confirm_modal({title:?}, {message:?})");
    }

    fn on_back_requested(&self, _handler: BackHandler) {}

    fn close(&self) {
        log::debug!("noop platform: close()");
    }
}
