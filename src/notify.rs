//! Notification Surface
//!
//! Loading indicator and transient message banner, behind a trait so the
//! remote client and controller can be driven without a browser.

/// Non-blocking user feedback
pub trait Notifier {
    /// Raise (`true`) or lower (`false`) the in-flight indicator.
    /// Calls come in balanced pairs.
    fn set_loading(&self, busy: bool);

    /// Show a transient message
    fn notify(&self, text: &str);
}

/// Keeps the in-flight indicator raised while alive
pub struct Busy<'a, N: Notifier + ?Sized> {
    notifier: &'a N,
}

impl<'a, N: Notifier + ?Sized> Busy<'a, N> {
    pub fn start(notifier: &'a N) -> Self {
        notifier.set_loading(true);
        Self { notifier }
    }
}

impl<N: Notifier + ?Sized> Drop for Busy<'_, N> {
    fn drop(&mut self) {
        self.notifier.set_loading(false);
    }
}
