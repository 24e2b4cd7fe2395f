//! Platform shell capabilities used by the player

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::{debug, info};

/// Host services a playback session needs: orientation, status chrome,
/// and transient notifications
pub trait PlatformShell {
    fn lock_landscape(&mut self);
    fn unlock_orientation(&mut self);
    fn set_status_bar_hidden(&mut self, hidden: bool);
    fn show_notification(&mut self, text: &str);
}

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    text: String,
    shown_at: Instant,
}

/// Shell for the terminal front end.
///
/// A terminal has no orientation, so lock/unlock only log. Notifications
/// queue up and are shown one at a time on the status line for `toast_ttl`.
#[derive(Debug, Clone)]
pub struct TerminalShell {
    toast_ttl: Duration,
    pending: VecDeque<String>,
    current: Option<Toast>,
    status_bar_hidden: bool,
    landscape_locked: bool,
}

impl TerminalShell {
    pub fn new(toast_ttl: Duration) -> Self {
        Self {
            toast_ttl,
            pending: VecDeque::new(),
            current: None,
            status_bar_hidden: false,
            landscape_locked: false,
        }
    }

    pub fn status_bar_hidden(&self) -> bool {
        self.status_bar_hidden
    }

    pub fn landscape_locked(&self) -> bool {
        self.landscape_locked
    }

    /// Toast on screen right now
    pub fn toast(&self) -> Option<&str> {
        self.current.as_ref().map(|t| t.text.as_str())
    }

    pub fn pending_toasts(&self) -> usize {
        self.pending.len()
    }

    /// Expire the current toast and promote the next queued one
    pub fn tick(&mut self, now: Instant) {
        let expired = self
            .current
            .as_ref()
            .map_or(true, |t| now.saturating_duration_since(t.shown_at) >= self.toast_ttl);
        if !expired {
            return;
        }
        self.current = self
            .pending
            .pop_front()
            .map(|text| Toast { text, shown_at: now });
    }
}

impl PlatformShell for TerminalShell {
    fn lock_landscape(&mut self) {
        debug!("orientation lock requested");
        self.landscape_locked = true;
    }

    fn unlock_orientation(&mut self) {
        debug!("orientation unlock requested");
        self.landscape_locked = false;
    }

    fn set_status_bar_hidden(&mut self, hidden: bool) {
        self.status_bar_hidden = hidden;
    }

    fn show_notification(&mut self, text: &str) {
        info!(text, "notification");
        self.pending.push_back(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_show_in_order() {
        let t0 = Instant::now();
        let mut shell = TerminalShell::new(Duration::from_secs(2));
        shell.show_notification("first");
        shell.show_notification("second");
        assert_eq!(shell.toast(), None);

        shell.tick(t0);
        assert_eq!(shell.toast(), Some("first"));
        shell.tick(t0 + Duration::from_secs(1));
        assert_eq!(shell.toast(), Some("first"));
        shell.tick(t0 + Duration::from_secs(2));
        assert_eq!(shell.toast(), Some("second"));
        shell.tick(t0 + Duration::from_secs(4));
        assert_eq!(shell.toast(), None);
    }

    #[test]
    fn test_chrome_flags() {
        let mut shell = TerminalShell::new(Duration::from_secs(2));
        shell.lock_landscape();
        shell.set_status_bar_hidden(true);
        assert!(shell.landscape_locked());
        assert!(shell.status_bar_hidden());
        shell.unlock_orientation();
        shell.set_status_bar_hidden(false);
        assert!(!shell.landscape_locked());
        assert!(!shell.status_bar_hidden());
    }
}
