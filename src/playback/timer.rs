//! Single-shot deadlines and the controls auto-hide timer
//!
//! Time is passed in as `Instant` values rather than read from the clock,
//! so callers decide when deadlines are checked.

use std::time::{Duration, Instant};

/// A cancellable single-shot deadline. At most one expiry is outstanding:
/// arming replaces whatever was pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm to expire `after` from `now`, cancelling any pending expiry
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.at = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.at = None;
    }

    pub fn is_armed(&self) -> bool {
        self.at.is_some()
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.at
    }

    /// Consume the deadline if it has expired by `now`
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.at {
            Some(at) if now >= at => {
                self.at = None;
                true
            }
            _ => false,
        }
    }
}

/// Visibility of the on-screen transport controls.
///
/// Starts visible with the hide deadline armed. Revealing re-arms the
/// deadline; once it expires the controls hide and nothing stays pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsTimer {
    visible: bool,
    window: Duration,
    deadline: Deadline,
}

impl ControlsTimer {
    pub fn start(now: Instant, window: Duration) -> Self {
        let mut deadline = Deadline::new();
        deadline.arm(now, window);
        Self {
            visible: true,
            window,
            deadline,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_armed()
    }

    pub fn hides_at(&self) -> Option<Instant> {
        self.deadline.expires_at()
    }

    /// Show the controls and restart the inactivity window. Returns true if
    /// they were hidden.
    pub fn reveal(&mut self, now: Instant) -> bool {
        let was_hidden = !self.visible;
        self.visible = true;
        self.deadline.arm(now, self.window);
        was_hidden
    }

    /// Hide the controls if the window has run out. Returns true on the
    /// transition to hidden.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.deadline.fire(now) {
            self.visible = false;
            return true;
        }
        false
    }

    /// Drop the pending deadline without touching visibility
    pub fn cancel(&mut self) {
        self.deadline.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(5);

    #[test]
    fn test_deadline_fires_once() {
        let t0 = Instant::now();
        let mut deadline = Deadline::new();
        assert!(!deadline.fire(t0));

        deadline.arm(t0, WINDOW);
        assert!(!deadline.fire(t0 + Duration::from_secs(4)));
        assert!(deadline.fire(t0 + WINDOW));
        assert!(!deadline.fire(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn test_rearm_replaces_pending() {
        let t0 = Instant::now();
        let mut deadline = Deadline::new();
        deadline.arm(t0, WINDOW);
        deadline.arm(t0 + Duration::from_secs(3), WINDOW);
        assert!(!deadline.fire(t0 + WINDOW));
        assert!(deadline.fire(t0 + Duration::from_secs(8)));
    }

    #[test]
    fn test_controls_hide_after_window() {
        let t0 = Instant::now();
        let mut controls = ControlsTimer::start(t0, WINDOW);
        assert!(controls.is_visible());
        assert!(controls.is_pending());

        assert!(!controls.poll(t0 + Duration::from_millis(4999)));
        assert!(controls.poll(t0 + WINDOW));
        assert!(!controls.is_visible());
        assert!(!controls.is_pending());
    }

    #[test]
    fn test_reveal_restarts_window() {
        let t0 = Instant::now();
        let mut controls = ControlsTimer::start(t0, WINDOW);
        assert!(!controls.reveal(t0 + Duration::from_secs(4)));
        assert!(!controls.poll(t0 + Duration::from_secs(6)));
        assert!(controls.poll(t0 + Duration::from_secs(9)));

        assert!(controls.reveal(t0 + Duration::from_secs(10)));
        assert_eq!(controls.hides_at(), Some(t0 + Duration::from_secs(15)));
    }

    #[test]
    fn test_cancel_keeps_controls_visible() {
        let t0 = Instant::now();
        let mut controls = ControlsTimer::start(t0, WINDOW);
        controls.cancel();
        assert!(!controls.poll(t0 + Duration::from_secs(60)));
        assert!(controls.is_visible());
    }
}
