//! Playback session state machine
//!
//! One `PlaybackSession` exists per open player. It mirrors the provider's
//! position, holds the user-facing transport state and owns the controls
//! auto-hide timer plus the load deadline, so dropping the session drops
//! every pending deadline with it.

use std::fmt;
use std::time::Instant;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::provider::{MediaSource, PlaybackError};
use super::timer::{ControlsTimer, Deadline};
use crate::config::PlayerConfig;
use crate::models::{ContentItem, ScreenMode};

// =============================================================================
// States
// =============================================================================

/// Lifecycle of the player. `Closed` means no session exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Closed,
    Loading,
    Playing,
    Paused,
    Ended,
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlaybackState::Closed => "closed",
            PlaybackState::Loading => "loading",
            PlaybackState::Playing => "playing",
            PlaybackState::Paused => "paused",
            PlaybackState::Ended => "ended",
        };
        write!(f, "{}", s)
    }
}

/// Why a session reached `Ended`
#[derive(Debug, Clone, PartialEq)]
pub enum EndReason {
    Finished,
    Failed(PlaybackError),
}

/// Buttons of the on-screen control bar, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlButton {
    #[default]
    PlayPause,
    Rewind,
    Forward,
    ScreenMode,
    VolumeDown,
    VolumeUp,
    Settings,
    Close,
}

impl ControlButton {
    pub const ALL: [ControlButton; 8] = [
        ControlButton::PlayPause,
        ControlButton::Rewind,
        ControlButton::Forward,
        ControlButton::ScreenMode,
        ControlButton::VolumeDown,
        ControlButton::VolumeUp,
        ControlButton::Settings,
        ControlButton::Close,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|b| *b == self).unwrap_or(0)
    }

    pub fn label(&self, is_playing: bool) -> &'static str {
        match self {
            ControlButton::PlayPause if is_playing => "⏸",
            ControlButton::PlayPause => "▶",
            ControlButton::Rewind => "-10s",
            ControlButton::Forward => "+10s",
            ControlButton::ScreenMode => "▣",
            ControlButton::VolumeDown => "🔉",
            ControlButton::VolumeUp => "🔊",
            ControlButton::Settings => "⚙",
            ControlButton::Close => "✕",
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// Everything a deadline check turned up
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionTick {
    pub controls_hidden: bool,
    pub timed_out: Option<PlaybackError>,
}

#[derive(Debug, Clone)]
pub struct PlaybackSession {
    id: Uuid,
    content: ContentItem,
    state: PlaybackState,
    is_playing: bool,
    elapsed: f64,
    duration: f64,
    volume: f32,
    screen_mode: ScreenMode,
    settings_visible: bool,
    settings_cursor: usize,
    control_focus: ControlButton,
    controls: ControlsTimer,
    load_deadline: Deadline,
    load_timeout_secs: f64,
    end_reason: Option<EndReason>,
}

impl PlaybackSession {
    /// New session in `Loading` with controls shown and both deadlines armed
    pub fn open(content: ContentItem, now: Instant, config: &PlayerConfig) -> Self {
        let mut load_deadline = Deadline::new();
        load_deadline.arm(now, config.load_timeout());
        Self {
            id: Uuid::new_v4(),
            content,
            state: PlaybackState::Loading,
            is_playing: true,
            elapsed: 0.0,
            duration: 0.0,
            volume: config.initial_volume.clamp(0.0, 1.0),
            screen_mode: config.initial_screen_mode,
            settings_visible: false,
            settings_cursor: config.initial_screen_mode.index(),
            control_focus: ControlButton::default(),
            controls: ControlsTimer::start(now, config.controls_hide()),
            load_deadline,
            load_timeout_secs: config.load_timeout_secs,
            end_reason: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> &ContentItem {
        &self.content
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn screen_mode(&self) -> ScreenMode {
        self.screen_mode
    }

    pub fn controls_visible(&self) -> bool {
        self.controls.is_visible()
    }

    pub fn controls(&self) -> &ControlsTimer {
        &self.controls
    }

    pub fn settings_visible(&self) -> bool {
        self.settings_visible
    }

    pub fn settings_cursor(&self) -> ScreenMode {
        ScreenMode::ALL[self.settings_cursor]
    }

    pub fn control_focus(&self) -> ControlButton {
        self.control_focus
    }

    pub fn end_reason(&self) -> Option<&EndReason> {
        self.end_reason.as_ref()
    }

    /// True once the session ended because the media could not be played
    pub fn is_failed(&self) -> bool {
        matches!(self.end_reason, Some(EndReason::Failed(_)))
    }

    pub fn has_pending_deadlines(&self) -> bool {
        self.controls.is_pending() || self.load_deadline.is_armed()
    }

    /// Fraction of the stream played, in [0, 1]. Zero while the duration is
    /// unknown.
    pub fn progress_fraction(&self) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// What the provider should load for this session
    pub fn media_source(&self, fallback_duration: f64) -> MediaSource {
        MediaSource {
            locator: self.content.media_url.clone(),
            resize_mode: self.screen_mode.resize_mode(),
            runtime_hint: Some(self.content.runtime_secs().unwrap_or(fallback_duration)),
        }
    }

    // -------------------------------------------------------------------------
    // Provider notifications
    // -------------------------------------------------------------------------

    pub fn on_load(&mut self, duration: f64) {
        self.duration = duration.max(0.0);
        self.load_deadline.cancel();
        if self.state != PlaybackState::Loading {
            return;
        }
        self.elapsed = 0.0;
        self.state = if self.is_playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        };
        info!(session = %self.id, duration = self.duration, state = %self.state, "media loaded");
    }

    /// Mirror the provider position. Does not touch the controls timer.
    pub fn on_progress(&mut self, current_time: f64) {
        self.elapsed = current_time.max(0.0);
    }

    pub fn on_end(&mut self) {
        self.finish(EndReason::Finished);
    }

    pub fn on_error(&mut self, error: PlaybackError) {
        warn!(session = %self.id, %error, "playback failed");
        self.finish(EndReason::Failed(error));
    }

    fn finish(&mut self, reason: EndReason) {
        self.load_deadline.cancel();
        self.is_playing = false;
        self.state = PlaybackState::Ended;
        debug!(session = %self.id, ?reason, "session ended");
        self.end_reason = Some(reason);
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Show the controls and restart the inactivity window
    pub fn reveal_controls(&mut self, now: Instant) -> bool {
        self.controls.reveal(now)
    }

    /// Flip play/pause. From `Ended` this resumes, restarting from the top
    /// when the end of the stream was reached. A failed session has nothing
    /// loaded and stays ended. Returns the new `is_playing`.
    pub fn toggle_play_pause(&mut self, now: Instant) -> bool {
        self.reveal_controls(now);
        match self.state {
            PlaybackState::Loading => self.is_playing = !self.is_playing,
            PlaybackState::Playing => {
                self.is_playing = false;
                self.state = PlaybackState::Paused;
            }
            PlaybackState::Paused => {
                self.is_playing = true;
                self.state = PlaybackState::Playing;
            }
            PlaybackState::Ended if self.is_failed() => {}
            PlaybackState::Ended => {
                if self.duration > 0.0 && self.elapsed >= self.duration {
                    self.elapsed = 0.0;
                }
                self.end_reason = None;
                self.is_playing = true;
                self.state = PlaybackState::Playing;
            }
            PlaybackState::Closed => {}
        }
        self.is_playing
    }

    /// Relative seek, clamped to `[0, duration]`. Returns the new position.
    pub fn seek(&mut self, delta: f64, now: Instant) -> f64 {
        self.reveal_controls(now);
        self.elapsed = (self.elapsed + delta).clamp(0.0, self.duration);
        self.elapsed
    }

    /// Relative volume change, clamped to `[0, 1]`
    pub fn adjust_volume(&mut self, delta: f32, now: Instant) -> f32 {
        self.reveal_controls(now);
        self.volume = (self.volume + delta).clamp(0.0, 1.0);
        self.volume
    }

    pub fn cycle_screen_mode(&mut self, now: Instant) -> ScreenMode {
        self.set_screen_mode(self.screen_mode.next(), now)
    }

    pub fn set_screen_mode(&mut self, mode: ScreenMode, now: Instant) -> ScreenMode {
        self.reveal_controls(now);
        self.screen_mode = mode;
        self.settings_cursor = mode.index();
        mode
    }

    pub fn toggle_settings(&mut self, now: Instant) -> bool {
        self.reveal_controls(now);
        self.settings_visible = !self.settings_visible;
        if self.settings_visible {
            self.settings_cursor = self.screen_mode.index();
        }
        self.settings_visible
    }

    /// Close the settings panel. Returns false if it was not open.
    pub fn close_settings(&mut self, now: Instant) -> bool {
        if !self.settings_visible {
            return false;
        }
        self.reveal_controls(now);
        self.settings_visible = false;
        true
    }

    pub fn move_settings_cursor(&mut self, forward: bool, now: Instant) -> bool {
        self.reveal_controls(now);
        let len = ScreenMode::ALL.len();
        let next = if forward {
            self.settings_cursor + 1
        } else {
            match self.settings_cursor.checked_sub(1) {
                Some(index) => index,
                None => return false,
            }
        };
        if next >= len {
            return false;
        }
        self.settings_cursor = next;
        true
    }

    pub fn move_control_focus(&mut self, forward: bool, now: Instant) -> bool {
        self.reveal_controls(now);
        let index = self.control_focus.index();
        let next = if forward {
            index + 1
        } else {
            match index.checked_sub(1) {
                Some(prev) => prev,
                None => return false,
            }
        };
        match ControlButton::ALL.get(next) {
            Some(button) => {
                self.control_focus = *button;
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Deadlines
    // -------------------------------------------------------------------------

    /// Fire whatever deadlines have expired by `now`
    pub fn tick(&mut self, now: Instant) -> SessionTick {
        let mut tick = SessionTick::default();
        if self.controls.poll(now) {
            debug!(session = %self.id, "controls hidden");
            tick.controls_hidden = true;
        }
        if self.load_deadline.fire(now) && self.state == PlaybackState::Loading {
            let error = PlaybackError::LoadTimeout(self.load_timeout_secs);
            self.on_error(error.clone());
            tick.timed_out = Some(error);
        }
        tick
    }

    /// Cancel every pending deadline ahead of teardown
    pub fn cancel_deadlines(&mut self) {
        self.controls.cancel();
        self.load_deadline.cancel();
    }
}
