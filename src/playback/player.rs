//! Session owner
//!
//! `Player` holds at most one `PlaybackSession` and wires it to the
//! playback provider and the platform shell. Opening a new session tears
//! the old one down first so no deadline or provider notification from it
//! can land on its replacement.

use std::time::Instant;

use tracing::{debug, info};
use uuid::Uuid;

use super::platform::PlatformShell;
use super::provider::{PlaybackError, PlaybackProvider, ProviderEvent};
use super::session::{ControlButton, PlaybackSession, PlaybackState, SessionTick};
use crate::config::PlayerConfig;
use crate::models::{ContentItem, ScreenMode};

/// What a tick changed, for the caller's redraw decision
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerTick {
    pub events: usize,
    pub controls_hidden: bool,
    pub ended: bool,
    pub failed: Option<PlaybackError>,
}

impl PlayerTick {
    pub fn changed(&self) -> bool {
        self.events > 0 || self.controls_hidden || self.ended || self.failed.is_some()
    }
}

#[derive(Debug)]
pub struct Player<P, S> {
    provider: P,
    shell: S,
    config: PlayerConfig,
    session: Option<PlaybackSession>,
}

impl<P: PlaybackProvider, S: PlatformShell> Player<P, S> {
    pub fn new(provider: P, shell: S, config: PlayerConfig) -> Self {
        Self {
            provider,
            shell,
            config,
            session: None,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut S {
        &mut self.shell
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn state(&self) -> PlaybackState {
        self.session
            .as_ref()
            .map_or(PlaybackState::Closed, |s| s.state())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start playing `content`, replacing any open session
    pub fn open(&mut self, content: ContentItem, now: Instant) -> Uuid {
        if let Some(previous) = self.session.take() {
            info!(session = %previous.id(), "replacing playback session");
            self.teardown(previous);
        }

        let session = PlaybackSession::open(content, now, &self.config);
        let id = session.id();
        let title = session.content().title.clone();
        info!(session = %id, content = %session.content().id, %title, "playback session opened");

        self.provider
            .load(id, &session.media_source(self.config.sample_duration_secs));
        self.provider.set_volume(session.volume());
        self.provider.set_paused(false);
        self.session = Some(session);

        self.shell.lock_landscape();
        self.shell.set_status_bar_hidden(true);
        self.shell.show_notification(&format!("Playing: {}", title));
        id
    }

    /// Close the open session. Returns false if nothing was open.
    pub fn close(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        info!(session = %session.id(), elapsed = session.elapsed(), "playback session closed");
        self.teardown(session);
        self.shell.unlock_orientation();
        self.shell.set_status_bar_hidden(false);
        true
    }

    fn teardown(&mut self, mut session: PlaybackSession) {
        session.cancel_deadlines();
        self.provider.unload();
    }

    /// Hardware back: the settings panel first, then the session.
    /// Returns false when there was nothing to dismiss.
    pub fn back(&mut self, now: Instant) -> bool {
        let Some(settings_open) = self.session.as_ref().map(|s| s.settings_visible()) else {
            return false;
        };
        if settings_open {
            self.session
                .as_mut()
                .is_some_and(|session| session.close_settings(now))
        } else {
            self.close()
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    pub fn reveal_controls(&mut self, now: Instant) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.reveal_controls(now))
    }

    pub fn toggle_play_pause(&mut self, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let restart = session.state() == PlaybackState::Ended
            && session.duration() > 0.0
            && session.elapsed() >= session.duration();
        let playing = session.toggle_play_pause(now);
        if session.is_failed() {
            debug!(session = %session.id(), "play/pause ignored after failure");
            return;
        }
        if restart {
            self.provider.seek(0.0);
        }
        self.provider.set_paused(!playing);
        debug!(session = %session.id(), playing, "play/pause toggled");
    }

    pub fn seek(&mut self, delta: f64, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            let position = session.seek(delta, now);
            self.provider.seek(position);
        }
    }

    pub fn seek_forward(&mut self, now: Instant) {
        self.seek(self.config.seek_step_secs, now);
    }

    pub fn seek_backward(&mut self, now: Instant) {
        self.seek(-self.config.seek_step_secs, now);
    }

    pub fn adjust_volume(&mut self, delta: f32, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            let volume = session.adjust_volume(delta, now);
            self.provider.set_volume(volume);
        }
    }

    pub fn volume_up(&mut self, now: Instant) {
        self.adjust_volume(self.config.volume_step, now);
    }

    pub fn volume_down(&mut self, now: Instant) {
        self.adjust_volume(-self.config.volume_step, now);
    }

    pub fn cycle_screen_mode(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            let mode = session.cycle_screen_mode(now);
            self.provider.set_resize_mode(mode.resize_mode());
        }
    }

    pub fn set_screen_mode(&mut self, mode: ScreenMode, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            session.set_screen_mode(mode, now);
            self.provider.set_resize_mode(mode.resize_mode());
        }
    }

    pub fn toggle_settings(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            session.toggle_settings(now);
        }
    }

    pub fn move_settings_cursor(&mut self, forward: bool, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            session.move_settings_cursor(forward, now);
        }
    }

    /// Apply the screen mode under the settings cursor
    pub fn apply_settings_cursor(&mut self, now: Instant) {
        if let Some(mode) = self.session.as_ref().map(|s| s.settings_cursor()) {
            self.set_screen_mode(mode, now);
        }
    }

    pub fn move_control_focus(&mut self, forward: bool, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            session.move_control_focus(forward, now);
        }
    }

    /// Press the focused control-bar button
    pub fn activate_control(&mut self, now: Instant) {
        let Some(button) = self.session.as_ref().map(|s| s.control_focus()) else {
            return;
        };
        match button {
            ControlButton::PlayPause => self.toggle_play_pause(now),
            ControlButton::Rewind => self.seek_backward(now),
            ControlButton::Forward => self.seek_forward(now),
            ControlButton::ScreenMode => self.cycle_screen_mode(now),
            ControlButton::VolumeDown => self.volume_down(now),
            ControlButton::VolumeUp => self.volume_up(now),
            ControlButton::Settings => self.toggle_settings(now),
            ControlButton::Close => {
                self.close();
            }
        }
    }

    // =========================================================================
    // Provider notifications
    // =========================================================================

    /// The session a notification is for, if it is still the open one
    fn current(&mut self, session: Uuid) -> Option<&mut PlaybackSession> {
        match self.session.as_mut() {
            Some(current) if current.id() == session => Some(current),
            _ => {
                debug!(%session, "dropping notification for a stale session");
                None
            }
        }
    }

    pub fn on_load(&mut self, session: Uuid, duration: f64) {
        if let Some(current) = self.current(session) {
            current.on_load(duration);
            let paused = !current.is_playing();
            self.provider.set_paused(paused);
        }
    }

    pub fn on_progress(&mut self, session: Uuid, current_time: f64) {
        if let Some(current) = self.current(session) {
            current.on_progress(current_time);
        }
    }

    pub fn on_end(&mut self, session: Uuid) {
        if let Some(current) = self.current(session) {
            current.on_end();
        }
    }

    pub fn on_error(&mut self, session: Uuid, error: PlaybackError) {
        if let Some(current) = self.current(session) {
            current.on_error(error.clone());
            self.fail(error);
        }
    }

    fn fail(&mut self, error: PlaybackError) {
        self.provider.unload();
        self.shell
            .show_notification(&format!("Playback failed: {}", error));
    }

    /// Drain provider notifications and fire expired deadlines
    pub fn tick(&mut self, now: Instant) -> PlayerTick {
        let mut tick = PlayerTick::default();
        for (session, event) in self.provider.poll(now) {
            tick.events += 1;
            match event {
                ProviderEvent::Loaded { duration } => self.on_load(session, duration),
                ProviderEvent::Progress { current_time } => self.on_progress(session, current_time),
                ProviderEvent::Ended => {
                    tick.ended = self.session.as_ref().is_some_and(|s| s.id() == session);
                    self.on_end(session);
                }
                ProviderEvent::Failed(error) => {
                    if self.session.as_ref().is_some_and(|s| s.id() == session) {
                        tick.failed = Some(error.clone());
                    }
                    self.on_error(session, error);
                }
            }
        }

        let SessionTick {
            controls_hidden,
            timed_out,
        } = match self.session.as_mut() {
            Some(session) => session.tick(now),
            None => SessionTick::default(),
        };
        tick.controls_hidden = controls_hidden;
        if let Some(error) = timed_out {
            self.fail(error.clone());
            tick.failed = Some(error);
        }
        tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{ContentId, ResizeMode};
    use crate::playback::provider::MediaSource;
    use std::time::Duration;

    #[derive(Default)]
    struct NullProvider {
        loads: Vec<Uuid>,
        unloads: usize,
    }

    impl PlaybackProvider for NullProvider {
        fn load(&mut self, session: Uuid, _source: &MediaSource) {
            self.loads.push(session);
        }
        fn seek(&mut self, _position: f64) {}
        fn set_paused(&mut self, _paused: bool) {}
        fn set_volume(&mut self, _volume: f32) {}
        fn set_resize_mode(&mut self, _mode: ResizeMode) {}
        fn unload(&mut self) {
            self.unloads += 1;
        }
        fn poll(&mut self, _now: Instant) -> Vec<(Uuid, ProviderEvent)> {
            Vec::new()
        }
    }

    #[derive(Default)]
    struct NullShell {
        notes: Vec<String>,
        status_hidden: bool,
    }

    impl PlatformShell for NullShell {
        fn lock_landscape(&mut self) {}
        fn unlock_orientation(&mut self) {}
        fn set_status_bar_hidden(&mut self, hidden: bool) {
            self.status_hidden = hidden;
        }
        fn show_notification(&mut self, text: &str) {
            self.notes.push(text.to_string());
        }
    }

    fn player() -> Player<NullProvider, NullShell> {
        Player::new(
            NullProvider::default(),
            NullShell::default(),
            PlayerConfig::default(),
        )
    }

    fn item(id: ContentId) -> ContentItem {
        Catalog::builtin().get(id).unwrap().clone()
    }

    #[test]
    fn test_open_and_close() {
        let now = Instant::now();
        let mut player = player();
        assert_eq!(player.state(), PlaybackState::Closed);

        let id = player.open(item(ContentId::movie(3)), now);
        assert_eq!(player.state(), PlaybackState::Loading);
        assert_eq!(player.provider().loads, vec![id]);
        assert!(player.shell().status_hidden);
        assert_eq!(player.shell().notes, vec!["Playing: Interstellar"]);

        assert!(player.close());
        assert!(!player.close());
        assert!(!player.shell().status_hidden);
        assert_eq!(player.provider().unloads, 1);
    }

    #[test]
    fn test_stale_notifications_are_dropped() {
        let now = Instant::now();
        let mut player = player();
        let first = player.open(item(ContentId::movie(1)), now);
        let second = player.open(item(ContentId::movie(2)), now);
        assert_ne!(first, second);

        player.on_load(first, 100.0);
        assert_eq!(player.state(), PlaybackState::Loading);
        player.on_load(second, 100.0);
        assert_eq!(player.state(), PlaybackState::Playing);
    }

    #[test]
    fn test_back_closes_settings_first() {
        let now = Instant::now();
        let mut player = player();
        player.open(item(ContentId::live(1)), now);
        player.toggle_settings(now);

        assert!(player.back(now));
        assert!(player.is_open());
        assert!(player.back(now));
        assert!(!player.is_open());
        assert!(!player.back(now));
    }

    #[test]
    fn test_load_timeout_notifies() {
        let now = Instant::now();
        let mut player = player();
        player.open(item(ContentId::series(2)), now);
        let tick = player.tick(now + Duration::from_secs(15));
        assert_eq!(tick.failed, Some(PlaybackError::LoadTimeout(15.0)));
        assert_eq!(player.state(), PlaybackState::Ended);
        assert_eq!(
            player.shell().notes.last().map(String::as_str),
            Some("Playback failed: no response after 15s")
        );
    }
}
