//! Playback provider interface
//!
//! The decoder/renderer is opaque to the session: it is handed a media
//! locator and reports back through load/progress/end notifications. A
//! provider queues those notifications and the session owner drains them
//! with `poll`.

use std::collections::HashSet;
use std::time::Instant;

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::models::ResizeMode;

/// Ways a playback provider can fail a session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    #[error("could not load {0}")]
    LoadFailed(String),
    #[error("no response after {0:.0}s")]
    LoadTimeout(f64),
    #[error("stream interrupted: {0}")]
    StreamFailed(String),
}

/// Notification pushed by a provider
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderEvent {
    Loaded { duration: f64 },
    Progress { current_time: f64 },
    Ended,
    Failed(PlaybackError),
}

/// What to play
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    pub locator: String,
    pub resize_mode: ResizeMode,
    /// Runtime known from catalog metadata, if any
    pub runtime_hint: Option<f64>,
}

/// Video decode/render engine driven by the player.
///
/// Every notification is tagged with the session id passed to `load`, so
/// the owner can drop stragglers from a session it already replaced.
pub trait PlaybackProvider {
    fn load(&mut self, session: Uuid, source: &MediaSource);
    fn seek(&mut self, position: f64);
    fn set_paused(&mut self, paused: bool);
    fn set_volume(&mut self, volume: f32);
    fn set_resize_mode(&mut self, mode: ResizeMode);
    fn unload(&mut self);
    /// Drain notifications produced up to `now`
    fn poll(&mut self, now: Instant) -> Vec<(Uuid, ProviderEvent)>;
}

// =============================================================================
// Simulated Provider
// =============================================================================

#[derive(Debug, Clone)]
struct Loaded {
    session: Uuid,
    locator: String,
    duration: f64,
    position: f64,
    announced: bool,
    finished: bool,
    last_poll: Option<Instant>,
}

/// In-process provider that plays nothing but keeps time like a real one.
///
/// Reports `Loaded` on the first poll after `load`, then advances the
/// position with the clock while unpaused, emitting `Progress` on every
/// poll and `Ended` once the duration is reached.
#[derive(Debug, Clone)]
pub struct SimulatedPlayer {
    default_duration: f64,
    failing: HashSet<String>,
    current: Option<Loaded>,
    paused: bool,
    volume: f32,
    resize_mode: ResizeMode,
}

impl SimulatedPlayer {
    pub fn new(default_duration: f64) -> Self {
        Self {
            default_duration: default_duration.max(0.0),
            failing: HashSet::new(),
            current: None,
            paused: false,
            volume: 1.0,
            resize_mode: ResizeMode::Contain,
        }
    }

    /// Make every future load of `locator` fail
    pub fn fail_locator(&mut self, locator: impl Into<String>) {
        self.failing.insert(locator.into());
    }

    pub fn position(&self) -> Option<f64> {
        self.current.as_ref().map(|c| c.position)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn resize_mode(&self) -> ResizeMode {
        self.resize_mode
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }
}

impl PlaybackProvider for SimulatedPlayer {
    fn load(&mut self, session: Uuid, source: &MediaSource) {
        debug!(%session, locator = %source.locator, "simulated load");
        self.paused = false;
        self.resize_mode = source.resize_mode;
        self.current = Some(Loaded {
            session,
            locator: source.locator.clone(),
            duration: source.runtime_hint.unwrap_or(self.default_duration).max(0.0),
            position: 0.0,
            announced: false,
            finished: false,
            last_poll: None,
        });
    }

    fn seek(&mut self, position: f64) {
        if let Some(current) = self.current.as_mut() {
            current.position = position.clamp(0.0, current.duration);
            if current.position < current.duration {
                current.finished = false;
            }
        }
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn set_resize_mode(&mut self, mode: ResizeMode) {
        self.resize_mode = mode;
    }

    fn unload(&mut self) {
        if let Some(current) = self.current.take() {
            debug!(session = %current.session, "simulated unload");
        }
    }

    fn poll(&mut self, now: Instant) -> Vec<(Uuid, ProviderEvent)> {
        let paused = self.paused;
        let failing = &self.failing;
        let Some(current) = self.current.as_mut() else {
            return Vec::new();
        };
        let session = current.session;

        if failing.contains(&current.locator) {
            let locator = current.locator.clone();
            self.current = None;
            return vec![(session, ProviderEvent::Failed(PlaybackError::LoadFailed(locator)))];
        }

        let mut events = Vec::new();
        if !current.announced {
            current.announced = true;
            current.last_poll = Some(now);
            events.push((
                session,
                ProviderEvent::Loaded {
                    duration: current.duration,
                },
            ));
            return events;
        }

        if let Some(last) = current.last_poll {
            if !paused && !current.finished {
                let delta = now.saturating_duration_since(last).as_secs_f64();
                current.position = (current.position + delta).min(current.duration);
            }
        }
        current.last_poll = Some(now);

        if current.finished {
            return events;
        }
        events.push((
            session,
            ProviderEvent::Progress {
                current_time: current.position,
            },
        ));
        if current.position >= current.duration {
            current.finished = true;
            events.push((session, ProviderEvent::Ended));
        }
        events
    }
}
