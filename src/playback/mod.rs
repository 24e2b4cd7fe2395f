//! Playback: session state machine, controls timer, and the provider and
//! platform seams it is driven through

pub mod platform;
pub mod player;
pub mod provider;
pub mod session;
pub mod timer;

pub use platform::{PlatformShell, TerminalShell};
pub use player::{Player, PlayerTick};
pub use provider::{MediaSource, PlaybackError, PlaybackProvider, ProviderEvent, SimulatedPlayer};
pub use session::{ControlButton, EndReason, PlaybackSession, PlaybackState, SessionTick};
pub use timer::{ControlsTimer, Deadline};
