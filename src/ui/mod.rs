//! Terminal UI components
//!
//! Built with ratatui. The browse screen stacks the header tabs, the hero
//! banner and the content rows; an open playback session takes over the
//! whole frame.

pub mod header;
pub mod hero;
pub mod player;
pub mod rows;
pub mod settings;
pub mod status;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Clear},
    Frame,
};

use crate::app::{App, AppState};

/// Main render function - dispatches to screen-specific renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Clear with background color
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BACKGROUND)), area);

    if app.state() == AppState::Playing {
        if let Some(session) = app.player().session() {
            player::render(frame, area, session);
            if session.settings_visible() {
                settings::render(frame, area, session);
            }
        }
        return;
    }

    let status_height = if app.player().shell().status_bar_hidden() {
        0
    } else {
        1
    };
    let hero_height = if app.browse().shows_hero() {
        hero::HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::HEIGHT),
            Constraint::Length(hero_height),
            Constraint::Min(1),
            Constraint::Length(status_height),
        ])
        .split(area);

    header::render(frame, chunks[0], app.browse());
    if hero_height > 0 {
        hero::render(frame, chunks[1], app);
    }
    rows::render(frame, chunks[2], app.browse());
    if status_height > 0 {
        status::render(frame, chunks[3], app);
    }
}
