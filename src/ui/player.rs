//! Now Playing overlay
//!
//! Title block, progress bar, elapsed/total time and the control bar.
//! When the controls have auto-hidden only the bare video area remains.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::playback::{ControlButton, EndReason, PlaybackSession, PlaybackState};

/// Format seconds as m:ss
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Text progress bar `width` cells wide
pub fn progress_bar(fraction: f64, width: usize) -> (String, String) {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    ("█".repeat(filled), "░".repeat(width - filled))
}

/// Message in the middle of the video area, if any
pub fn center_message(session: &PlaybackSession) -> Option<Span<'static>> {
    match session.state() {
        PlaybackState::Loading => Some(Span::styled("⟳ Loading...", Theme::loading())),
        PlaybackState::Paused => Some(Span::styled("▶", Theme::title())),
        PlaybackState::Ended => Some(match session.end_reason() {
            Some(EndReason::Failed(error)) => {
                Span::styled(format!("✗ {}", error), Theme::error())
            }
            _ => Span::styled("■ Ended", Theme::dimmed()),
        }),
        PlaybackState::Playing | PlaybackState::Closed => None,
    }
}

fn control_spans(session: &PlaybackSession) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for button in ControlButton::ALL {
        let style = if button == session.control_focus() {
            Theme::focused()
        } else {
            Theme::text()
        };
        spans.push(Span::styled(
            format!(" {} ", button.label(session.is_playing())),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!(" {:.0}%", session.volume() * 100.0),
        Theme::secondary(),
    ));
    spans
}

pub fn render(frame: &mut Frame, area: Rect, session: &PlaybackSession) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if session.controls_visible() {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title block
            Constraint::Min(1),    // Video area
            Constraint::Length(4), // Progress + controls
        ])
        .split(inner);

    if let Some(message) = center_message(session) {
        let video = chunks[1];
        let middle = Rect {
            y: video.y + video.height / 2,
            height: 1.min(video.height),
            ..video
        };
        frame.render_widget(
            Paragraph::new(Line::from(message)).alignment(Alignment::Center),
            middle,
        );
    }

    if !session.controls_visible() {
        return;
    }

    let content = session.content();
    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(content.title.clone(), Theme::title()),
            Span::raw("  "),
            Span::styled(format!("▣ {}", session.screen_mode().name()), Theme::accent()),
        ]),
        Line::from(Span::styled(content.meta_line(), Theme::dimmed())),
    ]);
    frame.render_widget(title, chunks[0]);

    let bar_width = chunks[2].width.saturating_sub(2) as usize;
    let (filled, empty) = progress_bar(session.progress_fraction(), bar_width);
    let transport = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(filled, Theme::progress_bar()),
            Span::styled(empty, Theme::progress_bar_empty()),
        ]),
        Line::from(Span::styled(
            format!(
                "{} / {}",
                format_time(session.elapsed()),
                format_time(session.duration())
            ),
            Theme::dimmed(),
        )),
        Line::from(""),
        Line::from(control_spans(session)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(transport, chunks[2]);
}
