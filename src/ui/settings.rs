//! Screen-mode settings panel

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem},
    Frame,
};

use super::Theme;
use crate::models::ScreenMode;
use crate::playback::PlaybackSession;

pub fn render(frame: &mut Frame, area: Rect, session: &PlaybackSession) {
    let width = 48.min(area.width.saturating_sub(4));
    let height = (ScreenMode::ALL.len() as u16 * 2 + 2).min(area.height);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = ScreenMode::ALL
        .iter()
        .map(|mode| {
            let is_cursor = *mode == session.settings_cursor();
            let is_active = *mode == session.screen_mode();
            let marker = if is_active { "● " } else { "○ " };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, Theme::accent()),
                    Span::styled(
                        mode.name(),
                        if is_cursor {
                            Theme::focused()
                        } else {
                            Theme::text()
                        },
                    ),
                ]),
                Line::from(Span::styled(format!("  {}", mode.description()), Theme::dimmed())),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Theme::border_focused())
            .title(Span::styled(" ⚙ SCREEN MODE ", Theme::title()))
            .style(ratatui::style::Style::default().bg(Theme::BACKGROUND)),
    );
    frame.render_widget(list, popup);
}
