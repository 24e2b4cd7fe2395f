//! Header bar: logo and category tabs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::browse::{BrowseScreen, FocusZone};

pub const HEIGHT: u16 = 3;

/// Styled spans for the tab strip
pub fn tab_spans(browse: &BrowseScreen) -> Vec<Span<'static>> {
    let selector = browse.selector();
    let header_focused = browse.zone() == FocusZone::Header;

    let mut spans = Vec::new();
    for (i, tab) in selector.tabs().iter().enumerate() {
        let style = if header_focused && i == selector.focused_index() {
            Theme::focused()
        } else if *tab == selector.active() {
            Theme::tab_active()
        } else {
            Theme::tab()
        };
        spans.push(Span::styled(format!(" {} ", tab.label()), style));
        spans.push(Span::raw(" "));
    }
    spans
}

pub fn render(frame: &mut Frame, area: Rect, browse: &BrowseScreen) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(15), Constraint::Min(1)])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("NET", Theme::title()),
        Span::styled(
            "STREAM",
            ratatui::style::Style::default()
                .fg(Theme::SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, chunks[0]);

    let border = if browse.zone() == FocusZone::Header {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let tabs = Paragraph::new(Line::from(tab_spans(browse))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border),
    );
    frame.render_widget(tabs, chunks[1]);
}
