//! Status line: toast notifications or key hints

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Theme;
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let category = Span::styled(
        format!(" {} ", app.browse().category().label().to_uppercase()),
        ratatui::style::Style::default()
            .fg(Theme::BACKGROUND)
            .bg(Theme::PRIMARY),
    );
    let list_size = Span::styled(
        format!(" My List: {} ", app.watchlist().len()),
        Theme::secondary(),
    );

    let tail = match app.toast() {
        Some(toast) => Span::styled(format!(" {} ", toast), Theme::toast()),
        None => Span::styled(
            " ←↑↓→:navigate  ↵:select  m:my list  q:quit ",
            Theme::hint(),
        ),
    };

    let line = Line::from(vec![category, list_size, Span::raw(" │ "), tail]);
    frame.render_widget(Paragraph::new(line).style(Theme::status_bar()), area);
}
