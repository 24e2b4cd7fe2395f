//! Hero banner for the featured title

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::app::App;
use crate::browse::{FocusZone, HeroButton};

pub const HEIGHT: u16 = 8;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let featured = app.catalog().featured();
    let focused = app.browse().zone() == FocusZone::Hero;
    let in_list = app.watchlist().contains(featured.item.id);

    let button = |button: HeroButton| {
        let style = if focused && app.browse().hero().focused() == button {
            Theme::focused()
        } else {
            Theme::button()
        };
        Span::styled(format!(" {} ", button.label(in_list)), style)
    };

    let rating = featured
        .item
        .rating()
        .map(|r| format!("★ {:.1}", r))
        .unwrap_or_default();

    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", featured.badge()), Theme::badge()),
            Span::raw(" "),
            Span::styled(featured.item.title.clone(), Theme::title()),
            Span::raw("  "),
            Span::styled(rating, Theme::rating()),
        ]),
        Line::from(Span::styled(featured.metadata_line(), Theme::dimmed())),
        Line::from(Span::styled(featured.item.description.clone(), Theme::text())),
        Line::from(""),
        Line::from(vec![
            button(HeroButton::Play),
            Span::raw("  "),
            button(HeroButton::AddToList),
        ]),
    ];

    let border = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let hero = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::styled(" FEATURED ", Theme::accent())),
    );
    frame.render_widget(hero, area);
}
