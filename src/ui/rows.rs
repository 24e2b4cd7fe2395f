//! Content rows rendered as horizontal strips of cards

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::browse::{BrowseScreen, ContentRow, FocusZone};
use crate::models::ContentItem;

/// Layout units per terminal column
const UNITS_PER_CELL: f32 = 8.0;

/// Title line plus a bordered card
pub const ROW_HEIGHT: u16 = 7;
const CARD_HEIGHT: u16 = 6;

/// Card width and gap in terminal columns for a row's geometry
pub fn card_cells(row: &ContentRow) -> (u16, u16) {
    let geometry = row.geometry();
    let width = (geometry.item_width / UNITS_PER_CELL).round().max(8.0) as u16;
    let gap = (geometry.spacing / UNITS_PER_CELL).round() as u16;
    (width, gap)
}

/// Lines shown inside a card
pub fn card_lines(item: &ContentItem) -> Vec<Line<'static>> {
    let kind = if item.is_live() {
        Span::styled(item.duration_label(), Theme::live())
    } else {
        Span::styled(item.duration_label(), Theme::duration())
    };
    let mut lines = vec![
        Line::from(Span::styled(item.title.clone(), Theme::title())),
        Line::from(vec![
            Span::styled(item.genre.clone(), Theme::genre()),
            Span::raw(" • "),
            kind,
        ]),
    ];

    match (item.epg(), item.channel_number()) {
        (Some(epg), Some(channel)) => {
            lines.push(Line::from(vec![
                Span::styled(format!("CH {} ", channel), Theme::secondary()),
                Span::styled(epg.current.clone(), Theme::text()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("Next: {}", epg.next),
                Theme::dimmed(),
            )));
        }
        _ => {
            if let Some(rating) = item.rating() {
                lines.push(Line::from(Span::styled(
                    format!("★ {:.1}", rating),
                    Theme::rating(),
                )));
            }
        }
    }
    lines
}

fn render_row(frame: &mut Frame, area: Rect, row: &ContentRow, focused: bool) {
    let title_style = if focused {
        Theme::accent()
    } else {
        Theme::text()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(row.title(), title_style)),
        Rect { height: 1, ..area },
    );

    if row.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("  Nothing here yet", Theme::dimmed())),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
        return;
    }

    let (width, gap) = card_cells(row);
    let right = area.x + area.width;
    let mut x = area.x;

    for (index, item) in row.items().iter().enumerate().skip(row.first_visible()) {
        if x + width > right {
            break;
        }
        let card_focused = focused && index == row.focused_index();
        let border = if card_focused {
            Theme::card_focused()
        } else {
            Theme::card()
        };
        let card = Paragraph::new(card_lines(item)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if card_focused {
                    BorderType::Double
                } else {
                    BorderType::Rounded
                })
                .border_style(border),
        );
        let card_area = Rect {
            x,
            y: area.y + 1,
            width,
            height: CARD_HEIGHT.min(area.height.saturating_sub(1)),
        };
        frame.render_widget(card, card_area);
        x += width + gap;
    }
}

/// Render as many rows as fit, keeping the focused one on screen
pub fn render(frame: &mut Frame, area: Rect, browse: &BrowseScreen) {
    let rows = browse.rows();
    let fit = (area.height / ROW_HEIGHT).max(1) as usize;
    let focused_row = match browse.zone() {
        FocusZone::Row(index) => Some(index),
        _ => None,
    };
    let first = focused_row.map_or(0, |index| (index + 1).saturating_sub(fit));

    for (slot, (index, row)) in rows.iter().enumerate().skip(first).take(fit).enumerate() {
        let y = area.y + slot as u16 * ROW_HEIGHT;
        let height = ROW_HEIGHT.min((area.y + area.height).saturating_sub(y));
        if height < 2 {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        render_row(frame, row_area, row, focused_row == Some(index));
    }
}
