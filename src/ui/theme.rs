//! Living-room theme for netstream
//!
//! Dark backdrop with a red brand colour and a bright focus ring, tuned to
//! be read from across a room. Focus is always shown with both colour and
//! a modifier so it survives terminals with poor colour support.

use ratatui::style::{Color, Modifier, Style};

/// Theme colors and styles
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Near-black backdrop - #101014
    pub const BACKGROUND: Color = Color::Rgb(0x10, 0x10, 0x14);

    /// Raised surface for buttons and cards - #24242c
    pub const BACKGROUND_HOVER: Color = Color::Rgb(0x24, 0x24, 0x2c);

    /// Brand red - #e50914
    pub const PRIMARY: Color = Color::Rgb(0xe5, 0x09, 0x14);

    /// Soft blue for secondary info - #5ab4ff
    pub const SECONDARY: Color = Color::Rgb(0x5a, 0xb4, 0xff);

    /// Gold for ratings and highlights - #f5c518
    pub const ACCENT: Color = Color::Rgb(0xf5, 0xc5, 0x18);

    /// Focus ring - #ffffff
    pub const FOCUS: Color = Color::Rgb(0xff, 0xff, 0xff);

    /// Main text - #e6e6e6
    pub const TEXT: Color = Color::Rgb(0xe6, 0xe6, 0xe6);

    /// Secondary text - #8c8c99
    pub const DIM: Color = Color::Rgb(0x8c, 0x8c, 0x99);

    /// Toasts - #46d369
    pub const SUCCESS: Color = Color::Rgb(0x46, 0xd3, 0x69);

    /// Failures - #ff5a5f
    pub const ERROR: Color = Color::Rgb(0xff, 0x5a, 0x5f);

    /// Resting borders - #3a3a46
    pub const BORDER: Color = Color::Rgb(0x3a, 0x3a, 0x46);

    // ═══════════════════════════════════════════════════════════════════════
    // TEXT
    // ═══════════════════════════════════════════════════════════════════════

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn accent() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::SLOW_BLINK)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // FOCUS & CHROME
    // ═══════════════════════════════════════════════════════════════════════

    /// Whatever holds remote focus: inverted and bold
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::FOCUS)
            .add_modifier(Modifier::BOLD)
    }

    /// Hero buttons without focus
    pub fn button() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_HOVER)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::FOCUS)
    }

    pub fn tab() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::DIM).bg(Self::BACKGROUND_HOVER)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn toast() -> Style {
        Style::default().fg(Self::SUCCESS).add_modifier(Modifier::BOLD)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // CARDS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn card() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn card_focused() -> Style {
        Style::default().fg(Self::FOCUS).add_modifier(Modifier::BOLD)
    }

    /// SERIES / MOVIE badge on the hero
    pub fn badge() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn live() -> Style {
        Style::default().fg(Self::PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn rating() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn genre() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn duration() -> Style {
        Style::default().fg(Self::DIM)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PLAYER
    // ═══════════════════════════════════════════════════════════════════════

    pub fn progress_bar() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    pub fn progress_bar_empty() -> Style {
        Style::default().fg(Self::BORDER)
    }
}

/// WCAG contrast ratio between two RGB colours, from 1.0 to 21.0.
/// Non-RGB colours have no defined luminance and yield `None`.
pub fn contrast_ratio(fg: Color, bg: Color) -> Option<f64> {
    fn luminance(color: Color) -> Option<f64> {
        let Color::Rgb(r, g, b) = color else {
            return None;
        };
        let linear = |c: u8| {
            let c = c as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        Some(0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b))
    }

    let (a, b) = (luminance(fg)?, luminance(bg)?);
    let (hi, lo) = if a > b { (a, b) } else { (b, a) };
    Some((hi + 0.05) / (lo + 0.05))
}
