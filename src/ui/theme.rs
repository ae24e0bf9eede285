use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_SURFACE: Color = Color::Rgb(24, 26, 33);
    pub const BG_ELEVATED: Color = Color::Rgb(36, 39, 50);
    pub const TEXT_PRIMARY: Color = Color::Rgb(226, 228, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 165, 180);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 105, 120);
    pub const BORDER_DIM: Color = Color::Rgb(60, 64, 78);
    pub const ACCENT_BLUE: Color = Color::Rgb(96, 150, 250);
    pub const ACCENT_GREEN: Color = Color::Rgb(110, 200, 130);
    pub const ACCENT_PURPLE: Color = Color::Rgb(170, 130, 240);
    pub const ACCENT_AMBER: Color = Color::Rgb(240, 180, 80);
    pub const ACCENT_RED: Color = Color::Rgb(235, 100, 100);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_BLUE)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Self::BG_SURFACE)
                .bg(Self::ACCENT_BLUE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::TEXT_MUTED).bg(Self::BG_ELEVATED)
        }
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Self::ACCENT_AMBER).bg(Self::BG_ELEVATED)
    }
}
