use crate::app::state::*;
use crate::dashboard::flashcards::FlashcardMode;
use crate::dashboard::materials::MaterialsMode;
use crate::dashboard::{DashboardFocus, DashboardView};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = format!(" {} ", state.status_line());
    let status_style = if state.notice.is_some() {
        Theme::status_bar().fg(Theme::ACCENT_GREEN)
    } else {
        Theme::status_bar()
    };
    let mut parts = vec![Span::styled(status.clone(), status_style)];

    let hints = if state.config.ui.show_key_hints {
        format!(" {} ", key_hints(state))
    } else {
        String::new()
    };

    // Pad to push the hints to the right edge
    let used = status.width() + hints.width();
    let remaining = (area.width as usize).saturating_sub(used);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(hints, Theme::key_hint()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Keys that do something on the current screen.
pub fn key_hints(state: &AppState) -> &'static str {
    match &state.screen {
        Screen::Landing(_) => "←/→ choose  Enter open  s sign up  l log in  q quit",
        Screen::Login(_) => "Tab field  Enter log in  F2 sign up  Esc back",
        Screen::Signup(_) => "Tab field  Enter create  F2 log in  Esc back",
        Screen::Onboarding(w) if w.completed => "Enter go to dashboard",
        Screen::Onboarding(w) => match w.step {
            2 | 3 => "←/→ adjust  Enter next  Esc back",
            4 => "Enter add/next  ↑/↓ select  Del remove  Esc back",
            _ => "Enter next",
        },
        Screen::Dashboard(dash) if dash.focus == DashboardFocus::Sidebar => {
            "↑/↓ move  Enter open  Tab content  F1-F5 sections  q quit"
        }
        Screen::Dashboard(dash) => match &dash.view {
            DashboardView::Overview(_) => "Tab sidebar  F1-F5 sections",
            DashboardView::Flashcards(c) if c.mode == FlashcardMode::Study => {
                "←/→ card  Space flip  s shuffle  Esc browse"
            }
            DashboardView::Flashcards(_) => "type to search  ←/→ deck  Enter study  Tab sidebar",
            DashboardView::Materials(m) => match m.mode {
                MaterialsMode::Files => "type to search  ↑/↓ move  Enter open  Tab sidebar",
                MaterialsMode::Content => "Enter quiz  Esc files",
                MaterialsMode::Quiz if m.quiz.submitted => "r retake  Esc back",
                MaterialsMode::Quiz => "1-9 answer  ←/→ question  Enter next/submit  Esc back",
            },
            DashboardView::Progress(_) => "d/w/m range  ←/→ period  ↑/↓ scroll  Tab sidebar",
            DashboardView::Settings(_) => "↑/↓ field  Enter save  Tab sidebar",
        },
    }
}
