use crate::app::state::{LandingChoice, LandingState};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const FEATURES: [(&str, &str); 3] = [
    ("Flashcards", "Review concepts by deck, flip to check yourself."),
    ("Study Materials", "Browse notes and test yourself with quizzes."),
    ("Progress", "Track hours, cards and scores day by day."),
];

pub fn render(frame: &mut Frame, area: Rect, landing: &LandingState) {
    let card = centered(area, 64, 18);

    let block = Block::default()
        .title(" StudyCoach ")
        .title_style(Theme::heading())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("Your Personalised Study Coach", Theme::title()))
            .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Plan your study days, drill flashcards and measure your progress.",
            Theme::secondary(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];
    for (name, blurb) in FEATURES {
        lines.push(Line::from(vec![
            Span::styled(format!("  ● {:<16}", name), Style::default().fg(Theme::ACCENT_PURPLE)),
            Span::styled(blurb, Theme::text()),
        ]));
    }
    lines.push(Line::from(""));

    let button = |label: &'static str, choice: LandingChoice| {
        if landing.selected == choice {
            Span::styled(format!("[ {} ]", label), Theme::button(true))
        } else {
            Span::styled(format!("  {}  ", label), Theme::secondary())
        }
    };
    lines.push(
        Line::from(vec![
            button("Sign Up", LandingChoice::SignUp),
            Span::raw("    "),
            button("Log In", LandingChoice::Login),
        ])
        .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
