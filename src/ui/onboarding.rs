use crate::config::model::default_date_format;
use crate::data::user::format_hours;
use crate::onboarding::slider::Slider;
use crate::onboarding::{OnboardingWizard, LAST_STEP};
use crate::ui::form_field::{self, Field, FIELD_HEIGHT};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use chrono::NaiveDate;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap};
use std::fmt::Write;

const STEP_TITLES: [&str; 4] = [
    "When is your exam?",
    "How long can you study each day?",
    "How many flashcards per day?",
    "Upload your study materials",
];

pub fn render(frame: &mut Frame, area: Rect, wizard: &OnboardingWizard, date_format: &str) {
    let card = centered(area, 64, 20);
    let block = Block::default()
        .title(" Let's set up your study plan ")
        .title_style(Theme::heading())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(card).inner(Margin::new(2, 1));
    frame.render_widget(block, card);

    if wizard.completed {
        render_summary(frame, inner, wizard, date_format);
        return;
    }

    let [progress, title, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(3),
    ])
    .areas(inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Theme::ACCENT_BLUE).bg(Theme::BG_ELEVATED))
        .ratio(wizard.progress_ratio())
        .label(format!("Step {} of {}", wizard.step, LAST_STEP));
    frame.render_widget(gauge, progress);

    let heading = STEP_TITLES
        .get(usize::from(wizard.step.saturating_sub(1)))
        .copied()
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Span::styled(heading, Theme::title())),
        title,
    );

    match wizard.step {
        1 => {
            let [field, hint] =
                Layout::vertical([Constraint::Length(FIELD_HEIGHT), Constraint::Min(1)]).areas(body);
            form_field::render(
                frame,
                field,
                &Field::new("Exam date", &wizard.exam_date)
                    .placeholder("YYYY-MM-DD (optional)")
                    .focused(true)
                    .error(wizard.date_error.map(|e| e.to_string())),
            );
            frame.render_widget(
                Paragraph::new("Leave empty if you have no fixed deadline.").style(Theme::muted()),
                hint,
            );
        }
        2 => render_slider(
            frame,
            body,
            &wizard.study_hours,
            format!("{} hours per day", format_hours(wizard.hours())),
        ),
        3 => render_slider(
            frame,
            body,
            &wizard.flashcard_target,
            format!("{} cards per day", wizard.cards()),
        ),
        _ => render_uploads(frame, body, wizard),
    }
}

fn render_slider(frame: &mut Frame, area: Rect, slider: &Slider, label: String) {
    let [value, bar, bounds] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(label, Style::default().fg(Theme::ACCENT_AMBER)))
            .alignment(Alignment::Center),
        value,
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Theme::ACCENT_PURPLE).bg(Theme::BG_ELEVATED))
        .ratio(slider.ratio().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, bar);
    let ends = Line::from(vec![
        Span::styled(format!("{}", slider.min), Theme::muted()),
        Span::raw(" ".repeat((bounds.width as usize).saturating_sub(8))),
        Span::styled(format!("{}", slider.max), Theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(ends), bounds);
}

fn render_uploads(frame: &mut Frame, area: Rect, wizard: &OnboardingWizard) {
    let uploads = &wizard.uploads;
    let [field, list] =
        Layout::vertical([Constraint::Length(FIELD_HEIGHT), Constraint::Min(1)]).areas(area);

    form_field::render(
        frame,
        field,
        &Field::new("Add a PDF", &uploads.input)
            .placeholder("path/to/notes.pdf")
            .focused(uploads.selected.is_none())
            .error(uploads.error.as_ref().map(|e| e.to_string())),
    );

    let items: Vec<ListItem> = if uploads.files.is_empty() {
        vec![ListItem::new(Span::styled(" No files added yet", Theme::muted()))]
    } else {
        uploads
            .files
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let style = if uploads.selected == Some(i) {
                    Theme::selected()
                } else {
                    Theme::text()
                };
                ListItem::new(Span::styled(format!(" {} ", name), style))
            })
            .collect()
    };
    let block = Block::default()
        .title(format!(" Files ({}) ", uploads.files.len()))
        .title_style(Theme::secondary())
        .borders(Borders::TOP)
        .border_style(Theme::border());
    frame.render_widget(List::new(items).block(block), list);
}

/// Formats with `date_format`, or the built-in format when chrono cannot render it.
fn format_exam_date(date: NaiveDate, date_format: &str) -> String {
    let mut text = String::new();
    if write!(text, "{}", date.format(date_format)).is_ok() {
        return text;
    }
    date.format(&default_date_format()).to_string()
}

fn render_summary(frame: &mut Frame, area: Rect, wizard: &OnboardingWizard, date_format: &str) {
    let mut lines = vec![
        Line::from(Span::styled("You're all set!", Theme::success().add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];
    if let Some(date) = wizard.exam_date() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18}", "Exam date:"), Theme::secondary()),
            Span::styled(format_exam_date(date, date_format), Theme::text()),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(format!("{:<18}", "Daily study:"), Theme::secondary()),
        Span::styled(format!("{} hours", format_hours(wizard.hours())), Theme::text()),
    ]));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<18}", "Daily flashcards:"), Theme::secondary()),
        Span::styled(format!("{} cards", wizard.cards()), Theme::text()),
    ]));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<18}", "Materials:"), Theme::secondary()),
        Span::styled(format!("{} files uploaded", wizard.uploads.files.len()), Theme::text()),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Go to Dashboard ", Theme::button(true))));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_date_uses_configured_format() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 14).unwrap();
        assert_eq!(format_exam_date(date, "%d/%m/%Y"), "14/12/2026");
        assert_eq!(format_exam_date(date, &default_date_format()), "Dec 14, 2026");
    }

    #[test]
    fn test_unrenderable_format_falls_back() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 14).unwrap();
        assert_eq!(format_exam_date(date, "%Q"), "Dec 14, 2026");
    }
}
