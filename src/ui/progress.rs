use crate::dashboard::progress::{weekday_minutes, ProgressSection, TimeRange, WEEKDAYS};
use crate::data::user::{format_hours, UserProfile};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Table};

const BAR_WIDTH: usize = 10;

/// A text bar of `value` against `goal`, `BAR_WIDTH` cells at 100%.
fn text_bar(value: f32, goal: f32) -> String {
    let filled = if goal > 0.0 {
        ((value / goal).clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize
    } else {
        0
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn render(frame: &mut Frame, area: Rect, section: &ProgressSection, user: &UserProfile) {
    let [summary, range, table, chart] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(6),
        Constraint::Length(9),
    ])
    .areas(area);

    render_summary(frame, summary, section);
    render_range(frame, range, section);
    render_table(frame, table, section, user);
    render_chart(frame, chart, section);
}

fn render_summary(frame: &mut Frame, area: Rect, section: &ProgressSection) {
    let s = section.summary();
    let stats = [
        ("Study Time", format!("{} hrs", format_hours((s.total_hours() * 10.0).round() / 10.0))),
        ("Flashcards", s.total_cards.to_string()),
        ("Topics", s.total_topics.to_string()),
        ("Avg. Quiz", format!("{}%", s.average_quiz_score)),
        ("Days Studied", s.days_studied.to_string()),
        ("Streak", format!("{} days", s.study_streak)),
    ];
    let cells = Layout::horizontal(vec![Constraint::Ratio(1, stats.len() as u32); stats.len()])
        .split(area);
    for ((label, value), cell) in stats.into_iter().zip(cells.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border());
        let line = Line::from(vec![
            Span::styled(format!("{} ", label), Theme::muted()),
            Span::styled(value, Theme::title()),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), *cell);
    }
}

fn render_range(frame: &mut Frame, area: Rect, section: &ProgressSection) {
    let mut spans = Vec::new();
    for range in TimeRange::ALL {
        let style = if range == section.range {
            Theme::selected()
        } else {
            Theme::secondary()
        };
        spans.push(Span::styled(format!(" {} ", range.label()), style));
    }
    spans.push(Span::styled("   ◂ ", Theme::secondary()));
    spans.push(Span::styled(section.label(), Theme::title()));
    let next_style = if section.next_enabled() {
        Theme::secondary()
    } else {
        Theme::muted()
    };
    spans.push(Span::styled(" ▸", next_style));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(frame: &mut Frame, area: Rect, section: &ProgressSection, user: &UserProfile) {
    let header = Row::new(["Date", "Study Time", "", "Cards", "", "Topics", "Quiz"])
        .style(Style::default().fg(Theme::ACCENT_PURPLE).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = section
        .samples
        .iter()
        .skip(section.table_offset)
        .map(|s| {
            Row::new(vec![
                Cell::from(s.date.format("%a %b %-d").to_string()),
                Cell::from(format!("{} hrs", format_hours(s.study_hours()))),
                Cell::from(Span::styled(
                    text_bar(s.study_hours(), user.study_hours),
                    Style::default().fg(Theme::ACCENT_BLUE),
                )),
                Cell::from(s.cards_reviewed.to_string()),
                Cell::from(Span::styled(
                    text_bar(s.cards_reviewed as f32, user.flashcard_target as f32),
                    Style::default().fg(Theme::ACCENT_GREEN),
                )),
                Cell::from(s.topics_completed.to_string()),
                Cell::from(
                    s.quiz_score
                        .map(|q| format!("{}%", q))
                        .unwrap_or_else(|| "-".to_string()),
                ),
            ])
            .style(Theme::text())
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(BAR_WIDTH as u16),
        Constraint::Length(6),
        Constraint::Length(BAR_WIDTH as u16),
        Constraint::Length(7),
        Constraint::Length(5),
    ];
    let block = Block::default()
        .title(" Daily Breakdown ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    frame.render_widget(
        Table::new(rows, widths).header(header).block(block).column_spacing(1),
        area,
    );
}

fn render_chart(frame: &mut Frame, area: Rect, section: &ProgressSection) {
    let labels: Vec<String> = WEEKDAYS.iter().map(|d| d.to_string()).collect();
    let minutes = weekday_minutes(&section.samples);
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(minutes)
        .map(|(label, m)| (label.as_str(), u64::from(m)))
        .collect();

    let block = Block::default()
        .title(" Study Time by Weekday (minutes) ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let chart = BarChart::default()
        .block(block)
        .data(data.as_slice())
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(Theme::ACCENT_BLUE))
        .value_style(Style::default().fg(Theme::BG_SURFACE).bg(Theme::ACCENT_BLUE));
    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_bar() {
        assert_eq!(text_bar(1.0, 2.0), "█████░░░░░");
        assert_eq!(text_bar(5.0, 2.0), "██████████");
        assert_eq!(text_bar(1.0, 0.0), "░░░░░░░░░░");
    }
}
