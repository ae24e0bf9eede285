use crate::dashboard::overview::{OverviewSection, FOCUS_TOPICS, STUDY_TIPS, TODAYS_MATERIALS};
use crate::data::user::{format_hours, UserProfile};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
}

pub fn render(frame: &mut Frame, area: Rect, section: &OverviewSection, user: &UserProfile) {
    let [plan, middle, tips] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(10),
        Constraint::Length(6),
    ])
    .areas(area);

    let plan_block = panel("Today's Plan");
    let plan_inner = plan_block.inner(plan);
    frame.render_widget(plan_block, plan);
    let lines = vec![
        Line::from(Span::styled(
            format!("Welcome back, {}!", user.nickname),
            Theme::heading(),
        )),
        Line::from(Span::styled("Here's your study plan for today:", Theme::secondary())),
        Line::from(vec![
            Span::styled("  Study Time ", Style::default().fg(Theme::ACCENT_BLUE)),
            Span::styled(format!("{} hours today", format_hours(user.study_hours)), Theme::text()),
            Span::styled("   Flashcards ", Style::default().fg(Theme::ACCENT_GREEN)),
            Span::styled(format!("{} cards to review", user.flashcard_target), Theme::text()),
            Span::styled("   Focus Topics ", Style::default().fg(Theme::ACCENT_PURPLE)),
            Span::styled(format!("{} topics today", FOCUS_TOPICS), Theme::text()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), plan_inner);

    let [materials, weekly] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .areas(middle);

    let materials_block = panel("Today's Study Materials");
    let materials_inner = materials_block.inner(materials);
    frame.render_widget(materials_block, materials);
    let mut material_lines = Vec::new();
    for item in TODAYS_MATERIALS {
        material_lines.push(Line::from(Span::styled(item.title, Theme::text())));
        material_lines.push(Line::from(Span::styled(
            format!("  {} • {} min", item.subject, item.minutes),
            Theme::muted(),
        )));
    }
    frame.render_widget(Paragraph::new(material_lines), materials_inner);

    let weekly_block = panel("Weekly Progress");
    let weekly_inner = weekly_block.inner(weekly);
    frame.render_widget(weekly_block, weekly);
    let rows = Layout::vertical(vec![Constraint::Length(2); section.weekly.len()]).split(weekly_inner);
    let colors = [
        Theme::ACCENT_BLUE,
        Theme::ACCENT_GREEN,
        Theme::ACCENT_PURPLE,
        Theme::ACCENT_AMBER,
    ];
    for (i, gauge) in section.weekly.iter().enumerate() {
        let Some(row) = rows.get(i) else { break };
        let [label, bar] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(*row);
        let amount = if gauge.goal == 100.0 && gauge.unit.starts_with('%') {
            format!("{}{}", gauge.done, gauge.unit)
        } else {
            format!("{}/{} {}", format_hours(gauge.done), format_hours(gauge.goal), gauge.unit)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(gauge.label, Theme::text()),
                Span::styled(format!("  {}", amount), Theme::muted()),
            ])),
            label,
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(
                    Style::default()
                        .fg(colors[i % colors.len()])
                        .bg(Theme::BG_ELEVATED),
                )
                .ratio(gauge.ratio())
                .label(""),
            bar,
        );
    }

    let tips_block = panel("Study Tips");
    let tips_inner = tips_block.inner(tips);
    frame.render_widget(tips_block, tips);
    let tip_lines: Vec<Line> = STUDY_TIPS
        .iter()
        .map(|(name, text)| {
            Line::from(vec![
                Span::styled(format!("{}: ", name), Style::default().fg(Theme::ACCENT_AMBER)),
                Span::styled(*text, Theme::secondary()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(tip_lines).wrap(Wrap { trim: true }), tips_inner);
}
