use crate::dashboard::materials::{MaterialsMode, MaterialsSection};
use crate::data::materials::{MaterialFile, MaterialNode, Quiz};
use crate::ui::form_field::{self, Field};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, section: &MaterialsSection, focused: bool) {
    match (section.mode, section.open_file.as_ref()) {
        (MaterialsMode::Content, Some(file)) => render_content(frame, area, file),
        (MaterialsMode::Quiz, Some(file)) => match file.quiz.as_ref() {
            Some(quiz) if section.quiz.submitted => render_results(frame, area, section, quiz),
            Some(quiz) => render_quiz(frame, area, section, quiz),
            None => render_content(frame, area, file),
        },
        _ => render_files(frame, area, section, focused),
    }
}

fn render_files(frame: &mut Frame, area: Rect, section: &MaterialsSection, focused: bool) {
    let [search, tree] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);

    form_field::render(
        frame,
        search,
        &Field::new("Search files", &section.search)
            .placeholder("type to search by file name")
            .focused(focused),
    );

    let block = Block::default()
        .title(" Files ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let rows = section.rows();
    if rows.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No files match your search", Theme::muted()))
                .block(block),
            tree,
        );
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let indent = "  ".repeat(row.depth);
            let line = match row.node {
                MaterialNode::Folder(folder) => Line::from(vec![
                    Span::raw(indent),
                    Span::styled(
                        if row.expanded { "▾ " } else { "▸ " },
                        Style::default().fg(Theme::ACCENT_AMBER),
                    ),
                    Span::styled(folder.name, Theme::title()),
                ]),
                MaterialNode::File(file) => Line::from(vec![
                    Span::raw(indent),
                    Span::styled(
                        format!("{:<5}", file.file_type.label()),
                        Style::default().fg(Theme::ACCENT_RED),
                    ),
                    Span::styled(file.name, Theme::text()),
                    Span::styled(
                        format!("  {} · {}", file.size, file.last_modified.format("%b %-d, %Y")),
                        Theme::muted(),
                    ),
                ]),
            };
            ListItem::new(line)
        })
        .collect();

    let mut list_state = ListState::default().with_selected(Some(section.selected_row));
    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::selected());
    frame.render_stateful_widget(list, tree, &mut list_state);
}

fn render_content(frame: &mut Frame, area: Rect, file: &MaterialFile) {
    let block = Block::default()
        .title(format!(" {} ", file.title()))
        .title_style(Theme::heading())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let mut lines = vec![Line::from(Span::styled(
        format!("{} · {} · modified {}", file.file_type.label(), file.size, file.last_modified),
        Theme::muted(),
    ))];

    if let Some(summary) = file.summary {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Summary", Theme::title())));
        lines.push(Line::from(Span::styled(summary, Theme::text())));
    }

    if !file.content.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Content", Theme::title())));
        for item in &file.content {
            lines.push(Line::from(Span::styled(format!("  {}", item), Theme::secondary())));
        }
    }

    lines.push(Line::from(""));
    match file.quiz {
        Some(ref quiz) => lines.push(Line::from(vec![
            Span::styled(" Take Quiz ", Theme::button(true)),
            Span::styled(
                format!("  {} · {} questions", quiz.title, quiz.questions.len()),
                Theme::muted(),
            ),
        ])),
        None => lines.push(Line::from(Span::styled(
            "No quiz for this material",
            Theme::muted(),
        ))),
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_quiz(frame: &mut Frame, area: Rect, section: &MaterialsSection, quiz: &Quiz) {
    let session = &section.quiz;
    let Some(question) = quiz.questions.get(session.current) else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", quiz.title))
        .title_style(Theme::heading())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [progress, body, controls] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let total = session.question_count().max(1);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Theme::ACCENT_BLUE).bg(Theme::BG_ELEVATED))
            .ratio((session.current + 1) as f64 / total as f64)
            .label(format!("Question {} of {}", session.current + 1, total)),
        Rect {
            height: progress.height.min(1),
            ..progress
        },
    );

    let mut lines = vec![
        Line::from(Span::styled(question.text, Theme::title())),
        Line::from(""),
    ];
    for (i, option) in question.options.iter().enumerate() {
        let chosen = session.current_answer() == Some(i);
        let marker = if chosen { "●" } else { "○" };
        let style = if i == session.highlighted {
            Theme::selected()
        } else if chosen {
            Style::default().fg(Theme::ACCENT_BLUE)
        } else {
            Theme::text()
        };
        lines.push(Line::from(Span::styled(
            format!(" {} {}. {}", marker, i + 1, option),
            style,
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);

    let forward = if session.is_last_question() {
        Span::styled(" Submit ", Theme::button(session.submit_enabled()))
    } else {
        Span::styled(" Next ", Theme::button(session.next_enabled()))
    };
    let line = Line::from(vec![
        Span::styled(" Previous ", Theme::button(session.previous_enabled())),
        Span::raw("   "),
        forward,
    ]);
    frame.render_widget(Paragraph::new(line), controls);
}

fn render_results(frame: &mut Frame, area: Rect, section: &MaterialsSection, quiz: &Quiz) {
    let block = Block::default()
        .title(" Quiz Results ")
        .title_style(Theme::heading())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let mut lines = Vec::new();
    if let Some(score) = section.last_score {
        lines.push(Line::from(Span::styled(
            format!("{}%", score.percent),
            Theme::heading(),
        )));
        lines.push(Line::from(Span::styled(
            format!("You got {} out of {} questions correct", score.correct, score.total),
            Theme::secondary(),
        )));
    }

    for (i, question) in quiz.questions.iter().enumerate() {
        let answer = section.quiz.answers.get(i).copied().flatten();
        let correct = answer == Some(question.correct_answer);
        let option_text = |idx: Option<usize>| {
            idx.and_then(|i| question.options.get(i).copied())
                .unwrap_or("-")
        };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            if correct {
                Span::styled("✓ ", Theme::success())
            } else {
                Span::styled("✗ ", Theme::error())
            },
            Span::styled(question.text, Theme::title()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Your answer: ", Theme::muted()),
            Span::styled(
                option_text(answer),
                if correct { Theme::success() } else { Theme::error() },
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Correct answer: ", Theme::muted()),
            Span::styled(option_text(Some(question.correct_answer)), Theme::success()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Retake Quiz ", Theme::button(true)),
        Span::styled("  r", Theme::muted()),
    ]));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
