use crate::dashboard::flashcards::{FlashcardMode, FlashcardSection};
use crate::data::flashcards::Difficulty;
use crate::ui::form_field::{self, Field};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

fn difficulty_style(difficulty: Difficulty) -> Style {
    match difficulty {
        Difficulty::Easy => Theme::success(),
        Difficulty::Medium => Style::default().fg(Theme::ACCENT_AMBER),
        Difficulty::Hard => Theme::error(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, section: &FlashcardSection, focused: bool) {
    match section.mode {
        FlashcardMode::Browse => render_browse(frame, area, section, focused),
        FlashcardMode::Study => render_study(frame, area, section),
    }
}

fn render_browse(frame: &mut Frame, area: Rect, section: &FlashcardSection, focused: bool) {
    let [search, decks, list] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
    ])
    .areas(area);

    form_field::render(
        frame,
        search,
        &Field::new("Search flashcards", &section.query)
            .placeholder("type to filter by front or back")
            .focused(focused),
    );

    let deck_line = Line::from(vec![
        Span::styled(" Deck: ", Theme::secondary()),
        Span::styled(format!("◂ {} ▸", section.deck.label()), Theme::selected()),
        Span::styled(
            format!("   {} cards", section.filtered_count()),
            Theme::muted(),
        ),
    ]);
    frame.render_widget(Paragraph::new(deck_line), decks);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let cards = section.filtered();
    if cards.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No flashcards found", Theme::muted()))
                .alignment(Alignment::Center)
                .block(block),
            list,
        );
        return;
    }

    let items: Vec<ListItem> = cards
        .iter()
        .skip(section.browse_offset)
        .map(|card| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(card.front, Theme::text()),
                    Span::raw("  "),
                    Span::styled(
                        format!("[{}]", card.difficulty.label()),
                        difficulty_style(card.difficulty),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {} · {}", card.category, card.back),
                    Theme::muted(),
                )),
            ])
        })
        .collect();
    frame.render_widget(List::new(items).block(block), list);
}

fn render_study(frame: &mut Frame, area: Rect, section: &FlashcardSection) {
    let Some(card) = section.current_card() else {
        frame.render_widget(
            Paragraph::new(Span::styled("No flashcards available", Theme::muted()))
                .alignment(Alignment::Center),
            centered(area, area.width, 1),
        );
        return;
    };

    let [counter, body, controls] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" Card {} of {} ", section.cursor + 1, section.filtered_count()),
                Theme::secondary(),
            ),
            Span::styled(format!(" {} ", section.deck.label()), Theme::muted()),
        ])),
        counter,
    );

    let (side, text, border) = if section.flipped {
        ("Answer", card.back, Theme::ACCENT_GREEN)
    } else {
        ("Question", card.front, Theme::ACCENT_BLUE)
    };
    let card_area = centered(body, body.width.min(70), body.height.min(9));
    let block = Block::default()
        .title(format!(" {} ", side))
        .title_style(Theme::title())
        .title_bottom(
            Line::from(Span::styled(
                format!(" {} · {} ", card.category, card.difficulty.label()),
                difficulty_style(card.difficulty),
            ))
            .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);
    let text_area = centered(inner, inner.width.saturating_sub(4), 3);
    frame.render_widget(
        Paragraph::new(Span::styled(text, Theme::text()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        text_area,
    );

    let prev = if section.can_go_prev() {
        Theme::secondary()
    } else {
        Theme::muted()
    };
    let next = if section.can_go_next() {
        Theme::secondary()
    } else {
        Theme::muted()
    };
    let line = Line::from(vec![
        Span::styled("◂ Previous", prev),
        Span::raw("   "),
        Span::styled(" Flip ", Theme::button(true)),
        Span::raw("   "),
        Span::styled("Shuffle", Theme::secondary()),
        Span::raw("   "),
        Span::styled("Next ▸", next),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(line), controls);
}
