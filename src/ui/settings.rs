use crate::app::state::InputState;
use crate::dashboard::settings::{SettingsField, SettingsForm};
use crate::ui::form_field::{self, Field, FIELD_HEIGHT};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, form: &SettingsForm, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area).inner(Margin::new(2, 1));
    frame.render_widget(block, area);

    let width = inner.width.min(50);
    let [nickname, student_id, hours, target, footer] = Layout::vertical([
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Min(1),
    ])
    .areas(Rect { width, ..inner });

    let is = |field: SettingsField| focused && form.focus == field;

    form_field::render(
        frame,
        nickname,
        &Field::new("Nickname", &form.nickname)
            .focused(is(SettingsField::Nickname))
            .error(form.errors.nickname.map(|e| e.to_string())),
    );

    // Read-only; drawn like a field but never focused
    let id_input = InputState::with_text(form.student_id.clone());
    form_field::render(
        frame,
        student_id,
        &Field::new("Student ID", &id_input).note("Student ID cannot be changed"),
    );

    form_field::render(
        frame,
        hours,
        &Field::new("Daily Study Hours (0.5 - 12)", &form.study_hours)
            .focused(is(SettingsField::StudyHours))
            .error(form.errors.study_hours.map(|e| e.to_string())),
    );
    form_field::render(
        frame,
        target,
        &Field::new("Daily Flashcard Target (5 - 200)", &form.flashcard_target)
            .focused(is(SettingsField::FlashcardTarget))
            .error(form.errors.flashcard_target.map(|e| e.to_string())),
    );

    frame.render_widget(
        Paragraph::new(Span::styled(" Save Changes ", Theme::button(true))),
        footer,
    );
}
