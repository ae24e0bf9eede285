//! Login and signup forms.

use crate::auth::{LoginField, LoginForm, SignupField, SignupForm};
use crate::ui::form_field::{self, Field, FIELD_HEIGHT};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

fn card(frame: &mut Frame, area: Rect, title: &str, rows: u16) -> Rect {
    let rect = centered(area, 56, rows + 6);
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Theme::heading())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    inner.inner(Margin::new(2, 1))
}

fn field_areas<const N: usize>(area: Rect) -> ([Rect; N], Rect) {
    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); N];
    constraints.push(Constraint::Min(1));
    let chunks = Layout::vertical(constraints).split(area);
    let mut fields = [Rect::default(); N];
    fields.copy_from_slice(&chunks[..N]);
    (fields, chunks[N])
}

pub fn render_login(frame: &mut Frame, area: Rect, form: &LoginForm) {
    let inner = card(frame, area, "Welcome back", FIELD_HEIGHT * 2 + 2);
    let ([id_area, pw_area], footer) = field_areas::<2>(inner);

    form_field::render(
        frame,
        id_area,
        &Field::new("Student ID", &form.student_id)
            .placeholder("Enter your student ID")
            .focused(form.focus == LoginField::StudentId),
    );
    form_field::render(
        frame,
        pw_area,
        &Field::new("Password", &form.password)
            .placeholder("Enter your password")
            .focused(form.focus == LoginField::Password)
            .masked(),
    );

    let mut lines = Vec::new();
    if let Some(err) = form.error {
        lines.push(Line::from(Span::styled(err.to_string(), Theme::error())));
    }
    lines.push(Line::from(vec![
        Span::styled(" Log In ", Theme::button(true)),
        Span::styled("   New here? F2 to sign up", Theme::muted()),
    ]));
    frame.render_widget(Paragraph::new(lines), footer);
}

pub fn render_signup(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let inner = card(frame, area, "Create your account", FIELD_HEIGHT * 3 + 1);
    let ([id_area, nick_area, email_area], footer) = field_areas::<3>(inner);

    form_field::render(
        frame,
        id_area,
        &Field::new("Student ID", &form.student_id)
            .placeholder("At least 5 characters")
            .focused(form.focus == SignupField::StudentId)
            .error(form.errors.student_id.map(|e| e.to_string())),
    );
    form_field::render(
        frame,
        nick_area,
        &Field::new("Nickname", &form.nickname)
            .placeholder("What should we call you?")
            .focused(form.focus == SignupField::Nickname)
            .error(form.errors.nickname.map(|e| e.to_string())),
    );
    form_field::render(
        frame,
        email_area,
        &Field::new("Email", &form.email)
            .placeholder("you@example.com")
            .focused(form.focus == SignupField::Email)
            .error(form.errors.email.map(|e| e.to_string())),
    );

    let footer_line = Line::from(vec![
        Span::styled(" Create Account ", Theme::button(true)),
        Span::styled("   Have an account? F2 to log in", Theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(footer_line), footer);
}
