use crate::app::state::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Rows used by [`render`]: a three-row box plus one row for the error.
pub const FIELD_HEIGHT: u16 = 4;

pub struct Field<'a> {
    pub label: &'a str,
    pub input: &'a InputState,
    pub placeholder: &'a str,
    pub focused: bool,
    pub masked: bool,
    pub error: Option<String>,
    pub note: Option<&'a str>,
}

impl<'a> Field<'a> {
    pub fn new(label: &'a str, input: &'a InputState) -> Self {
        Self {
            label,
            input,
            placeholder: "",
            focused: false,
            masked: false,
            error: None,
            note: None,
        }
    }

    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = text;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    /// Muted help line shown under the box when there is no error.
    pub fn note(mut self, note: &'a str) -> Self {
        self.note = Some(note);
        self
    }
}

/// Draw a labelled single-line input, placing the terminal cursor when
/// the field has focus.
pub fn render(frame: &mut Frame, area: Rect, field: &Field) {
    let (border_style, border_type) = if field.focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else if field.error.is_some() {
        (Theme::error(), Theme::border_type())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let box_area = Rect::new(area.x, area.y, area.width, area.height.min(3));
    let block = Block::default()
        .title(format!(" {} ", field.label))
        .title_style(if field.focused {
            Theme::title()
        } else {
            Theme::secondary()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let shown = if field.masked {
        "•".repeat(field.input.text.chars().count())
    } else {
        field.input.text.clone()
    };

    let line = if shown.is_empty() && !field.focused {
        Line::from(Span::styled(field.placeholder, Theme::muted()))
    } else {
        Line::from(Span::styled(shown, Theme::text()))
    };
    frame.render_widget(Paragraph::new(line), inner);

    if field.focused && inner.width > 0 {
        let column = if field.masked {
            field.input.text[..field.input.cursor].chars().count() as u16
        } else {
            field.input.cursor_column()
        };
        let cursor_x = inner.x + column;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }

    if area.height > 3 {
        let below = Rect::new(area.x + 1, area.y + 3, area.width.saturating_sub(1), 1);
        let message = match (&field.error, field.note) {
            (Some(err), _) => Some(Span::styled(err.as_str(), Theme::error())),
            (None, Some(note)) => Some(Span::styled(note, Theme::muted())),
            (None, None) => None,
        };
        if let Some(message) = message {
            frame.render_widget(Paragraph::new(message), below);
        }
    }
}
