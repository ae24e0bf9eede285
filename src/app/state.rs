use crate::auth::{LoginForm, SignupForm};
use crate::config::AppConfig;
use crate::dashboard::Dashboard;
use crate::data::user::UserProfile;
use crate::onboarding::OnboardingWizard;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Result of feeding a key to an [`InputState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Ignored,
    Moved,
    Changed,
}

/// A single-line text buffer with a byte-offset cursor.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        let next = self.text[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.text.len());
        self.text.drain(self.cursor..next);
        true
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
        true
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Display columns up to the cursor, for placing the terminal cursor.
    pub fn cursor_column(&self) -> u16 {
        self.text[..self.cursor].width() as u16
    }

    /// Apply a key press. Printable characters, deletion and cursor keys are
    /// consumed; everything else is left to the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('w') if ctrl => changed(self.delete_word_back()),
            KeyCode::Char('a') if ctrl => {
                self.move_home();
                InputOutcome::Moved
            }
            KeyCode::Char('e') if ctrl => {
                self.move_end();
                InputOutcome::Moved
            }
            KeyCode::Char('u') if ctrl => {
                let had_text = !self.text.is_empty();
                self.clear();
                changed(had_text)
            }
            KeyCode::Char(_) if ctrl => InputOutcome::Ignored,
            KeyCode::Char(c) => {
                self.insert_char(c);
                InputOutcome::Changed
            }
            KeyCode::Backspace => changed(self.delete_back()),
            KeyCode::Delete => changed(self.delete_forward()),
            KeyCode::Left => {
                self.move_left();
                InputOutcome::Moved
            }
            KeyCode::Right => {
                self.move_right();
                InputOutcome::Moved
            }
            KeyCode::Home => {
                self.move_home();
                InputOutcome::Moved
            }
            KeyCode::End => {
                self.move_end();
                InputOutcome::Moved
            }
            _ => InputOutcome::Ignored,
        }
    }
}

fn changed(did_change: bool) -> InputOutcome {
    if did_change {
        InputOutcome::Changed
    } else {
        InputOutcome::Moved
    }
}

/// Choices on the landing page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingChoice {
    SignUp,
    Login,
}

#[derive(Debug, Clone)]
pub struct LandingState {
    pub selected: LandingChoice,
}

impl LandingState {
    pub fn new() -> Self {
        Self {
            selected: LandingChoice::SignUp,
        }
    }

    pub fn toggle(&mut self) {
        self.selected = match self.selected {
            LandingChoice::SignUp => LandingChoice::Login,
            LandingChoice::Login => LandingChoice::SignUp,
        };
    }
}

/// The top-level screen. Each variant owns the state of that screen, so
/// leaving a screen drops its state and re-entering starts fresh.
#[derive(Debug)]
pub enum Screen {
    Landing(LandingState),
    Login(LoginForm),
    Signup(SignupForm),
    Onboarding(OnboardingWizard),
    Dashboard(Dashboard),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Landing(_) => "landing",
            Screen::Login(_) => "login",
            Screen::Signup(_) => "signup",
            Screen::Onboarding(_) => "onboarding",
            Screen::Dashboard(_) => "dashboard",
        }
    }
}

/// A transient message shown in the status bar until it expires.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub expires_at: Instant,
}

const NOTICE_TTL: Duration = Duration::from_secs(3);

pub struct AppState {
    pub config: AppConfig,
    pub screen: Screen,
    pub user: Option<UserProfile>,
    pub notice: Option<Notice>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            screen: Screen::Landing(LandingState::new()),
            user: None,
            notice: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn set_screen(&mut self, screen: Screen) {
        tracing::info!(from = self.screen.name(), to = screen.name(), "screen change");
        self.screen = screen;
        self.dirty = true;
    }

    pub fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            expires_at: Instant::now() + NOTICE_TTL,
        });
        self.dirty = true;
    }

    /// Drop the notice once it has expired. Returns true if one was removed.
    pub fn expire_notice(&mut self, now: Instant) -> bool {
        match self.notice {
            Some(ref n) if now >= n.expires_at => {
                self.notice = None;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref notice) = self.notice {
            return notice.text.clone();
        }
        match (&self.screen, &self.user) {
            (Screen::Dashboard(dash), Some(user)) => {
                format!("{} | {}", user.nickname, dash.active_tab().title())
            }
            (Screen::Onboarding(wizard), _) if !wizard.completed => {
                format!("Onboarding step {} of {}", wizard.step, crate::onboarding::LAST_STEP)
            }
            (Screen::Onboarding(_), _) => "Onboarding complete".to_string(),
            (Screen::Login(_), _) => "Welcome back".to_string(),
            (Screen::Signup(_), _) => "Create account".to_string(),
            (Screen::Landing(_), _) => "Your Personalised Study Coach".to_string(),
            (Screen::Dashboard(_), None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_input_editing() {
        let mut input = InputState::new();
        for c in "héllo".chars() {
            assert_eq!(input.handle_key(key(KeyCode::Char(c))), InputOutcome::Changed);
        }
        assert_eq!(input.text, "héllo");
        input.move_left();
        input.move_left();
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 1);
        assert!(input.delete_forward());
        assert_eq!(input.text, "hllo");
        assert_eq!(input.handle_key(key(KeyCode::Backspace)), InputOutcome::Changed);
        assert_eq!(input.text, "llo");
        assert_eq!(input.handle_key(key(KeyCode::Backspace)), InputOutcome::Moved);
    }

    #[test]
    fn test_delete_word_back() {
        let mut input = InputState::with_text("study coach  ");
        assert!(input.delete_word_back());
        assert_eq!(input.text, "study ");
        assert_eq!(input.cursor, 6);
    }

    #[test]
    fn test_ctrl_keys_are_not_inserted() {
        let mut input = InputState::new();
        let outcome = input.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(outcome, InputOutcome::Ignored);
        assert!(input.text.is_empty());
    }

    #[test]
    fn test_cursor_column_counts_display_width() {
        let input = InputState::with_text("日本");
        assert_eq!(input.cursor_column(), 4);
    }

    #[test]
    fn test_notice_expiry() {
        let mut state = AppState::new(AppConfig::default());
        state.notify("Saved");
        assert_eq!(state.status_line(), "Saved");
        let later = Instant::now() + NOTICE_TTL + Duration::from_millis(1);
        assert!(state.expire_notice(later));
        assert!(state.notice.is_none());
        assert!(!state.expire_notice(later));
    }
}
