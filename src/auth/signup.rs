use super::user_id::generate_user_id;
use super::validation::{validate_signup, SignupErrors};
use crate::app::state::{InputOutcome, InputState};
use crate::config::model::StudyDefaults;
use crate::data::user::UserProfile;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupField {
    #[default]
    StudentId,
    Nickname,
    Email,
}

impl SignupField {
    const ORDER: [SignupField; 3] = [SignupField::StudentId, SignupField::Nickname, SignupField::Email];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct SignupForm {
    pub student_id: InputState,
    pub nickname: InputState,
    pub email: InputState,
    pub focus: SignupField,
    pub errors: SignupErrors,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        let i = (self.focus.index() + 1) % SignupField::ORDER.len();
        self.focus = SignupField::ORDER[i];
    }

    pub fn focus_prev(&mut self) {
        let len = SignupField::ORDER.len();
        let i = (self.focus.index() + len - 1) % len;
        self.focus = SignupField::ORDER[i];
    }

    pub fn focused_input(&mut self) -> &mut InputState {
        match self.focus {
            SignupField::StudentId => &mut self.student_id,
            SignupField::Nickname => &mut self.nickname,
            SignupField::Email => &mut self.email,
        }
    }

    /// Feed a key to the focused field; a text change clears only that
    /// field's error.
    pub fn edit(&mut self, key: KeyEvent) -> InputOutcome {
        let outcome = self.focused_input().handle_key(key);
        if outcome == InputOutcome::Changed {
            match self.focus {
                SignupField::StudentId => self.errors.student_id = None,
                SignupField::Nickname => self.errors.nickname = None,
                SignupField::Email => self.errors.email = None,
            }
        }
        outcome
    }

    pub fn submit(&mut self, defaults: &StudyDefaults) -> Result<UserProfile, SignupErrors> {
        if let Err(errors) =
            validate_signup(&self.student_id.text, &self.nickname.text, &self.email.text)
        {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors = SignupErrors::default();
        Ok(UserProfile {
            id: generate_user_id(),
            nickname: self.nickname.text.clone(),
            email: Some(self.email.text.clone()),
            student_id: self.student_id.text.clone(),
            exam_date: None,
            study_hours: defaults.study_hours,
            flashcard_target: defaults.flashcard_target,
            completed_onboarding: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::validation::{EmailError, NicknameError, StudentIdError};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn fill(form: &mut SignupForm, student_id: &str, nickname: &str, email: &str) {
        form.student_id = InputState::with_text(student_id);
        form.nickname = InputState::with_text(nickname);
        form.email = InputState::with_text(email);
    }

    #[test]
    fn test_valid_signup_builds_fresh_user() {
        let mut form = SignupForm::new();
        fill(&mut form, "STUD12345", "Alex", "a@b.co");
        let user = form.submit(&StudyDefaults::default()).unwrap();
        assert_eq!(user.nickname, "Alex");
        assert_eq!(user.student_id, "STUD12345");
        assert_eq!(user.email.as_deref(), Some("a@b.co"));
        assert_eq!(user.id.len(), 7);
        assert!(!user.completed_onboarding);
    }

    #[test]
    fn test_short_student_id_rejected() {
        let mut form = SignupForm::new();
        fill(&mut form, "ST12", "Alex", "a@b.co");
        let errors = form.submit(&StudyDefaults::default()).unwrap_err();
        assert_eq!(errors.student_id, Some(StudentIdError::TooShort));
        assert!(errors.nickname.is_none());
        assert!(errors.email.is_none());
    }

    #[test]
    fn test_edit_clears_only_focused_error() {
        let mut form = SignupForm::new();
        fill(&mut form, "", "", "bad");
        assert!(form.submit(&StudyDefaults::default()).is_err());
        assert_eq!(form.errors.nickname, Some(NicknameError::Missing));
        assert_eq!(form.errors.email, Some(EmailError::Malformed));

        form.focus_next();
        assert_eq!(form.focus, SignupField::Nickname);
        form.edit(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert!(form.errors.nickname.is_none());
        assert_eq!(form.errors.student_id, Some(StudentIdError::Missing));
        assert_eq!(form.errors.email, Some(EmailError::Malformed));
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = SignupForm::new();
        form.focus_prev();
        assert_eq!(form.focus, SignupField::Email);
        form.focus_next();
        assert_eq!(form.focus, SignupField::StudentId);
    }
}
