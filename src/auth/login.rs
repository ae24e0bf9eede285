use super::validation::{validate_login, LoginError};
use crate::app::state::{InputOutcome, InputState};
use crate::config::model::StudyDefaults;
use crate::data::user::UserProfile;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    StudentId,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub student_id: InputState,
    pub password: InputState,
    pub focus: LoginField,
    pub error: Option<LoginError>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::StudentId => LoginField::Password,
            LoginField::Password => LoginField::StudentId,
        };
    }

    pub fn focus_prev(&mut self) {
        // Two fields: previous and next coincide.
        self.focus_next();
    }

    pub fn focused_input(&mut self) -> &mut InputState {
        match self.focus {
            LoginField::StudentId => &mut self.student_id,
            LoginField::Password => &mut self.password,
        }
    }

    /// Feed a key to the focused field; any text change clears the error.
    pub fn edit(&mut self, key: KeyEvent) -> InputOutcome {
        let outcome = self.focused_input().handle_key(key);
        if outcome == InputOutcome::Changed {
            self.error = None;
        }
        outcome
    }

    /// Validate and fabricate the signed-in user. There is no credential
    /// check beyond both fields being filled in.
    pub fn submit(&mut self, defaults: &StudyDefaults) -> Result<UserProfile, LoginError> {
        if let Err(e) = validate_login(&self.student_id.text, &self.password.text) {
            self.error = Some(e);
            return Err(e);
        }
        self.error = None;
        Ok(UserProfile {
            id: "user123".to_string(),
            nickname: "Demo User".to_string(),
            email: None,
            student_id: self.student_id.text.clone(),
            exam_date: None,
            study_hours: defaults.study_hours,
            flashcard_target: defaults.flashcard_target,
            completed_onboarding: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn type_text(form: &mut LoginForm, text: &str) {
        for c in text.chars() {
            form.edit(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_submit_with_both_fields() {
        let mut form = LoginForm::new();
        type_text(&mut form, "STUD12345");
        form.focus_next();
        type_text(&mut form, "hunter2");
        let user = form.submit(&StudyDefaults::default()).unwrap();
        assert_eq!(user.student_id, "STUD12345");
        assert_eq!(user.nickname, "Demo User");
        assert!(user.completed_onboarding);
        assert_eq!(user.study_hours, 2.0);
        assert_eq!(user.flashcard_target, 20);
    }

    #[test]
    fn test_missing_password_sets_error_until_edit() {
        let mut form = LoginForm::new();
        type_text(&mut form, "STUD12345");
        assert_eq!(
            form.submit(&StudyDefaults::default()),
            Err(LoginError::MissingCredentials)
        );
        assert_eq!(form.error, Some(LoginError::MissingCredentials));

        // Moving the cursor is not an edit.
        form.edit(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert!(form.error.is_some());

        form.focus_next();
        type_text(&mut form, "x");
        assert!(form.error.is_none());
    }
}
