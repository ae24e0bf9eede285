//! Account settings: nickname and daily goals. The student ID is read-only.

use crate::app::state::{InputOutcome, InputState};
use crate::data::user::{format_hours, ProfileUpdate, UserProfile};
use crossterm::event::KeyEvent;
use thiserror::Error;

pub const HOURS_MIN: f32 = 0.5;
pub const HOURS_MAX: f32 = 12.0;
pub const CARDS_MIN: u32 = 5;
pub const CARDS_MAX: u32 = 200;
pub const CARDS_STEP: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Please enter your preferred nickname")]
    NicknameMissing,
    #[error("Study hours must be between 0.5 and 12 in half-hour steps")]
    HoursOutOfRange,
    #[error("Flashcard target must be between 5 and 200 in steps of 5")]
    TargetOutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    Nickname,
    StudyHours,
    FlashcardTarget,
}

impl SettingsField {
    const ORDER: [SettingsField; 3] = [
        SettingsField::Nickname,
        SettingsField::StudyHours,
        SettingsField::FlashcardTarget,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsErrors {
    pub nickname: Option<SettingsError>,
    pub study_hours: Option<SettingsError>,
    pub flashcard_target: Option<SettingsError>,
}

impl SettingsErrors {
    pub fn is_empty(&self) -> bool {
        self.nickname.is_none() && self.study_hours.is_none() && self.flashcard_target.is_none()
    }
}

pub fn parse_hours(text: &str) -> Result<f32, SettingsError> {
    let hours: f32 = text.trim().parse().map_err(|_| SettingsError::HoursOutOfRange)?;
    let half_steps = hours * 2.0;
    if !(HOURS_MIN..=HOURS_MAX).contains(&hours) || half_steps.fract() != 0.0 {
        return Err(SettingsError::HoursOutOfRange);
    }
    Ok(hours)
}

pub fn parse_target(text: &str) -> Result<u32, SettingsError> {
    let target: u32 = text.trim().parse().map_err(|_| SettingsError::TargetOutOfRange)?;
    if !(CARDS_MIN..=CARDS_MAX).contains(&target) || target % CARDS_STEP != 0 {
        return Err(SettingsError::TargetOutOfRange);
    }
    Ok(target)
}

#[derive(Debug)]
pub struct SettingsForm {
    pub nickname: InputState,
    pub student_id: String,
    pub study_hours: InputState,
    pub flashcard_target: InputState,
    pub focus: SettingsField,
    pub errors: SettingsErrors,
}

impl SettingsForm {
    pub fn new(user: &UserProfile) -> Self {
        Self {
            nickname: InputState::with_text(user.nickname.clone()),
            student_id: user.student_id.clone(),
            study_hours: InputState::with_text(format_hours(user.study_hours)),
            flashcard_target: InputState::with_text(user.flashcard_target.to_string()),
            focus: SettingsField::default(),
            errors: SettingsErrors::default(),
        }
    }

    pub fn focus_next(&mut self) {
        let i = (self.focus.index() + 1) % SettingsField::ORDER.len();
        self.focus = SettingsField::ORDER[i];
    }

    pub fn focus_prev(&mut self) {
        let len = SettingsField::ORDER.len();
        self.focus = SettingsField::ORDER[(self.focus.index() + len - 1) % len];
    }

    pub fn focused_input(&mut self) -> &mut InputState {
        match self.focus {
            SettingsField::Nickname => &mut self.nickname,
            SettingsField::StudyHours => &mut self.study_hours,
            SettingsField::FlashcardTarget => &mut self.flashcard_target,
        }
    }

    pub fn edit(&mut self, key: KeyEvent) -> InputOutcome {
        let outcome = self.focused_input().handle_key(key);
        if outcome == InputOutcome::Changed {
            match self.focus {
                SettingsField::Nickname => self.errors.nickname = None,
                SettingsField::StudyHours => self.errors.study_hours = None,
                SettingsField::FlashcardTarget => self.errors.flashcard_target = None,
            }
        }
        outcome
    }

    pub fn submit(&mut self) -> Result<ProfileUpdate, SettingsErrors> {
        let nickname = if self.nickname.is_blank() {
            Err(SettingsError::NicknameMissing)
        } else {
            Ok(self.nickname.text.clone())
        };
        let hours = parse_hours(&self.study_hours.text);
        let target = parse_target(&self.flashcard_target.text);

        match (nickname, hours, target) {
            (Ok(nickname), Ok(study_hours), Ok(flashcard_target)) => {
                self.errors = SettingsErrors::default();
                Ok(ProfileUpdate {
                    nickname,
                    study_hours,
                    flashcard_target,
                })
            }
            (nickname, hours, target) => {
                self.errors = SettingsErrors {
                    nickname: nickname.err(),
                    study_hours: hours.err(),
                    flashcard_target: target.err(),
                };
                Err(self.errors.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserProfile {
        UserProfile {
            id: "user123".into(),
            nickname: "Demo User".into(),
            email: None,
            student_id: "STUD12345".into(),
            exam_date: None,
            study_hours: 2.5,
            flashcard_target: 20,
            completed_onboarding: true,
        }
    }

    #[test]
    fn test_prefilled_from_user() {
        let form = SettingsForm::new(&user());
        assert_eq!(form.nickname.text, "Demo User");
        assert_eq!(form.study_hours.text, "2.5");
        assert_eq!(form.flashcard_target.text, "20");
        assert_eq!(form.student_id, "STUD12345");
    }

    #[test]
    fn test_parse_bounds() {
        assert_eq!(parse_hours("0.5"), Ok(0.5));
        assert_eq!(parse_hours("12"), Ok(12.0));
        assert_eq!(parse_hours("12.5"), Err(SettingsError::HoursOutOfRange));
        assert_eq!(parse_hours("1.25"), Err(SettingsError::HoursOutOfRange));
        assert_eq!(parse_hours("lots"), Err(SettingsError::HoursOutOfRange));
        assert_eq!(parse_target("200"), Ok(200));
        assert_eq!(parse_target("17"), Err(SettingsError::TargetOutOfRange));
        assert_eq!(parse_target("0"), Err(SettingsError::TargetOutOfRange));
    }

    #[test]
    fn test_submit_collects_errors() {
        let mut form = SettingsForm::new(&user());
        form.nickname = InputState::with_text("  ");
        form.flashcard_target = InputState::with_text("7");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.nickname, Some(SettingsError::NicknameMissing));
        assert_eq!(errors.study_hours, None);
        assert_eq!(errors.flashcard_target, Some(SettingsError::TargetOutOfRange));
    }

    #[test]
    fn test_submit_ok() {
        let mut form = SettingsForm::new(&user());
        form.nickname = InputState::with_text("Alex");
        form.study_hours = InputState::with_text("3");
        let update = form.submit().unwrap();
        assert_eq!(
            update,
            ProfileUpdate {
                nickname: "Alex".into(),
                study_hours: 3.0,
                flashcard_target: 20,
            }
        );
        assert!(form.errors.is_empty());
    }
}
