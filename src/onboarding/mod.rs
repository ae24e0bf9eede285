//! The four-step onboarding wizard run once after signup: deadline, daily
//! hours, daily flashcards, material upload, then a summary.

pub mod slider;
pub mod upload;

use crate::app::state::{InputOutcome, InputState};
use crate::data::user::{OnboardingResult, UserProfile};
use chrono::NaiveDate;
use crossterm::event::KeyEvent;
use slider::Slider;
use thiserror::Error;
use upload::UploadList;

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 4;

pub const HOURS_MIN: f32 = 0.5;
pub const HOURS_MAX: f32 = 8.0;
pub const HOURS_STEP: f32 = 0.5;
pub const CARDS_MIN: f32 = 5.0;
pub const CARDS_MAX: f32 = 100.0;
pub const CARDS_STEP: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Enter the date as YYYY-MM-DD, or leave it empty")]
    Malformed,
}

/// Parse the optional deadline. Blank input means no deadline.
pub fn parse_exam_date(text: &str) -> Result<Option<NaiveDate>, DateError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| DateError::Malformed)
}

#[derive(Debug)]
pub struct OnboardingWizard {
    /// Current step in `FIRST_STEP..=LAST_STEP`.
    pub step: u8,
    pub exam_date: InputState,
    pub date_error: Option<DateError>,
    pub study_hours: Slider,
    pub flashcard_target: Slider,
    pub uploads: UploadList,
    /// Set after the last step; the summary is shown instead of a step.
    pub completed: bool,
}

impl OnboardingWizard {
    pub fn new(user: Option<&UserProfile>) -> Self {
        let hours = user.map(|u| u.study_hours).unwrap_or(2.0);
        let cards = user.map(|u| u.flashcard_target).unwrap_or(20);
        Self {
            step: FIRST_STEP,
            exam_date: InputState::new(),
            date_error: None,
            study_hours: Slider::new(hours, HOURS_MIN, HOURS_MAX, HOURS_STEP),
            flashcard_target: Slider::new(cards as f32, CARDS_MIN, CARDS_MAX, CARDS_STEP),
            uploads: UploadList::default(),
            completed: false,
        }
    }

    /// Advance one step, or mark the wizard completed after the last one.
    /// A malformed deadline keeps the wizard on step 1.
    pub fn next(&mut self) -> Result<(), DateError> {
        if self.completed {
            return Ok(());
        }
        if self.step == FIRST_STEP {
            if let Err(e) = parse_exam_date(&self.exam_date.text) {
                self.date_error = Some(e);
                return Err(e);
            }
        }
        if self.step < LAST_STEP {
            self.step += 1;
        } else {
            self.completed = true;
        }
        Ok(())
    }

    pub fn back(&mut self) {
        if !self.completed && self.step > FIRST_STEP {
            self.step -= 1;
        }
    }

    pub fn edit_date(&mut self, key: KeyEvent) -> InputOutcome {
        let outcome = self.exam_date.handle_key(key);
        if outcome == InputOutcome::Changed {
            self.date_error = None;
        }
        outcome
    }

    pub fn exam_date(&self) -> Option<NaiveDate> {
        parse_exam_date(&self.exam_date.text).ok().flatten()
    }

    pub fn hours(&self) -> f32 {
        self.study_hours.value
    }

    pub fn cards(&self) -> u32 {
        self.flashcard_target.value.round() as u32
    }

    /// Fraction of the progress bar filled for the current step.
    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.step - FIRST_STEP) / f64::from(LAST_STEP - FIRST_STEP)
    }

    /// The accumulated answers handed to the controller.
    pub fn complete(&self) -> OnboardingResult {
        OnboardingResult {
            exam_date: self.exam_date(),
            study_hours: self.hours(),
            flashcard_target: self.cards(),
            completed_onboarding: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_counter_clamped() {
        let mut wizard = OnboardingWizard::new(None);
        wizard.back();
        assert_eq!(wizard.step, 1);
        for expected in 2..=4 {
            wizard.next().unwrap();
            assert_eq!(wizard.step, expected);
        }
        assert!(!wizard.completed);
        wizard.next().unwrap();
        assert_eq!(wizard.step, 4);
        assert!(wizard.completed);
        wizard.next().unwrap();
        assert_eq!(wizard.step, 4);
    }

    #[test]
    fn test_back_moves_down_to_one() {
        let mut wizard = OnboardingWizard::new(None);
        wizard.next().unwrap();
        wizard.next().unwrap();
        wizard.back();
        wizard.back();
        wizard.back();
        assert_eq!(wizard.step, 1);
    }

    #[test]
    fn test_malformed_date_blocks_next() {
        let mut wizard = OnboardingWizard::new(None);
        wizard.exam_date = InputState::with_text("next tuesday");
        assert_eq!(wizard.next(), Err(DateError::Malformed));
        assert_eq!(wizard.step, 1);
        assert_eq!(wizard.date_error, Some(DateError::Malformed));
    }

    #[test]
    fn test_complete_passes_accumulated_fields() {
        let mut wizard = OnboardingWizard::new(None);
        wizard.exam_date = InputState::with_text("2026-12-14");
        wizard.next().unwrap();
        wizard.study_hours.increase();
        wizard.next().unwrap();
        wizard.flashcard_target.increase();
        wizard.flashcard_target.increase();
        wizard.next().unwrap();
        wizard.uploads.add("notes.pdf").unwrap();
        wizard.next().unwrap();
        assert!(wizard.completed);

        let result = wizard.complete();
        assert_eq!(result.exam_date, NaiveDate::from_ymd_opt(2026, 12, 14));
        assert_eq!(result.study_hours, 2.5);
        assert_eq!(result.flashcard_target, 30);
        assert!(result.completed_onboarding);
    }

    #[test]
    fn test_initial_values_from_user() {
        let user = UserProfile {
            id: "x".into(),
            nickname: "Alex".into(),
            email: None,
            student_id: "STUD12345".into(),
            exam_date: None,
            study_hours: 4.0,
            flashcard_target: 50,
            completed_onboarding: false,
        };
        let wizard = OnboardingWizard::new(Some(&user));
        assert_eq!(wizard.hours(), 4.0);
        assert_eq!(wizard.cards(), 50);
        assert_eq!(wizard.progress_ratio(), 0.0);
    }

    #[test]
    fn test_blank_date_is_no_deadline() {
        assert_eq!(parse_exam_date("  "), Ok(None));
        assert_eq!(parse_exam_date("2026-02-30"), Err(DateError::Malformed));
    }
}
