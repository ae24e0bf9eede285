use chrono::NaiveDate;

/// The signed-in student. Created on signup, replaced on login and merged
/// with the onboarding answers.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub nickname: String,
    pub email: Option<String>,
    pub student_id: String,
    pub exam_date: Option<NaiveDate>,
    /// Daily study target in hours (half-hour steps).
    pub study_hours: f32,
    /// Daily flashcard review target.
    pub flashcard_target: u32,
    pub completed_onboarding: bool,
}

/// Answers collected by the onboarding wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingResult {
    pub exam_date: Option<NaiveDate>,
    pub study_hours: f32,
    pub flashcard_target: u32,
    pub completed_onboarding: bool,
}

/// Fields the settings page may change.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub nickname: String,
    pub study_hours: f32,
    pub flashcard_target: u32,
}

impl UserProfile {
    pub fn apply_onboarding(&mut self, result: OnboardingResult) {
        self.exam_date = result.exam_date;
        self.study_hours = result.study_hours;
        self.flashcard_target = result.flashcard_target;
        self.completed_onboarding = true;
    }

    pub fn apply_update(&mut self, update: ProfileUpdate) {
        self.nickname = update.nickname;
        self.study_hours = update.study_hours;
        self.flashcard_target = update.flashcard_target;
    }
}

/// Render hours without a trailing `.0` (`2`, `2.5`).
pub fn format_hours(hours: f32) -> String {
    if hours.fract() == 0.0 {
        format!("{}", hours as u32)
    } else {
        format!("{:.1}", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> UserProfile {
        UserProfile {
            id: "abc1234".into(),
            nickname: "Alex".into(),
            email: Some("a@b.co".into()),
            student_id: "STUD12345".into(),
            exam_date: None,
            study_hours: 2.0,
            flashcard_target: 20,
            completed_onboarding: false,
        }
    }

    #[test]
    fn test_apply_onboarding_keeps_identity() {
        let mut user = student();
        user.apply_onboarding(OnboardingResult {
            exam_date: NaiveDate::from_ymd_opt(2026, 12, 1),
            study_hours: 3.5,
            flashcard_target: 40,
            completed_onboarding: true,
        });
        assert_eq!(user.nickname, "Alex");
        assert_eq!(user.student_id, "STUD12345");
        assert_eq!(user.exam_date, NaiveDate::from_ymd_opt(2026, 12, 1));
        assert_eq!(user.study_hours, 3.5);
        assert_eq!(user.flashcard_target, 40);
        assert!(user.completed_onboarding);
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(2.0), "2");
        assert_eq!(format_hours(0.5), "0.5");
        assert_eq!(format_hours(7.5), "7.5");
    }
}
