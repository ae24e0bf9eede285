//! Applies [`Action`]s to the [`AppState`]: the only place that changes the
//! top-level screen or the signed-in user.

use crate::app::action::{Action, Route};
use crate::app::state::{AppState, LandingState, Screen};
use crate::auth::{LoginForm, SignupForm};
use crate::dashboard::Dashboard;
use crate::onboarding::OnboardingWizard;
use chrono::NaiveDate;

pub fn apply_action(state: &mut AppState, action: Action) {
    apply_action_on(state, action, chrono::Local::now().date_naive());
}

fn apply_action_on(state: &mut AppState, action: Action, today: NaiveDate) {
    match action {
        Action::Navigate(route) => {
            let screen = match route {
                Route::Landing => Screen::Landing(LandingState::new()),
                Route::Login => Screen::Login(LoginForm::new()),
                Route::Signup => Screen::Signup(SignupForm::new()),
            };
            state.set_screen(screen);
        }
        Action::LoggedIn(user) => {
            tracing::info!(student_id = %user.student_id, "logged in");
            state.set_screen(Screen::Dashboard(Dashboard::new(&user, today)));
            state.user = Some(user);
        }
        Action::SignedUp(user) => {
            tracing::info!(user_id = %user.id, student_id = %user.student_id, "signed up");
            state.set_screen(Screen::Onboarding(OnboardingWizard::new(Some(&user))));
            state.user = Some(user);
        }
        Action::CompleteOnboarding(result) => {
            let Some(mut user) = state.user.take() else {
                tracing::warn!("onboarding completed without a user");
                state.set_screen(Screen::Landing(LandingState::new()));
                return;
            };
            tracing::info!(
                exam_date = ?result.exam_date,
                study_hours = result.study_hours,
                flashcard_target = result.flashcard_target,
                "onboarding complete"
            );
            user.apply_onboarding(result);
            state.set_screen(Screen::Dashboard(Dashboard::new(&user, today)));
            state.user = Some(user);
        }
        Action::UpdateProfile(update) => {
            if let Some(ref mut user) = state.user {
                tracing::info!(
                    study_hours = update.study_hours,
                    flashcard_target = update.flashcard_target,
                    "settings saved"
                );
                user.apply_update(update);
                state.notify("Settings saved");
            }
        }
        Action::Logout => {
            tracing::info!("logged out");
            state.user = None;
            state.set_screen(Screen::Landing(LandingState::new()));
        }
        Action::Quit => {
            state.should_quit = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::StudyDefaults;
    use crate::config::AppConfig;
    use crate::data::user::{OnboardingResult, ProfileUpdate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 7).unwrap()
    }

    fn logged_in_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        let mut form = LoginForm::new();
        form.student_id.text = "STUD12345".into();
        form.password.text = "secret".into();
        let user = form.submit(&StudyDefaults::default()).unwrap();
        apply_action_on(&mut state, Action::LoggedIn(user), today());
        state
    }

    #[test]
    fn test_navigation_between_public_screens() {
        let mut state = AppState::new(AppConfig::default());
        apply_action_on(&mut state, Action::Navigate(Route::Login), today());
        assert!(matches!(state.screen, Screen::Login(_)));
        apply_action_on(&mut state, Action::Navigate(Route::Signup), today());
        assert!(matches!(state.screen, Screen::Signup(_)));
        apply_action_on(&mut state, Action::Navigate(Route::Landing), today());
        assert!(matches!(state.screen, Screen::Landing(_)));
    }

    #[test]
    fn test_login_goes_to_dashboard() {
        let state = logged_in_state();
        assert!(matches!(state.screen, Screen::Dashboard(_)));
        let user = state.user.unwrap();
        assert_eq!(user.id, "user123");
        assert_eq!(user.nickname, "Demo User");
        assert!(user.completed_onboarding);
    }

    #[test]
    fn test_signup_then_onboarding_merges_answers() {
        let mut state = AppState::new(AppConfig::default());
        let mut form = SignupForm::new();
        form.student_id.text = "STUD12345".into();
        form.nickname.text = "Alex".into();
        form.email.text = "a@b.co".into();
        let user = form.submit(&StudyDefaults::default()).unwrap();
        apply_action_on(&mut state, Action::SignedUp(user), today());
        assert!(matches!(state.screen, Screen::Onboarding(_)));
        assert!(!state.user.as_ref().unwrap().completed_onboarding);

        let result = OnboardingResult {
            exam_date: NaiveDate::from_ymd_opt(2026, 12, 14),
            study_hours: 3.5,
            flashcard_target: 40,
            completed_onboarding: true,
        };
        apply_action_on(&mut state, Action::CompleteOnboarding(result), today());
        assert!(matches!(state.screen, Screen::Dashboard(_)));
        let user = state.user.unwrap();
        assert_eq!(user.nickname, "Alex");
        assert_eq!(user.study_hours, 3.5);
        assert_eq!(user.flashcard_target, 40);
        assert_eq!(user.exam_date, NaiveDate::from_ymd_opt(2026, 12, 14));
        assert!(user.completed_onboarding);
    }

    #[test]
    fn test_update_profile_notifies() {
        let mut state = logged_in_state();
        let update = ProfileUpdate {
            nickname: "Sam".into(),
            study_hours: 4.0,
            flashcard_target: 60,
        };
        apply_action_on(&mut state, Action::UpdateProfile(update), today());
        assert_eq!(state.user.as_ref().unwrap().nickname, "Sam");
        assert_eq!(state.status_line(), "Settings saved");
    }

    #[test]
    fn test_logout_discards_user() {
        let mut state = logged_in_state();
        apply_action_on(&mut state, Action::Logout, today());
        assert!(state.user.is_none());
        assert!(matches!(state.screen, Screen::Landing(_)));
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::new(AppConfig::default());
        apply_action_on(&mut state, Action::Quit, today());
        assert!(state.should_quit);
    }
}
