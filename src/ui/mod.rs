mod auth;
mod dashboard;
mod flashcards;
mod form_field;
mod landing;
mod layout;
mod materials;
mod onboarding;
mod overview;
mod progress;
mod settings;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Screen};
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme::Theme::BG_SURFACE)), area);
    let app_layout = layout::compute_layout(area);
    let content = app_layout.content;

    match &state.screen {
        Screen::Landing(landing) => landing::render(frame, content, landing),
        Screen::Login(form) => auth::render_login(frame, content, form),
        Screen::Signup(form) => auth::render_signup(frame, content, form),
        Screen::Onboarding(wizard) => {
            onboarding::render(frame, content, wizard, &state.config.ui.date_format)
        }
        Screen::Dashboard(dash) => {
            if let Some(ref user) = state.user {
                dashboard::render(frame, content, dash, user);
            }
        }
    }

    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::{Action, Route};
    use crate::app::router::apply_action;
    use crate::config::AppConfig;
    use crate::dashboard::{DashboardTab, DashboardView};
    use crate::data::user::UserProfile;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn demo_user() -> UserProfile {
        UserProfile {
            id: "user123".into(),
            nickname: "Demo User".into(),
            email: None,
            student_id: "STUD12345".into(),
            exam_date: None,
            study_hours: 2.0,
            flashcard_target: 20,
            completed_onboarding: true,
        }
    }

    #[test]
    fn test_public_screens_render() {
        let mut state = AppState::new(AppConfig::default());
        assert!(draw(&state).contains("Your Personalised Study Coach"));
        apply_action(&mut state, Action::Navigate(Route::Login));
        assert!(draw(&state).contains("Student ID"));
        apply_action(&mut state, Action::Navigate(Route::Signup));
        assert!(draw(&state).contains("Create your account"));
        apply_action(&mut state, Action::SignedUp(demo_user()));
        assert!(draw(&state).contains("Step 1 of 4"));
    }

    #[test]
    fn test_every_dashboard_section_renders() {
        let mut state = AppState::new(AppConfig::default());
        let user = demo_user();
        apply_action(&mut state, Action::LoggedIn(user.clone()));
        let expected = [
            (DashboardTab::Overview, "Welcome back, Demo User!"),
            (DashboardTab::Flashcards, "Search flashcards"),
            (DashboardTab::Materials, "Computer Science"),
            (DashboardTab::Progress, "Daily Breakdown"),
            (DashboardTab::Settings, "Student ID cannot be changed"),
        ];
        for (tab, text) in expected {
            if let Screen::Dashboard(ref mut dash) = state.screen {
                dash.select(tab, &user);
            }
            let screen = draw(&state);
            assert!(screen.contains(text), "{:?} missing {:?}", tab, text);
            assert!(screen.contains(tab.title()));
        }
    }

    #[test]
    fn test_study_and_quiz_views_render() {
        let mut state = AppState::new(AppConfig::default());
        let user = demo_user();
        apply_action(&mut state, Action::LoggedIn(user.clone()));
        if let Screen::Dashboard(ref mut dash) = state.screen {
            dash.select(DashboardTab::Flashcards, &user);
            if let DashboardView::Flashcards(ref mut cards) = dash.view {
                cards.start_study();
            }
        }
        assert!(draw(&state).contains("Card 1 of 5"));

        if let Screen::Dashboard(ref mut dash) = state.screen {
            dash.select(DashboardTab::Materials, &user);
            if let DashboardView::Materials(ref mut m) = dash.view {
                m.select_next();
                m.activate_selected();
                m.start_quiz();
            }
        }
        assert!(draw(&state).contains("Question 1 of 3"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = AppState::new(AppConfig::default());
        apply_action(&mut state, Action::LoggedIn(demo_user()));
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
    }

    #[test]
    fn test_summary_survives_unrenderable_date_format() {
        let mut cfg = AppConfig::default();
        cfg.ui.date_format = "%Q".into();
        let mut state = AppState::new(cfg);
        apply_action(&mut state, Action::SignedUp(demo_user()));
        if let Screen::Onboarding(ref mut wizard) = state.screen {
            wizard.exam_date = crate::app::state::InputState::with_text("2026-12-14");
            for _ in 0..4 {
                wizard.next().unwrap();
            }
            assert!(wizard.completed);
        }
        assert!(draw(&state).contains("Dec 14, 2026"));
    }
}
