use crate::app::action::{Action, Route};
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::auth::{LoginForm, SignupForm};
use crate::config::model::StudyDefaults;
use crate::dashboard::flashcards::{FlashcardMode, FlashcardSection};
use crate::dashboard::materials::{MaterialsMode, MaterialsSection};
use crate::dashboard::progress::{ProgressSection, TimeRange};
use crate::dashboard::settings::SettingsForm;
use crate::dashboard::{Dashboard, DashboardFocus, DashboardTab, DashboardView, SidebarItem};
use crate::data::user::UserProfile;
use crate::onboarding::OnboardingWizard;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.expire_notice(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        // Some terminals report releases too; act on presses only.
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    let defaults = &state.config.defaults;
    match &mut state.screen {
        Screen::Landing(landing) => handle_landing_key(landing, key),
        Screen::Login(form) => handle_login_key(form, defaults, key),
        Screen::Signup(form) => handle_signup_key(form, defaults, key),
        Screen::Onboarding(wizard) => handle_onboarding_key(wizard, key),
        Screen::Dashboard(dash) => match state.user {
            Some(ref user) => handle_dashboard_key(dash, user, key),
            None => vec![Action::Logout],
        },
    }
}

fn handle_landing_key(landing: &mut LandingState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('s') => vec![Action::Navigate(Route::Signup)],
        KeyCode::Char('l') => vec![Action::Navigate(Route::Login)],
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            landing.toggle();
            vec![]
        }
        KeyCode::Enter => match landing.selected {
            LandingChoice::SignUp => vec![Action::Navigate(Route::Signup)],
            LandingChoice::Login => vec![Action::Navigate(Route::Login)],
        },
        _ => vec![],
    }
}

fn handle_login_key(form: &mut LoginForm, defaults: &StudyDefaults, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            vec![]
        }
        KeyCode::Esc => vec![Action::Navigate(Route::Landing)],
        KeyCode::F(2) => vec![Action::Navigate(Route::Signup)],
        KeyCode::Enter => match form.submit(defaults) {
            Ok(user) => vec![Action::LoggedIn(user)],
            Err(e) => {
                tracing::debug!(error = %e, "login rejected");
                vec![]
            }
        },
        _ => {
            form.edit(key);
            vec![]
        }
    }
}

fn handle_signup_key(form: &mut SignupForm, defaults: &StudyDefaults, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            vec![]
        }
        KeyCode::Esc => vec![Action::Navigate(Route::Landing)],
        KeyCode::F(2) => vec![Action::Navigate(Route::Login)],
        KeyCode::Enter => match form.submit(defaults) {
            Ok(user) => vec![Action::SignedUp(user)],
            Err(errors) => {
                tracing::debug!(?errors, "signup rejected");
                vec![]
            }
        },
        _ => {
            form.edit(key);
            vec![]
        }
    }
}

fn handle_onboarding_key(wizard: &mut OnboardingWizard, key: KeyEvent) -> Vec<Action> {
    if wizard.completed {
        return match key.code {
            KeyCode::Enter => vec![Action::CompleteOnboarding(wizard.complete())],
            _ => vec![],
        };
    }

    match key.code {
        KeyCode::BackTab | KeyCode::Esc => {
            wizard.back();
            return vec![];
        }
        KeyCode::Enter if wizard.step == crate::onboarding::LAST_STEP => {
            if !wizard.uploads.input.is_blank() {
                let _ = wizard.uploads.add_from_input();
            } else {
                let _ = wizard.next();
            }
            return vec![];
        }
        KeyCode::Enter => {
            let _ = wizard.next();
            return vec![];
        }
        _ => {}
    }

    match wizard.step {
        1 => {
            wizard.edit_date(key);
        }
        2 => match key.code {
            KeyCode::Left | KeyCode::Down => wizard.study_hours.decrease(),
            KeyCode::Right | KeyCode::Up => wizard.study_hours.increase(),
            _ => {}
        },
        3 => match key.code {
            KeyCode::Left | KeyCode::Down => wizard.flashcard_target.decrease(),
            KeyCode::Right | KeyCode::Up => wizard.flashcard_target.increase(),
            _ => {}
        },
        _ => match key.code {
            KeyCode::Down => wizard.uploads.select_next(),
            KeyCode::Up => wizard.uploads.select_prev(),
            KeyCode::Delete if wizard.uploads.selected.is_some() => {
                wizard.uploads.remove_selected();
            }
            _ => {
                wizard.uploads.selected = None;
                wizard.uploads.input.handle_key(key);
            }
        },
    }
    vec![]
}

fn handle_dashboard_key(dash: &mut Dashboard, user: &UserProfile, key: KeyEvent) -> Vec<Action> {
    if let KeyCode::F(n) = key.code {
        if let Some(tab) = DashboardTab::from_function_key(n) {
            dash.select(tab, user);
        }
        return vec![];
    }

    if key.code == KeyCode::Tab {
        dash.toggle_focus();
        return vec![];
    }

    if dash.focus == DashboardFocus::Sidebar {
        return handle_sidebar_key(dash, user, key);
    }

    match &mut dash.view {
        DashboardView::Overview(_) => {
            if key.code == KeyCode::Esc {
                dash.focus = DashboardFocus::Sidebar;
            }
            vec![]
        }
        DashboardView::Flashcards(cards) => handle_flashcards_key(cards, key),
        DashboardView::Materials(materials) => handle_materials_key(materials, key),
        DashboardView::Progress(progress) => handle_progress_key(progress, key),
        DashboardView::Settings(form) => handle_settings_key(form, key),
    }
}

fn handle_sidebar_key(dash: &mut Dashboard, user: &UserProfile, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            dash.sidebar_up();
            vec![]
        }
        KeyCode::Down => {
            dash.sidebar_down();
            vec![]
        }
        KeyCode::Enter | KeyCode::Right => match dash.sidebar_item() {
            SidebarItem::Tab(tab) => {
                dash.select(tab, user);
                vec![]
            }
            SidebarItem::Logout => vec![Action::Logout],
        },
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_flashcards_key(cards: &mut FlashcardSection, key: KeyEvent) -> Vec<Action> {
    match cards.mode {
        FlashcardMode::Browse => match key.code {
            KeyCode::Left => cards.prev_deck(),
            KeyCode::Right => cards.next_deck(),
            KeyCode::Up => cards.scroll_browse(false),
            KeyCode::Down => cards.scroll_browse(true),
            KeyCode::Enter => cards.start_study(),
            _ => {
                cards.edit_query(key);
            }
        },
        FlashcardMode::Study => match key.code {
            KeyCode::Left => cards.prev_card(),
            KeyCode::Right => cards.next_card(),
            KeyCode::Char(' ') | KeyCode::Enter => cards.flip(),
            KeyCode::Char('s') => cards.shuffle(),
            KeyCode::Esc => cards.back_to_browse(),
            _ => {}
        },
    }
    vec![]
}

fn handle_materials_key(materials: &mut MaterialsSection, key: KeyEvent) -> Vec<Action> {
    match materials.mode {
        MaterialsMode::Files => match key.code {
            KeyCode::Up => materials.select_prev(),
            KeyCode::Down => materials.select_next(),
            KeyCode::Enter => materials.activate_selected(),
            _ => {
                materials.edit_search(key);
            }
        },
        MaterialsMode::Content => match key.code {
            KeyCode::Enter | KeyCode::Char('t') => {
                materials.start_quiz();
            }
            KeyCode::Esc | KeyCode::Backspace => materials.back_to_files(),
            _ => {}
        },
        MaterialsMode::Quiz => handle_quiz_key(materials, key),
    }
    vec![]
}

fn handle_quiz_key(materials: &mut MaterialsSection, key: KeyEvent) {
    if materials.quiz.submitted {
        match key.code {
            KeyCode::Char('r') => materials.retake_quiz(),
            KeyCode::Esc => materials.back_to_content(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let option = c as usize - '1' as usize;
            materials.select_answer(option);
        }
        KeyCode::Up => materials.quiz.highlight_prev(),
        KeyCode::Down => {
            let count = materials.current_option_count();
            materials.quiz.highlight_next(count);
        }
        KeyCode::Char(' ') => {
            let option = materials.quiz.highlighted;
            materials.select_answer(option);
        }
        KeyCode::Left => materials.quiz.previous(),
        KeyCode::Right => materials.quiz.next(),
        KeyCode::Enter => {
            if materials.quiz.is_last_question() {
                materials.submit_quiz();
            } else {
                materials.quiz.next();
            }
        }
        KeyCode::Esc => materials.back_to_content(),
        _ => {}
    }
}

fn handle_progress_key(progress: &mut ProgressSection, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('d') => progress.set_range(TimeRange::Day),
        KeyCode::Char('w') => progress.set_range(TimeRange::Week),
        KeyCode::Char('m') => progress.set_range(TimeRange::Month),
        KeyCode::Left => progress.previous(),
        KeyCode::Right => progress.next(),
        KeyCode::Up => progress.scroll_table(false),
        KeyCode::Down => progress.scroll_table(true),
        _ => {}
    }
    vec![]
}

fn handle_settings_key(form: &mut SettingsForm, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Down => {
            form.focus_next();
            vec![]
        }
        KeyCode::Up | KeyCode::BackTab => {
            form.focus_prev();
            vec![]
        }
        KeyCode::Enter => match form.submit() {
            Ok(update) => vec![Action::UpdateProfile(update)],
            Err(_) => vec![],
        },
        _ => {
            form.edit(key);
            vec![]
        }
    }
}
