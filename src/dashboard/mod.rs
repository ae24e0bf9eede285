//! The signed-in area: a sidebar of sections and the section content.
//!
//! Each section owns its state inside [`DashboardView`]; switching sections
//! builds the new section from scratch, so nothing carries over.

pub mod flashcards;
pub mod materials;
pub mod overview;
pub mod progress;
pub mod quiz;
pub mod settings;

use crate::data::user::UserProfile;
use chrono::NaiveDate;
use flashcards::FlashcardSection;
use materials::MaterialsSection;
use overview::OverviewSection;
use progress::ProgressSection;
use settings::SettingsForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Flashcards,
    Materials,
    Progress,
    Settings,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Overview,
        DashboardTab::Flashcards,
        DashboardTab::Materials,
        DashboardTab::Progress,
        DashboardTab::Settings,
    ];

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Flashcards => "Flashcards",
            DashboardTab::Materials => "Study Materials",
            DashboardTab::Progress => "Progress",
            DashboardTab::Settings => "Settings",
        }
    }

    /// Header shown above the content.
    pub fn title(self) -> &'static str {
        match self {
            DashboardTab::Overview => "Dashboard",
            DashboardTab::Flashcards => "Flashcards",
            DashboardTab::Materials => "Study Materials",
            DashboardTab::Progress => "Progress Tracking",
            DashboardTab::Settings => "Account Settings",
        }
    }

    /// Tab selected by function key F1..F5.
    pub fn from_function_key(n: u8) -> Option<DashboardTab> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }
}

#[derive(Debug)]
pub enum DashboardView {
    Overview(OverviewSection),
    Flashcards(FlashcardSection),
    Materials(MaterialsSection),
    Progress(ProgressSection),
    Settings(SettingsForm),
}

impl DashboardView {
    fn build(tab: DashboardTab, user: &UserProfile, today: NaiveDate) -> Self {
        match tab {
            DashboardTab::Overview => DashboardView::Overview(OverviewSection::new(user)),
            DashboardTab::Flashcards => DashboardView::Flashcards(FlashcardSection::new()),
            DashboardTab::Materials => DashboardView::Materials(MaterialsSection::new()),
            DashboardTab::Progress => DashboardView::Progress(ProgressSection::new(today)),
            DashboardTab::Settings => DashboardView::Settings(SettingsForm::new(user)),
        }
    }

    pub fn tab(&self) -> DashboardTab {
        match self {
            DashboardView::Overview(_) => DashboardTab::Overview,
            DashboardView::Flashcards(_) => DashboardTab::Flashcards,
            DashboardView::Materials(_) => DashboardTab::Materials,
            DashboardView::Progress(_) => DashboardTab::Progress,
            DashboardView::Settings(_) => DashboardTab::Settings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardFocus {
    Sidebar,
    Content,
}

/// Sidebar rows: every tab, then Logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    Tab(DashboardTab),
    Logout,
}

pub const SIDEBAR_ITEMS: [SidebarItem; 6] = [
    SidebarItem::Tab(DashboardTab::Overview),
    SidebarItem::Tab(DashboardTab::Flashcards),
    SidebarItem::Tab(DashboardTab::Materials),
    SidebarItem::Tab(DashboardTab::Progress),
    SidebarItem::Tab(DashboardTab::Settings),
    SidebarItem::Logout,
];

#[derive(Debug)]
pub struct Dashboard {
    pub view: DashboardView,
    pub focus: DashboardFocus,
    pub sidebar_cursor: usize,
    today: NaiveDate,
}

impl Dashboard {
    pub fn new(user: &UserProfile, today: NaiveDate) -> Self {
        Self {
            view: DashboardView::build(DashboardTab::Overview, user, today),
            focus: DashboardFocus::Sidebar,
            sidebar_cursor: 0,
            today,
        }
    }

    pub fn active_tab(&self) -> DashboardTab {
        self.view.tab()
    }

    /// Switch to `tab` with fresh section state and hand focus to the content.
    pub fn select(&mut self, tab: DashboardTab, user: &UserProfile) {
        tracing::debug!(tab = tab.label(), "dashboard section");
        self.view = DashboardView::build(tab, user, self.today);
        self.sidebar_cursor = DashboardTab::ALL.iter().position(|t| *t == tab).unwrap_or(0);
        self.focus = DashboardFocus::Content;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            DashboardFocus::Sidebar => DashboardFocus::Content,
            DashboardFocus::Content => DashboardFocus::Sidebar,
        };
    }

    pub fn sidebar_up(&mut self) {
        self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
    }

    pub fn sidebar_down(&mut self) {
        if self.sidebar_cursor + 1 < SIDEBAR_ITEMS.len() {
            self.sidebar_cursor += 1;
        }
    }

    pub fn sidebar_item(&self) -> SidebarItem {
        SIDEBAR_ITEMS
            .get(self.sidebar_cursor)
            .copied()
            .unwrap_or(SidebarItem::Tab(DashboardTab::Overview))
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
            study_hours: 2.0,
            flashcard_target: 20,
            completed_onboarding: true,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 7).unwrap()
    }

    #[test]
    fn test_starts_on_overview() {
        let dash = Dashboard::new(&user(), today());
        assert_eq!(dash.active_tab(), DashboardTab::Overview);
        assert_eq!(dash.focus, DashboardFocus::Sidebar);
    }

    #[test]
    fn test_switching_rebuilds_state() {
        let user = user();
        let mut dash = Dashboard::new(&user, today());
        dash.select(DashboardTab::Flashcards, &user);
        if let DashboardView::Flashcards(ref mut cards) = dash.view {
            cards.start_study();
            cards.next_card();
            assert_eq!(cards.cursor, 1);
        } else {
            panic!("expected flashcards");
        }
        dash.select(DashboardTab::Overview, &user);
        dash.select(DashboardTab::Flashcards, &user);
        match dash.view {
            DashboardView::Flashcards(ref cards) => assert_eq!(cards.cursor, 0),
            _ => panic!("expected flashcards"),
        }
        assert_eq!(dash.sidebar_cursor, 1);
        assert_eq!(dash.focus, DashboardFocus::Content);
    }

    #[test]
    fn test_sidebar_bounds() {
        let mut dash = Dashboard::new(&user(), today());
        dash.sidebar_up();
        assert_eq!(dash.sidebar_cursor, 0);
        for _ in 0..10 {
            dash.sidebar_down();
        }
        assert_eq!(dash.sidebar_item(), SidebarItem::Logout);
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(DashboardTab::from_function_key(1), Some(DashboardTab::Overview));
        assert_eq!(DashboardTab::from_function_key(5), Some(DashboardTab::Settings));
        assert_eq!(DashboardTab::from_function_key(0), None);
        assert_eq!(DashboardTab::from_function_key(6), None);
    }
}
