use crate::dashboard::{Dashboard, DashboardFocus, DashboardView, SidebarItem, SIDEBAR_ITEMS};
use crate::data::user::UserProfile;
use crate::ui::layout::dashboard_layout;
use crate::ui::theme::Theme;
use crate::ui::{flashcards, materials, overview, progress, settings};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, dash: &Dashboard, user: &UserProfile) {
    let layout = dashboard_layout(area);

    render_sidebar(frame, layout.sidebar, dash, user);

    let header = Line::from(vec![
        Span::styled(format!(" {} ", dash.active_tab().title()), Theme::heading()),
        Span::styled(
            format!("  {}", chrono::Local::now().format("%A, %B %-d")),
            Theme::muted(),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), layout.header);

    let focused = dash.focus == DashboardFocus::Content;
    let body = layout.body;
    match &dash.view {
        DashboardView::Overview(section) => overview::render(frame, body, section, user),
        DashboardView::Flashcards(section) => flashcards::render(frame, body, section, focused),
        DashboardView::Materials(section) => materials::render(frame, body, section, focused),
        DashboardView::Progress(section) => progress::render(frame, body, section, user),
        DashboardView::Settings(form) => settings::render(frame, body, form, focused),
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, dash: &Dashboard, user: &UserProfile) {
    let focused = dash.focus == DashboardFocus::Sidebar;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" StudyCoach ")
        .title_style(Theme::heading())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [profile, menu] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(inner);

    let profile_lines = vec![
        Line::from(Span::styled(format!(" {}", user.nickname), Theme::title())),
        Line::from(Span::styled(format!(" {}", user.student_id), Theme::muted())),
    ];
    frame.render_widget(Paragraph::new(profile_lines), profile);

    let active = dash.active_tab();
    let items: Vec<ListItem> = SIDEBAR_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let (label, marker, base) = match item {
                SidebarItem::Tab(tab) if *tab == active => {
                    (tab.label(), "▸ ", Style::default().fg(Theme::ACCENT_BLUE))
                }
                SidebarItem::Tab(tab) => (tab.label(), "  ", Theme::text()),
                SidebarItem::Logout => ("Logout", "  ", Theme::error()),
            };
            let style = if focused && i == dash.sidebar_cursor {
                Theme::selected()
            } else {
                base
            };
            let key = match item {
                SidebarItem::Tab(_) => format!("F{} ", i + 1),
                SidebarItem::Logout => "   ".to_string(),
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(key, Theme::muted()),
                Span::styled(label, style),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), menu);
}
