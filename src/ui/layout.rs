use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct AppLayout {
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}

pub struct DashboardLayout {
    pub sidebar: Rect,
    pub header: Rect,
    pub body: Rect,
}

pub fn dashboard_layout(area: Rect) -> DashboardLayout {
    // Horizontal: sidebar | gap | content
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(24), // Sidebar
            Constraint::Min(30),    // Content
        ])
        .split(area);

    // Content: header | body
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(h_chunks[1]);

    DashboardLayout {
        sidebar: h_chunks[0],
        header: right[0],
        body: right[1],
    }
}

/// A `width` x `height` box centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [col] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(col);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_is_last_row() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.status_bar, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.content.height, 23);
    }

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered(area, 60, 4);
        assert_eq!(r.width, 40);
        assert_eq!(r.height, 4);
        assert_eq!(r.y, 3);
    }
}
