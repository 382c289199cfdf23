// Screen layout: chart panel plus a picker sidebar.
//
// +--------------------------------------------------+
// | Status Bar (1 row): round selector, view tabs    |
// +--------------------------------------+-----------+
// | Chart Panel (fill)                   | Positions |
// |                                      | Teams     |
// |                                      | Players   |
// +--------------------------------------+-----------+
// | Help Bar (1 row)                                 |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Sidebar width in columns.
const SIDEBAR_WIDTH: u16 = 30;

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    pub status_bar: Rect,
    pub chart: Rect,
    pub positions: Rect,
    pub teams: Rect,
    pub players: Rect,
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(8),    // chart + sidebar
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(SIDEBAR_WIDTH)])
        .split(vertical[1]);

    // 8 positions / 6 teams plus borders; players take the rest.
    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Min(3),
        ])
        .split(horizontal[1]);

    AppLayout {
        status_bar: vertical[0],
        chart: horizontal[0],
        positions: sidebar[0],
        teams: sidebar[1],
        players: sidebar[2],
        help_bar: vertical[2],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_all_rects_nonzero() {
        let layout = build_layout(Rect::new(0, 0, 160, 50));
        let rects = [
            ("status_bar", layout.status_bar),
            ("chart", layout.chart),
            ("positions", layout.positions),
            ("teams", layout.teams),
            ("players", layout.players),
            ("help_bar", layout.help_bar),
        ];
        for (name, rect) in &rects {
            assert!(rect.width > 0 && rect.height > 0, "{} has zero area: {:?}", name, rect);
        }
    }

    #[test]
    fn bars_are_single_rows() {
        let layout = build_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.help_bar.height, 1);
        assert_eq!(layout.help_bar.y, 39);
    }

    #[test]
    fn sidebar_fixed_width() {
        let layout = build_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.positions.width, SIDEBAR_WIDTH);
        assert_eq!(layout.chart.width, 120 - SIDEBAR_WIDTH);
        assert_eq!(layout.positions.height, 10);
        assert_eq!(layout.teams.height, 8);
        assert_eq!(layout.players.height, 38 - 18);
    }
}
