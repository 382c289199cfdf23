// TUI widget modules for each dashboard panel.

pub mod bars;
pub mod cumulative;
pub mod help_bar;
pub mod picker;
pub mod radar;
pub mod scatter;
pub mod status_bar;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use scrumcast_core::chart::ChartSpec;
use scrumcast_core::dataset::Team;

use crate::ViewState;

/// Colors for per-player series (cumulative lines, radar polygons).
pub const SERIES_PALETTE: [Color; 6] = [
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::LightRed,
    Color::LightBlue,
];

/// Highlight the border of the panel that has keyboard focus.
pub fn focused_border_style(focused: bool, base: Style) -> Style {
    if focused {
        base.fg(Color::Cyan)
    } else {
        base
    }
}

pub fn team_color(team: Team) -> Color {
    match team {
        Team::England => Color::White,
        Team::France => Color::Blue,
        Team::Ireland => Color::Green,
        Team::Italy => Color::LightBlue,
        Team::Scotland => Color::Magenta,
        Team::Wales => Color::Red,
    }
}

pub fn series_color(index: usize) -> Color {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// Draw whichever chart the active view produced.
pub fn render_chart(frame: &mut Frame, area: Rect, state: &ViewState) {
    match &state.chart {
        Some(ChartSpec::Scatter(c)) => scatter::render(frame, area, c),
        Some(ChartSpec::Bar(c)) => bars::render(frame, area, c),
        Some(ChartSpec::Line(c)) => cumulative::render(frame, area, c),
        Some(ChartSpec::Radar(c)) => radar::render(frame, area, c),
        None => {
            let paragraph = Paragraph::new("  No chart.")
                .style(Style::default().fg(Color::DarkGray))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(state.active_view.title()),
                );
            frame.render_widget(paragraph, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_border_is_cyan() {
        assert_eq!(focused_border_style(true, Style::default()).fg, Some(Color::Cyan));
        assert_eq!(focused_border_style(false, Style::default()).fg, None);
    }

    #[test]
    fn series_colors_wrap() {
        assert_eq!(series_color(0), series_color(SERIES_PALETTE.len()));
    }

    #[test]
    fn every_team_has_a_distinct_color() {
        let colors: std::collections::HashSet<String> =
            Team::ALL.iter().map(|t| format!("{:?}", team_color(*t))).collect();
        assert_eq!(colors.len(), Team::ALL.len());
    }
}
