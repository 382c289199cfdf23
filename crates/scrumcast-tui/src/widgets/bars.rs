// Mean-points bar chart widget (teams or positions), drawn horizontally in
// the order the core sorted them.

use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart as BarChartWidget, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use scrumcast_core::chart::BarChart;
use scrumcast_core::dataset::Team;

use super::team_color;

/// Terminal bars hold unsigned integers; means are drawn in tenths.
pub fn bar_height(mean: f64) -> u64 {
    (mean.max(0.0) * 10.0).round() as u64
}

/// Short label for a bar: team code for teams, the category otherwise.
pub fn bar_label(category: &str) -> String {
    match Team::from_name(category) {
        Some(team) => team.code().to_string(),
        None => category.to_string(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, chart: &BarChart) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} ({})", chart.title, chart.value_label));

    if chart.bars.is_empty() {
        let paragraph = Paragraph::new("  No players match the current filters.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .map(|b| {
            let color = Team::from_name(&b.category)
                .map(team_color)
                .unwrap_or(Color::Cyan);
            Bar::default()
                .value(bar_height(b.value))
                .text_value(format!("{:.1} (n={})", b.value, b.count))
                .label(Line::from(bar_label(&b.category)))
                .style(Style::default().fg(color))
        })
        .collect();

    let widget = BarChartWidget::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .max(bar_height(chart.value_range.max).max(1))
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(widget, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
