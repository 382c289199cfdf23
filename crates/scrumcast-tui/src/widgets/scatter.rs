// Value scatter widget: guide lines, ratio labels and one team-coded mark
// per filtered player, drawn on a braille canvas.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use scrumcast_core::chart::{GuideKind, ScatterChart};

use super::team_color;

fn guide_color(kind: GuideKind) -> Color {
    match kind {
        GuideKind::Major => Color::Gray,
        GuideKind::Minor => Color::DarkGray,
    }
}

pub fn render(frame: &mut Frame, area: Rect, chart: &ScatterChart) {
    let title = format!(
        "{} ({} players) x:{} y:{}",
        chart.title,
        chart.points.len(),
        chart.x_label,
        chart.y_label
    );

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .marker(Marker::Braille)
        .x_bounds([chart.x_range.min, chart.x_range.max])
        .y_bounds([chart.y_range.min, chart.y_range.max])
        .paint(|ctx| {
            for guide in &chart.guides {
                ctx.draw(&CanvasLine {
                    x1: guide.from.x,
                    y1: guide.from.y,
                    x2: guide.to.x,
                    y2: guide.to.y,
                    color: guide_color(guide.kind),
                });
            }
            for label in chart.guides.iter().filter_map(|g| g.label.as_ref()) {
                ctx.print(
                    label.at.x,
                    label.at.y,
                    Span::styled(label.text.clone(), Style::default().fg(Color::DarkGray)),
                );
            }

            ctx.layer();
            for point in &chart.points {
                let color = team_color(point.team);
                ctx.draw(&Points {
                    coords: &[(point.at.x, point.at.y)],
                    color,
                });
                ctx.print(
                    point.at.x,
                    point.at.y,
                    Span::styled(point.team.code(), Style::default().fg(color)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use scrumcast_core::dataset::{Position, Team};
    use scrumcast_core::{RoundLabel, Selection};

    fn draw(chart: &ScatterChart) -> String {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, frame.area(), chart)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn render_marks_players_with_team_codes() {
        let d = test_support::dashboard();
        let chart = d.scatter(&Selection::everything(RoundLabel::Round2));
        let text = draw(&chart);
        assert!(text.contains("SCO"));
        assert!(text.contains("ITA"));
        assert!(text.contains("(4 players)"));
    }

    #[test]
    fn render_empty_selection() {
        let d = test_support::dashboard();
        let chart = d.scatter(&Selection::new(RoundLabel::Round1, Vec::<Position>::new(), Vec::<Team>::new()));
        let text = draw(&chart);
        assert!(text.contains("(0 players)"));
    }
}
