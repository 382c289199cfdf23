// Radar comparison widget: spokes, reference rings and one outline per
// selected player on a braille canvas.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use scrumcast_core::chart::radar::vertex;
use scrumcast_core::chart::{Point, RadarChart};
use scrumcast_core::pipeline::composite::NUM_COMPOSITES;

use super::series_color;

/// Canvas half-extent; leaves room for axis labels past the unit circle.
const EXTENT: f64 = 1.6;
const RINGS: [f64; 2] = [0.5, 1.0];

fn draw_path(ctx: &mut Context, path: &[Point], color: Color) {
    for pair in path.windows(2) {
        ctx.draw(&CanvasLine {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
            color,
        });
    }
}

/// Closed ring at radius `r` through each axis.
pub fn ring(r: f64) -> Vec<Point> {
    (0..=NUM_COMPOSITES).map(|k| vertex(k % NUM_COMPOSITES, r)).collect()
}

pub fn render(frame: &mut Frame, area: Rect, chart: &RadarChart) {
    let legend: Vec<String> = chart.polygons.iter().map(|p| p.name.clone()).collect();
    let title = if legend.is_empty() {
        format!("{} (no players selected)", chart.title)
    } else {
        format!("{}: {}", chart.title, legend.join(" vs "))
    };

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .marker(Marker::Braille)
        .x_bounds([-EXTENT, EXTENT])
        .y_bounds([-EXTENT * 0.8, EXTENT * 0.8])
        .paint(|ctx| {
            let origin = Point::new(0.0, 0.0);
            for k in 0..NUM_COMPOSITES {
                draw_path(ctx, &[origin, vertex(k, 1.0)], Color::DarkGray);
            }
            for r in RINGS {
                draw_path(ctx, &ring(r), Color::DarkGray);
            }
            for (k, axis) in chart.axes.iter().enumerate() {
                let at = vertex(k, 1.1);
                ctx.print(at.x, at.y, Span::styled(axis.clone(), Style::default().fg(Color::Gray)));
            }

            ctx.layer();
            for (i, polygon) in chart.polygons.iter().enumerate() {
                draw_path(ctx, &polygon.vertices, series_color(i));
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

    fn draw(chart: &RadarChart) -> String {
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
    fn ring_is_closed() {
        let r = ring(1.0);
        assert_eq!(r.len(), NUM_COMPOSITES + 1);
        assert_eq!(r.first(), r.last());
    }

    #[test]
    fn render_two_players() {
        let d = test_support::dashboard();
        let chart = d
            .radar(&["Finn Russell".to_string(), "Ellis Genge".to_string()])
            .unwrap();
        let text = draw(&chart);
        assert!(text.contains("Finn Russell vs Ellis Genge"));
        assert!(text.contains("Tackling"));
    }

    #[test]
    fn render_no_players() {
        let d = test_support::dashboard();
        let text = draw(&d.radar(&[]).unwrap());
        assert!(text.contains("no players selected"));
    }
}
