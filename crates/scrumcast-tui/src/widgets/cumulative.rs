// Cumulative points line chart widget: one braille line per selected player,
// with dots on the rounds that had no data.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use scrumcast_core::chart::LineChart;

use super::series_color;

/// (x, y) pairs for each series, plus the subset at missing rounds.
fn series_data(chart: &LineChart) -> Vec<(Vec<(f64, f64)>, Vec<(f64, f64)>)> {
    chart
        .series
        .iter()
        .map(|s| {
            let line: Vec<(f64, f64)> = s.points.iter().map(|p| (p.x, p.y)).collect();
            let gaps = s
                .missing_rounds
                .iter()
                .filter_map(|r| line.get(*r as usize).copied())
                .collect();
            (line, gaps)
        })
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, chart: &LineChart) {
    let block = Block::default().borders(Borders::ALL).title(chart.title.clone());

    if chart.series.is_empty() {
        let paragraph = Paragraph::new("  Select players in the Players picker (Tab, Space).")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let data = series_data(chart);
    let mut datasets = Vec::with_capacity(data.len() * 2);
    for (i, (s, (line, gaps))) in chart.series.iter().zip(&data).enumerate() {
        let color = series_color(i);
        datasets.push(
            Dataset::default()
                .name(s.name.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(line),
        );
        if !gaps.is_empty() {
            datasets.push(
                Dataset::default()
                    .marker(Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(Color::DarkGray))
                    .data(gaps),
            );
        }
    }

    let (x, y) = (chart.x_range, chart.y_range);
    let x_labels: Vec<Span> = (0..=x.max as usize)
        .map(|r| Span::raw(r.to_string()))
        .collect();
    let y_labels = vec![
        Span::raw(format!("{:.0}", y.min)),
        Span::raw(format!("{:.0}", (y.min + y.max) / 2.0)),
        Span::raw(format!("{:.0}", y.max)),
    ];

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(Span::styled(chart.x_label.clone(), Style::default().fg(Color::Gray)))
                .style(Style::default().fg(Color::DarkGray))
                .bounds([x.min, x.max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(chart.y_label.clone(), Style::default().fg(Color::Gray)))
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y.min, y.max])
                .labels(y_labels),
        );
    frame.render_widget(widget, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
