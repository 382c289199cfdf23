// Status bar widget: round selector, view tabs, last status message.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use scrumcast_core::dashboard::View;
use scrumcast_core::RoundLabel;

use crate::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [round selector] | [tab bar] | [message]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = round_spans(state.round);
    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.extend(tab_spans(state.active_view));

    if let Some(msg) = &state.status_message {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

fn active_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// One span per round label, the selected one highlighted.
pub fn round_spans(active: RoundLabel) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw(" ")];
    for round in RoundLabel::ALL {
        let short = match round.round_number() {
            Some(n) => format!("R{n}"),
            None => "All".to_string(),
        };
        let style = if round == active {
            active_style()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(short, style));
        spans.push(Span::raw(" "));
    }
    spans
}

/// Build tab indicator spans, e.g. "[1:Value] [2:Teams] ...".
pub fn tab_spans(active: View) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, view) in View::ALL.iter().enumerate() {
        let style = if *view == active {
            active_style()
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}:{}]", i + 1, view.title()), style));
        spans.push(Span::raw(" "));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
