// Help bar widget: key hints for the focused picker.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::{Focus, ViewState};

pub fn help_text(focus: Focus) -> String {
    let target = match focus {
        Focus::Positions => "positions",
        Focus::Teams => "teams",
        Focus::Players => "players",
    };
    format!(
        " q:Quit | 1-5:View | [/]:Round | Tab:Focus ({target}) | j/k:Move | Space:Toggle | a:All | c:Clear | e:Export"
    )
}

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        help_text(state.focus),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_text_names_focus() {
        assert!(help_text(Focus::Teams).contains("Tab:Focus (teams)"));
        assert!(help_text(Focus::Players).contains("e:Export"));
    }
}
