// Picker widget: a checkbox list with cursor, used for positions, teams and
// players.
//
// Scrolls to keep the cursor visible. The focused picker shows its cursor
// row reversed and a cyan border.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use super::focused_border_style;
use crate::PickList;

/// First visible row so that `cursor` stays on screen.
pub fn scroll_offset(cursor: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return cursor;
    }
    cursor.saturating_sub(visible_rows - 1)
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

pub fn render<T, F>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    list: &PickList<T>,
    label: F,
    focused: bool,
) where
    T: Clone,
    F: Fn(&T) -> String,
{
    let border = focused_border_style(focused, Style::default());
    let visible_rows = (area.height as usize).saturating_sub(2);
    let offset = scroll_offset(list.cursor(), visible_rows);

    let items: Vec<ListItem> = list
        .items()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows.max(1))
        .map(|(i, item)| {
            let checked = list.is_checked(i);
            let mut style = if checked {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if focused && i == list.cursor() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", checkbox(checked)), style),
                Span::styled(label(item), style),
            ]))
        })
        .collect();

    let title = format!("{} ({}/{})", title, list.checked_count(), list.len());
    let widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    frame.render_widget(widget, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
