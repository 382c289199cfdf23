// Keyboard input handling.
//
// Translates crossterm key events into ViewState mutations (round, view,
// picker focus and checkboxes) or into UserCommands the event loop acts on
// (quit, export).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use scrumcast_core::dashboard::View;

use super::{Focus, PickList, UserCommand, ViewState};

/// Cursor and checkbox operations shared by every picker, regardless of
/// item type.
trait PickerNav {
    fn up(&mut self);
    fn down(&mut self);
    fn toggle_current(&mut self);
    fn check_all(&mut self, value: bool);
}

impl<T: Clone> PickerNav for PickList<T> {
    fn up(&mut self) {
        self.move_up();
    }

    fn down(&mut self) {
        self.move_down();
    }

    fn toggle_current(&mut self) {
        self.toggle();
    }

    fn check_all(&mut self, value: bool) {
        self.set_all(value);
    }
}

fn focused_picker(state: &mut ViewState) -> &mut dyn PickerNav {
    match state.focus {
        Focus::Positions => &mut state.positions,
        Focus::Teams => &mut state.teams,
        Focus::Players => &mut state.players,
    }
}

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the event loop must act (quit, export).
/// Returns `None` when the key was handled by mutating `ViewState`; the
/// caller then recomputes the active chart.
pub fn handle_key(key_event: KeyEvent, state: &mut ViewState) -> Option<UserCommand> {
    // Ignore release/repeat events (crossterm emits both on Windows).
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') => return Some(UserCommand::Quit),
        KeyCode::Char('e') => return Some(UserCommand::Export),

        // Views
        KeyCode::Char(c @ '1'..='5') => {
            let idx = (c as u8 - b'1') as usize;
            state.active_view = View::ALL[idx];
        }

        // Round selector
        KeyCode::Char('[') => state.round = state.round.prev(),
        KeyCode::Char(']') => state.round = state.round.next(),

        // Picker focus
        KeyCode::Tab => state.focus = state.focus.next(),
        KeyCode::BackTab => state.focus = state.focus.prev(),

        // Picker cursor and checkboxes
        KeyCode::Down | KeyCode::Char('j') => focused_picker(state).down(),
        KeyCode::Up | KeyCode::Char('k') => focused_picker(state).up(),
        KeyCode::Char(' ') | KeyCode::Enter => focused_picker(state).toggle_current(),
        KeyCode::Char('a') => focused_picker(state).check_all(true),
        KeyCode::Char('c') => focused_picker(state).check_all(false),

        KeyCode::Esc => state.status_message = None,
        _ => {}
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use scrumcast_core::dataset::Team;
    use scrumcast_core::RoundLabel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state() -> ViewState {
        ViewState::new(&test_support::dashboard(), RoundLabel::Round1, std::env::temp_dir())
    }

    #[test]
    fn quit_keys() {
        let mut s = state();
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut s), Some(UserCommand::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c, &mut s), Some(UserCommand::Quit));
    }

    #[test]
    fn export_key() {
        let mut s = state();
        assert_eq!(handle_key(key(KeyCode::Char('e')), &mut s), Some(UserCommand::Export));
    }

    #[test]
    fn digits_switch_views() {
        let mut s = state();
        assert_eq!(handle_key(key(KeyCode::Char('3')), &mut s), None);
        assert_eq!(s.active_view, View::Positions);
        handle_key(key(KeyCode::Char('5')), &mut s);
        assert_eq!(s.active_view, View::Compare);
        handle_key(key(KeyCode::Char('1')), &mut s);
        assert_eq!(s.active_view, View::Value);
    }

    #[test]
    fn brackets_cycle_round() {
        let mut s = state();
        handle_key(key(KeyCode::Char(']')), &mut s);
        assert_eq!(s.round, RoundLabel::Round2);
        handle_key(key(KeyCode::Char('[')), &mut s);
        handle_key(key(KeyCode::Char('[')), &mut s);
        assert_eq!(s.round, RoundLabel::AllRounds);
    }

    #[test]
    fn tab_moves_focus_and_keys_follow_it() {
        let mut s = state();
        handle_key(key(KeyCode::Tab), &mut s);
        assert_eq!(s.focus, Focus::Teams);

        // Untick the second team.
        handle_key(key(KeyCode::Char('j')), &mut s);
        handle_key(key(KeyCode::Char(' ')), &mut s);
        assert!(!s.teams.is_checked(1));
        assert!(!s.selection().teams.contains(&Team::Ireland));
        // Positions untouched.
        assert_eq!(s.positions.checked_count(), s.positions.len());

        handle_key(key(KeyCode::BackTab), &mut s);
        assert_eq!(s.focus, Focus::Positions);
    }

    #[test]
    fn select_all_and_clear() {
        let mut s = state();
        s.focus = Focus::Players;
        handle_key(key(KeyCode::Char('a')), &mut s);
        assert_eq!(s.players.checked_count(), s.players.len());
        handle_key(key(KeyCode::Char('c')), &mut s);
        assert!(s.selected_players().is_empty());
    }

    #[test]
    fn esc_clears_status() {
        let mut s = state();
        s.status_message = Some("Exported somewhere".into());
        handle_key(key(KeyCode::Esc), &mut s);
        assert!(s.status_message.is_none());
    }

    #[test]
    fn release_events_ignored() {
        let mut s = state();
        let mut ev = key(KeyCode::Char('q'));
        ev.kind = KeyEventKind::Release;
        assert_eq!(handle_key(ev, &mut s), None);
    }
}
