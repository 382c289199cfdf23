// Terminal dashboard: view state, layout, input handling and chart widgets.
//
// The TUI owns every piece of widget state (round selector, position/team
// multi-selects, player multi-select) and hands it to the core as an
// explicit `Selection` on each recompute. The core returns a `ChartSpec`
// which the widgets draw at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tracing::{error, info};

use scrumcast_core::chart::ChartSpec;
use scrumcast_core::config::Config;
use scrumcast_core::dashboard::View;
use scrumcast_core::dataset::{Position, Team};
use scrumcast_core::export::{default_stem, write_chart};
use scrumcast_core::{Dashboard, RoundLabel, Selection};

use layout::build_layout;

/// Players ticked in the comparison picker at startup.
const INITIAL_COMPARE: usize = 2;

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Actions the event loop performs on behalf of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Quit,
    Export,
}

// ---------------------------------------------------------------------------
// Pickers
// ---------------------------------------------------------------------------

/// Which multi-select receives cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Positions,
    Teams,
    Players,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Positions => Focus::Teams,
            Focus::Teams => Focus::Players,
            Focus::Players => Focus::Positions,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Positions => Focus::Players,
            Focus::Teams => Focus::Positions,
            Focus::Players => Focus::Teams,
        }
    }
}

/// A checkbox list with a cursor.
#[derive(Debug, Clone)]
pub struct PickList<T> {
    items: Vec<T>,
    checked: Vec<bool>,
    cursor: usize,
}

impl<T: Clone> PickList<T> {
    pub fn new(items: Vec<T>, all_checked: bool) -> Self {
        let checked = vec![all_checked; items.len()];
        PickList {
            items,
            checked,
            cursor: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn toggle(&mut self) {
        if let Some(c) = self.checked.get_mut(self.cursor) {
            *c = !*c;
        }
    }

    pub fn set_checked(&mut self, index: usize, value: bool) {
        if let Some(c) = self.checked.get_mut(index) {
            *c = value;
        }
    }

    pub fn set_all(&mut self, value: bool) {
        self.checked.iter_mut().for_each(|c| *c = value);
    }

    /// Checked items in list order.
    pub fn selected(&self) -> Vec<T> {
        self.items
            .iter()
            .zip(&self.checked)
            .filter(|(_, c)| **c)
            .map(|(item, _)| item.clone())
            .collect()
    }

    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state read by `render_frame`.
pub struct ViewState {
    /// Selected round.
    pub round: RoundLabel,
    /// Which view is shown in the chart panel.
    pub active_view: View,
    /// Picker that receives j/k/space/a/c.
    pub focus: Focus,
    pub positions: PickList<Position>,
    pub teams: PickList<Team>,
    pub players: PickList<String>,
    /// Last chart built for the active view.
    pub chart: Option<ChartSpec>,
    /// One-line message under the chart (errors, export results).
    pub status_message: Option<String>,
    /// Where `e` writes chart JSON.
    pub export_dir: PathBuf,
}

impl ViewState {
    /// Initial state: every position and team ticked, the first two players
    /// ticked for comparison.
    pub fn new(dashboard: &Dashboard, default_round: RoundLabel, export_dir: PathBuf) -> Self {
        let names: Vec<String> = dashboard
            .player_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let mut players = PickList::new(names, false);
        for i in 0..INITIAL_COMPARE.min(players.len()) {
            players.set_checked(i, true);
        }

        ViewState {
            round: default_round,
            active_view: View::Value,
            focus: Focus::Positions,
            positions: PickList::new(dashboard.positions(), true),
            teams: PickList::new(dashboard.teams(), true),
            players,
            chart: None,
            status_message: None,
            export_dir,
        }
    }

    /// The filter choices as passed to the core.
    pub fn selection(&self) -> Selection {
        Selection::new(self.round, self.positions.selected(), self.teams.selected())
    }

    pub fn selected_players(&self) -> Vec<String> {
        self.players.selected()
    }

    /// Rebuild the chart for the active view from the current selection.
    pub fn recompute(&mut self, dashboard: &Dashboard) {
        let selection = self.selection();
        let names = self.selected_players();
        match dashboard.chart(self.active_view, &selection, &names) {
            Ok(spec) => self.chart = Some(spec),
            Err(e) => {
                error!("chart build failed: {}", e);
                self.chart = None;
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Write the current chart to the export directory.
    pub fn export(&mut self) {
        let Some(spec) = &self.chart else {
            self.status_message = Some("Nothing to export".to_string());
            return;
        };
        let stem = default_stem(spec);
        self.status_message = Some(match write_chart(spec, &self.export_dir, &stem) {
            Ok(path) => format!("Exported {}", path.display()),
            Err(e) => {
                error!("export failed: {}", e);
                format!("Export failed: {e}")
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::render_chart(frame, layout.chart, state);
    widgets::picker::render(
        frame,
        layout.positions,
        "Positions",
        &state.positions,
        |p| p.display_str().to_string(),
        state.focus == Focus::Positions,
    );
    widgets::picker::render(
        frame,
        layout.teams,
        "Teams",
        &state.teams,
        |t| t.name().to_string(),
        state.focus == Focus::Teams,
    );
    widgets::picker::render(
        frame,
        layout.players,
        "Players",
        &state.players,
        |n| n.clone(),
        state.focus == Focus::Players,
    );
    widgets::help_bar::render(frame, layout.help_bar, state);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the dashboard until the user quits.
///
/// 1. Initializes the terminal and a panic hook that restores it.
/// 2. Builds the first chart.
/// 3. Selects over keyboard input and a ~30 fps render tick; every key
///    press is followed by one full recompute.
/// 4. Restores the terminal on exit.
pub async fn run(dashboard: Dashboard, config: &Config) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::new(
        &dashboard,
        config.default_round,
        PathBuf::from(&config.export_dir),
    );
    view_state.recompute(&dashboard);

    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        match input::handle_key(key_event, &mut view_state) {
                            Some(UserCommand::Quit) => break,
                            Some(UserCommand::Export) => view_state.export(),
                            None => view_state.recompute(&dashboard),
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        error!("input error: {}", e);
                        break;
                    }
                    None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();
    info!("dashboard closed");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
