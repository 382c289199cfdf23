// Filter stage: narrows the base table to the rows a view should show.

use std::collections::BTreeSet;

use crate::dataset::{PlayerRecord, Position, Team};
use crate::rounds::{Column, RoundLabel};

/// The user's current filter choices, passed explicitly to every view.
///
/// Empty position or team sets are legal and select nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub round: RoundLabel,
    pub positions: BTreeSet<Position>,
    pub teams: BTreeSet<Team>,
}

impl Selection {
    pub fn new(
        round: RoundLabel,
        positions: impl IntoIterator<Item = Position>,
        teams: impl IntoIterator<Item = Team>,
    ) -> Self {
        Selection {
            round,
            positions: positions.into_iter().collect(),
            teams: teams.into_iter().collect(),
        }
    }

    /// Every position and every team for the given round.
    pub fn everything(round: RoundLabel) -> Self {
        Selection::new(round, Position::ALL, Team::ALL)
    }

    /// Position and team predicates only (ignores the played check).
    pub fn admits(&self, record: &PlayerRecord) -> bool {
        self.positions.contains(&record.position) && self.teams.contains(&record.team)
    }
}

/// Whether the player has a nonzero recorded value in `points`.
///
/// An empty cell counts as not played.
pub fn has_played(record: &PlayerRecord, points: Column) -> bool {
    record.value(points).nonzero().is_some()
}

/// Rows matching the selection's positions and teams that also played in
/// the selected round. Order follows the base table.
pub fn filter_played<'a>(players: &'a [PlayerRecord], selection: &Selection) -> Vec<&'a PlayerRecord> {
    let points = selection.round.columns().points;
    players
        .iter()
        .filter(|p| selection.admits(p) && has_played(p, points))
        .collect()
}

/// The played subset for a round, with no position/team narrowing.
pub fn played_in<'a>(players: &'a [PlayerRecord], round: RoundLabel) -> Vec<&'a PlayerRecord> {
    let points = round.columns().points;
    players.iter().filter(|p| has_played(p, points)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RoundEntry;

    fn player(name: &str, team: Team, position: Position, round1_points: Option<f64>) -> PlayerRecord {
        let mut p = PlayerRecord::new(name, team, position);
        p.rounds[0] = RoundEntry {
            price: Some(10.0),
            points: round1_points,
        };
        p.points_per_round_all_rounds = round1_points.unwrap_or(0.0);
        p
    }

    fn table() -> Vec<PlayerRecord> {
        vec![
            player("A", Team::France, Position::BackRow, Some(12.0)),
            player("B", Team::France, Position::Prop, Some(0.0)),
            player("C", Team::Wales, Position::BackRow, None),
            player("D", Team::Ireland, Position::Centre, Some(-2.0)),
            player("E", Team::Wales, Position::Prop, Some(7.0)),
        ]
    }

    fn names(rows: &[&PlayerRecord]) -> Vec<String> {
        rows.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn keeps_only_matching_played_rows() {
        let players = table();
        let sel = Selection::new(
            RoundLabel::Round1,
            [Position::BackRow, Position::Prop],
            [Team::France, Team::Wales],
        );
        let rows = filter_played(&players, &sel);
        assert_eq!(names(&rows), vec!["A", "E"]);
        for p in rows {
            assert!(sel.positions.contains(&p.position));
            assert!(sel.teams.contains(&p.team));
            assert!(has_played(p, Column::PointsRound(1)));
        }
    }

    #[test]
    fn full_selection_equals_played_subset() {
        let players = table();
        let sel = Selection::everything(RoundLabel::Round1);
        let filtered = filter_played(&players, &sel);
        let played = played_in(&players, RoundLabel::Round1);
        assert_eq!(filtered, played);
        assert_eq!(names(&filtered), vec!["A", "D", "E"]);
    }

    #[test]
    fn empty_position_set_yields_empty_view() {
        let players = table();
        let sel = Selection::new(RoundLabel::Round1, Vec::<Position>::new(), Team::ALL);
        assert!(filter_played(&players, &sel).is_empty());
    }

    #[test]
    fn round_without_data_yields_empty_view() {
        let players = table();
        let sel = Selection::everything(RoundLabel::Round4);
        assert!(filter_played(&players, &sel).is_empty());
    }

    #[test]
    fn all_rounds_reads_season_points() {
        let players = table();
        let rows = filter_played(&players, &Selection::everything(RoundLabel::AllRounds));
        assert_eq!(names(&rows), vec!["A", "D", "E"]);
    }

    #[test]
    fn filtering_leaves_base_table_untouched() {
        let players = table();
        let before = players.clone();
        let _ = filter_played(&players, &Selection::new(RoundLabel::Round1, [Position::Prop], [Team::Wales]));
        assert_eq!(players, before);
    }
}
