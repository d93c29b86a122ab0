//! Ordering of the per-player win records.
//!
//! Two orderings exist on purpose and must not be merged: pairings are built
//! from [`pairing_order`], while the displayed leaderboard uses
//! [`display_order`], which may replace the win-count ordering with a win
//! ratio ordering when the two leaders are tied.

use std::cmp::Ordering;

use clap::ValueEnum;
use serde::Serialize;

use crate::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingRow {
	pub id: PlayerId,
	pub name: String,
	pub wins: u32,
	pub played: u32,
}

impl StandingRow {
	/// Wins divided by matches played, `0.0` for a player who has not played.
	pub fn win_ratio(&self) -> f64 {
		if self.played == 0 {
			return 0.0;
		}
		f64::from(self.wins) / f64::from(self.played)
	}
}

/// Secondary ordering between players with the same number of wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TieBreak {
	/// Ascending player id. Ids are assigned in registration order.
	#[default]
	Registration,
	/// Player name, then id for players sharing a name.
	Name,
}

impl TieBreak {
	fn compare(self, a: &StandingRow, b: &StandingRow) -> Ordering {
		match self {
			TieBreak::Registration => a.id.cmp(&b.id),
			TieBreak::Name => a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)),
		}
	}
}

/// Wins descending, then `tie_break`. This is the order pairings are drawn from.
pub fn pairing_order(mut rows: Vec<StandingRow>, tie_break: TieBreak) -> Vec<StandingRow> {
	rows.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| tie_break.compare(a, b)));
	rows
}

/// The leaderboard order.
///
/// Starts from [`pairing_order`]. If the first two rows share a non-zero win
/// count, the whole list is re-sorted by win ratio, descending. The sort is
/// stable, so rows with equal ratios keep their win-count order.
pub fn display_order(rows: Vec<StandingRow>, tie_break: TieBreak) -> Vec<StandingRow> {
	let mut rows = pairing_order(rows, tie_break);

	if leaders_tied(&rows) {
		rows.sort_by(|a, b| b.win_ratio().total_cmp(&a.win_ratio()));
	}

	rows
}

/// The guard is on `wins`, not `played`: with no matches reported every
/// player ties at zero and the order is left alone.
fn leaders_tied(rows: &[StandingRow]) -> bool {
	match rows {
		[first, second, ..] => first.wins != 0 && first.wins == second.wins,
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row(id: PlayerId, name: &str, wins: u32, played: u32) -> StandingRow {
		StandingRow {
			id,
			name: name.to_string(),
			wins,
			played,
		}
	}

	fn ids(rows: &[StandingRow]) -> Vec<PlayerId> {
		rows.iter().map(|r| r.id).collect()
	}

	#[test]
	fn empty_standings_stay_empty() {
		assert!(display_order(Vec::new(), TieBreak::Registration).is_empty());
		assert!(pairing_order(Vec::new(), TieBreak::Registration).is_empty());
	}

	#[test]
	fn single_row_is_not_refined() {
		let rows = display_order(vec![row(1, "Solo", 3, 4)], TieBreak::Registration);
		assert_eq!(ids(&rows), vec![1]);
	}

	#[test]
	fn orders_by_wins_then_registration() {
		let rows = vec![
			row(1, "Alice", 0, 2),
			row(2, "Bob", 2, 2),
			row(3, "Carol", 1, 2),
			row(4, "Dave", 1, 2),
		];
		let ordered = pairing_order(rows, TieBreak::Registration);
		assert_eq!(ids(&ordered), vec![2, 3, 4, 1]);
	}

	#[test]
	fn name_tie_break_falls_back_to_id() {
		let rows = vec![
			row(3, "Zed", 1, 1),
			row(2, "Amy", 1, 1),
			row(1, "Amy", 1, 1),
			row(4, "Bo", 2, 2),
		];
		let ordered = pairing_order(rows, TieBreak::Name);
		assert_eq!(ids(&ordered), vec![4, 1, 2, 3]);
	}

	#[test]
	fn tied_leaders_trigger_ratio_ordering() {
		// Alice leads on wins but has played more.
		let rows = vec![
			row(1, "Alice", 2, 3),
			row(2, "Bob", 2, 2),
			row(3, "Carol", 1, 1),
			row(4, "Dave", 0, 3),
		];

		let pairing = pairing_order(rows.clone(), TieBreak::Registration);
		assert_eq!(ids(&pairing), vec![1, 2, 3, 4]);

		let display = display_order(rows, TieBreak::Registration);
		assert_eq!(ids(&display), vec![2, 3, 1, 4]);
	}

	#[test]
	fn ties_below_the_top_do_not_trigger_refinement() {
		let rows = vec![
			row(1, "Alice", 3, 3),
			row(2, "Bob", 1, 3),
			row(3, "Carol", 1, 1),
		];
		let display = display_order(rows, TieBreak::Registration);
		assert_eq!(ids(&display), vec![1, 2, 3]);
	}

	#[test]
	fn zero_win_leaders_are_left_alone() {
		let rows = vec![
			row(1, "Alice", 0, 0),
			row(2, "Bob", 0, 1),
			row(3, "Carol", 0, 0),
		];
		let display = display_order(rows, TieBreak::Registration);
		assert_eq!(ids(&display), vec![1, 2, 3]);
	}

	#[test]
	fn unplayed_rows_have_zero_ratio() {
		assert_eq!(row(1, "Alice", 0, 0).win_ratio(), 0.0);
		assert_eq!(row(1, "Alice", 1, 4).win_ratio(), 0.25);
	}

	#[test]
	fn refinement_with_unplayed_players_does_not_divide_by_zero() {
		let rows = vec![
			row(1, "Alice", 1, 1),
			row(2, "Bob", 1, 2),
			row(3, "Carol", 0, 0),
			row(4, "Dave", 0, 1),
		];
		let display = display_order(rows, TieBreak::Registration);
		assert_eq!(ids(&display), vec![1, 2, 3, 4]);
	}
}
