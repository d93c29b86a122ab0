//! Tournament operations.
//!
//! Every function takes the connection it works on. Each statement commits on
//! its own; callers that need several operations to succeed or fail together
//! can pass a [`rusqlite::Transaction`], which derefs to a [`Connection`].

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use tracing::{debug, info, warn};

use crate::{
	error::Result,
	pairing::{self, Pairing},
	standings::{self, StandingRow, TieBreak},
	MatchId, PlayerId,
};

/// One entry of the match ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
	pub id: MatchId,
	pub winner: PlayerId,
	pub loser: PlayerId,
	pub reported_at: DateTime<Utc>,
}

pub fn delete_matches(conn: &Connection) -> Result<()> {
	let removed = conn.execute("DELETE FROM matches;", [])?;
	info!(removed, "deleted all matches");
	Ok(())
}

/// Fails with a constraint violation while matches still reference players.
pub fn delete_players(conn: &Connection) -> Result<()> {
	let removed = conn.execute("DELETE FROM players;", [])?;
	info!(removed, "deleted all players");
	Ok(())
}

pub fn count_players(conn: &Connection) -> Result<usize> {
	let count = conn.query_row("SELECT COUNT(*) FROM players;", [], |row| {
		row.get::<_, usize>(0)
	})?;
	Ok(count)
}

/// Adds a player and returns the id the database assigned. Names need not be
/// unique.
pub fn register_player(conn: &Connection, name: &str) -> Result<PlayerId> {
	let mut stmt = conn.prepare(
		"INSERT INTO players (name, registered_at)
		 VALUES (?1, ?2);",
	)?;
	stmt.execute(params![name, Utc::now()])?;

	let id = conn.last_insert_rowid();
	info!(id, name, "registered player");
	Ok(id)
}

/// Appends one match to the ledger. Unknown players and self-matches are
/// rejected by the store's constraints, not here.
pub fn report_match(conn: &Connection, winner: PlayerId, loser: PlayerId) -> Result<MatchId> {
	let mut stmt = conn.prepare(
		"INSERT INTO matches (winner, loser, reported_at)
		 VALUES (?1, ?2, ?3);",
	)?;
	stmt.execute(params![winner, loser, Utc::now()])?;

	let id = conn.last_insert_rowid();
	info!(id, winner, loser, "reported match");
	Ok(id)
}

/// The whole ledger in the order it was reported.
pub fn list_matches(conn: &Connection) -> Result<Vec<MatchRecord>> {
	let mut stmt =
		conn.prepare("SELECT id, winner, loser, reported_at FROM matches ORDER BY id;")?;

	let matches = stmt
		.query_map([], |row| {
			Ok(MatchRecord {
				id: row.get(0)?,
				winner: row.get(1)?,
				loser: row.get(2)?,
				reported_at: row.get(3)?,
			})
		})?
		.collect::<rusqlite::Result<Vec<_>>>()?;

	Ok(matches)
}

/// The leaderboard: players by wins, with the win ratio refinement applied
/// when the two leaders are tied.
pub fn player_standings(conn: &Connection, tie_break: TieBreak) -> Result<Vec<StandingRow>> {
	let rows = statuses(conn)?;
	Ok(standings::display_order(rows, tie_break))
}

/// Next-round pairings of neighbours in win order. The leaderboard's ratio
/// refinement is deliberately not applied here.
pub fn swiss_pairings(conn: &Connection, tie_break: TieBreak) -> Result<Vec<Pairing>> {
	let rows = standings::pairing_order(statuses(conn)?, tie_break);

	if let Some(left_out) = pairing::unpaired(&rows) {
		warn!(
			id = left_out.id,
			name = %left_out.name,
			"odd number of players, last player is not paired"
		);
	}

	Ok(pairing::pair_adjacent(&rows))
}

fn statuses(conn: &Connection) -> Result<Vec<StandingRow>> {
	let mut stmt = conn.prepare("SELECT id, name, won, played FROM statuses;")?;

	let rows = stmt
		.query_map([], standing_from_row)?
		.collect::<rusqlite::Result<Vec<_>>>()?;

	debug!(players = rows.len(), "fetched statuses");
	Ok(rows)
}

fn standing_from_row(row: &Row) -> rusqlite::Result<StandingRow> {
	Ok(StandingRow {
		id: row.get(0)?,
		name: row.get(1)?,
		wins: row.get(2)?,
		played: row.get(3)?,
	})
}
