use std::io::{Read, Write};

use rusqlite::Connection;
use serde::Deserialize;
use tracing::info;

use crate::{
	error::Result,
	pairing::Pairing,
	standings::StandingRow,
	tournament::{self, MatchRecord},
	PlayerId,
};

#[derive(Debug, Deserialize)]
struct LedgerRow {
	winner: PlayerId,
	loser: PlayerId,
}

/// Reports every `winner,loser` row of a CSV ledger. Either all rows are
/// recorded or none are.
pub fn load_matches<R: Read>(conn: &mut Connection, reader: R) -> Result<usize> {
	let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
	let tx = conn.transaction()?;

	let mut count = 0;
	for record in rdr.deserialize() {
		let row: LedgerRow = record?;
		tournament::report_match(&tx, row.winner, row.loser)?;
		count += 1;
	}

	tx.commit()?;
	info!(count, "loaded matches");
	Ok(count)
}

pub fn write_standings<W: Write>(writer: W, rows: &[StandingRow]) -> Result<()> {
	let mut wtr = csv::Writer::from_writer(writer);
	for row in rows {
		wtr.serialize(row)?;
	}
	wtr.flush()?;
	Ok(())
}

pub fn write_pairings<W: Write>(writer: W, pairings: &[Pairing]) -> Result<()> {
	let mut wtr = csv::Writer::from_writer(writer);
	for pairing in pairings {
		wtr.serialize(pairing)?;
	}
	wtr.flush()?;
	Ok(())
}

pub fn standings_report(rows: &[StandingRow]) -> String {
	let mut string = String::from("# Standings\n```");

	for (rank, row) in rows.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) {} won, {} played",
			rank + 1,
			row.name,
			row.id,
			row.wins,
			row.played
		));
	}

	string.push_str("\n```\n");
	string
}

pub fn pairings_report(pairings: &[Pairing]) -> String {
	let mut string = String::from("# Pairings\n```");

	for (table, pairing) in pairings.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) vs {} (#{})",
			table + 1,
			pairing.first_name,
			pairing.first_id,
			pairing.second_name,
			pairing.second_id
		));
	}

	string.push_str("\n```\n");
	string
}

pub fn ledger_report(matches: &[MatchRecord]) -> String {
	let mut string = String::from("# Matches\n```");

	for record in matches {
		string.push_str(&format!(
			"\n{} {}: #{} beat #{}",
			record.reported_at.format("%Y-%m-%d %H:%M:%S"),
			record.id,
			record.winner,
			record.loser
		));
	}

	string.push_str("\n```\n");
	string
}
