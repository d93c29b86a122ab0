use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::error::{Error, Result};

/// Opens (or creates) the tournament database at `path` and makes sure the
/// schema exists.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
	let path = path.as_ref();
	debug!(path = %path.display(), "opening tournament database");

	let conn = Connection::open(path).map_err(|source| Error::Connection {
		path: path.to_path_buf(),
		source,
	})?;

	prepare(conn)
}

pub fn open_in_memory() -> Result<Connection> {
	let conn = Connection::open_in_memory().map_err(|source| Error::Connection {
		path: ":memory:".into(),
		source,
	})?;

	prepare(conn)
}

fn prepare(mut conn: Connection) -> Result<Connection> {
	conn.pragma_update(None, "foreign_keys", true)?;
	create_schema(&mut conn)?;
	Ok(conn)
}

pub fn create_schema(conn: &mut Connection) -> Result<()> {
	let tx = conn.transaction()?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS players (
			id            INTEGER PRIMARY KEY AUTOINCREMENT,
			name          TEXT    NOT NULL,
			registered_at         NOT NULL
		);",
		[],
	)?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS matches (
			id          INTEGER PRIMARY KEY AUTOINCREMENT,
			winner      INTEGER REFERENCES players (id)
							   NOT NULL,
			loser       INTEGER REFERENCES players (id)
							   NOT NULL,
			reported_at        NOT NULL,
			CHECK (winner <> loser)
		);",
		[],
	)?;

	// One row per registered player, including those without any matches.
	tx.execute(
		"CREATE VIEW IF NOT EXISTS statuses AS
		SELECT p.id,
			   p.name,
			   (SELECT COUNT(*) FROM matches m WHERE m.winner = p.id) AS won,
			   (SELECT COUNT(*) FROM matches m
				 WHERE m.winner = p.id OR m.loser = p.id) AS played
		  FROM players p;",
		[],
	)?;

	tx.commit()?;
	Ok(())
}
