use std::path::PathBuf;

use rusqlite::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("could not open database {}: {source}", .path.display())]
	Connection {
		path: PathBuf,
		#[source]
		source: rusqlite::Error,
	},

	#[error("database error: {0}")]
	Store(#[from] rusqlite::Error),

	#[error("csv error: {0}")]
	Csv(#[from] csv::Error),

	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),
}

impl Error {
	/// True when the store rejected a write because of a foreign key, CHECK or
	/// NOT NULL constraint, e.g. a match naming an unknown player.
	pub fn is_constraint_violation(&self) -> bool {
		match self {
			Error::Store(rusqlite::Error::SqliteFailure(e, _)) => {
				e.code == ErrorCode::ConstraintViolation
			}
			_ => false,
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
