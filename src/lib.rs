//! Player registration, match recording, standings and next-round pairings
//! for a Swiss-system tournament kept in SQLite.

pub mod data;
pub mod db;
pub mod error;
pub mod pairing;
pub mod standings;
pub mod tournament;

pub use error::{Error, Result};
pub use pairing::Pairing;
pub use standings::{StandingRow, TieBreak};
pub use tournament::{
	count_players, delete_matches, delete_players, list_matches, player_standings,
	register_player, report_match, swiss_pairings, MatchRecord,
};

pub type PlayerId = i64;
pub type MatchId = i64;
