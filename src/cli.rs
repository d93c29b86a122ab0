use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use swiss_tournament::{PlayerId, TieBreak};

#[derive(Parser)]
#[command(author, version, about = "Swiss-system tournament tracker", long_about = None)]
pub struct Cli {
	#[arg(
		short,
		long,
		value_name = "FILE",
		env = "TOURNAMENT_DB",
		default_value = "tournament.db"
	)]
	pub database: PathBuf,

	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,

	/// Order between players with the same number of wins
	#[arg(long, value_enum, default_value_t = TieBreak::Registration)]
	pub tie_break: TieBreak,

	#[arg(long, value_enum, default_value_t = Format::Text)]
	pub format: Format,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
	Text,
	Csv,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Register a new player
	Register { name: String },
	/// Record the result of one match
	Report { winner: PlayerId, loser: PlayerId },
	/// Print the number of registered players
	Count,
	/// Print the standings
	Standings,
	/// Print the pairings for the next round
	Pairings,
	/// Print every reported match
	Ledger,
	/// Report every match in a `winner,loser` CSV file
	Load {
		#[arg(value_name = "FILE")]
		matches: PathBuf,
	},
	/// Delete all matches
	ResetMatches,
	/// Delete all players
	ResetPlayers,
}
