mod cli;

use std::{
	fs::File,
	io::{self, Write},
};

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, Format};
use swiss_tournament::{data, db, tournament};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(io::stderr)
		.init();

	let cli = Cli::parse();

	let mut conn = db::open(&cli.database)?;

	let mut out = match cli.output.as_deref() {
		Some(path) => Box::new(
			File::create(path).with_context(|| format!("could not create {}", path.display()))?,
		) as Box<dyn Write>,
		None => Box::new(io::stdout()) as Box<dyn Write>,
	};

	match cli.command {
		Commands::Register { name } => {
			let id = tournament::register_player(&conn, &name)?;
			writeln!(out, "{id}")?;
		}
		Commands::Report { winner, loser } => {
			tournament::report_match(&conn, winner, loser)?;
		}
		Commands::Count => {
			writeln!(out, "{}", tournament::count_players(&conn)?)?;
		}
		Commands::Standings => {
			let rows = tournament::player_standings(&conn, cli.tie_break)?;
			match cli.format {
				Format::Text => out.write_all(data::standings_report(&rows).as_bytes())?,
				Format::Csv => data::write_standings(&mut out, &rows)?,
			}
		}
		Commands::Pairings => {
			let pairings = tournament::swiss_pairings(&conn, cli.tie_break)?;
			match cli.format {
				Format::Text => out.write_all(data::pairings_report(&pairings).as_bytes())?,
				Format::Csv => data::write_pairings(&mut out, &pairings)?,
			}
		}
		Commands::Ledger => {
			let matches = tournament::list_matches(&conn)?;
			out.write_all(data::ledger_report(&matches).as_bytes())?;
		}
		Commands::Load { matches } => {
			let file = File::open(&matches)
				.with_context(|| format!("could not open {}", matches.display()))?;
			let count = data::load_matches(&mut conn, file)?;
			writeln!(out, "{count}")?;
		}
		Commands::ResetMatches => tournament::delete_matches(&conn)?,
		Commands::ResetPlayers => tournament::delete_players(&conn)?,
	}

	out.flush()?;
	Ok(())
}
