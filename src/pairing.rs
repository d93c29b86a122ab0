use serde::Serialize;

use crate::{standings::StandingRow, PlayerId};

/// Two players drawn against each other for the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
	pub first_id: PlayerId,
	pub first_name: String,
	pub second_id: PlayerId,
	pub second_name: String,
}

impl Pairing {
	fn new(first: &StandingRow, second: &StandingRow) -> Self {
		Self {
			first_id: first.id,
			first_name: first.name.clone(),
			second_id: second.id,
			second_name: second.name.clone(),
		}
	}
}

/// Pairs rows `(0, 1), (2, 3), ...` in the given order.
///
/// With an odd number of rows the last one is left out; no bye is awarded.
pub fn pair_adjacent(rows: &[StandingRow]) -> Vec<Pairing> {
	rows.chunks_exact(2)
		.map(|pair| Pairing::new(&pair[0], &pair[1]))
		.collect()
}

/// The row [`pair_adjacent`] leaves out, if any.
pub fn unpaired(rows: &[StandingRow]) -> Option<&StandingRow> {
	rows.chunks_exact(2).remainder().first()
}
