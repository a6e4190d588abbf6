use std::collections::HashMap;
use std::str::FromStr;

use lazy_static::lazy_static;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::cube::Face;

/// Which layers along the turn axis a move grabs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Layers {
	/// Every layer: the whole-cube turns X, Y and Z.
	All,
	/// The outer layer of the move's face: a standard face turn.
	Outer,
	/// The middle layer at coordinate 0 (M, E, S).
	/// Matches no unit on even-sized cubes, which have no such layer.
	Middle,
	/// Outer and middle layer together: a wide turn (lowercase notation).
	Wide,
}

impl Layers {
	/// Whether a unit at the signed layer `coordinate` belongs to the
	/// selection; `extent` is the outermost coordinate of the cube.
	pub fn selects(self, coordinate: f64, extent: f64) -> bool {
		match self {
			Layers::All => true,
			Layers::Outer => coordinate == extent,
			Layers::Middle => coordinate == 0.0,
			Layers::Wide => coordinate == extent || coordinate == 0.0,
		}
	}
}

/// A single move: a face (naming the turn axis), a layer selection, a turn
/// count and a direction.
///
/// Moves are immutable value objects; every transformation below returns a
/// new move. The turn count is always normalized into `{0, 1, 2}` with the
/// direction absorbed into `inverted`, so two moves built from turn counts
/// that differ by a multiple of four behave identically.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
	face: Face,
	layers: Layers,
	times: u8,
	inverted: bool,
}

impl Move {
	/// Construct a move from an arbitrary integer turn count.
	///
	/// The count is reduced modulo 4 into the representatives `{-1, 0, 1, 2}`;
	/// a negative representative is negated and its sign flips `inverted`.
	/// A count of 0 survives as a degenerate identity move.
	pub fn new(face: Face, layers: Layers, times: i32, inverted: bool) -> Self {
		let mut times = (times.rem_euclid(4) + 1).rem_euclid(4) - 1;
		let mut inverted = inverted;

		if times < 0 {
			times = -times;
			inverted = !inverted;
		}

		Self {
			face,
			layers,
			times: times as u8,
			inverted,
		}
	}

	/// An outer-layer quarter turn of the given face.
	pub fn quarter(face: Face) -> Self {
		Self::new(face, Layers::Outer, 1, false)
	}

	/// A middle-slice quarter turn on the given face's axis.
	/// M, E and S are the slices of Left, Down and Front.
	pub fn slice(face: Face) -> Self {
		Self::new(face, Layers::Middle, 1, false)
	}

	/// The same move as a half turn.
	pub fn half(self) -> Self {
		Self { times: 2, ..self }
	}

	/// The move turning the other way round; its own structural inverse.
	pub fn inverted(self) -> Self {
		Self {
			inverted: !self.inverted,
			..self
		}
	}

	/// The same turn grabbing the outer and middle layer (wide turn).
	pub fn wide(self) -> Self {
		Self {
			layers: Layers::Wide,
			..self
		}
	}

	/// The same turn grabbing every layer (whole-cube turn).
	pub fn whole_cube(self) -> Self {
		Self {
			layers: Layers::All,
			..self
		}
	}

	pub fn face(&self) -> Face {
		self.face
	}

	pub fn layers(&self) -> Layers {
		self.layers
	}

	/// The normalized turn count, one of `{0, 1, 2}`.
	pub fn times(&self) -> u8 {
		self.times
	}

	pub fn is_inverted(&self) -> bool {
		self.inverted
	}
}

impl std::fmt::Display for Move {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		// Slice and whole-cube letters are tied to one axis sign each;
		// the same turn on the opposite face is that letter inverted.
		let (letter, flip) = match (self.layers, self.face) {
			(Layers::Middle, Face::Left) => ('M', false),
			(Layers::Middle, Face::Right) => ('M', true),
			(Layers::Middle, Face::Down) => ('E', false),
			(Layers::Middle, Face::Up) => ('E', true),
			(Layers::Middle, Face::Front) => ('S', false),
			(Layers::Middle, Face::Back) => ('S', true),
			(Layers::All, Face::Right) => ('X', false),
			(Layers::All, Face::Left) => ('X', true),
			(Layers::All, Face::Up) => ('Y', false),
			(Layers::All, Face::Down) => ('Y', true),
			(Layers::All, Face::Front) => ('Z', false),
			(Layers::All, Face::Back) => ('Z', true),
			(Layers::Wide, face) => (face.initial().to_ascii_lowercase(), false),
			(Layers::Outer, face) => (face.initial(), false),
		};

		write!(f, "{}", letter)?;
		if self.times == 2 {
			write!(f, "2")?;
		} else if self.inverted != flip && self.times == 1 {
			write!(f, "'")?;
		}
		Ok(())
	}
}

/// The move a token denotes, or an unrecognized-token error.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NotationError {
	#[error("unrecognized move token \"{0}\"")]
	UnrecognizedToken(String),
}

lazy_static! {
	/// The fixed token → move table. Built once on first use and read-only
	/// afterwards; every entry is a normalized move value.
	static ref NOTATION: HashMap<String, Move> = {
		let base = [
			('U', Move::quarter(Face::Up)),
			('D', Move::quarter(Face::Down)),
			('F', Move::quarter(Face::Front)),
			('B', Move::quarter(Face::Back)),
			('L', Move::quarter(Face::Left)),
			('R', Move::quarter(Face::Right)),
			('u', Move::quarter(Face::Up).wide()),
			('d', Move::quarter(Face::Down).wide()),
			('f', Move::quarter(Face::Front).wide()),
			('b', Move::quarter(Face::Back).wide()),
			('l', Move::quarter(Face::Left).wide()),
			('r', Move::quarter(Face::Right).wide()),
			('M', Move::slice(Face::Left)),
			('E', Move::slice(Face::Down)),
			('S', Move::slice(Face::Front)),
			('X', Move::quarter(Face::Right).whole_cube()),
			('Y', Move::quarter(Face::Up).whole_cube()),
			('Z', Move::quarter(Face::Front).whole_cube()),
		];

		let mut table = HashMap::new();
		for (letter, mv) in base {
			table.insert(letter.to_string(), mv);
			table.insert(format!("{letter}2"), mv.half());
			table.insert(format!("{letter}'"), mv.inverted());
		}
		table
	};
}

impl FromStr for Move {
	type Err = NotationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		NOTATION
			.get(s)
			.copied()
			.ok_or_else(|| NotationError::UnrecognizedToken(s.to_string()))
	}
}

/// Parse a whitespace-separated sequence of move tokens.
///
/// The whole sequence is materialized before returning: one bad token fails
/// the entire parse, so a caller never applies half a sequence.
pub fn parse_moves(sequence: &str) -> Result<Vec<Move>, NotationError> {
	sequence.split_whitespace().map(Move::from_str).collect()
}

/// Generate a random sequence of outer-layer turns of the given length.
pub fn random_sequence(length: usize) -> Vec<Move> {
	let mut rng = rand::thread_rng();
	let faces: Vec<Face> = Face::iter().collect();

	(0..length)
		.map(|_| {
			let face = faces[rng.gen_range(0..faces.len())];
			Move::new(face, Layers::Outer, rng.gen_range(1..=2), rng.gen_bool(0.5))
		})
		.collect()
}

// ===== Tests =====

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_the_basic_turns() {
		let mv = Move::from_str("U").unwrap();
		assert_eq!(mv.face(), Face::Up);
		assert_eq!(mv.layers(), Layers::Outer);
		assert_eq!(mv.times(), 1);
		assert!(!mv.is_inverted());

		let mv = Move::from_str("F2").unwrap();
		assert_eq!(mv.times(), 2);
		assert!(!mv.is_inverted());

		let mv = Move::from_str("R'").unwrap();
		assert_eq!(mv.times(), 1);
		assert!(mv.is_inverted());
	}

	#[test]
	fn parses_slices_wides_and_rotations() {
		let mv = Move::from_str("M").unwrap();
		assert_eq!(mv.face(), Face::Left);
		assert_eq!(mv.layers(), Layers::Middle);

		let mv = Move::from_str("E'").unwrap();
		assert_eq!(mv.face(), Face::Down);
		assert!(mv.is_inverted());

		let mv = Move::from_str("S2").unwrap();
		assert_eq!(mv.face(), Face::Front);
		assert_eq!(mv.times(), 2);

		let mv = Move::from_str("r").unwrap();
		assert_eq!(mv.face(), Face::Right);
		assert_eq!(mv.layers(), Layers::Wide);

		let mv = Move::from_str("X").unwrap();
		assert_eq!(mv.face(), Face::Right);
		assert_eq!(mv.layers(), Layers::All);

		let mv = Move::from_str("Y2").unwrap();
		assert_eq!(mv.face(), Face::Up);
		assert_eq!(mv.times(), 2);

		let mv = Move::from_str("Z'").unwrap();
		assert_eq!(mv.face(), Face::Front);
		assert!(mv.is_inverted());
	}

	#[test]
	fn rejects_tokens_outside_the_grammar() {
		for bad in ["Q", "U3", "''", "u'2", "R2'", "UU", "2", "'"] {
			assert_eq!(
				Move::from_str(bad),
				Err(NotationError::UnrecognizedToken(bad.to_string())),
				"token {bad:?} should not parse",
			);
		}
	}

	#[test]
	fn sequence_parsing_is_all_or_nothing() {
		let moves = parse_moves("  R U2\t R'\n  M ").unwrap();
		assert_eq!(moves.len(), 4);

		assert!(parse_moves("R U Q R'").is_err());
		assert!(parse_moves("").unwrap().is_empty());
	}

	#[test]
	fn turn_counts_are_normalized_modulo_four() {
		for times in -9..=9 {
			let mv = Move::new(Face::Up, Layers::Outer, times, false);
			let canonical = Move::new(Face::Up, Layers::Outer, times + 4, false);
			assert_eq!(mv, canonical, "times {times} and {} differ", times + 4);
			assert!(mv.times() <= 2);
		}

		let mv = Move::new(Face::Up, Layers::Outer, -1, false);
		assert_eq!((mv.times(), mv.is_inverted()), (1, true));

		let mv = Move::new(Face::Up, Layers::Outer, -2, false);
		assert_eq!((mv.times(), mv.is_inverted()), (2, false));

		let mv = Move::new(Face::Up, Layers::Outer, 3, false);
		assert_eq!((mv.times(), mv.is_inverted()), (1, true));

		let mv = Move::new(Face::Up, Layers::Outer, 5, true);
		assert_eq!((mv.times(), mv.is_inverted()), (1, true));

		// the degenerate identity move is reachable and harmless
		let mv = Move::new(Face::Up, Layers::Outer, 4, false);
		assert_eq!((mv.times(), mv.is_inverted()), (0, false));
	}

	#[test]
	fn transforms_return_new_values() {
		let base = Move::quarter(Face::Right);
		let inv = base.inverted();

		assert!(!base.is_inverted());
		assert!(inv.is_inverted());
		assert_eq!(inv.inverted(), base);
		assert_eq!(base.half().times(), 2);
		assert_eq!(base.wide().layers(), Layers::Wide);
		assert_eq!(base.whole_cube().layers(), Layers::All);
	}

	#[test]
	/// Every token in the table prints back as itself.
	fn display_roundtrips_through_the_table() {
		for (token, mv) in NOTATION.iter() {
			assert_eq!(&mv.to_string(), token);
		}
	}

	#[test]
	fn random_sequences_have_the_requested_length() {
		assert!(random_sequence(0).is_empty());
		let seq = random_sequence(40);
		assert_eq!(seq.len(), 40);
		for mv in seq {
			assert_eq!(mv.layers(), Layers::Outer);
			assert!(mv.times() == 1 || mv.times() == 2);
		}
	}
}
