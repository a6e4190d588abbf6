pub mod cubelet;
pub mod lattice;
pub mod turn;

use serde::{Deserialize, Serialize};
use strum::EnumCount;

/// The number of sides of a cube
pub const NUM_FACES: usize = Face::COUNT;

/// The six face directions of the cube.
///
/// Faces name fixed directions in space, not colors: after a whole-cube
/// turn the Up face may well show green.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum::EnumIter, strum::EnumCount, strum::Display, strum::EnumString)]
#[derive(Serialize, Deserialize)]
#[repr(usize)]
pub enum Face {
	Up,
	Front,
	Right,
	Down,
	Back,
	Left,
}

impl Face {
	/// The uppercase letter used for this face in move notation.
	pub fn initial(&self) -> char {
		match self {
			Face::Up => 'U',
			Face::Front => 'F',
			Face::Right => 'R',
			Face::Down => 'D',
			Face::Back => 'B',
			Face::Left => 'L',
		}
	}
}

/// The facelet colors. An unpainted (interior) facelet is `None` at the
/// `Option<Color>` level; there is no ordering between colors, only
/// equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum::EnumIter, strum::EnumCount, strum::Display, strum::EnumString)]
#[derive(Serialize, Deserialize)]
#[repr(usize)]
pub enum Color {
	White,
	Green,
	Red,
	Yellow,
	Blue,
	Orange,
}

impl Color {
	/// The initial letter used in textual cube dumps.
	pub fn initial(&self) -> char {
		match self {
			Color::White => 'W',
			Color::Green => 'G',
			Color::Red => 'R',
			Color::Yellow => 'Y',
			Color::Blue => 'B',
			Color::Orange => 'O',
		}
	}

	/// Parse a color from its initial letter.
	pub fn from_initial(initial: char) -> Option<Self> {
		match initial {
			'W' => Some(Color::White),
			'G' => Some(Color::Green),
			'R' => Some(Color::Red),
			'Y' => Some(Color::Yellow),
			'B' => Some(Color::Blue),
			'O' => Some(Color::Orange),
			_ => None,
		}
	}
}

/// Returns the ANSI-colorcode for the given facelet color.
pub fn ansi_color(color: Option<Color>) -> &'static str {
	match color {
		Some(Color::White) => "\x1b[00m",
		Some(Color::Yellow) => "\x1b[93m",
		Some(Color::Green) => "\x1b[32m",
		Some(Color::Blue) => "\x1b[34m",
		Some(Color::Red) => "\x1b[31m",
		Some(Color::Orange) => "\x1b[33m",
		None => "\x1b[90m",
	}
}

/// Everything that can go wrong when driving a cube.
#[derive(thiserror::Error, Debug)]
pub enum CubeError {
	#[error(transparent)]
	Notation(#[from] turn::NotationError),
	#[error("cannot undo {requested} moves, history holds {depth}")]
	UndoUnderflow { requested: usize, depth: usize },
}

// ===== Tests =====

#[cfg(test)]
mod tests {
	use strum::IntoEnumIterator;

	use super::*;

	#[test]
	fn color_initial_roundtrip() {
		for color in Color::iter() {
			assert_eq!(Color::from_initial(color.initial()), Some(color));
		}
		assert_eq!(Color::from_initial('Q'), None);
	}

	#[test]
	fn face_initials_are_distinct() {
		let mut seen = std::collections::HashSet::new();
		for face in Face::iter() {
			assert!(seen.insert(face.initial()));
		}
		assert_eq!(seen.len(), NUM_FACES);
	}
}
