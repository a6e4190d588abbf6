use serde::{Deserialize, Serialize};

use crate::cube::{Color, Face, NUM_FACES};
use crate::math::Point3;

/// One surface unit of the puzzle ("cubelet").
///
/// A cubelet carries its position in the lattice and one facelet color per
/// face direction. Only faces on the cube's exterior are painted at
/// construction; the remaining facelets stay unpainted for the lifetime of
/// the unit, no move ever repaints an interior facelet.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Cubelet {
	position: Point3,
	colors: [Option<Color>; NUM_FACES],
}

impl Cubelet {
	pub(crate) fn new(position: Point3) -> Self {
		Self {
			position,
			colors: [None; NUM_FACES],
		}
	}

	pub fn position(&self) -> Point3 {
		self.position
	}

	pub(crate) fn set_position(&mut self, position: Point3) {
		self.position = position;
	}

	/// The color shown on the given face, `None` for interior facelets.
	pub fn color(&self, face: Face) -> Option<Color> {
		self.colors[face as usize]
	}

	/// All facelet colors, indexed by `Face as usize`.
	pub fn colors(&self) -> &[Option<Color>; NUM_FACES] {
		&self.colors
	}

	pub(crate) fn paint(&mut self, face: Face, color: Color) {
		self.colors[face as usize] = Some(color);
	}

	/// Shift the colors one step across the 4-face rotation cycle.
	/// Forward means every face takes the color of its successor in the
	/// cycle; the two faces not in the cycle keep their colors.
	pub(crate) fn cycle_colors(&mut self, cycle: &[Face; 4], inverted: bool) {
		if inverted {
			let last = self.colors[cycle[3] as usize];
			for j in (1..cycle.len()).rev() {
				self.colors[cycle[j] as usize] = self.colors[cycle[j - 1] as usize];
			}
			self.colors[cycle[0] as usize] = last;
		} else {
			let first = self.colors[cycle[0] as usize];
			for j in 0..cycle.len() - 1 {
				self.colors[cycle[j] as usize] = self.colors[cycle[j + 1] as usize];
			}
			self.colors[cycle[3] as usize] = first;
		}
	}
}

// ===== Tests =====

#[cfg(test)]
mod tests {
	use super::*;

	const CYCLE: [Face; 4] = [Face::Front, Face::Right, Face::Back, Face::Left];

	fn painted() -> Cubelet {
		let mut cubelet = Cubelet::new(Point3::new(1.0, 1.0, 1.0));
		cubelet.paint(Face::Up, Color::White);
		cubelet.paint(Face::Front, Color::Green);
		cubelet.paint(Face::Right, Color::Red);
		cubelet
	}

	#[test]
	fn cycle_moves_colors_forward() {
		let mut cubelet = painted();
		cubelet.cycle_colors(&CYCLE, false);

		// Front took Right's color, Right took Back's (unpainted)
		assert_eq!(cubelet.color(Face::Front), Some(Color::Red));
		assert_eq!(cubelet.color(Face::Right), None);
		assert_eq!(cubelet.color(Face::Left), Some(Color::Green));
		// faces outside the cycle are untouched
		assert_eq!(cubelet.color(Face::Up), Some(Color::White));
	}

	#[test]
	fn cycle_backward_undoes_forward() {
		let mut cubelet = painted();
		let before = cubelet.clone();

		cubelet.cycle_colors(&CYCLE, false);
		cubelet.cycle_colors(&CYCLE, true);

		assert_eq!(cubelet, before);
	}

	#[test]
	fn four_cycles_are_identity() {
		let mut cubelet = painted();
		let before = cubelet.clone();

		for _ in 0..4 {
			cubelet.cycle_colors(&CYCLE, false);
		}

		assert_eq!(cubelet, before);
	}
}
