use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::cube::cubelet::Cubelet;
use crate::cube::turn::{parse_moves, Move};
use crate::cube::{ansi_color, Color, CubeError, Face};
use crate::math::{Point3, Vector3};

/// An N×N×N cube as a lattice of surface units.
///
/// The cube owns exactly `size³ - max(size-2, 0)³` cubelets, one per
/// position of the surface shell. Moves permute positions and colors in
/// place and never add or remove units. Applied moves are recorded on a
/// history stack so they can be undone exactly.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Cube {
	size: usize,
	cubelets: Vec<Cubelet>,
	memory: Vec<Move>,
}

/// The outermost layer coordinate of a cube: half-integer for even sizes.
fn half_extent(size: usize) -> f64 {
	size as f64 / 2.0 - 0.5
}

/// The rotation axis and the color 4-cycle of each face.
///
/// These assignments are a fixed right-handed convention; changing any of
/// them changes what the notation means.
fn move_parameters(face: Face) -> (Vector3, [Face; 4]) {
	match face {
		Face::Up => (
			Vector3::new(0.0, 0.0, 1.0),
			[Face::Front, Face::Right, Face::Back, Face::Left],
		),
		Face::Front => (
			Vector3::new(0.0, 1.0, 0.0),
			[Face::Up, Face::Left, Face::Down, Face::Right],
		),
		Face::Right => (
			Vector3::new(1.0, 0.0, 0.0),
			[Face::Up, Face::Front, Face::Down, Face::Back],
		),
		Face::Down => (
			Vector3::new(0.0, 0.0, -1.0),
			[Face::Front, Face::Left, Face::Back, Face::Right],
		),
		Face::Back => (
			Vector3::new(0.0, -1.0, 0.0),
			[Face::Up, Face::Right, Face::Down, Face::Left],
		),
		Face::Left => (
			Vector3::new(-1.0, 0.0, 0.0),
			[Face::Up, Face::Back, Face::Down, Face::Front],
		),
	}
}

/// Signed coordinate of a position along the turn axis of `face`.
/// The face's own layer sits at the positive extreme.
fn layer_coordinate(face: Face, position: Point3) -> f64 {
	match face {
		Face::Up => position.z,
		Face::Down => -position.z,
		Face::Front => position.y,
		Face::Back => -position.y,
		Face::Right => position.x,
		Face::Left => -position.x,
	}
}

impl Cube {
	/// Create a solved cube of the given side length (at least 1).
	pub fn new(size: usize) -> Self {
		assert!(size >= 1, "cube size must be at least 1");

		let n = half_extent(size);
		let mut cubelets = Vec::with_capacity(size.pow(3) - size.saturating_sub(2).pow(3));

		for i in 0..size {
			for j in 0..size {
				for k in 0..size {
					let (x, y, z) = (i as f64 - n, j as f64 - n, k as f64 - n);
					if x != -n && x != n && y != -n && y != n && z != -n && z != n {
						continue;
					}

					let mut cubelet = Cubelet::new(Point3::new(x, y, z));

					if x == -n {
						cubelet.paint(Face::Left, Color::Orange);
					}
					if x == n {
						cubelet.paint(Face::Right, Color::Red);
					}
					if y == -n {
						cubelet.paint(Face::Back, Color::Blue);
					}
					if y == n {
						cubelet.paint(Face::Front, Color::Green);
					}
					if z == -n {
						cubelet.paint(Face::Down, Color::Yellow);
					}
					if z == n {
						cubelet.paint(Face::Up, Color::White);
					}

					cubelets.push(cubelet);
				}
			}
		}

		Self {
			size,
			cubelets,
			memory: Vec::new(),
		}
	}

	pub fn size(&self) -> usize {
		self.size
	}

	/// Read-only view of every unit, for rendering collaborators.
	pub fn cubelets(&self) -> &[Cubelet] {
		&self.cubelets
	}

	/// The recorded moves, oldest first.
	pub fn history(&self) -> &[Move] {
		&self.memory
	}

	/// Parse and apply a whitespace-separated move sequence, recording every
	/// move for undo.
	///
	/// The sequence is parsed in full before anything is applied: an invalid
	/// token anywhere leaves the cube untouched.
	pub fn run(&mut self, sequence: &str) -> Result<(), CubeError> {
		let moves = parse_moves(sequence)?;
		debug!("running {} moves", moves.len());
		self.run_moves(&moves, true);
		Ok(())
	}

	/// Apply an already parsed move list, recording every move for undo.
	pub fn apply_moves(&mut self, moves: &[Move]) {
		self.run_moves(moves, true);
	}

	fn run_moves(&mut self, moves: &[Move], record: bool) {
		for &mv in moves {
			self.perform_move(mv);
			if record {
				self.memory.push(mv);
			}
		}
	}

	/// Undo the most recent recorded move.
	pub fn undo_last(&mut self) -> Result<(), CubeError> {
		self.undo(1)
	}

	/// Undo the `count` most recent recorded moves, most recent first, by
	/// applying their structural inverses without re-recording them.
	///
	/// Fails without touching the cube when `count` exceeds the history
	/// depth; `undo(0)` does nothing.
	pub fn undo(&mut self, count: usize) -> Result<(), CubeError> {
		let depth = self.memory.len();
		if count > depth {
			return Err(CubeError::UndoUnderflow {
				requested: count,
				depth,
			});
		}

		debug!("undoing {} of {} recorded moves", count, depth);

		for _ in 0..count {
			if let Some(mv) = self.memory.pop() {
				self.run_moves(&[mv.inverted()], false);
			}
		}

		Ok(())
	}

	/// Apply one move: cycle the colors of every unit in the selected ring
	/// and rotate their positions about the move's axis.
	fn perform_move(&mut self, mv: Move) {
		let (axis, cycle) = move_parameters(mv.face());
		let n = half_extent(self.size);
		let times = mv.times();
		let angle = times as f64 * if mv.is_inverted() { -90.0 } else { 90.0 };

		trace!("performing {}", mv);

		for cubelet in self.cubelets.iter_mut() {
			let coordinate = layer_coordinate(mv.face(), cubelet.position());
			if !mv.layers().selects(coordinate, n) {
				continue;
			}

			for _ in 0..times {
				cubelet.cycle_colors(&cycle, mv.is_inverted());
			}

			// The rounding keeps position equality exact for the ring
			// selection of later moves.
			let position = cubelet.position().rotated(axis, angle).rounded();
			cubelet.set_position(position);
		}
	}

	/// Whether every face shows a single uniform color.
	///
	/// Orientation-relative: no face has to show its original color, so
	/// whole-cube turns keep a solved cube solved.
	pub fn is_solved(&self) -> bool {
		Face::iter().all(|face| self.face_solved(face))
	}

	fn face_solved(&self, face: Face) -> bool {
		let n = half_extent(self.size);
		let mut colors = self
			.cubelets
			.iter()
			.filter(|c| layer_coordinate(face, c.position()) == n)
			.map(|c| c.color(face));

		match colors.next() {
			Some(reference) => colors.all(|color| color == reference),
			None => true,
		}
	}

	/// The facelet colors of a face in canonical reading order: x, then y,
	/// then z ascending. Used by the textual dumps below.
	pub fn face_colors(&self, face: Face) -> Vec<Option<Color>> {
		let n = half_extent(self.size);
		let mut units: Vec<&Cubelet> = self
			.cubelets
			.iter()
			.filter(|c| layer_coordinate(face, c.position()) == n)
			.collect();

		units.sort_by(|a, b| {
			let (p, q) = (a.position(), b.position());
			p.x.total_cmp(&q.x)
				.then(p.y.total_cmp(&q.y))
				.then(p.z.total_cmp(&q.z))
		});

		units.into_iter().map(|c| c.color(face)).collect()
	}

	fn face_rows(&self, face: Face) -> Vec<Vec<Option<Color>>> {
		self.face_colors(face)
			.chunks(self.size)
			.map(|chunk| chunk.to_vec())
			.collect()
	}

	/// Print the cube net to the *standard output* with ANSI-colors
	pub fn print(&self) {
		let space = " ".repeat(2 * self.size + 1);

		for row in self.face_rows(Face::Up) {
			print!("{}", space);
			for color in row {
				print!("{}▀ ", ansi_color(color));
			}
			println!();
		}

		let bands: Vec<_> = [Face::Left, Face::Front, Face::Right, Face::Back]
			.into_iter()
			.map(|face| self.face_rows(face))
			.collect();
		for j in 0..self.size {
			for band in &bands {
				for color in &band[j] {
					print!("{}▄ ", ansi_color(*color));
				}
				print!(" ");
			}
			println!();
		}
		println!();

		for row in self.face_rows(Face::Down) {
			print!("{}", space);
			for color in row {
				print!("{}▀ ", ansi_color(color));
			}
			println!();
		}
		// Reset ansii color
		println!("\x1b[00m");
	}
}

impl fmt::Display for Cube {
	/// The cube as an unfolded net of color initials.
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let rows = |face: Face| -> Vec<String> {
			self.face_rows(face)
				.into_iter()
				.map(|row| {
					row.into_iter()
						.map(|c| c.map_or('.', |c| c.initial()))
						.collect()
				})
				.collect()
		};

		let pad = " ".repeat(self.size + 1);

		for row in rows(Face::Up) {
			writeln!(f, "{}{}", pad, row)?;
		}

		let bands: Vec<_> = [Face::Left, Face::Front, Face::Right, Face::Back]
			.into_iter()
			.map(rows)
			.collect();
		for j in 0..self.size {
			let line: Vec<&str> = bands.iter().map(|band| band[j].as_str()).collect();
			writeln!(f, "{}", line.join(" "))?;
		}

		for row in rows(Face::Down) {
			writeln!(f, "{}{}", pad, row)?;
		}

		Ok(())
	}
}

// ===== Tests =====
