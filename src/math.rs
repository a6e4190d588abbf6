//! Small 3D helpers for the cube lattice.
//!
//! Positions are `f64` triples so that even-sized cubes can sit on
//! half-integer coordinates. After every rotation the coordinates are
//! rounded back to one decimal place, which keeps position equality exact
//! over arbitrarily long move sequences.

use serde::{Deserialize, Serialize};

/// A position in the cube lattice.
#[derive(Clone, Copy, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct Point3 {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

/// A rotation axis. Only ever one of the six axis-aligned unit vectors.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Vector3 {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

impl Vector3 {
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}
}

impl Point3 {
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	/// Rotate around `axis` (unit length) by `angle` degrees,
	/// counterclockwise when looking down the axis (right-handed).
	pub fn rotated(self, axis: Vector3, angle: f64) -> Self {
		let theta = angle.to_radians();
		let (sin, cos) = theta.sin_cos();

		// Rodrigues' rotation formula
		let dot = axis.x * self.x + axis.y * self.y + axis.z * self.z;
		let cross = Vector3::new(
			axis.y * self.z - axis.z * self.y,
			axis.z * self.x - axis.x * self.z,
			axis.x * self.y - axis.y * self.x,
		);

		Self {
			x: self.x * cos + cross.x * sin + axis.x * dot * (1.0 - cos),
			y: self.y * cos + cross.y * sin + axis.y * dot * (1.0 - cos),
			z: self.z * cos + cross.z * sin + axis.z * dot * (1.0 - cos),
		}
	}

	/// Round every coordinate to one decimal place, cancelling the error
	/// accumulated by repeated trigonometric rotations.
	pub fn rounded(self) -> Self {
		fn round1(v: f64) -> f64 {
			(v * 10.0).round() / 10.0
		}

		Self {
			x: round1(self.x),
			y: round1(self.y),
			z: round1(self.z),
		}
	}
}

// ===== Tests =====
