//! This is a simple example how to turn the cube.
//!
//! ```
//! use nxcube::prelude::*;
//!
//! let mut cube = Cube::new(3);
//! assert!(cube.is_solved());
//!
//! cube.run("R U R' U'").unwrap();
//! assert!(!cube.is_solved());
//!
//! cube.undo(4).unwrap();
//! assert!(cube.is_solved());
//! ```
//!
//! Cubes of any side length work the same way; M, E and S turn the middle
//! slice and X, Y and Z reorient the whole cube without unsolving it.

pub mod cube;
pub mod math;

pub mod prelude {
	pub use crate::cube::{cubelet::*, lattice::*, turn::*, *};
	pub use crate::math::{Point3, Vector3};
}
