use nxcube::prelude::*;

fn main() {
	let mut cube = Cube::new(3);

	let turns = parse_moves("R U R' U R U U R'").unwrap();

	for _ in 0..6 {
		cube.apply_moves(&turns);
	}

	assert!(cube.is_solved());
}
