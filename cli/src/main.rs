use std::error::Error;
use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use nxcube::prelude::*;

/// N×N×N cube move engine playground
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Side length of the cube
	#[arg(short = 'n', long, default_value_t = 3)]
	size: usize,

	/// Apply a move sequence to the cube
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Scramble the cube with this many random moves before the sequence
	#[arg(short, long, default_value_t = 0)]
	random: usize,

	/// Undo this many moves after applying the sequence
	#[arg(short, long, default_value_t = 0)]
	undo: usize,

	/// Output the cube as color initials rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Report whether the cube is solved
	#[arg(long, default_value_t = false)]
	solved: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,

	/// Verbose engine logging
	#[arg(short, long, default_value_t = false)]
	verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
	let args = Args::parse();

	simple_logger::SimpleLogger::new()
		.with_level(if args.verbose {
			LevelFilter::Debug
		} else {
			LevelFilter::Warn
		})
		.init()?;

	if args.size == 0 {
		return Err("cube size must be at least 1".into());
	}

	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(args.output)?)
	};

	let mut cube = Cube::new(args.size);

	if args.random > 0 {
		cube.apply_moves(&random_sequence(args.random));
	}

	if !args.sequence.is_empty() {
		cube.run(&args.sequence)?;
	}

	if args.undo > 0 {
		cube.undo(args.undo)?;
	}

	if args.solved {
		writeln!(
			out,
			"{}",
			if cube.is_solved() { "solved" } else { "not solved" }
		)?;
	}

	if args.char_print {
		write!(out, "{}", cube)?;
	} else {
		cube.print();
	}

	Ok(())
}
