use std::{error::Error, io::Write, str::FromStr};

use clap::Parser;

use faceletcube::prelude::*;

/// Facelet cube solver written in Rust
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Use a sequence to apply on the cube
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Set the cube from a 54-letter color string (the same format as the "-c"-flag outputs)
	#[arg(long, default_value_t = String::new())]
	set: String,

	/// Scramble the cube with this many random turns
	#[arg(short = 'r', long, default_value_t = 0)]
	scramble: usize,

	/// Solve the cube (the output is a sequence)
	#[arg(long, default_value_t = false)]
	solve: bool,

	/// Largest search depth to try (if --solve is used)
	#[arg(long, default_value_t = MAX_DEPTH)]
	max_depth: usize,

	/// Output length of sequence (if --solve is used)
	#[arg(short, long, default_value_t = false)]
	length: bool,

	/// Replay the solution turn by turn, printing the cube after each (if --solve is used)
	#[arg(long, default_value_t = false)]
	replay: bool,

	/// Output the cube as a string rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

fn main() -> Result<(), Box<dyn Error>> {
	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn std::io::Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(args.output)?)
	};
	let mut cube = FaceletCube::default();

	// Parses a cube out of the cube string
	if !args.set.is_empty() {
		cube = FaceletCube::from_str(args.set.as_str())?;
	}

	// Scramble with random turns
	if args.scramble > 0 {
		let seq = random_sequence(args.scramble);
		writeln!(out, "Scramble: {}", format_turns(&seq))?;
		cube.apply_turns(seq);
	}

	// Applies turns from args
	match parse_turns(args.sequence) {
		Ok(seq) => cube.apply_turns(seq),
		Err(e) => return Err(e.into()),
	}

	// Solve the cube and output the sequence
	if args.solve {
		let config = SearchConfig {
			max_depth: args.max_depth,
			..SearchConfig::default()
		};
		let mut solver = Solver::new(config);

		let seq = match solver.solve(&cube) {
			Some(seq) => seq,
			None => {
				return Err(format!("No solution found within depth {}", args.max_depth).into())
			}
		};

		write!(out.as_mut(), "{}", format_turns(&seq))?;
		if args.length {
			writeln!(out.as_mut(), " (len={})", seq.len())?;
		} else {
			writeln!(out.as_mut())?;
		}

		// Replay the solution on the cube, one turn at a time
		if args.replay {
			for turn in seq {
				cube.apply_turn(turn);
				writeln!(out.as_mut(), "{}", turn)?;
				cube.print();
			}
		}

		return Ok(());
	}

	// Print the resulting cube (either as a string or with colors)
	if args.char_print {
		let s: String = cube.into();
		writeln!(out.as_mut(), "{}", s)?;
	} else {
		cube.print();
	}

	Ok(())
}
