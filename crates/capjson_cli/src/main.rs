#![allow(missing_docs)]

use std::path::PathBuf;

use capjson::dynamic::{DecodeOptions, LoadOptions};
use clap::Parser;

use crate::cmd::render::OutputMode;

mod cmd;

#[derive(Parser)]
#[command(name = "capjson", about = "Print one Cap'n Proto CodeGeneratorRequest as JSON-flavored text")]
struct Cli {
	/// Read the message from a file instead of stdin.
	path: Option<PathBuf>,
	/// Input uses packed framing.
	#[arg(long)]
	packed: bool,
	/// Emit strict JSON (escaped text) instead of the raw rendering.
	#[arg(long, conflicts_with = "schema")]
	json: bool,
	/// Print the schema tables met while decoding instead of the value.
	#[arg(long)]
	schema: bool,
	/// Reader traversal limit in 8-byte words.
	#[arg(long = "traversal-limit")]
	traversal_limit: Option<usize>,
	/// Reader pointer nesting limit.
	#[arg(long = "nesting-limit", default_value_t = 64)]
	nesting_limit: i32,
	/// Maximum list/struct depth while decoding.
	#[arg(long = "max-depth", default_value_t = 128)]
	max_depth: u32,
}

impl Cli {
	fn load_options(&self) -> LoadOptions {
		let defaults = LoadOptions::default();
		LoadOptions {
			packed: self.packed,
			traversal_limit_words: self.traversal_limit.or(defaults.traversal_limit_words),
			nesting_limit: self.nesting_limit,
			decode: DecodeOptions { max_depth: self.max_depth },
		}
	}

	fn output_mode(&self) -> OutputMode {
		if self.schema {
			OutputMode::Schema
		} else if self.json {
			OutputMode::Strict
		} else {
			OutputMode::Flavored
		}
	}
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> capjson::dynamic::Result<()> {
	let cli = Cli::parse();
	let options = cli.load_options();
	let mode = cli.output_mode();

	cmd::render::run(cli.path, &options, mode)
}
