use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use capjson::dynamic::{Document, LoadOptions, Result, load_document};

use crate::cmd::schema::render_schema;

/// What to print for the loaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
	/// JSON-flavored text, text fields unescaped.
	Flavored,
	/// Strict JSON.
	Strict,
	/// Schema tables as pretty JSON.
	Schema,
}

/// Load one message from `path` (or stdin) and print it.
pub fn run(path: Option<PathBuf>, options: &LoadOptions, mode: OutputMode) -> Result<()> {
	let doc = match path {
		Some(path) => load_document(BufReader::new(File::open(path)?), options)?,
		None => load_document(io::stdin().lock(), options)?,
	};

	println!("{}", render_document(&doc, mode)?);
	Ok(())
}

/// Render a loaded document for `mode`, without the trailing newline.
pub fn render_document(doc: &Document, mode: OutputMode) -> Result<String> {
	match mode {
		OutputMode::Flavored => Ok(doc.render()),
		OutputMode::Strict => doc.render_json(),
		OutputMode::Schema => render_schema(doc),
	}
}

#[cfg(test)]
mod tests;
