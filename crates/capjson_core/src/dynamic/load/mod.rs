use std::io::{BufReader, Read};

use capnp::message::{self, ReaderOptions};
use capnp::schema_capnp::code_generator_request;
use capnp::serialize::OwnedSegments;

use crate::dynamic::{CapJsonError, DecodeOptions, Document, Result, decode_root};

/// Root struct every loaded message is interpreted as.
pub type RootReader<'a> = code_generator_request::Reader<'a>;

/// Framing and reader limits for loading one message.
#[derive(Debug, Clone)]
pub struct LoadOptions {
	/// Expect packed framing instead of the standard segment table framing.
	pub packed: bool,
	/// Total words the reader may traverse; `None` disables the limit.
	pub traversal_limit_words: Option<usize>,
	/// Maximum pointer nesting accepted by the reader.
	pub nesting_limit: i32,
	/// Limits applied while lowering the root.
	pub decode: DecodeOptions,
}

impl Default for LoadOptions {
	fn default() -> Self {
		Self {
			packed: false,
			traversal_limit_words: Some(8 * 1024 * 1024),
			nesting_limit: 64,
			decode: DecodeOptions::default(),
		}
	}
}

impl LoadOptions {
	fn reader_options(&self) -> ReaderOptions {
		let mut options = ReaderOptions::new();
		options.traversal_limit_in_words(self.traversal_limit_words).nesting_limit(self.nesting_limit);
		options
	}
}

/// Read exactly one framed message from `read`.
pub fn load_message<R: Read>(read: R, options: &LoadOptions) -> Result<message::Reader<OwnedSegments>> {
	let reader_options = options.reader_options();
	let message = if options.packed {
		capnp::serialize_packed::try_read_message(BufReader::new(read), reader_options)?
	} else {
		capnp::serialize::try_read_message(read, reader_options)?
	};
	message.ok_or(CapJsonError::EmptyInput)
}

/// Read one message and decode its root against the compiled-in root schema.
pub fn load_document<R: Read>(read: R, options: &LoadOptions) -> Result<Document> {
	let message = load_message(read, options)?;
	let root: RootReader<'_> = message.get_root()?;
	decode_root(root.into(), &options.decode)
}
