use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CapJsonError>;

/// Errors produced while loading, decoding, and serializing messages.
#[derive(Debug, Error)]
pub enum CapJsonError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Byte source ended before a message started.
	#[error("empty input: no message on stream")]
	EmptyInput,
	/// Framing, pointer, or schema failure reported by the capnp reader.
	#[error("capnp: {0}")]
	Capnp(#[from] capnp::Error),
	/// Text or schema name was not valid UTF-8.
	#[error("invalid utf-8: {0}")]
	Utf8(#[from] std::str::Utf8Error),
	/// Decoder recursion depth exceeded configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DecodeDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Strict JSON or schema serialization failed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
