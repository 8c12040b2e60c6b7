mod decode;
mod error;
mod json;
mod load;
mod print;
mod schema;
mod value;

/// Dynamic-reader lowering entry points and options.
pub use decode::{DecodeOptions, Document, decode_root};
/// Error and result aliases.
pub use error::{CapJsonError, Result};
/// Strict JSON rendering.
pub use json::{to_json, to_json_string};
/// Framed message loading and root binding.
pub use load::{LoadOptions, RootReader, load_document, load_message};
/// JSON-flavored text rendering.
pub use print::{render_value, write_value};
/// Schema lookup tables.
pub use schema::{EnumDecl, FieldDecl, Schema, StructDecl};
/// Decoded runtime value types.
pub use value::{EnumValue, FieldValue, StructValue, UnsupportedKind, Value};
