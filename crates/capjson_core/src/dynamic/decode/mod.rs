use capnp::dynamic_value;
use capnp::schema::{EnumSchema, StructSchema};
use capnp::schema_capnp::node;
use capnp::{dynamic_list, dynamic_struct};

use crate::dynamic::{
	CapJsonError, EnumDecl, EnumValue, FieldDecl, FieldValue, Result, Schema, StructDecl, StructValue, UnsupportedKind, Value, render_value,
	to_json_string,
};

const NO_DISCRIMINANT: u16 = 0xffff;

/// Runtime limits for lowering dynamic readers.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum recursive list/struct nesting depth.
	pub max_depth: u32,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self { max_depth: 128 }
	}
}

/// Decoded root value with the schema tables it references.
#[derive(Debug)]
pub struct Document {
	/// Struct and enum tables met while decoding.
	pub schema: Schema,
	/// Decoded root value.
	pub root: Value,
}

impl Document {
	/// Render the root as JSON-flavored text.
	pub fn render(&self) -> String {
		render_value(&self.root, &self.schema)
	}

	/// Render the root as strict JSON.
	pub fn render_json(&self) -> Result<String> {
		to_json_string(&self.root, &self.schema)
	}
}

/// Lower a dynamic reader into an owned value tree.
pub fn decode_root(root: dynamic_value::Reader<'_>, opt: &DecodeOptions) -> Result<Document> {
	let mut schema = Schema::default();
	let root = decode_value(root, &mut schema, opt, 0)?;
	Ok(Document { schema, root })
}

fn decode_value(value: dynamic_value::Reader<'_>, schema: &mut Schema, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	if depth >= opt.max_depth {
		return Err(CapJsonError::DecodeDepthExceeded { max_depth: opt.max_depth });
	}

	Ok(match value {
		dynamic_value::Reader::Void => Value::Void,
		dynamic_value::Reader::Bool(v) => Value::Bool(v),
		dynamic_value::Reader::Int8(v) => Value::Int(i64::from(v)),
		dynamic_value::Reader::Int16(v) => Value::Int(i64::from(v)),
		dynamic_value::Reader::Int32(v) => Value::Int(i64::from(v)),
		dynamic_value::Reader::Int64(v) => Value::Int(v),
		dynamic_value::Reader::UInt8(v) => Value::UInt(u64::from(v)),
		dynamic_value::Reader::UInt16(v) => Value::UInt(u64::from(v)),
		dynamic_value::Reader::UInt32(v) => Value::UInt(u64::from(v)),
		dynamic_value::Reader::UInt64(v) => Value::UInt(v),
		dynamic_value::Reader::Float32(v) => Value::Float(f64::from(v)),
		dynamic_value::Reader::Float64(v) => Value::Float(v),
		dynamic_value::Reader::Text(v) => Value::Text(String::from_utf8_lossy(v.as_bytes()).into()),
		dynamic_value::Reader::Enum(item) => Value::Enum(decode_enum(item, schema)?),
		dynamic_value::Reader::List(list) => Value::List(decode_list(list, schema, opt, depth)?),
		dynamic_value::Reader::Struct(item) => Value::Struct(decode_struct(item, schema, opt, depth)?),
		dynamic_value::Reader::Data(_) => Value::Unsupported(UnsupportedKind::Data),
		dynamic_value::Reader::AnyPointer(_) => Value::Unsupported(UnsupportedKind::AnyPointer),
		_ => Value::Unsupported(UnsupportedKind::Capability),
	})
}

fn decode_list(list: dynamic_list::Reader<'_>, schema: &mut Schema, opt: &DecodeOptions, depth: u32) -> Result<Vec<Value>> {
	let mut items = Vec::with_capacity(list.len() as usize);
	for index in 0..list.len() {
		items.push(decode_value(list.get(index)?, schema, opt, depth + 1)?);
	}
	Ok(items)
}

fn decode_struct(item: dynamic_struct::Reader<'_>, schema: &mut Schema, opt: &DecodeOptions, depth: u32) -> Result<StructValue> {
	let struct_schema = item.get_schema();
	let index = intern_struct(struct_schema, schema)?;
	let which = item.which()?.map(|field| field.get_index());

	let fields = struct_schema.get_fields()?;
	let mut slots = Vec::with_capacity(usize::from(fields.len()));
	for field_idx in 0..fields.len() {
		let field = fields.get(field_idx);
		let present = item.has(field)?;
		// The active union member is read even when unset so it can still be emitted.
		let value = if present || which == Some(field.get_index()) {
			Some(decode_value(item.get(field)?, schema, opt, depth + 1)?)
		} else {
			None
		};
		slots.push(FieldValue { present, value });
	}

	Ok(StructValue {
		schema: index,
		which,
		fields: slots,
	})
}

fn decode_enum(item: dynamic_value::Enum, schema: &mut Schema) -> Result<EnumValue> {
	let raw = item.get_value();
	let index = match item.get_enumerant()? {
		Some(enumerant) => Some(intern_enum(enumerant.get_containing_enum(), schema)?),
		None => None,
	};
	Ok(EnumValue { schema: index, raw })
}

fn intern_struct(item: StructSchema, schema: &mut Schema) -> Result<u32> {
	let proto = item.get_proto();
	let id = proto.get_id();
	if let Some(index) = schema.struct_index(id) {
		return Ok(index);
	}

	let fields = item.get_fields()?;
	let mut decls = Vec::with_capacity(usize::from(fields.len()));
	for field_idx in 0..fields.len() {
		let field = fields.get(field_idx).get_proto();
		let discriminant = field.get_discriminant_value();
		decls.push(FieldDecl {
			name: field.get_name()?.to_str()?.into(),
			discriminant: (discriminant != NO_DISCRIMINANT).then_some(discriminant),
		});
	}

	Ok(schema.add_struct(StructDecl {
		id,
		name: short_name(proto)?.into(),
		fields: decls,
	}))
}

fn intern_enum(item: EnumSchema, schema: &mut Schema) -> Result<u32> {
	let proto = item.get_proto();
	let id = proto.get_id();
	if let Some(index) = schema.enum_index(id) {
		return Ok(index);
	}

	let enumerants = item.get_enumerants()?;
	let mut names = Vec::with_capacity(usize::from(enumerants.len()));
	for ordinal in 0..enumerants.len() {
		names.push(enumerants.get(ordinal).get_proto().get_name()?.to_str()?.into());
	}

	Ok(schema.add_enum(EnumDecl {
		id,
		name: short_name(proto)?.into(),
		enumerants: names,
	}))
}

fn short_name(proto: node::Reader<'_>) -> Result<&str> {
	let display = proto.get_display_name()?.to_str()?;
	let prefix = proto.get_display_name_prefix_length() as usize;
	Ok(display.get(prefix..).unwrap_or(display))
}
