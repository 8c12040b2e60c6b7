use crate::dynamic::{EnumValue, FieldDecl, Schema, StructDecl, StructValue, Value};

const UNKNOWN: &str = "\"?\"";

/// Render one value tree as JSON-flavored text.
///
/// Text is emitted verbatim between quotes without escaping, and enum tags
/// missing from the schema are emitted as quoted decimals. The output is
/// therefore not guaranteed to be valid JSON; see [`to_json`](crate::dynamic::to_json)
/// for a strict rendering.
pub fn render_value(value: &Value, schema: &Schema) -> String {
	let mut out = String::new();
	write_value(&mut out, value, schema);
	out
}

/// Append the rendering of `value` to `out`.
pub fn write_value(out: &mut String, value: &Value, schema: &Schema) {
	match value {
		Value::Void => out.push_str("null"),
		Value::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
		Value::Int(v) => out.push_str(&v.to_string()),
		Value::UInt(v) => out.push_str(&v.to_string()),
		Value::Float(v) => out.push_str(&v.to_string()),
		Value::Text(v) => push_quoted(out, v),
		Value::List(items) => {
			out.push('[');
			for (idx, item) in items.iter().enumerate() {
				if idx > 0 {
					out.push_str(", ");
				}
				write_value(out, item, schema);
			}
			out.push(']');
		}
		Value::Enum(item) => write_enum(out, *item, schema),
		Value::Struct(item) => write_struct(out, item, schema),
		Value::Unsupported(_) => out.push_str(UNKNOWN),
	}
}

fn write_enum(out: &mut String, item: EnumValue, schema: &Schema) {
	match item.schema.and_then(|index| schema.enumerant_name(index, item.raw)) {
		Some(name) => push_quoted(out, name),
		None => push_quoted(out, &item.raw.to_string()),
	}
}

fn write_struct(out: &mut String, item: &StructValue, schema: &Schema) {
	let Some(decl) = struct_layout(item, schema) else {
		out.push_str(UNKNOWN);
		return;
	};

	let active = item.which.and_then(|index| decl.fields.get(usize::from(index)));

	let mut first = true;
	out.push('{');
	if let Some(active) = active {
		out.push_str("\"which\" : ");
		push_quoted(out, &active.name);
		first = false;
	}

	for (field, slot) in decl.fields.iter().zip(&item.fields) {
		if !emits_field(active, field, slot.present) {
			continue;
		}

		if first {
			first = false;
		} else {
			out.push_str(", ");
		}
		push_quoted(out, &field.name);
		out.push_str(" : ");
		match &slot.value {
			Some(value) => write_value(out, value, schema),
			None => out.push_str("null"),
		}
	}
	out.push('}');
}

/// Declaration for `item`, provided it has one slot per declared field.
pub(crate) fn struct_layout<'a>(item: &StructValue, schema: &'a Schema) -> Option<&'a StructDecl> {
	schema.struct_decl(item.schema).filter(|decl| decl.fields.len() == item.fields.len())
}

/// Union members other than the active one are never emitted; the active
/// member is emitted regardless of presence; other fields need presence.
pub(crate) fn emits_field(active: Option<&FieldDecl>, field: &FieldDecl, present: bool) -> bool {
	match active {
		Some(active) if active.name == field.name => true,
		_ if field.discriminant.is_some() => false,
		_ => present,
	}
}

fn push_quoted(out: &mut String, text: &str) {
	out.push('"');
	out.push_str(text);
	out.push('"');
}
