use serde_json::{Map, Number};

use crate::dynamic::print::{emits_field, struct_layout};
use crate::dynamic::{Result, Schema, StructValue, Value};

/// Convert a value tree to a strict JSON value.
///
/// Mirrors [`render_value`](crate::dynamic::render_value) in shape and field
/// order, but text is escaped by `serde_json` and non-finite floats become
/// `null`.
pub fn to_json(value: &Value, schema: &Schema) -> serde_json::Value {
	match value {
		Value::Void => serde_json::Value::Null,
		Value::Bool(v) => serde_json::Value::Bool(*v),
		Value::Int(v) => serde_json::Value::Number(Number::from(*v)),
		Value::UInt(v) => serde_json::Value::Number(Number::from(*v)),
		Value::Float(v) => Number::from_f64(*v).map_or(serde_json::Value::Null, serde_json::Value::Number),
		Value::Text(v) => serde_json::Value::String(v.to_string()),
		Value::List(items) => serde_json::Value::Array(items.iter().map(|item| to_json(item, schema)).collect()),
		Value::Enum(item) => {
			let name = item.schema.and_then(|index| schema.enumerant_name(index, item.raw));
			serde_json::Value::String(name.map_or_else(|| item.raw.to_string(), str::to_owned))
		}
		Value::Struct(item) => struct_to_json(item, schema),
		Value::Unsupported(_) => serde_json::Value::String("?".to_owned()),
	}
}

/// Serialize a value tree as a compact strict JSON line.
pub fn to_json_string(value: &Value, schema: &Schema) -> Result<String> {
	Ok(serde_json::to_string(&to_json(value, schema))?)
}

fn struct_to_json(item: &StructValue, schema: &Schema) -> serde_json::Value {
	let Some(decl) = struct_layout(item, schema) else {
		return serde_json::Value::String("?".to_owned());
	};

	let active = item.which.and_then(|index| decl.fields.get(usize::from(index)));

	let mut map = Map::new();
	if let Some(active) = active {
		map.insert("which".to_owned(), serde_json::Value::String(active.name.to_string()));
	}
	for (field, slot) in decl.fields.iter().zip(&item.fields) {
		if !emits_field(active, field, slot.present) {
			continue;
		}
		let value = slot.value.as_ref().map_or(serde_json::Value::Null, |value| to_json(value, schema));
		map.insert(field.name.to_string(), value);
	}
	serde_json::Value::Object(map)
}

#[cfg(test)]
mod tests;
