use crate::dynamic::{EnumDecl, EnumValue, FieldDecl, FieldValue, Schema, StructDecl, StructValue, UnsupportedKind, Value};

use super::{to_json, to_json_string};

fn test_schema() -> Schema {
	let mut schema = Schema::default();
	schema.add_struct(StructDecl {
		id: 1,
		name: "Entry".into(),
		fields: vec![
			FieldDecl::plain("zeta"),
			FieldDecl::plain("alpha"),
			FieldDecl::union_member("text", 0),
			FieldDecl::union_member("blob", 1),
		],
	});
	schema.add_enum(EnumDecl {
		id: 2,
		name: "Mode".into(),
		enumerants: vec!["off".into(), "on".into()],
	});
	schema
}

#[test]
fn strict_output_escapes_text() {
	let schema = test_schema();
	let value = Value::Text("a \"b\"\n".into());

	assert_eq!(to_json_string(&value, &schema).expect("serializes"), "\"a \\\"b\\\"\\n\"");
}

#[test]
fn strict_output_keeps_which_first_and_declared_order() {
	let schema = test_schema();
	let value = Value::Struct(StructValue {
		schema: 0,
		which: Some(2),
		fields: vec![
			FieldValue::set(Value::Int(-1)),
			FieldValue::set(Value::Enum(EnumValue { schema: Some(0), raw: 1 })),
			FieldValue::set(Value::Text("t".into())),
			FieldValue::unset(),
		],
	});

	let line = to_json_string(&value, &schema).expect("serializes");
	assert_eq!(line, "{\"which\":\"text\",\"zeta\":-1,\"alpha\":\"on\",\"text\":\"t\"}");
}

#[test]
fn strict_output_keeps_sentinels() {
	let schema = test_schema();

	assert_eq!(to_json(&Value::Enum(EnumValue { schema: Some(0), raw: 9 }), &schema), serde_json::json!("9"));
	assert_eq!(to_json(&Value::Unsupported(UnsupportedKind::Data), &schema), serde_json::json!("?"));
	assert_eq!(to_json(&Value::Float(f64::NAN), &schema), serde_json::Value::Null);
	assert_eq!(to_json(&Value::Float(0.5), &schema), serde_json::json!(0.5));
}

#[test]
fn strict_output_round_trips_through_parser() {
	let schema = test_schema();
	let value = Value::List(vec![Value::UInt(3), Value::Void, Value::Bool(true)]);

	let line = to_json_string(&value, &schema).expect("serializes");
	let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid json");
	assert_eq!(parsed, serde_json::json!([3, null, true]));
}

#[test]
fn strict_output_skips_present_inactive_union_member() {
	let schema = test_schema();
	let value = Value::Struct(StructValue {
		schema: 0,
		which: Some(3),
		fields: vec![
			FieldValue::unset(),
			FieldValue::set(Value::Bool(true)),
			FieldValue::set(Value::Text("stale".into())),
			FieldValue::set(Value::Unsupported(UnsupportedKind::Data)),
		],
	});

	let line = to_json_string(&value, &schema).expect("serializes");
	assert_eq!(line, "{\"which\":\"blob\",\"alpha\":true,\"blob\":\"?\"}");
}

#[test]
fn strict_output_slot_count_mismatch_is_placeholder() {
	let schema = test_schema();
	let value = Value::Struct(StructValue {
		schema: 0,
		which: None,
		fields: Vec::new(),
	});

	assert_eq!(to_json(&value, &schema), serde_json::json!("?"));
}
