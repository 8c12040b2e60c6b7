use super::{EnumDecl, FieldDecl, Schema, StructDecl};

fn shape_decl(id: u64) -> StructDecl {
	StructDecl {
		id,
		name: "Shape".into(),
		fields: vec![
			FieldDecl::plain("area"),
			FieldDecl::union_member("circle", 0),
			FieldDecl::union_member("square", 1),
		],
	}
}

#[test]
fn interning_same_id_reuses_index() {
	let mut schema = Schema::default();
	let first = schema.add_struct(shape_decl(0x10));
	let second = schema.add_struct(shape_decl(0x10));
	let other = schema.add_struct(shape_decl(0x11));

	assert_eq!(first, second);
	assert_ne!(first, other);
	assert_eq!(schema.structs.len(), 2);
	assert_eq!(schema.struct_index(0x11), Some(other));
	assert_eq!(schema.struct_index(0x12), None);
}

#[test]
fn union_detection_uses_discriminants() {
	let shape = shape_decl(1);
	let plain = StructDecl {
		id: 2,
		name: "Point".into(),
		fields: vec![FieldDecl::plain("x"), FieldDecl::plain("y")],
	};

	assert!(shape.has_union());
	assert!(!plain.has_union());
}

#[test]
fn enumerant_lookup_by_ordinal() {
	let mut schema = Schema::default();
	let index = schema.add_enum(EnumDecl {
		id: 7,
		name: "Color".into(),
		enumerants: vec!["red".into(), "green".into()],
	});

	assert_eq!(schema.enumerant_name(index, 1), Some("green"));
	assert_eq!(schema.enumerant_name(index, 2), None);
	assert_eq!(schema.enumerant_name(index + 1, 0), None);
	assert_eq!(schema.enum_index(7), Some(index));
}

#[test]
fn serialized_tables_skip_lookup_maps() {
	let mut schema = Schema::default();
	schema.add_struct(shape_decl(3));

	let json = serde_json::to_value(&schema).expect("schema serializes");
	assert_eq!(json["structs"][0]["name"], "Shape");
	assert!(json["structs"][0]["fields"][0].get("discriminant").is_none());
	assert_eq!(json["structs"][0]["fields"][2]["discriminant"], 1);
	assert!(json.get("struct_by_id").is_none());
}
