use capjson::dynamic::{Document, EnumDecl, Result, StructDecl, Value};
use serde::Serialize;

#[derive(Serialize)]
struct SchemaReport<'a> {
	root: Option<&'a str>,
	structs: &'a [StructDecl],
	enums: &'a [EnumDecl],
}

/// Render the schema tables referenced by `doc` as pretty JSON.
pub fn render_schema(doc: &Document) -> Result<String> {
	let root = match &doc.root {
		Value::Struct(item) => doc.schema.struct_decl(item.schema).map(|decl| decl.name.as_ref()),
		_ => None,
	};

	let report = SchemaReport {
		root,
		structs: &doc.schema.structs,
		enums: &doc.schema.enums,
	};
	Ok(serde_json::to_string_pretty(&report)?)
}
