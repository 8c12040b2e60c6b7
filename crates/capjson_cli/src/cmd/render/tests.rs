use capjson::dynamic::{LoadOptions, load_document};
use capjson_testkit::{files_request, nodes_request, standard_bytes};

use super::{OutputMode, render_document};

#[test]
fn flavored_mode_matches_library_rendering() {
	let bytes = standard_bytes(&files_request());
	let doc = load_document(bytes.as_slice(), &LoadOptions::default()).expect("load succeeds");

	let text = render_document(&doc, OutputMode::Flavored).expect("render succeeds");
	assert_eq!(text, doc.render());
	assert!(!text.ends_with('\n'));
}

#[test]
fn strict_mode_is_parseable() {
	let bytes = standard_bytes(&nodes_request("weird\t\"name\""));
	let doc = load_document(bytes.as_slice(), &LoadOptions::default()).expect("load succeeds");

	let text = render_document(&doc, OutputMode::Strict).expect("render succeeds");
	let json: serde_json::Value = serde_json::from_str(&text).expect("strict output parses");
	assert_eq!(json["nodes"][0]["displayName"], "weird\t\"name\"");
	assert_eq!(json["nodes"][1]["which"], "struct");
	assert_eq!(json["nodes"][1]["struct"]["preferredListEncoding"], "inlineComposite");
}

#[test]
fn schema_mode_reports_root_and_tables() {
	let bytes = standard_bytes(&nodes_request("foo.capnp"));
	let doc = load_document(bytes.as_slice(), &LoadOptions::default()).expect("load succeeds");

	let text = render_document(&doc, OutputMode::Schema).expect("render succeeds");
	let json: serde_json::Value = serde_json::from_str(&text).expect("schema output parses");
	assert_eq!(json["root"], "CodeGeneratorRequest");
	assert!(json["structs"].as_array().is_some_and(|items| items.len() >= 2), "expected request and node structs");
	assert!(
		json["enums"]
			.as_array()
			.is_some_and(|items| items.iter().any(|item| item["name"] == "ElementSize")),
		"expected ElementSize enum table"
	);
}
