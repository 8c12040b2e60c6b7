//! Shared test helpers for workspace crates.

use capnp::message::{Builder, HeapAllocator};
use capnp::schema_capnp::{ElementSize, code_generator_request};

/// Build a `CodeGeneratorRequest` message with `fill` applied to its root.
pub fn request_message(fill: impl FnOnce(code_generator_request::Builder<'_>)) -> Builder<HeapAllocator> {
	let mut message = Builder::new_default();
	fill(message.init_root::<code_generator_request::Builder<'_>>());
	message
}

/// Serialize with standard (segment table) framing.
pub fn standard_bytes(message: &Builder<HeapAllocator>) -> Vec<u8> {
	let mut out = Vec::new();
	capnp::serialize::write_message(&mut out, message).expect("write to vec succeeds");
	out
}

/// Serialize with packed framing.
pub fn packed_bytes(message: &Builder<HeapAllocator>) -> Vec<u8> {
	let mut out = Vec::new();
	capnp::serialize_packed::write_message(&mut out, message).expect("write to vec succeeds");
	out
}

/// Request with one requested file and a compiler version.
///
/// Renders as
/// `{"requestedFiles" : [{"id" : 1, "filename" : "foo.capnp"}], "capnpVersion" : {"major" : 1, "minor" : 0, "micro" : 2}}`.
pub fn files_request() -> Builder<HeapAllocator> {
	request_message(|mut root| {
		{
			let files = root.reborrow().init_requested_files(1);
			let mut file = files.get(0);
			file.set_id(1);
			file.set_filename("foo.capnp");
		}
		let mut version = root.init_capnp_version();
		version.set_major(1);
		version.set_minor(0);
		version.set_micro(2);
	})
}

/// Request with a file node and a struct node.
///
/// The file node has id 16 and display name `display_name`; the struct node
/// has id 32, display name `foo.capnp:Point`, and an inline-composite list
/// encoding.
pub fn nodes_request(display_name: &str) -> Builder<HeapAllocator> {
	request_message(|root| {
		let mut nodes = root.init_nodes(2);
		{
			let mut file = nodes.reborrow().get(0);
			file.set_id(16);
			file.set_display_name(display_name);
			file.set_display_name_prefix_length(0);
			file.set_file(());
		}
		let mut point = nodes.get(1);
		point.set_id(32);
		point.set_display_name("foo.capnp:Point");
		point.set_display_name_prefix_length(10);
		point.set_scope_id(16);
		let mut body = point.init_struct();
		body.set_data_word_count(1);
		body.set_preferred_list_encoding(ElementSize::InlineComposite);
	})
}

/// Request with one requested file named `filename`.
pub fn named_file_request(filename: &str) -> Builder<HeapAllocator> {
	request_message(|root| {
		let files = root.init_requested_files(1);
		let mut file = files.get(0);
		file.set_id(1);
		file.set_filename(filename);
	})
}

/// Replace the first occurrence of `from` in `bytes` with `to` (same length).
pub fn patch_bytes(bytes: &mut [u8], from: &[u8], to: &[u8]) {
	assert_eq!(from.len(), to.len(), "patch must keep the length");
	let at = bytes
		.windows(from.len())
		.position(|window| window == from)
		.expect("pattern present in message");
	bytes[at..at + to.len()].copy_from_slice(to);
}

/// Request whose four nodes are constants holding `float32`, `float64`,
/// `data`, and `anyPointer` values, in that order.
pub fn const_values_request() -> Builder<HeapAllocator> {
	request_message(|root| {
		let mut nodes = root.init_nodes(4);
		for index in 0..4_u32 {
			let mut node = nodes.reborrow().get(index);
			node.set_id(u64::from(index) + 1);
			let mut value = node.init_const().init_value();
			match index {
				0 => value.set_float32(1.5),
				1 => value.set_float64(0.25),
				2 => value.set_data(&[1, 2, 3][..]),
				_ => {
					value.init_any_pointer();
				}
			}
		}
	})
}
