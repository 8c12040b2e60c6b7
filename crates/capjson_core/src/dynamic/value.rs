/// Runtime value lowered from a dynamic capnp reader.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Unit value.
	Void,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar, any width.
	Int(i64),
	/// Unsigned integer scalar, any width.
	UInt(u64),
	/// Floating point scalar, any width.
	Float(f64),
	/// UTF-8 text.
	Text(Box<str>),
	/// Ordered list of values.
	List(Vec<Value>),
	/// Enum tag.
	Enum(EnumValue),
	/// Struct or group.
	Struct(StructValue),
	/// Value kind the printer does not render.
	Unsupported(UnsupportedKind),
}

/// Raw enum tag with an optional enum table reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
	/// Index into [`Schema::enums`](crate::dynamic::Schema), when known.
	pub schema: Option<u32>,
	/// Raw 16-bit tag as stored.
	pub raw: u16,
}

/// Decoded struct with one slot per declared field.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
	/// Index into [`Schema::structs`](crate::dynamic::Schema).
	pub schema: u32,
	/// Declared index of the active union member.
	pub which: Option<u16>,
	/// Field slots in declared order.
	pub fields: Vec<FieldValue>,
}

/// One struct field slot.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Whether the slot is explicitly set.
	pub present: bool,
	/// Decoded payload; `None` when the slot was never read.
	pub value: Option<Value>,
}

impl FieldValue {
	/// Slot that is set and carries `value`.
	pub fn set(value: Value) -> Self {
		Self {
			present: true,
			value: Some(value),
		}
	}

	/// Slot that is not set and was not read.
	pub fn unset() -> Self {
		Self {
			present: false,
			value: None,
		}
	}
}

/// Kinds that render as the unknown placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedKind {
	/// Raw byte blob.
	Data,
	/// Untyped pointer.
	AnyPointer,
	/// Interface capability.
	Capability,
}
