use std::collections::HashMap;

use serde::Serialize;

/// Struct and enum declarations referenced by decoded values.
#[derive(Debug, Default, Serialize)]
pub struct Schema {
	/// Struct declarations in interning order.
	pub structs: Vec<StructDecl>,
	/// Enum declarations in interning order.
	pub enums: Vec<EnumDecl>,
	#[serde(skip)]
	struct_by_id: HashMap<u64, u32>,
	#[serde(skip)]
	enum_by_id: HashMap<u64, u32>,
}

/// One struct (or group) declaration.
#[derive(Debug, Clone, Serialize)]
pub struct StructDecl {
	/// Schema node id.
	pub id: u64,
	/// Unqualified display name.
	pub name: Box<str>,
	/// Field declarations in declared order.
	pub fields: Vec<FieldDecl>,
}

/// One field declaration.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDecl {
	/// Field name.
	pub name: Box<str>,
	/// Union discriminant, set only for union members.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub discriminant: Option<u16>,
}

/// One enum declaration.
#[derive(Debug, Clone, Serialize)]
pub struct EnumDecl {
	/// Schema node id.
	pub id: u64,
	/// Unqualified display name.
	pub name: Box<str>,
	/// Enumerant names indexed by ordinal.
	pub enumerants: Vec<Box<str>>,
}

impl StructDecl {
	/// Whether any declared field is a union member.
	pub fn has_union(&self) -> bool {
		self.fields.iter().any(|field| field.discriminant.is_some())
	}
}

impl FieldDecl {
	/// Non-union field.
	pub fn plain(name: &str) -> Self {
		Self { name: name.into(), discriminant: None }
	}

	/// Union member with discriminant `discriminant`.
	pub fn union_member(name: &str, discriminant: u16) -> Self {
		Self {
			name: name.into(),
			discriminant: Some(discriminant),
		}
	}
}

impl Schema {
	/// Add a struct declaration, returning its index.
	///
	/// A declaration whose id is already known is not added twice.
	pub fn add_struct(&mut self, decl: StructDecl) -> u32 {
		if let Some(index) = self.struct_by_id.get(&decl.id) {
			return *index;
		}
		let index = self.structs.len() as u32;
		self.struct_by_id.insert(decl.id, index);
		self.structs.push(decl);
		index
	}

	/// Add an enum declaration, returning its index.
	pub fn add_enum(&mut self, decl: EnumDecl) -> u32 {
		if let Some(index) = self.enum_by_id.get(&decl.id) {
			return *index;
		}
		let index = self.enums.len() as u32;
		self.enum_by_id.insert(decl.id, index);
		self.enums.push(decl);
		index
	}

	/// Look up struct index by node id.
	pub fn struct_index(&self, id: u64) -> Option<u32> {
		self.struct_by_id.get(&id).copied()
	}

	/// Look up enum index by node id.
	pub fn enum_index(&self, id: u64) -> Option<u32> {
		self.enum_by_id.get(&id).copied()
	}

	/// Look up struct declaration by index.
	pub fn struct_decl(&self, index: u32) -> Option<&StructDecl> {
		self.structs.get(index as usize)
	}

	/// Look up enum declaration by index.
	pub fn enum_decl(&self, index: u32) -> Option<&EnumDecl> {
		self.enums.get(index as usize)
	}

	/// Resolve the symbolic name of `raw` in enum table `index`.
	pub fn enumerant_name(&self, index: u32, raw: u16) -> Option<&str> {
		self.enum_decl(index)
			.and_then(|decl| decl.enumerants.get(usize::from(raw)))
			.map(|name| name.as_ref())
	}
}

#[cfg(test)]
mod tests;
