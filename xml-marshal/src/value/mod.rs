//! Value graph handed to the builder
//!
//! Types describe their shape by implementing `ToValue`; implementations for the common std
//! types are provided (`Option` is absent when `None`, sequences are lists, maps are maps, ...).

mod inner;
mod scalar;

use crate::{
	descriptor::{
		FieldDescriptor,
		ShapeKind,
	},
	traits::Structure,
};
use std::fmt;

pub use self::scalar::Scalar;

/// Borrowed view of program data.
pub enum Value<'a> {
	/// Nil / absent; produces no node
	Absent,
	/// Structure with a declared schema
	Structure(&'a dyn Structure),
	/// Ordered sequence
	List(Vec<Value<'a>>),
	/// Associative container; only its size is kept as maps can't be encoded
	Map {
		/// Number of entries
		entries: usize,
	},
	/// Single scalar
	Scalar(Scalar<'a>),
}

impl<'a> Value<'a> {
	/// Shape inferred from the value itself; `None` for scalars (and absent values)
	pub fn shape_kind(&self) -> Option<ShapeKind> {
		match self {
			Self::Structure(_) => Some(ShapeKind::Structure),
			Self::List(_) => Some(ShapeKind::List),
			Self::Map { .. } => Some(ShapeKind::Map),
			Self::Absent | Self::Scalar(_) => None,
		}
	}

	/// Short description of the value kind for diagnostics
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Absent => "absent value",
			Self::Structure(_) => "structure",
			Self::List(_) => "list",
			Self::Map { .. } => "map",
			Self::Scalar(_) => "scalar",
		}
	}

	/// Whether this is `Absent`
	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Absent)
	}
}

impl fmt::Debug for Value<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Absent => f.write_str("Absent"),
			Self::Structure(s) => write!(f, "Structure({})", s.shape_name()),
			Self::List(items) => f.debug_tuple("List").field(items).finish(),
			Self::Map { entries } => f.debug_struct("Map").field("entries", entries).finish(),
			Self::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
		}
	}
}

/// Single field of a structure
#[derive(Debug)]
pub struct Member<'a> {
	/// Field name; default element name
	pub name: &'static str,
	/// Whether the field is externally visible; hidden fields are never encoded
	pub exported: bool,
	/// Field annotations
	pub descriptor: FieldDescriptor,
	/// Field value
	pub value: Value<'a>,
}

impl<'a> Member<'a> {
	/// Visible member
	pub fn new(name: &'static str, descriptor: FieldDescriptor, value: Value<'a>) -> Self {
		Self {
			name,
			exported: true,
			descriptor,
			value,
		}
	}

	/// Member that is carried in the schema but never encoded
	pub fn hidden(name: &'static str, descriptor: FieldDescriptor, value: Value<'a>) -> Self {
		Self {
			exported: false,
			..Self::new(name, descriptor, value)
		}
	}
}

/// Raw bytes; encoded as padded standard base64.
///
/// Plain `Vec<u8>` and `[u8]` are lists of `u8`, which have no encoding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Blob(pub Vec<u8>);

impl From<Vec<u8>> for Blob {
	fn from(data: Vec<u8>) -> Self {
		Self(data)
	}
}

impl From<&[u8]> for Blob {
	fn from(data: &[u8]) -> Self {
		Self(data.to_vec())
	}
}

impl AsRef<[u8]> for Blob {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}
