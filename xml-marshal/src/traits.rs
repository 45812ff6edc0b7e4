use crate::{
	descriptor::ShapeTraits,
	value::{
		Member,
		Value,
	},
};

// shares the name with the trait below; `crate::Structure` brings in both
#[cfg_attr(doc_cfg, doc(cfg(feature = "derive")))]
#[cfg(feature = "derive")]
pub use xml_marshal_derive::Structure;

/// Statically declared schema of a structure type.
///
/// Can be derived (if `derive` feature is active).
pub trait Structure {
	/// Name of the type; names a root element nothing else names.
	fn shape_name(&self) -> &'static str;

	/// Type-level annotations, merged under the descriptor of the field holding the structure.
	fn shape_traits(&self) -> ShapeTraits {
		ShapeTraits::EMPTY
	}

	/// All fields in declaration order.
	fn members(&self) -> Vec<Member<'_>>;

	/// Single field by name
	fn member(&self, name: &str) -> Option<Member<'_>> {
		self.members().into_iter().find(|m| m.name == name)
	}
}

/// Conversion into the value graph the builder walks.
pub trait ToValue {
	/// Borrowed view of the data
	fn to_value(&self) -> Value<'_>;
}
