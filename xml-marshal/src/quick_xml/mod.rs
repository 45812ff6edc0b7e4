//! Serializer adaptor using `quick-xml`

mod serializer;

/// Re-export `quick-xml` crate
pub use quick_xml;

pub use self::serializer::{
	build_document,
	serialize_document,
	serialize_node,
	SerializeOptions,
	Serializer,
};
