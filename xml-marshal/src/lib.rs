#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/xml-marshal/0.1.0")]
//! This library builds XML element trees from schema-annotated data, as needed by the request
//! encoder of REST-XML style wire protocols: a caller hands over a root value together with its
//! field schema and gets back a single element tree ready to be written out by an XML serializer.
//!
//! The schema is declared statically per structure type (usually derived) through the
//! [`Structure`] trait: an ordered list of fields, each with a [`FieldDescriptor`] controlling
//!
//! - placement (only body-located fields end up in the tree; headers, query parameters and URI
//!   segments are encoded elsewhere),
//! - naming (`location_name`, `location_name_list`),
//! - list flattening,
//! - attribute vs. element placement of scalars,
//! - namespace declarations (`xml_prefix` / `xml_uri`),
//! - payload unwrapping.
//!
//! Maps can't be encoded and fail the build; so do scalars without a defined text encoding.
//!
//! For the following XML handling crates adaptors are included if enabled through the equally
//! named features:
//! - [`quick-xml`](https://crates.io/crates/quick-xml)
//!
//! If the `derive` feature is enabled `Structure` can be derived.

pub mod builder;
pub mod descriptor;
pub mod errors;
pub mod node;
mod traits;
pub mod value;

/// For now we use a simple boxed error at the serializer boundary
pub type Error = Box<dyn std::error::Error>;
/// Result alias with out error type included
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub mod quick_xml;

#[cfg(test)]
mod test_struct;

pub use self::{
	builder::{
		build_tree,
		build_xml,
		BuildOptions,
		Builder,
		Sink,
	},
	descriptor::{
		FieldDescriptor,
		Location,
		ShapeKind,
		ShapeTraits,
	},
	errors::BuildError,
	node::XmlNode,
	traits::{
		Structure,
		ToValue,
	},
	value::{
		Blob,
		Member,
		Scalar,
		Value,
	},
};
