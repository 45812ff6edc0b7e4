//! Derive `xml-marshal` structure schemas
//!
//! Deriving supports the following attributes on the struct:
//! - `#[xml_marshal(location_name = "...")]`: element name when the holding field doesn't name
//!   it (and for root values); defaults to the struct name
//! - `#[xml_marshal(xml_prefix = "...", xml_uri = "...")]`: declare a namespace on the element
//! - `#[xml_marshal(payload = "field")]`: build only the named field in place of the struct
//! - `#[xml_marshal(crate = "...")]`: Name of `xml-marshal` crate in local scope; defaults to
//!   `xml_marshal`
//!
//! And the following attributes on struct fields:
//! - `#[xml_marshal(location_name = "...")]`: element / attribute name; defaults to the field name
//! - `#[xml_marshal(location = "...")]`: one of `body`, `header`, `headers`, `querystring`, `uri`,
//!   `statusCode`; only body fields are encoded
//! - `#[xml_marshal(type = "...")]`: one of `structure`, `list`, `map`; overrides the shape of the
//!   field's value
//! - `#[xml_marshal(flattened)]`: list items become siblings without a wrapping element
//! - `#[xml_marshal(location_name_list = "...")]`: item element name of non-flattened lists
//! - `#[xml_marshal(xml_attribute)]`: put scalar as attribute on the enclosing element
//! - `#[xml_marshal(xml_prefix = "...", xml_uri = "...")]`: declare a namespace on a structure
//!   field's element
//!
//! Fields that aren't `pub` are part of the schema but never encoded; their types don't need to
//! implement `ToValue`.
//!
//! Generic structs get a `ToValue` bound on every type parameter.
//!
//! Multiple attributes can be combined like `#[xml_marshal(location_name = "Tag", flattened)]`.
//!
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/xml-marshal-derive/0.1.0")]

extern crate proc_macro;

mod expand;
mod structure;

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

use crate::structure::StructureInput;

/// Derive `xml-marshal::{Structure,ToValue}`
#[proc_macro_derive(Structure, attributes(xml_marshal))]
pub fn derive_structure(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	TokenStream::from(match StructureInput::from_derive_input(&input).and_then(StructureInput::validate) {
		Ok(input) => expand::derive_structure(&input),
		Err(e) => e.write_errors(),
	})
}
