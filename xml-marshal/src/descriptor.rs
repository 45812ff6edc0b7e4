//! Per-field annotations and per-structure traits
//!
//! Descriptors only hold `&'static str`, so whole schema tables can be written as constants:
//!
//! ```
//! use xml_marshal::{FieldDescriptor, Location};
//!
//! const TAGS: FieldDescriptor = FieldDescriptor::new().named("Tag").flattened();
//! const BUCKET: FieldDescriptor = FieldDescriptor::new().named("Bucket").located(Location::Uri);
//! assert!(TAGS.is_body());
//! assert!(!BUCKET.is_body());
//! ```

use std::fmt;

/// Where in the protocol message a field belongs.
///
/// Only `Body` (or no location at all) is encoded by the builder; everything else is consumed by
/// other parts of a request encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
	/// XML document body
	Body,
	/// Single HTTP header
	Header,
	/// Map of prefixed HTTP headers
	Headers,
	/// URL query string
	Query,
	/// URI path segment
	Uri,
	/// HTTP status code (responses only)
	StatusCode,
}

/// Explicit shape override; wins over the shape of the runtime value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
	/// Element with one child per field
	Structure,
	/// Ordered sequence
	List,
	/// Associative container
	Map,
}

impl fmt::Display for ShapeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Structure => "structure",
			Self::List => "list",
			Self::Map => "map",
		})
	}
}

/// Annotations attached to a struct field (or the synthetic root).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
	/// Output element / attribute name
	pub location_name: Option<&'static str>,
	/// Message location; `None` means body
	pub location: Option<Location>,
	/// Explicit shape override
	pub kind: Option<ShapeKind>,
	/// Lists only: items become siblings without a wrapping element
	pub flattened: bool,
	/// Lists only: item element name for non-flattened lists (default `member`)
	pub location_name_list: Option<&'static str>,
	/// Scalars only: place as attribute of the enclosing element
	pub xml_attribute: bool,
	/// Structures only: namespace prefix
	pub xml_prefix: Option<&'static str>,
	/// Structures only: namespace URI
	pub xml_uri: Option<&'static str>,
	/// Structures only: name of the single member to promote
	pub payload: Option<&'static str>,
}

impl FieldDescriptor {
	/// Descriptor without any annotations
	pub const EMPTY: Self = Self::new();

	/// Same as `EMPTY`
	pub const fn new() -> Self {
		Self {
			location_name: None,
			location: None,
			kind: None,
			flattened: false,
			location_name_list: None,
			xml_attribute: false,
			xml_prefix: None,
			xml_uri: None,
			payload: None,
		}
	}

	/// Set `location_name`
	pub const fn named(mut self, location_name: &'static str) -> Self {
		self.location_name = Some(location_name);
		self
	}

	/// Set `location`
	pub const fn located(mut self, location: Location) -> Self {
		self.location = Some(location);
		self
	}

	/// Set the explicit shape override
	pub const fn kind(mut self, kind: ShapeKind) -> Self {
		self.kind = Some(kind);
		self
	}

	/// Mark list as flattened
	pub const fn flattened(mut self) -> Self {
		self.flattened = true;
		self
	}

	/// Set `location_name_list`
	pub const fn list_member(mut self, name: &'static str) -> Self {
		self.location_name_list = Some(name);
		self
	}

	/// Mark scalar as attribute
	pub const fn attribute(mut self) -> Self {
		self.xml_attribute = true;
		self
	}

	/// Declare a namespace; an empty prefix declares the default namespace
	pub const fn namespace(mut self, prefix: Option<&'static str>, uri: &'static str) -> Self {
		self.xml_prefix = prefix;
		self.xml_uri = Some(uri);
		self
	}

	/// Set `payload`
	pub const fn payload(mut self, member: &'static str) -> Self {
		self.payload = Some(member);
		self
	}

	/// Whether the field is encoded in the document body
	pub fn is_body(&self) -> bool {
		matches!(self.location, None | Some(Location::Body))
	}

	/// Element name, or the empty string if none was set
	pub fn name(&self) -> &'static str {
		self.location_name.unwrap_or("")
	}

	/// Default `location_name` to the given field name
	pub(crate) fn or_named(mut self, field_name: &'static str) -> Self {
		if self.location_name.map_or(true, str::is_empty) {
			self.location_name = Some(field_name);
		}
		self
	}

	/// Fill unset structure annotations from the structure's own traits
	pub(crate) fn with_traits(mut self, traits: &ShapeTraits) -> Self {
		self.location_name = self.location_name.or(traits.location_name);
		if self.xml_uri.is_none() {
			self.xml_prefix = self.xml_prefix.or(traits.xml_prefix);
			self.xml_uri = traits.xml_uri;
		}
		self.payload = self.payload.or(traits.payload);
		self
	}
}

/// Annotations attached once to a structure type (as opposed to a field holding it).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShapeTraits {
	/// Element name used when the holding field doesn't name it
	pub location_name: Option<&'static str>,
	/// Namespace prefix
	pub xml_prefix: Option<&'static str>,
	/// Namespace URI
	pub xml_uri: Option<&'static str>,
	/// Name of the single member to promote
	pub payload: Option<&'static str>,
}

impl ShapeTraits {
	/// No traits at all
	pub const EMPTY: Self = Self {
		location_name: None,
		xml_prefix: None,
		xml_uri: None,
		payload: None,
	};
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn field_annotations_win_over_traits() {
		let traits = ShapeTraits {
			location_name: Some("Config"),
			xml_prefix: Some("s3"),
			xml_uri: Some("urn:s3"),
			payload: None,
		};

		let merged = FieldDescriptor::new().named("Field").with_traits(&traits);
		assert_eq!(merged.location_name, Some("Field"));
		assert_eq!(merged.xml_prefix, Some("s3"));
		assert_eq!(merged.xml_uri, Some("urn:s3"));

		// a field-level namespace replaces prefix and uri together
		let merged = FieldDescriptor::new().namespace(None, "urn:other").with_traits(&traits);
		assert_eq!(merged.location_name, Some("Config"));
		assert_eq!(merged.xml_prefix, None);
		assert_eq!(merged.xml_uri, Some("urn:other"));
	}

	#[test]
	fn only_body_locations_are_encoded() {
		assert!(FieldDescriptor::EMPTY.is_body());
		assert!(FieldDescriptor::new().located(Location::Body).is_body());
		for location in &[Location::Header, Location::Headers, Location::Query, Location::Uri, Location::StatusCode] {
			assert!(!FieldDescriptor::new().located(*location).is_body());
		}
	}

	#[test]
	fn field_name_fills_missing_location_name() {
		assert_eq!(FieldDescriptor::EMPTY.or_named("Key").location_name, Some("Key"));
		assert_eq!(FieldDescriptor::new().named("K").or_named("Key").location_name, Some("K"));
	}
}
