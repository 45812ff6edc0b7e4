//! Errors raised while building an element tree

use crate::descriptor::ShapeKind;

/// Failure of a single build call; the first failing field aborts the whole build.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
	/// A map-shaped body field was encountered; maps have no encoding in this protocol.
	#[error("maps are not supported for this protocol (param {location_name})")]
	UnsupportedContainerKind {
		/// Element name of the offending field
		location_name: String,
	},
	/// A scalar whose type has no defined text encoding.
	///
	/// Unsigned integers and `char` end up here; so does `Vec<u8>`, which is a list of `u8`.
	/// Wrap raw bytes in [`Blob`](crate::Blob) to get base64 text.
	#[error("unsupported value for param {location_name}: {value} ({type_name})")]
	UnsupportedScalarType {
		/// Element name of the offending field
		location_name: String,
		/// Name of the value's actual type
		type_name: &'static str,
		/// Rendering of the value for diagnostics
		value: String,
	},
	/// An explicit `type` override doesn't fit the shape of the value.
	#[error("param {location_name} is declared as {expected} but the value is a {found}")]
	ShapeMismatch {
		/// Element name of the offending field
		location_name: String,
		/// Kind requested by the descriptor
		expected: ShapeKind,
		/// Kind of the actual value
		found: &'static str,
	},
	/// The `payload` trait names a member the structure doesn't have.
	#[error("payload member {payload:?} not found in {shape}")]
	UnknownPayloadMember {
		/// Structure carrying the payload trait
		shape: &'static str,
		/// Requested member name
		payload: &'static str,
	},
	/// A root list or scalar without any element name.
	#[error("can't build an unnamed root {kind}")]
	UnnamedRoot {
		/// Kind of the root value
		kind: &'static str,
	},
	/// The value graph is nested deeper than `BuildOptions::max_depth`.
	#[error("value nesting exceeds the depth limit of {limit}")]
	DepthLimitExceeded {
		/// Configured limit
		limit: usize,
	},
}

impl BuildError {
	pub(crate) fn unsupported_container(location_name: &str) -> Self {
		Self::UnsupportedContainerKind {
			location_name: location_name.into(),
		}
	}

	pub(crate) fn unsupported_scalar(
		location_name: &str,
		type_name: &'static str,
		value: &str,
	) -> Self {
		Self::UnsupportedScalarType {
			location_name: location_name.into(),
			type_name,
			value: value.into(),
		}
	}

	pub(crate) fn shape_mismatch(location_name: &str, expected: ShapeKind, found: &'static str) -> Self {
		Self::ShapeMismatch {
			location_name: location_name.into(),
			expected,
			found,
		}
	}
}
