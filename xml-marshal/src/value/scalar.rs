use base64::{
	engine::general_purpose::STANDARD,
	Engine as _,
};
use chrono::{
	DateTime,
	Utc,
};
use std::borrow::Cow;

/// Timestamps are always written in UTC without fractional seconds
const ISO8601_UTC: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Leaf value with a canonical text form
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar<'a> {
	/// Written verbatim
	Str(&'a str),
	/// Padded standard base64
	Bytes(&'a [u8]),
	/// `true` / `false`
	Bool(bool),
	/// Signed integer of any width
	Int(i128),
	/// Shortest round-trippable decimal
	Float32(f32),
	/// Shortest round-trippable decimal
	Float64(f64),
	/// `YYYY-MM-DDThh:mm:ssZ`
	Timestamp(DateTime<Utc>),
	/// Value without a text encoding in this protocol
	Unsupported {
		/// Name of the value's type
		type_name: &'static str,
		/// Rendering of the value for diagnostics
		value: String,
	},
}

impl<'a> Scalar<'a> {
	/// Canonical text; `None` for `Unsupported`.
	pub fn to_text(&self) -> Option<Cow<'a, str>> {
		let text = match *self {
			Self::Str(s) => return Some(Cow::Borrowed(s)),
			Self::Bytes(b) => STANDARD.encode(b),
			Self::Bool(b) => b.to_string(),
			Self::Int(i) => i.to_string(),
			Self::Float32(f) => float_text(f64::from(f), || f.to_string()),
			Self::Float64(f) => float_text(f, || f.to_string()),
			Self::Timestamp(t) => t.format(ISO8601_UTC).to_string(),
			Self::Unsupported { .. } => return None,
		};
		Some(Cow::Owned(text))
	}

	/// Name of the underlying type for diagnostics
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Str(_) => "string",
			Self::Bytes(_) => "blob",
			Self::Bool(_) => "bool",
			Self::Int(_) => "integer",
			Self::Float32(_) => "f32",
			Self::Float64(_) => "f64",
			Self::Timestamp(_) => "timestamp",
			Self::Unsupported { type_name, .. } => *type_name,
		}
	}
}

// `Display` already gives the shortest round-trip form without exponent; only the
// non-finite spellings differ from the wire format.
fn float_text(probe: f64, display: impl FnOnce() -> String) -> String {
	if probe.is_nan() {
		"NaN".into()
	} else if probe.is_infinite() {
		let inf = if probe > 0.0 { "+Inf" } else { "-Inf" };
		inf.into()
	} else {
		display()
	}
}
