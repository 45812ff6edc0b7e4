use darling::{
	ast,
	util::Flag,
	FromDeriveInput,
	FromField,
};
use proc_macro2::Span;
use syn::{
	ext::IdentExt,
	parse_quote,
	spanned::Spanned,
	Generics,
	Ident,
	Path,
	Visibility,
};

mod annotation;

pub use self::annotation::{
	Location,
	ShapeKind,
};

/// Parsed struct field with its annotations
pub struct Field {
	pub ident: Ident,
	pub exported: bool,
	pub location_name: Option<String>,
	pub location: Option<Location>,
	pub kind: Option<ShapeKind>,
	pub flattened: bool,
	pub location_name_list: Option<String>,
	pub xml_attribute: bool,
	pub xml_prefix: Option<String>,
	pub xml_uri: Option<String>,
	pub payload: Option<String>,
	span: Span,
}

impl Field {
	/// Member name; `r#type` becomes `type`
	pub fn name(&self) -> String {
		self.ident.unraw().to_string()
	}

	pub fn span(&self) -> Span {
		self.span
	}
}

impl FromField for Field {
	fn from_field(field: &syn::Field) -> darling::Result<Self> {
		#[derive(FromField)]
		#[darling(attributes(xml_marshal))]
		struct RawField {
			ident: Option<Ident>,
			vis: Visibility,
			#[darling(default)]
			location_name: Option<String>,
			#[darling(default)]
			location: Option<String>,
			#[darling(default, rename = "type")]
			kind: Option<String>,
			#[darling(default)]
			flattened: Flag,
			#[darling(default)]
			location_name_list: Option<String>,
			#[darling(default)]
			xml_attribute: Flag,
			#[darling(default)]
			xml_prefix: Option<String>,
			#[darling(default)]
			xml_uri: Option<String>,
			#[darling(default)]
			payload: Option<String>,
		}

		let RawField {
			ident,
			vis,
			location_name,
			location,
			kind,
			flattened,
			location_name_list,
			xml_attribute,
			xml_prefix,
			xml_uri,
			payload,
		} = RawField::from_field(field)?;

		let ident = ident.ok_or_else(|| darling::Error::custom("Only named fields supported").with_span(field))?;

		let location = match non_empty(location) {
			Some(l) => Some(Location::parse(&l).ok_or_else(|| darling::Error::unknown_value(&l).with_span(field))?),
			None => None,
		};
		let kind = match non_empty(kind) {
			Some(k) => Some(ShapeKind::parse(&k).ok_or_else(|| darling::Error::unknown_value(&k).with_span(field))?),
			None => None,
		};

		Ok(Self {
			ident,
			exported: matches!(vis, Visibility::Public(_)),
			location_name: non_empty(location_name),
			location,
			kind,
			flattened: flattened.is_present(),
			location_name_list: non_empty(location_name_list),
			xml_attribute: xml_attribute.is_present(),
			xml_prefix: non_empty(xml_prefix),
			xml_uri: non_empty(xml_uri),
			payload: non_empty(payload),
			span: field.span(),
		})
	}
}

/// Empty annotations are the same as missing ones
fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|v| !v.is_empty())
}

fn default_crate_path() -> Path {
	parse_quote!(xml_marshal)
}

#[derive(FromDeriveInput)]
#[darling(attributes(xml_marshal), supports(struct_named, struct_unit))]
pub struct StructureInput {
	pub ident: Ident,
	pub generics: Generics,
	pub data: ast::Data<(), Field>,
	/// Element name used when the holding field doesn't name it
	#[darling(default)]
	location_name: Option<String>,
	#[darling(default)]
	xml_prefix: Option<String>,
	#[darling(default)]
	xml_uri: Option<String>,
	/// Field to promote in place of the whole structure
	#[darling(default)]
	payload: Option<String>,
	#[darling(rename = "crate", default = "default_crate_path")]
	pub xml_marshal_crate: Path,
}

impl StructureInput {
	/// The fields of the input struct.
	pub fn fields(&self) -> impl Iterator<Item = &Field> {
		self.data
			.as_ref()
			.take_struct()
			.map(|fields| fields.fields)
			.unwrap_or_default()
			.into_iter()
	}

	pub fn location_name(&self) -> Option<&str> {
		self.location_name.as_deref().filter(|v| !v.is_empty())
	}

	pub fn xml_prefix(&self) -> Option<&str> {
		self.xml_prefix.as_deref().filter(|v| !v.is_empty())
	}

	pub fn xml_uri(&self) -> Option<&str> {
		self.xml_uri.as_deref().filter(|v| !v.is_empty())
	}

	pub fn payload(&self) -> Option<&str> {
		self.payload.as_deref().filter(|v| !v.is_empty())
	}

	/// A payload must name one of the struct's own fields.
	pub fn validate(self) -> darling::Result<Self> {
		if let Some(payload) = self.payload() {
			if !self.fields().any(|f| f.name() == payload) {
				return Err(darling::Error::custom(format!("payload field {:?} not found", payload))
					.with_span(&self.ident));
			}
		}
		Ok(self)
	}
}
