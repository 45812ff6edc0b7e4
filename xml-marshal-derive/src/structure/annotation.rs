use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

/// Value of a `location = "..."` annotation.
#[derive(Clone, Copy)]
pub enum Location {
	Body,
	Header,
	Headers,
	Query,
	Uri,
	StatusCode,
}

impl Location {
	/// Accepts the protocol metadata spelling
	pub fn parse(value: &str) -> Option<Self> {
		Some(match value {
			"body" => Self::Body,
			"header" => Self::Header,
			"headers" => Self::Headers,
			"querystring" => Self::Query,
			"uri" => Self::Uri,
			"statusCode" => Self::StatusCode,
			_ => return None,
		})
	}

	pub fn tokens(self, xml_marshal_crate: &Path) -> TokenStream {
		let variant = match self {
			Self::Body => quote!(Body),
			Self::Header => quote!(Header),
			Self::Headers => quote!(Headers),
			Self::Query => quote!(Query),
			Self::Uri => quote!(Uri),
			Self::StatusCode => quote!(StatusCode),
		};
		quote!(#xml_marshal_crate::Location::#variant)
	}
}

/// Value of a `type = "..."` annotation.
#[derive(Clone, Copy)]
pub enum ShapeKind {
	Structure,
	List,
	Map,
}

impl ShapeKind {
	pub fn parse(value: &str) -> Option<Self> {
		Some(match value {
			"structure" => Self::Structure,
			"list" => Self::List,
			"map" => Self::Map,
			_ => return None,
		})
	}

	pub fn tokens(self, xml_marshal_crate: &Path) -> TokenStream {
		let variant = match self {
			Self::Structure => quote!(Structure),
			Self::List => quote!(List),
			Self::Map => quote!(Map),
		};
		quote!(#xml_marshal_crate::ShapeKind::#variant)
	}
}
