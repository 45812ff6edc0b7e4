use proc_macro2::TokenStream;
use quote::{
	quote,
	quote_spanned,
	ToTokens,
	TokenStreamExt,
};
use syn::{
	parse_quote,
	Path,
};

use crate::structure::{
	Field,
	StructureInput,
};

fn opt_str(value: Option<&str>) -> TokenStream {
	match value {
		Some(v) => quote!(::std::option::Option::Some(#v)),
		None => quote!(::std::option::Option::None),
	}
}

struct FieldDescriptor<'a> {
	data: &'a Field,
	xml_marshal_crate: &'a Path,
}

impl ToTokens for FieldDescriptor<'_> {
	fn to_tokens(&self, tokens: &mut TokenStream) {
		let Self {
			data,
			xml_marshal_crate,
		} = self;

		let location_name = opt_str(data.location_name.as_deref());
		let location = match data.location {
			Some(l) => {
				let l = l.tokens(xml_marshal_crate);
				quote!(::std::option::Option::Some(#l))
			},
			None => quote!(::std::option::Option::None),
		};
		let kind = match data.kind {
			Some(k) => {
				let k = k.tokens(xml_marshal_crate);
				quote!(::std::option::Option::Some(#k))
			},
			None => quote!(::std::option::Option::None),
		};
		let flattened = data.flattened;
		let location_name_list = opt_str(data.location_name_list.as_deref());
		let xml_attribute = data.xml_attribute;
		let xml_prefix = opt_str(data.xml_prefix.as_deref());
		let xml_uri = opt_str(data.xml_uri.as_deref());
		let payload = opt_str(data.payload.as_deref());

		tokens.append_all(quote! {
			#xml_marshal_crate::FieldDescriptor {
				location_name: #location_name,
				location: #location,
				kind: #kind,
				flattened: #flattened,
				location_name_list: #location_name_list,
				xml_attribute: #xml_attribute,
				xml_prefix: #xml_prefix,
				xml_uri: #xml_uri,
				payload: #payload,
			}
		});
	}
}

struct Member<'a> {
	data: &'a Field,
	xml_marshal_crate: &'a Path,
}

impl ToTokens for Member<'_> {
	fn to_tokens(&self, tokens: &mut TokenStream) {
		let Self {
			data,
			xml_marshal_crate,
		} = self;

		let ident = &data.ident;
		let name = data.name();
		let exported = data.exported;
		let descriptor = FieldDescriptor {
			data,
			xml_marshal_crate,
		};
		// hidden fields are never built, so their type needn't implement `ToValue`
		let value = if exported {
			quote_spanned!(data.span()=> #xml_marshal_crate::ToValue::to_value(&self.#ident))
		} else {
			quote!(#xml_marshal_crate::Value::Absent)
		};

		tokens.append_all(quote_spanned! {data.span()=>
			#xml_marshal_crate::Member {
				name: #name,
				exported: #exported,
				descriptor: #descriptor,
				value: #value,
			}
		});
	}
}

pub fn derive_structure(input: &StructureInput) -> TokenStream {
	let xml_marshal_crate = &input.xml_marshal_crate;
	let members = input
		.fields()
		.map(|data| Member {
			data,
			xml_marshal_crate,
		})
		.collect::<Vec<_>>();

	let ident = &input.ident;
	let shape_name = ident.to_string();
	let location_name = opt_str(input.location_name());
	let xml_prefix = opt_str(input.xml_prefix());
	let xml_uri = opt_str(input.xml_uri());
	let payload = opt_str(input.payload());
	let mut generics = input.generics.clone();
	{
		let where_clause = generics.make_where_clause();
		for param in input.generics.type_params() {
			let param = &param.ident;
			where_clause
				.predicates
				.push(parse_quote!(#param: #xml_marshal_crate::ToValue));
		}
	}
	let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

	quote! {
		impl #impl_generics #xml_marshal_crate::Structure for #ident #ty_generics #where_clause {
			fn shape_name(&self) -> &'static str {
				#shape_name
			}

			fn shape_traits(&self) -> #xml_marshal_crate::ShapeTraits {
				#xml_marshal_crate::ShapeTraits {
					location_name: #location_name,
					xml_prefix: #xml_prefix,
					xml_uri: #xml_uri,
					payload: #payload,
				}
			}

			fn members(&self) -> ::std::vec::Vec<#xml_marshal_crate::Member<'_>> {
				::std::vec![#(#members),*]
			}
		}

		impl #impl_generics #xml_marshal_crate::ToValue for #ident #ty_generics #where_clause {
			fn to_value(&self) -> #xml_marshal_crate::Value<'_> {
				#xml_marshal_crate::Value::Structure(self)
			}
		}
	}
}
