mod field;

use darling::{
    FromDeriveInput,
    ast::{self, Data},
};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{DeriveInput, Fields, Generics, Ident, parse_macro_input};

use crate::field::BindFieldReceiver;

/// Derives `envbind::Bindable` for a struct with named fields or a unit struct.
///
/// Each field that should take part in key derivation carries one or more
/// tags, any identifier can be used as the tag name:
///
/// ```ignore
/// #[derive(Bindable)]
/// pub struct Config {
///     #[bind(mapstructure = "database_url", config = "db")]
///     database_url: String,
///     #[bind(mapstructure = "api_key", opaque)]
///     api_key: SecretString,
/// }
/// ```
///
/// `opaque` registers the field's key without looking at its value, so the
/// field type does not need to implement `Bindable`.
#[proc_macro_derive(Bindable, attributes(bind))]
pub fn derive_bindable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match impl_derive(input) {
        Ok(output) => output.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn impl_derive(input: DeriveInput) -> darling::Result<TokenStream> {
    validate_shape(&input)?;
    let bind_struct = BindableReceiver::from_derive_input(&input)?;

    Ok(bind_struct.to_token_stream())
}

/// A struct with named fields, or none at all, is a record. Everything else is
/// rejected up front so the error points at the type name.
fn validate_shape(input: &DeriveInput) -> darling::Result<()> {
    match &input.data {
        syn::Data::Struct(data) if matches!(data.fields, Fields::Named(_) | Fields::Unit) => {
            Ok(())
        }
        _ => {
            let err = darling::Error::custom(
                "Bindable derive only supports structs with named fields or no fields",
            );
            Err(err.with_span(&input.ident))
        }
    }
}

#[derive(FromDeriveInput)]
#[darling(supports(struct_named, struct_unit))]
struct BindableReceiver {
    pub ident: Ident,
    pub generics: Generics,
    pub data: Data<(), BindFieldReceiver>,
}

impl ToTokens for BindableReceiver {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let private_path = quote!(__envbind::__private);
        let struct_name = &self.ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let fields = self
            .get_fields()
            .iter()
            .filter(|field| field.is_tagged())
            .map(|field| {
                let ident = &field.ident;
                let name = ident.to_string();
                let tags = field.tags.iter().map(|(tag_name, value)| {
                    quote! { (#tag_name, #value) }
                });
                let value = if field.opaque {
                    quote! { &#private_path::Opaque }
                } else {
                    quote! { &self.#ident }
                };

                quote! {
                    #private_path::Field::new(#name, &[#(#tags),*], #value)
                }
            });

        let derive = quote! {
            const _: () = {
                extern crate envbind as __envbind;

                impl #impl_generics #private_path::Bindable for #struct_name #ty_generics
                #where_clause
                {
                    fn shape(&self) -> #private_path::Shape<'_> {
                        let fields: #private_path::Vec<#private_path::Field<'_>> =
                            ::std::vec![#(#fields),*];
                        #private_path::Shape::Record(fields)
                    }
                }
            };
        };

        tokens.extend(derive);
    }
}

impl BindableReceiver {
    fn get_fields(&self) -> &ast::Fields<BindFieldReceiver> {
        let Data::Struct(fields) = &self.data else {
            panic!("we've asserted that it's a struct");
        };

        fields
    }
}
