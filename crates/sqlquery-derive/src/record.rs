//! Record derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

use crate::attrs::FieldAttr;

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Record can only be derived for structs",
            ));
        }
    };

    let mut pushes = Vec::new();
    for field in fields {
        let attr = FieldAttr::from_field(field)?;
        if attr.skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let column = attr.column.unwrap_or_else(|| ident.to_string());
        let tags = &attr.tags;

        pushes.push(quote! {
            if all #(|| tag == #tags)* {
                cols.push((
                    #column,
                    ::core::convert::Into::<::sqlquery::Value>::into(
                        ::core::clone::Clone::clone(&self.#ident),
                    ),
                ));
            }
        });
    }

    Ok(quote! {
        impl #impl_generics ::sqlquery::Record for #name #ty_generics #where_clause {
            #[allow(unused_mut, unused_variables)]
            fn columns(&self, tag: &str) -> ::std::vec::Vec<(&'static str, ::sqlquery::Value)> {
                let all = tag.is_empty();
                let mut cols = ::std::vec::Vec::new();
                #(#pushes)*
                cols
            }
        }
    })
}
