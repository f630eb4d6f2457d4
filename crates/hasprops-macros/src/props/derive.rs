//! Implementation of the `#[derive(HasProps)]` macro.
//!
//! This macro generates an implementation of the `HasProps` trait backed by
//! a lazily built static `PropertyTable`, and property name constants for
//! typo-free access.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Expr, Field, Fields, Result};

use super::attrs::{is_marked_store, is_store_type, parse_extends_attr, parse_props_attrs};

/// Main implementation of the HasProps derive macro.
pub fn has_props_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "HasProps cannot be derived for generic structs",
        ));
    }

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "HasProps can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "HasProps can only be derived for structs",
            ))
        }
    };

    let store_field = find_store_field(fields.iter().collect(), input.span())?;
    let store_ident = store_field
        .ident
        .as_ref()
        .ok_or_else(|| Error::new(store_field.span(), "expected named field"))?;

    let decls = parse_props_attrs(&input.attrs)?;
    let parent = parse_extends_attr(&input.attrs)?;

    let mut seen = HashSet::new();
    for decl in &decls {
        if !seen.insert(decl.name.unraw().to_string()) {
            return Err(Error::new(
                decl.name.span(),
                format!("property `{}` is declared more than once", decl.name.unraw()),
            ));
        }
    }

    let class_name = struct_name.to_string();

    let inherit = parent.map(|parent| {
        quote! {
            .extends(<#parent as ::hasprops::HasProps>::property_table())
        }
    });

    let declarations: Vec<TokenStream> = decls
        .iter()
        .map(|decl| {
            let name = decl.name.unraw().to_string();
            let property = property_expr(&decl.expr);
            quote! {
                .property(#name, #property)
            }
        })
        .collect();

    // Generate property name constants
    let constants: Vec<TokenStream> = decls
        .iter()
        .map(|decl| {
            let name = decl.name.unraw().to_string();
            let const_name = format_ident!("{}", to_screaming_snake_case(&name));
            quote! {
                /// Property name constant.
                pub const #const_name: &'static str = #name;
            }
        })
        .collect();

    let expanded = quote! {
        impl #struct_name {
            #(#constants)*
        }

        impl ::hasprops::HasProps for #struct_name {
            fn property_table() -> &'static ::hasprops::PropertyTable {
                static TABLE: ::hasprops::__private::Lazy<::hasprops::PropertyTable> =
                    ::hasprops::__private::Lazy::new(|| {
                        ::hasprops::PropertyTable::builder(#class_name)
                            #inherit
                            #(#declarations)*
                            .build()
                    });
                &TABLE
            }

            fn table(&self) -> &'static ::hasprops::PropertyTable {
                <Self as ::hasprops::HasProps>::property_table()
            }

            fn store(&self) -> &::hasprops::PropertyStore {
                &self.#store_ident
            }

            fn store_mut(&mut self) -> &mut ::hasprops::PropertyStore {
                &mut self.#store_ident
            }
        }
    };

    Ok(expanded)
}

/// Picks the `#[store]` field, falling back to the field typed `PropertyStore`.
fn find_store_field(fields: Vec<&Field>, span: proc_macro2::Span) -> Result<&Field> {
    let marked: Vec<&Field> = fields.iter().copied().filter(|f| is_marked_store(f)).collect();
    match marked.as_slice() {
        [field] => Ok(*field),
        [] => fields.into_iter().find(|f| is_store_type(f)).ok_or_else(|| {
            Error::new(
                span,
                "HasProps needs a `PropertyStore` field (or a field marked #[store])",
            )
        }),
        [_, second, ..] => Err(Error::new(
            second.span(),
            "only one field may be marked #[store]",
        )),
    }
}

/// A bare type path declares the property with its default constructor.
fn property_expr(expr: &Expr) -> TokenStream {
    match expr {
        Expr::Path(path) if path.qself.is_none() => {
            quote! { <#path as ::core::default::Default>::default() }
        }
        other => quote! { #other },
    }
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = c.is_lowercase();
        }
    }

    result
}
