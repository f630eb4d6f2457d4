//! Attribute parsing for `#[derive(HasProps)]`.

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, Field, Ident, Path, Result, Token, Type};

/// One `name = expr` entry of a `#[props(...)]` list.
pub struct PropDecl {
    pub name: Ident,
    pub expr: Expr,
}

impl Parse for PropDecl {
    fn parse(input: ParseStream) -> Result<Self> {
        let name: Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        let expr: Expr = input.parse()?;
        Ok(PropDecl { name, expr })
    }
}

/// Collects the declarations of every `#[props(...)]` attribute, in order.
pub fn parse_props_attrs(attrs: &[Attribute]) -> Result<Vec<PropDecl>> {
    let mut decls = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("props")) {
        let list = attr.parse_args_with(Punctuated::<PropDecl, Token![,]>::parse_terminated)?;
        decls.extend(list);
    }
    Ok(decls)
}

/// Returns the parent named by `#[extends(Parent)]`, if any.
pub fn parse_extends_attr(attrs: &[Attribute]) -> Result<Option<Path>> {
    let mut parent = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("extends")) {
        if parent.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "only one #[extends(...)] is allowed",
            ));
        }
        parent = Some(attr.parse_args::<Path>()?);
    }
    Ok(parent)
}

/// Returns `true` for fields marked `#[store]`.
pub fn is_marked_store(field: &Field) -> bool {
    field.attrs.iter().any(|a| a.path().is_ident("store"))
}

/// Returns `true` if the field's type path ends in `PropertyStore`.
pub fn is_store_type(field: &Field) -> bool {
    match &field.ty {
        Type::Path(tp) => tp
            .path
            .segments
            .last()
            .is_some_and(|seg| seg.ident == "PropertyStore"),
        _ => false,
    }
}
