//! Proc macros for declaring HasProps types.
//!
//! # Macros
//!
//! - [`HasProps`] - derive a static property table, store accessors and
//!   property name constants from `#[props(...)]` declarations
//!
//! # Example
//!
//! ```rust,ignore
//! use hasprops::prelude::*;
//!
//! #[derive(HasProps, Default)]
//! #[props(x = Int::new(12), y = Str::new("hello"), z = Int)]
//! struct Base {
//!     store: PropertyStore,
//! }
//!
//! #[derive(HasProps, Default)]
//! #[extends(Base)]
//! #[props(color = ColorSpec::new("color_field").with_default("red"))]
//! struct Child {
//!     store: PropertyStore,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod props;

/// Derives `hasprops::HasProps`.
///
/// # Attributes
///
/// - `#[props(name = expr, ...)]` on the struct: declares properties in
///   order. `expr` is any expression producing a property; a bare type path
///   such as `Int` means `Int::default()`. May be repeated.
/// - `#[extends(Parent)]` on the struct: inherits every property of
///   `Parent`, which must itself implement `HasProps`.
/// - `#[store]` on a field: the `PropertyStore` holding instance values.
///   Optional when a field's type is named `PropertyStore`.
///
/// # Generated Items
///
/// - `impl HasProps` with a lazily built, shared property table
/// - one `pub const` per declared property holding its name, in
///   SCREAMING_SNAKE_CASE (`line_color` → `LINE_COLOR`)
///
/// # Compile-Time Errors
///
/// - the input is not a struct with named fields, or is generic
/// - no store field can be found
/// - a property is declared twice on the same struct
#[proc_macro_derive(HasProps, attributes(props, extends, store))]
pub fn has_props_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    props::has_props_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
