//! `#[derive(HasProps)]` implementation.

mod attrs;
mod derive;

pub use derive::has_props_derive_impl;
