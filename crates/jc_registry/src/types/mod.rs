//! Type identities: [`ClassName`], [`TypeKey`] and the [`Typed`] accessor.

// -----------------------------------------------------------------------------
// Modules

mod class_name;
mod type_key;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use class_name::{ADAPTER_NAME_SUFFIX, ClassName, InvalidClassName};
pub use type_key::TypeKey;
pub use typed::Typed;
