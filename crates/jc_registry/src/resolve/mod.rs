//! Resolution of adapters from a registry table and the class path.
//!
//! See [`RegistryFactory`] for the resolution rules.

// -----------------------------------------------------------------------------
// Modules

mod error;
mod registry_factory;
mod select;

#[cfg(test)]
mod generated_table;

// -----------------------------------------------------------------------------
// Exports

pub use error::ResolveError;
pub use registry_factory::{AdapterSource, RegistryFactory};

pub(crate) use select::select_constructor;
