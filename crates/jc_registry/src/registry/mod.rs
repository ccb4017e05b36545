//! Static adapter registries.
//!
//! - [`AdapterRegistry`]: the capability a generated (or hand written) registry implements.
//! - [`AdapterTable`]: the immutable ordered mapping it exposes.

// -----------------------------------------------------------------------------
// Modules

mod adapter_table;

// -----------------------------------------------------------------------------
// Exports

pub use adapter_table::{AdapterRegistry, AdapterTable};
