//! The engine host: the factory chain adapters are requested from.
//!
//! JSON processing itself belongs to the adapters; the [`Engine`] only owns
//! the ordered [`AdapterFactory`] chain, the [`ClassPath`](crate::class::ClassPath)
//! and the cache of built adapters.

// -----------------------------------------------------------------------------
// Modules

mod error;
mod factory;
mod host;

// -----------------------------------------------------------------------------
// Exports

pub use error::EngineError;
pub use factory::AdapterFactory;
pub use host::{Engine, EngineBuilder};

pub(crate) use factory::ExactFactory;
