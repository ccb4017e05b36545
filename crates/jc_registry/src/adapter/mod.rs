//! Adapters: the converters the engine hands out.
//!
//! - [`JsonAdapter`]: type-erased converter between a value and JSON.
//! - [`NullSafe`]: null handling wrapper applied to every resolved adapter.
//! - [`SerdeAdapter`]: serde-backed adapter for hand-written adapter classes.
//! - [`TypedAdapter`]: typed view for callers that know the value type.

// -----------------------------------------------------------------------------
// Modules

mod error;
mod json_adapter;
mod serde_adapter;
mod typed_adapter;

// -----------------------------------------------------------------------------
// Exports

pub use error::AdapterError;
pub use json_adapter::{JsonAdapter, NullSafe};
pub use serde_adapter::SerdeAdapter;
pub use typed_adapter::TypedAdapter;
