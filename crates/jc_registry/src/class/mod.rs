//! Runtime class descriptions and the [`ClassPath`] they are loaded from.
//!
//! ## Menu
//!
//! - [`TargetClass`]: an annotated class, with its [`JsonClass`] marker.
//! - [`AdapterClass`]: an adapter class and its [`Constructor`]s.
//! - [`ClassPath`]: all known classes, loadable by exact name.
//!
//! ## auto_register
//!
//! See [`ClassPath::auto_register`].
//!
//! We use [`inventory`] crate to implement static registration,
//! not all platforms support it (although major platforms do).
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod adapter_class;
mod class_path;
mod target_class;

// -----------------------------------------------------------------------------
// Exports

pub use adapter_class::{AdapterClass, AdapterResult, AdapterType, Constructor, ConstructorShape};
pub use class_path::ClassPath;
pub use target_class::{JsonClass, TargetClass};
