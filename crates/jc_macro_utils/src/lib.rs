//! Provide Cargo manifest and marker attribute tools for the proc-macro
//! and build-time crates.
#![allow(clippy::std_instead_of_core, reason = "build-time crate")]
#![allow(clippy::std_instead_of_alloc, reason = "build-time crate")]

// -----------------------------------------------------------------------------
// Modules

mod manifest;
mod marker;

// -----------------------------------------------------------------------------
// Exports

pub use manifest::{Manifest, ManifestError};
pub use marker::{JSON_CLASS_ATTRIBUTE, JsonClassArgs};
