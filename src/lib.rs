//! JSON class adapter companion.
//!
//! - [`registry`]: runtime lookup of generated adapters through an
//!   [`AdapterRegistry`](registry::AdapterRegistry).
//! - `codegen`: build-time generation of registry tables and keep rules,
//!   behind the `codegen` feature.
//! - [`utils`]: deterministic containers shared by both.
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "codegen")]
#[cfg_attr(docsrs, doc(cfg(feature = "codegen")))]
pub use jc_codegen as codegen;
pub use jc_registry as registry;
pub use jc_utils as utils;
