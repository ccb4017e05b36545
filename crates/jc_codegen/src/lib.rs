//! Build-time generation of adapter registry tables.
//!
//! A pass of the [`RegistryTableGenerator`] collects the declarations
//! marked with `#[json_class]`, assigns each one its conventionally named
//! adapter and writes:
//!
//! - a Rust source file with a unit struct implementing
//!   `jc_registry::AdapterRegistry`, listing the registrations in discovery
//!   order;
//! - a keep rules file for bytecode shrinkers, keeping the adapter
//!   constructors the resolver selects.
//!
//! Most crates only need [`build_script`]:
//!
//! ```toml
//! [build-dependencies]
//! jc_codegen = "0.0.1"
//!
//! [package.metadata.jc-codegen]
//! "moshi.generateProguardRules" = false
//! ```
//!
//! Other symbol sources and filers can be combined through
//! [`RegistryTableGenerator::process`]:
//!
//! ```
//! use jc_codegen::{CodegenOptions, RegistryTableGenerator};
//! use jc_codegen::filer::MemoryFiler;
//! use jc_codegen::symbol::{Declaration, SymbolDump};
//!
//! let options = CodegenOptions::from_options([("moshi.generateProguardRules", "false")]).unwrap();
//! let dump = SymbolDump::from(vec![
//!     Declaration::class("com.app.net", ["Response"]).with_type_parameters(1),
//!     Declaration::class("com.app.model", ["Food"]),
//! ]);
//!
//! let mut filer = MemoryFiler::new();
//! let report = RegistryTableGenerator::new(options).process(dump, &mut filer).unwrap();
//!
//! assert_eq!(report.registrations.len(), 2);
//! assert_eq!(filer.files().len(), 2);
//! ```

// Host tool, `std` only.
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

// -----------------------------------------------------------------------------
// Modules

pub mod election;
pub mod emit;
pub mod filer;
pub mod hash;
pub mod options;
pub mod symbol;

mod error;
mod generator;
mod registration;

// -----------------------------------------------------------------------------
// Exports

pub use error::{CodegenError, FilerError, SymbolError};
pub use generator::{GenerationReport, REGISTRY_ENV, RegistryTableGenerator, build_script};
pub use options::CodegenOptions;
pub use registration::{AdapterRegistration, RegistrationTable};
