//! Registry-backed adapter lookup for JSON classes.
//!
//! Types annotated with [`#[json_class]`](derive::json_class) get adapters
//! generated at build time (see `jc_codegen`). The generated
//! [`AdapterRegistry`] maps each target type to its adapter class, so the
//! [`Engine`] finds adapters by exact type instead of rebuilding names.
//!
//! ## Menu
//!
//! - [`types`]: [`ClassName`], [`TypeKey`] and [`Typed`].
//! - [`class`]: runtime class descriptions and the [`ClassPath`](class::ClassPath).
//! - [`adapter`]: [`JsonAdapter`](adapter::JsonAdapter) and its wrappers.
//! - [`registry`]: [`AdapterRegistry`] and [`AdapterTable`].
//! - [`resolve`]: [`RegistryFactory`], the resolver installed into the engine.
//! - [`engine`]: the [`Engine`] host and its factory chain.
//!
//! ## Example
//!
//! ```
//! use jc_registry::{ClassName, Engine, Typed};
//! use jc_registry::adapter::SerdeAdapter;
//! use jc_registry::class::{AdapterClass, AdapterType, Constructor};
//! use jc_registry::registry::{AdapterRegistry, AdapterTable};
//!
//! #[jc_registry::derive::json_class]
//! #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
//! struct Food {
//!     name: String,
//! }
//!
//! struct FoodJsonAdapter;
//!
//! impl AdapterType for FoodJsonAdapter {
//!     fn adapter_class() -> AdapterClass {
//!         AdapterClass::new(Food::type_key().raw().adapter_name())
//!             .with_constructor(Constructor::NoArgs(|| Ok(Box::new(SerdeAdapter::<Food>::new()))))
//!     }
//! }
//!
//! jc_registry::derive::impl_auto_register!(FoodJsonAdapter);
//!
//! struct AppAdapterRegistry;
//!
//! impl AdapterRegistry for AppAdapterRegistry {
//!     fn adapters(&self) -> AdapterTable {
//!         AdapterTable::from_entries([(
//!             Food::type_key(),
//!             ClassName::from_module_path(module_path!(), ["FoodJsonAdapter"]),
//!         )])
//!     }
//! }
//!
//! let engine = Engine::builder().add_registry(AppAdapterRegistry).build();
//!
//! let adapter = engine.adapter_for::<Food>().unwrap();
//! let food = adapter.from_json_str(r#"{"name":"apple"}"#).unwrap();
//! assert_eq!(food, Some(Food { name: "apple".into() }));
//! assert_eq!(adapter.from_json_str("null").unwrap(), None);
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to `jc_registry`, the alias makes those paths valid
// inside this crate and its doc tests.
extern crate self as jc_registry;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod adapter;
pub mod class;
pub mod engine;
pub mod registry;
pub mod resolve;
pub mod types;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use engine::{Engine, EngineBuilder, EngineError};
pub use jc_registry_derive as derive;
pub use registry::{AdapterRegistry, AdapterTable};
pub use resolve::{RegistryFactory, ResolveError};
pub use types::{ClassName, TypeKey, Typed};
