use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use jc_utils::hash::HashMap;

use crate::adapter::{JsonAdapter, TypedAdapter};
use crate::class::ClassPath;
use crate::engine::{AdapterFactory, EngineError, ExactFactory};
use crate::registry::AdapterRegistry;
use crate::resolve::RegistryFactory;
use crate::types::{TypeKey, Typed};

// -----------------------------------------------------------------------------
// Engine

type AdapterCache = HashMap<TypeKey, Arc<dyn JsonAdapter>>;

/// A minimal JSON engine: an ordered chain of [`AdapterFactory`]s over a
/// [`ClassPath`], with a cache of the adapters built so far.
///
/// # Examples
///
/// ```
/// use jc_registry::Engine;
/// use jc_registry::adapter::SerdeAdapter;
///
/// let engine = Engine::builder()
///     .add_adapter::<String>(SerdeAdapter::<String>::new())
///     .build();
///
/// let adapter = engine.adapter_for::<String>().unwrap();
/// assert_eq!(adapter.from_json_str("\"hi\"").unwrap().as_deref(), Some("hi"));
/// ```
pub struct Engine {
    factories: Vec<Box<dyn AdapterFactory>>,
    class_path: ClassPath,
    cache: RwLock<AdapterCache>,
}

impl Engine {
    /// Create an [`EngineBuilder`].
    #[inline]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the class path the factories load classes from.
    #[inline]
    pub fn class_path(&self) -> &ClassPath {
        &self.class_path
    }

    /// Returns the adapter for `ty`, creating it if necessary.
    ///
    /// Factories are consulted in insertion order. The lock is not held while
    /// a factory runs, so factories may request nested adapters.
    pub fn adapter(&self, ty: &TypeKey) -> Result<Arc<dyn JsonAdapter>, EngineError> {
        let cached = self.read_cache().get(ty).cloned();
        if let Some(adapter) = cached {
            return Ok(adapter);
        }

        for factory in &self.factories {
            let Some(adapter) = factory.create(ty, self)? else {
                continue;
            };
            log::debug!("created JSON adapter for `{ty}`");

            // Another thread may have won the race, keep its adapter.
            let mut cache = self.write_cache();
            let adapter = cache.entry(ty.clone()).or_insert_with(|| Arc::from(adapter));
            return Ok(Arc::clone(adapter));
        }

        Err(EngineError::NoAdapter { ty: ty.clone() })
    }

    /// Returns a typed adapter for `T`, see [`Engine::adapter`].
    #[inline]
    pub fn adapter_for<T: Typed>(&self) -> Result<TypedAdapter<T>, EngineError> {
        self.adapter(&T::type_key()).map(TypedAdapter::new)
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, AdapterCache> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, AdapterCache> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("factories", &self.factories.len())
            .field("class_path", &self.class_path)
            .field("cached", &self.read_cache().keys().collect::<Vec<_>>())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// EngineBuilder

/// Builder of an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    factories: Vec<Box<dyn AdapterFactory>>,
    class_path: Option<ClassPath>,
}

impl EngineBuilder {
    /// Create an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a factory to the chain.
    pub fn add(mut self, factory: impl AdapterFactory) -> Self {
        self.factories.push(Box::new(factory));
        self
    }

    /// Append a [`RegistryFactory`] over `registry`.
    ///
    /// ```
    /// use jc_registry::Engine;
    /// use jc_registry::registry::AdapterTable;
    ///
    /// let engine = Engine::builder().add_registry(AdapterTable::empty()).build();
    /// # let _ = engine;
    /// ```
    #[inline]
    pub fn add_registry(self, registry: impl AdapterRegistry) -> Self {
        self.add(RegistryFactory::new(&registry))
    }

    /// Append a factory serving `adapter` for exactly `T::type_key()`.
    pub fn add_adapter<T: Typed>(self, adapter: impl JsonAdapter) -> Self {
        self.add(ExactFactory {
            key: T::type_key(),
            adapter: Arc::new(adapter),
        })
    }

    /// Set the class path. When unset, [`ClassPath::new`] is used.
    #[inline]
    pub fn class_path(mut self, class_path: ClassPath) -> Self {
        self.class_path = Some(class_path);
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            factories: self.factories,
            class_path: self.class_path.unwrap_or_else(ClassPath::new),
            cache: RwLock::new(HashMap::default()),
        }
    }
}

impl fmt::Debug for EngineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineBuilder")
            .field("factories", &self.factories.len())
            .field("class_path", &self.class_path)
            .finish()
    }
}
