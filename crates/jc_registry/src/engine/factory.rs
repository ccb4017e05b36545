use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::adapter::JsonAdapter;
use crate::engine::Engine;
use crate::resolve::ResolveError;
use crate::types::TypeKey;

// -----------------------------------------------------------------------------
// AdapterFactory

/// A link of the engine's factory chain.
///
/// Factories are consulted in insertion order; the first one returning
/// `Ok(Some(_))` wins. Returning `Ok(None)` declines the request and lets the
/// next factory try.
pub trait AdapterFactory: Send + Sync + 'static {
    /// Create an adapter for `ty`, or decline.
    ///
    /// `engine` may be used to obtain adapters for nested types.
    fn create(&self, ty: &TypeKey, engine: &Engine) -> Result<Option<Box<dyn JsonAdapter>>, ResolveError>;
}

// -----------------------------------------------------------------------------
// ExactFactory

/// Serves one adapter for exactly one type key.
pub(crate) struct ExactFactory {
    pub key: TypeKey,
    pub adapter: Arc<dyn JsonAdapter>,
}

impl AdapterFactory for ExactFactory {
    fn create(&self, ty: &TypeKey, _: &Engine) -> Result<Option<Box<dyn JsonAdapter>>, ResolveError> {
        if *ty == self.key {
            Ok(Some(Box::new(Arc::clone(&self.adapter))))
        } else {
            Ok(None)
        }
    }
}
