use alloc::string::String;
use alloc::sync::Arc;
use core::any::{Any, type_name};
use core::fmt;
use core::marker::PhantomData;

use serde_json::Value;

use crate::adapter::{AdapterError, JsonAdapter};

// -----------------------------------------------------------------------------
// TypedAdapter

/// A typed view over a shared [`JsonAdapter`] for values of type `T`.
///
/// Obtained from [`Engine::adapter_for`](crate::engine::Engine::adapter_for).
pub struct TypedAdapter<T> {
    inner: Arc<dyn JsonAdapter>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> TypedAdapter<T> {
    /// Wrap an adapter known to produce and accept `T`.
    #[inline]
    pub fn new(inner: Arc<dyn JsonAdapter>) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying adapter.
    #[inline]
    pub fn erased(&self) -> &Arc<dyn JsonAdapter> {
        &self.inner
    }

    /// Decode a JSON value.
    pub fn from_value(&self, json: &Value) -> Result<Option<T>, AdapterError> {
        match self.inner.from_json(json)? {
            None => Ok(None),
            Some(value) => value
                .downcast::<T>()
                .map(|value| Some(*value))
                .map_err(|_| AdapterError::TypeMismatch {
                    expected: type_name::<T>(),
                }),
        }
    }

    /// Decode JSON text.
    pub fn from_json_str(&self, json: &str) -> Result<Option<T>, AdapterError> {
        let json: Value = serde_json::from_str(json)?;
        self.from_value(&json)
    }

    /// Encode a value.
    #[inline]
    pub fn to_value(&self, value: Option<&T>) -> Result<Value, AdapterError> {
        self.inner.to_json(value.map(|v| v as &dyn Any))
    }

    /// Encode a value as compact JSON text.
    pub fn to_json_string(&self, value: Option<&T>) -> Result<String, AdapterError> {
        Ok(serde_json::to_string(&self.to_value(value)?)?)
    }

    /// Encode a value as indented JSON text.
    pub fn to_json_pretty(&self, value: Option<&T>) -> Result<String, AdapterError> {
        Ok(serde_json::to_string_pretty(&self.to_value(value)?)?)
    }
}

impl<T> Clone for TypedAdapter<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for TypedAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedAdapter<{}>", type_name::<T>())
    }
}
