use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use serde_json::Value;

use crate::adapter::AdapterError;

// -----------------------------------------------------------------------------
// JsonAdapter

/// A type-erased, bidirectional converter between a value and its JSON form.
///
/// Values cross the boundary as [`Any`]; `None` stands for an absent (null)
/// value. A plain adapter may reject `null` on either side, wrap it in
/// [`NullSafe`] to map JSON `null` to `None` and back.
pub trait JsonAdapter: Send + Sync + 'static {
    /// Convert a JSON value into a boxed value.
    fn from_json(&self, json: &Value) -> Result<Option<Box<dyn Any + Send>>, AdapterError>;

    /// Convert a value into JSON.
    fn to_json(&self, value: Option<&dyn Any>) -> Result<Value, AdapterError>;

    /// Wrap this adapter so that nulls are handled before delegating.
    #[inline]
    fn null_safe(self) -> NullSafe<Self>
    where
        Self: Sized,
    {
        NullSafe::new(self)
    }
}

impl<A: JsonAdapter + ?Sized> JsonAdapter for Box<A> {
    #[inline]
    fn from_json(&self, json: &Value) -> Result<Option<Box<dyn Any + Send>>, AdapterError> {
        (**self).from_json(json)
    }

    #[inline]
    fn to_json(&self, value: Option<&dyn Any>) -> Result<Value, AdapterError> {
        (**self).to_json(value)
    }
}

impl<A: JsonAdapter + ?Sized> JsonAdapter for Arc<A> {
    #[inline]
    fn from_json(&self, json: &Value) -> Result<Option<Box<dyn Any + Send>>, AdapterError> {
        (**self).from_json(json)
    }

    #[inline]
    fn to_json(&self, value: Option<&dyn Any>) -> Result<Value, AdapterError> {
        (**self).to_json(value)
    }
}

impl fmt::Debug for dyn JsonAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn JsonAdapter")
    }
}

// -----------------------------------------------------------------------------
// NullSafe

/// An adapter that treats JSON `null` as `None` and `None` as JSON `null`,
/// delegating every other value to the wrapped adapter.
///
/// # Examples
///
/// ```
/// use jc_registry::adapter::{JsonAdapter, SerdeAdapter};
/// use serde_json::{Value, json};
///
/// let adapter = SerdeAdapter::<u32>::new().null_safe();
///
/// assert!(adapter.from_json(&Value::Null).unwrap().is_none());
/// assert_eq!(adapter.to_json(None).unwrap(), Value::Null);
/// assert_eq!(adapter.to_json(Some(&7_u32)).unwrap(), json!(7));
/// ```
#[derive(Debug, Clone)]
pub struct NullSafe<A> {
    inner: A,
}

impl<A: JsonAdapter> NullSafe<A> {
    /// Wrap `inner`.
    #[inline]
    pub const fn new(inner: A) -> Self {
        Self { inner }
    }

    /// Returns the wrapped adapter.
    #[inline]
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: JsonAdapter> JsonAdapter for NullSafe<A> {
    fn from_json(&self, json: &Value) -> Result<Option<Box<dyn Any + Send>>, AdapterError> {
        if json.is_null() {
            return Ok(None);
        }
        self.inner.from_json(json)
    }

    fn to_json(&self, value: Option<&dyn Any>) -> Result<Value, AdapterError> {
        match value {
            None => Ok(Value::Null),
            Some(value) => self.inner.to_json(Some(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::sync::Arc;

    use super::JsonAdapter;
    use crate::adapter::SerdeAdapter;

    #[test]
    fn erased_adapters_debug() {
        let boxed: Box<dyn JsonAdapter> = Box::new(SerdeAdapter::<u32>::new());
        assert_eq!(format!("{boxed:?}"), "dyn JsonAdapter");

        let shared: Arc<dyn JsonAdapter> = Arc::new(SerdeAdapter::<u32>::new().null_safe());
        let result: Result<Arc<dyn JsonAdapter>, ()> = Ok(shared);
        assert_eq!(format!("{result:?}"), "Ok(dyn JsonAdapter)");
    }
}
