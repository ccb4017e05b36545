use alloc::boxed::Box;
use core::any::{Any, type_name};
use core::fmt;
use core::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::adapter::{AdapterError, JsonAdapter};

// -----------------------------------------------------------------------------
// SerdeAdapter

/// A [`JsonAdapter`] backed by `T`'s serde implementations.
///
/// Like generated adapters it rejects `null` on both sides, so it is normally
/// used through [`NullSafe`](crate::adapter::NullSafe).
///
/// # Examples
///
/// ```
/// use jc_registry::adapter::{JsonAdapter, SerdeAdapter};
/// use serde_json::json;
///
/// let adapter = SerdeAdapter::<String>::new();
///
/// let value = adapter.from_json(&json!("hello")).unwrap().unwrap();
/// assert_eq!(value.downcast_ref::<String>().unwrap(), "hello");
///
/// assert!(adapter.from_json(&json!(null)).is_err());
/// ```
pub struct SerdeAdapter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> SerdeAdapter<T> {
    /// Create the adapter.
    #[inline]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SerdeAdapter<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SerdeAdapter<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SerdeAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SerdeAdapter<{}>", type_name::<T>())
    }
}

impl<T> JsonAdapter for SerdeAdapter<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    fn from_json(&self, json: &Value) -> Result<Option<Box<dyn Any + Send>>, AdapterError> {
        if json.is_null() {
            return Err(AdapterError::UnexpectedNull {
                expected: type_name::<T>(),
            });
        }
        let value = T::deserialize(json)?;
        Ok(Some(Box::new(value)))
    }

    fn to_json(&self, value: Option<&dyn Any>) -> Result<Value, AdapterError> {
        let Some(value) = value else {
            return Err(AdapterError::UnexpectedNull {
                expected: type_name::<T>(),
            });
        };
        let value = value
            .downcast_ref::<T>()
            .ok_or(AdapterError::TypeMismatch {
                expected: type_name::<T>(),
            })?;
        Ok(serde_json::to_value(value)?)
    }
}
