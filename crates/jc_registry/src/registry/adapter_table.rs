use jc_utils::hash::IndexMap;

use crate::types::{ClassName, TypeKey};

// -----------------------------------------------------------------------------
// AdapterRegistry

/// A registry of adapter classes to be consulted before the naming convention.
///
/// Implementations are usually generated by `jc_codegen`, but can be written
/// by hand. Install one with
/// [`EngineBuilder::add_registry`](crate::engine::EngineBuilder::add_registry).
///
/// # Example
///
/// ```
/// use jc_registry::ClassName;
/// use jc_registry::registry::{AdapterRegistry, AdapterTable};
///
/// struct MyAdapterRegistry;
///
/// impl AdapterRegistry for MyAdapterRegistry {
///     fn adapters(&self) -> AdapterTable {
///         AdapterTable::from_entries([
///             (
///                 ClassName::new("com.app", ["MyType"]),
///                 ClassName::new("com.app", ["MyTypeJsonAdapter"]),
///             ),
///             (
///                 ClassName::new("com.app", ["MyType", "SubType"]),
///                 ClassName::new("com.app", ["MyType_SubTypeJsonAdapter"]),
///             ),
///         ])
///     }
/// }
///
/// assert_eq!(MyAdapterRegistry.adapters().len(), 2);
/// ```
pub trait AdapterRegistry: Send + Sync {
    /// Returns the mapping from raw target type to adapter class.
    fn adapters(&self) -> AdapterTable;
}

// -----------------------------------------------------------------------------
// AdapterTable

/// An immutable, insertion-ordered mapping from raw target type to adapter class.
///
/// Keys are raw: type arguments of a key are dropped on construction, because
/// adapter classes exist per raw class rather than per instantiation.
/// When the same target appears more than once the first entry wins and the
/// later ones are skipped with a warning.
#[derive(Clone, Debug, Default)]
pub struct AdapterTable {
    entries: IndexMap<TypeKey, ClassName>,
}

impl AdapterTable {
    /// Create an empty table.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from `(target, adapter)` pairs, preserving their order.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<TypeKey>,
        I: IntoIterator<Item = (K, ClassName)>,
    {
        let mut table = IndexMap::default();
        for (target, adapter) in entries {
            let target = target.into().raw_key();
            if let Some(existing) = table.get(&target) {
                log::warn!(
                    "duplicate adapter registration for `{target}`: keeping `{existing}`, skipping `{adapter}`"
                );
                continue;
            }
            table.insert(target, adapter);
        }
        Self { entries: table }
    }

    /// Returns the adapter class registered for the raw type of `ty`.
    #[inline]
    pub fn get(&self, ty: &TypeKey) -> Option<&ClassName> {
        if ty.is_parameterized() {
            self.entries.get(&ty.raw_key())
        } else {
            self.entries.get(ty)
        }
    }

    /// Returns `(target, adapter)` pairs in registration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&TypeKey, &ClassName)> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AdapterRegistry for AdapterTable {
    #[inline]
    fn adapters(&self) -> AdapterTable {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::AdapterTable;
    use crate::types::{ClassName, TypeKey};

    #[test]
    fn ordered_first_wins() {
        let a = ClassName::new("com.app", ["A"]);
        let b = ClassName::new("com.app", ["B"]);

        let table = AdapterTable::from_entries([
            (b.clone(), b.adapter_name()),
            (a.clone(), a.adapter_name()),
            (b.clone(), ClassName::new("com.other", ["Custom"])),
        ]);

        assert_eq!(table.len(), 2);
        let order: Vec<_> = table.iter().map(|(k, _)| k.raw().clone()).collect();
        assert_eq!(order, [b.clone(), a]);
        assert_eq!(table.get(&TypeKey::of(b.clone())), Some(&b.adapter_name()));
    }

    #[test]
    fn lookup_ignores_type_arguments() {
        let response = ClassName::new("com.app", ["Response"]);
        let string = TypeKey::of(ClassName::new("std.string", ["String"]));

        let table = AdapterTable::from_entries([(
            TypeKey::parameterized(response.clone(), [string.clone()]),
            response.adapter_name(),
        )]);

        let request = TypeKey::parameterized(response.clone(), [string]);
        assert_eq!(table.get(&request), Some(&response.adapter_name()));
        assert_eq!(table.get(&TypeKey::of(response.clone())), Some(&response.adapter_name()));
    }
}
