//! Provide hash containers, re-exports *hashbrown*, *foldhash* and *indexmap*.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`].
///
/// Create it with [`Default::default`] or [`hashbrown::HashMap::with_hasher`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`].
pub type HashSet<T> = hashbrown::HashSet<T, FixedHashState>;

/// An insertion-ordered map using [`FixedHashState`].
///
/// Iteration order is the order in which keys were first inserted.
///
/// # Examples
///
/// ```
/// use jc_utils::hash::IndexMap;
///
/// let mut map = IndexMap::<&str, u32>::default();
/// map.insert("b", 2);
/// map.insert("a", 1);
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, ["b", "a"]);
/// ```
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, FixedHashState>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;
pub use indexmap;
