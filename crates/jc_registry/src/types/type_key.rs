use alloc::vec::Vec;
use core::fmt;

use crate::types::ClassName;

// -----------------------------------------------------------------------------
// TypeKey

/// Structural identity of a possibly parameterized type.
///
/// Two keys are equal iff their raw classes are equal and all type arguments
/// are pairwise equal. Used as a map key, never mutated.
///
/// # Examples
///
/// ```
/// use jc_registry::{ClassName, TypeKey};
///
/// let string = TypeKey::of(ClassName::new("std.string", ["String"]));
/// let list = TypeKey::parameterized(ClassName::new("std.vec", ["Vec"]), [string.clone()]);
///
/// assert!(list.is_parameterized());
/// assert_eq!(list.to_string(), "std.vec.Vec<std.string.String>");
/// assert_eq!(list.raw_key(), TypeKey::of(ClassName::new("std.vec", ["Vec"])));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey {
    raw: ClassName,
    args: Vec<TypeKey>,
}

impl TypeKey {
    /// Create a raw (non-parameterized) key.
    #[inline]
    pub fn of(raw: ClassName) -> Self {
        Self {
            raw,
            args: Vec::new(),
        }
    }

    /// Create a parameterized key, arguments in declaration order.
    #[inline]
    pub fn parameterized(raw: ClassName, args: impl IntoIterator<Item = TypeKey>) -> Self {
        Self {
            raw,
            args: args.into_iter().collect(),
        }
    }

    /// Returns the raw class.
    #[inline]
    pub fn raw(&self) -> &ClassName {
        &self.raw
    }

    /// Returns the type arguments, empty for raw keys.
    #[inline]
    pub fn args(&self) -> &[TypeKey] {
        &self.args
    }

    /// Returns `true` if this key carries type arguments.
    #[inline]
    pub fn is_parameterized(&self) -> bool {
        !self.args.is_empty()
    }

    /// Returns this key with the type arguments dropped.
    #[inline]
    pub fn raw_key(&self) -> TypeKey {
        Self::of(self.raw.clone())
    }
}

impl From<ClassName> for TypeKey {
    #[inline]
    fn from(raw: ClassName) -> Self {
        Self::of(raw)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)?;
        if let Some((first, rest)) = self.args.split_first() {
            f.write_str("<")?;
            fmt::Display::fmt(first, f)?;
            for arg in rest {
                f.write_str(", ")?;
                fmt::Display::fmt(arg, f)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::TypeKey;
    use crate::types::ClassName;

    fn key(package: &str, name: &str) -> TypeKey {
        TypeKey::of(ClassName::new(package, [name]))
    }

    #[test]
    fn structural_equality() {
        let string = key("std.string", "String");
        let int = key("core", "i32");
        let response = ClassName::new("com.app", ["Response"]);

        let a = TypeKey::parameterized(response.clone(), [string.clone()]);
        let b = TypeKey::parameterized(response.clone(), [string.clone()]);
        let c = TypeKey::parameterized(response.clone(), [int.clone()]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, TypeKey::of(response.clone()));
        assert_eq!(a.raw_key(), c.raw_key());
    }

    #[test]
    fn display() {
        let map = TypeKey::parameterized(
            ClassName::new("std.collections", ["HashMap"]),
            [key("std.string", "String"), key("core", "i32")],
        );
        assert_eq!(
            map.to_string(),
            "std.collections.HashMap<std.string.String, core.i32>"
        );
    }
}
