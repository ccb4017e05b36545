use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{ClassName, TypeKey};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to the full [`TypeKey`] of a Rust type, type arguments
/// included.
///
/// `#[json_class]` implements it for annotated types; generic parameters must
/// be `Typed` themselves.
///
/// Nullability is not part of the identity: `Option<T>` has the key of `T`,
/// the adapter's null handling covers the `None` case.
///
/// # Examples
///
/// ```
/// use jc_registry::Typed;
///
/// let key = <Vec<Option<String>>>::type_key();
/// assert_eq!(key.to_string(), "std.vec.Vec<std.string.String>");
/// ```
pub trait Typed: 'static {
    /// Returns the key of this type.
    fn type_key() -> TypeKey;
}

macro_rules! impl_typed {
    ($package:literal => $($ty:ty : $name:literal),* $(,)?) => {
        $(
            impl Typed for $ty {
                #[inline]
                fn type_key() -> TypeKey {
                    TypeKey::of(ClassName::new($package, [$name]))
                }
            }
        )*
    };
}

impl_typed!("core" =>
    bool: "bool", char: "char",
    i8: "i8", i16: "i16", i32: "i32", i64: "i64", i128: "i128", isize: "isize",
    u8: "u8", u16: "u16", u32: "u32", u64: "u64", u128: "u128", usize: "usize",
    f32: "f32", f64: "f64",
);

impl_typed!("std.string" => String: "String");
impl_typed!("serde_json" => serde_json::Value: "Value");

impl<T: Typed> Typed for Vec<T> {
    fn type_key() -> TypeKey {
        TypeKey::parameterized(ClassName::new("std.vec", ["Vec"]), [T::type_key()])
    }
}

impl<T: Typed> Typed for Option<T> {
    #[inline]
    fn type_key() -> TypeKey {
        T::type_key()
    }
}

#[cfg(test)]
mod tests {
    use super::Typed;
    use crate::types::{ClassName, TypeKey};

    #[test]
    fn builtin_keys() {
        assert_eq!(i32::type_key(), TypeKey::of(ClassName::new("core", ["i32"])));
        assert_eq!(<Option<i32>>::type_key(), i32::type_key());

        let list = <Vec<String>>::type_key();
        assert!(list.is_parameterized());
        assert_eq!(list.args(), [String::type_key()]);
    }
}
