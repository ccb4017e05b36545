//! Items used by the code `jc_registry_derive` expands to. Not public API.

pub use crate::class::{ClassPath, JsonClass, TargetClass};
pub use crate::types::{ClassName, TypeKey, Typed};

#[cfg(feature = "auto_register")]
pub mod auto_register {
    use crate::class::{AdapterType, ClassPath};

    pub use inventory;

    /// A function that registers one class into a [`ClassPath`].
    pub struct __AutoRegisterFunc(pub fn(&mut ClassPath));

    inventory::collect!(__AutoRegisterFunc);

    // Only runs when the platform supports static registration.
    inventory::submit! {
        __AutoRegisterFunc(ClassPath::mark_auto_registered)
    }

    #[inline]
    pub fn __register_adapter<A: AdapterType>(class_path: &mut ClassPath) {
        class_path.register_adapter(A::adapter_class());
    }

    pub fn __register_classes(class_path: &mut ClassPath) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(class_path);
        }
    }
}
