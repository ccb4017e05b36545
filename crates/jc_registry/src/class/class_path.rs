use alloc::string::String;

use jc_utils::hash::HashMap;

use crate::class::{AdapterClass, TargetClass};
use crate::types::ClassName;

// -----------------------------------------------------------------------------
// ClassPath

/// The set of classes known at runtime, loadable by exact name.
///
/// Target classes carry the marker the resolver checks first; adapter classes
/// carry the constructors it instantiates. Adapter classes are keyed by their
/// reflection name (`pkg.Outer$Inner`), the name the naming convention builds.
///
/// # Example
///
/// ```
/// use jc_registry::ClassName;
/// use jc_registry::class::{AdapterClass, ClassPath, JsonClass, TargetClass};
///
/// let food = ClassName::new("com.app", ["Food"]);
///
/// let mut class_path = ClassPath::empty();
/// class_path.register_target(TargetClass::new(food.clone()).with_marker(JsonClass::new(true)));
/// class_path.register_adapter(AdapterClass::new(food.adapter_name()));
///
/// assert!(class_path.target(&food).unwrap().generates_adapter());
/// assert!(class_path.load("com.app.FoodJsonAdapter").is_some());
/// ```
#[derive(Debug, Default)]
pub struct ClassPath {
    targets: HashMap<ClassName, TargetClass>,
    adapters: HashMap<String, AdapterClass>,
    #[cfg_attr(not(feature = "auto_register"), allow(dead_code))]
    auto_registered: bool,
}

impl ClassPath {
    /// Create an empty [`ClassPath`].
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a class path filled through [`ClassPath::auto_register`].
    pub fn new() -> Self {
        let mut class_path = Self::empty();
        class_path.auto_register();
        class_path
    }

    /// Try add or do nothing.
    ///
    /// - If the class name already exists, the function will do nothing and return `false`.
    /// - If the class name does not exist, the function will insert it and return `true`.
    pub fn register_target(&mut self, class: TargetClass) -> bool {
        if self.targets.contains_key(class.name()) {
            return false;
        }
        self.targets.insert(class.name().clone(), class);
        true
    }

    /// Try add or do nothing, see [`ClassPath::register_target`].
    pub fn register_adapter(&mut self, class: AdapterClass) -> bool {
        let name = class.name().reflection_name();
        if self.adapters.contains_key(&name) {
            return false;
        }
        self.adapters.insert(name, class);
        true
    }

    /// Returns the target class with the given raw name.
    #[inline]
    pub fn target(&self, name: &ClassName) -> Option<&TargetClass> {
        self.targets.get(name)
    }

    /// Load an adapter class by reflection name.
    #[inline]
    pub fn load(&self, reflection_name: &str) -> Option<&AdapterClass> {
        self.adapters.get(reflection_name)
    }

    /// Load an adapter class by [`ClassName`].
    #[inline]
    pub fn load_class(&self, name: &ClassName) -> Option<&AdapterClass> {
        self.load(&name.reflection_name())
    }

    /// Returns an iterator over the registered target classes, in no particular order.
    #[inline]
    pub fn targets(&self) -> impl ExactSizeIterator<Item = &TargetClass> {
        self.targets.values()
    }

    /// Returns an iterator over the registered adapter classes, in no particular order.
    #[inline]
    pub fn adapters(&self) -> impl ExactSizeIterator<Item = &AdapterClass> {
        self.adapters.values()
    }

    /// Registers every class submitted statically with `#[json_class]` or
    /// [`impl_auto_register!`](crate::derive::impl_auto_register).
    ///
    /// Repeated calls will not insert duplicates.
    ///
    /// ## Return Value
    ///
    /// Returns `true` if automatic registration succeeded on the current platform; otherwise, `false`.
    ///
    /// ## Feature Dependency
    ///
    /// This method requires the `auto_register` feature. When disabled, it always do nothing and
    /// returns `false`.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            if !self.auto_registered {
                crate::__macro_exports::auto_register::__register_classes(self);
            }
            self.auto_registered
        }

        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    #[cfg(feature = "auto_register")]
    #[inline]
    pub(crate) fn mark_auto_registered(&mut self) {
        self.auto_registered = true;
    }
}
