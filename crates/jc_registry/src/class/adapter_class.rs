use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::adapter::{AdapterError, JsonAdapter};
use crate::engine::Engine;
use crate::types::{ClassName, TypeKey};

// -----------------------------------------------------------------------------
// Constructor

/// Result of running an adapter constructor.
pub type AdapterResult = Result<Box<dyn JsonAdapter>, AdapterError>;

/// The closed set of constructor shapes an adapter class may expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstructorShape {
    /// `()`
    NoArgs,
    /// `(engine)`
    Engine,
    /// `(engine, type arguments)`
    EngineWithTypes,
}

impl fmt::Display for ConstructorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoArgs => "()",
            Self::Engine => "(engine)",
            Self::EngineWithTypes => "(engine, type arguments)",
        })
    }
}

/// A constructor of an adapter class.
#[derive(Clone, Copy)]
pub enum Constructor {
    NoArgs(fn() -> AdapterResult),
    Engine(fn(&Engine) -> AdapterResult),
    /// Receives the resolved type arguments in declaration order.
    EngineWithTypes(fn(&Engine, &[TypeKey]) -> AdapterResult),
}

impl Constructor {
    /// Returns the shape of this constructor.
    #[inline]
    pub const fn shape(&self) -> ConstructorShape {
        match self {
            Self::NoArgs(_) => ConstructorShape::NoArgs,
            Self::Engine(_) => ConstructorShape::Engine,
            Self::EngineWithTypes(_) => ConstructorShape::EngineWithTypes,
        }
    }

    /// Run the constructor. `type_args` is ignored by shapes that do not take it.
    #[inline]
    pub fn invoke(&self, engine: &Engine, type_args: &[TypeKey]) -> AdapterResult {
        match self {
            Self::NoArgs(func) => func(),
            Self::Engine(func) => func(engine),
            Self::EngineWithTypes(func) => func(engine, type_args),
        }
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constructor{}", self.shape())
    }
}

// -----------------------------------------------------------------------------
// AdapterType

/// A Rust type that describes itself as an adapter class.
///
/// Implement it on hand-written adapters and submit them with
/// [`impl_auto_register!`](crate::derive::impl_auto_register), or register
/// [`AdapterType::adapter_class`] on a [`ClassPath`](crate::class::ClassPath) directly.
pub trait AdapterType: 'static {
    fn adapter_class() -> AdapterClass;
}

// -----------------------------------------------------------------------------
// AdapterClass

/// Runtime description of an adapter class: its name, the number of type
/// parameters it declares and the constructors it exposes.
///
/// At most one constructor per [`ConstructorShape`] is kept, a later
/// constructor of the same shape replaces the earlier one.
///
/// # Examples
///
/// ```
/// use jc_registry::ClassName;
/// use jc_registry::adapter::{JsonAdapter, SerdeAdapter};
/// use jc_registry::class::{AdapterClass, Constructor, ConstructorShape};
///
/// let class = AdapterClass::new(ClassName::new("com.app", ["FoodJsonAdapter"]))
///     .with_constructor(Constructor::NoArgs(|| {
///         Ok(Box::new(SerdeAdapter::<String>::new()))
///     }));
///
/// assert!(class.constructor(ConstructorShape::NoArgs).is_some());
/// assert!(class.constructor(ConstructorShape::Engine).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct AdapterClass {
    name: ClassName,
    type_params: usize,
    constructors: Vec<Constructor>,
}

impl AdapterClass {
    /// Create a non-generic adapter class without constructors.
    #[inline]
    pub const fn new(name: ClassName) -> Self {
        Self {
            name,
            type_params: 0,
            constructors: Vec::new(),
        }
    }

    /// Set the number of declared type parameters.
    #[inline]
    pub const fn with_type_params(mut self, type_params: usize) -> Self {
        self.type_params = type_params;
        self
    }

    /// Add a constructor.
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        let shape = constructor.shape();
        self.constructors.retain(|c| c.shape() != shape);
        self.constructors.push(constructor);
        self
    }

    #[inline]
    pub fn name(&self) -> &ClassName {
        &self.name
    }

    #[inline]
    pub const fn type_params(&self) -> usize {
        self.type_params
    }

    #[inline]
    pub const fn is_generic(&self) -> bool {
        self.type_params > 0
    }

    /// Returns the constructor of the given shape, if exposed.
    #[inline]
    pub fn constructor(&self, shape: ConstructorShape) -> Option<&Constructor> {
        self.constructors.iter().find(|c| c.shape() == shape)
    }

    /// Returns all constructors.
    #[inline]
    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }
}
