use crate::types::ClassName;

// -----------------------------------------------------------------------------
// JsonClass

/// The "generate adapter" marker carried by an annotated class.
///
/// Mirrors `#[json_class(generate_adapter = ...)]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JsonClass {
    pub generate_adapter: bool,
}

impl JsonClass {
    /// Create a marker.
    #[inline]
    pub const fn new(generate_adapter: bool) -> Self {
        Self { generate_adapter }
    }
}

// -----------------------------------------------------------------------------
// TargetClass

/// Runtime description of a class adapters can be produced for.
///
/// # Examples
///
/// ```
/// use jc_registry::ClassName;
/// use jc_registry::class::{JsonClass, TargetClass};
///
/// let class = TargetClass::new(ClassName::new("com.app", ["Response"]))
///     .with_type_params(1)
///     .with_marker(JsonClass::new(true));
///
/// assert!(class.generates_adapter());
/// assert!(class.is_generic());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetClass {
    name: ClassName,
    type_params: usize,
    marker: Option<JsonClass>,
}

impl TargetClass {
    /// Create an unmarked, non-generic class.
    #[inline]
    pub const fn new(name: ClassName) -> Self {
        Self {
            name,
            type_params: 0,
            marker: None,
        }
    }

    /// Set the number of declared type parameters.
    #[inline]
    pub const fn with_type_params(mut self, type_params: usize) -> Self {
        self.type_params = type_params;
        self
    }

    /// Attach the marker.
    #[inline]
    pub const fn with_marker(mut self, marker: JsonClass) -> Self {
        self.marker = Some(marker);
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

    #[inline]
    pub const fn marker(&self) -> Option<JsonClass> {
        self.marker
    }

    /// Returns `true` if the class is marked and the marker asks for an adapter.
    #[inline]
    pub const fn generates_adapter(&self) -> bool {
        matches!(
            self.marker,
            Some(JsonClass {
                generate_adapter: true
            })
        )
    }
}
