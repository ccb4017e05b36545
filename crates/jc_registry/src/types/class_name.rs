use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Constants

/// Suffix appended to the joined simple names of a target class
/// to build its adapter class name.
pub const ADAPTER_NAME_SUFFIX: &str = "JsonAdapter";

// -----------------------------------------------------------------------------
// Error

/// A package or simple name that cannot form a [`ClassName`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidClassName {
    #[error("a class name needs at least one simple name")]
    NoSimpleName,

    #[error("invalid simple name `{0}`")]
    SimpleName(String),

    #[error("invalid package name `{0}`")]
    Package(String),
}

// -----------------------------------------------------------------------------
// ClassName

/// Raw identity of a class: a dot separated package and the simple names of
/// the class and its enclosing classes, outermost first.
///
/// The package may be empty (the default package). Rust module paths are
/// mapped to packages by replacing `::` with `.`.
///
/// # Examples
///
/// ```
/// use jc_registry::ClassName;
///
/// let info = ClassName::new("com.app.food", ["MyFood", "Info"]);
///
/// assert_eq!(info.canonical_name(), "com.app.food.MyFood.Info");
/// assert_eq!(info.reflection_name(), "com.app.food.MyFood$Info");
/// assert_eq!(info.simple_name(), "Info");
///
/// let adapter = info.adapter_name();
/// assert_eq!(adapter.canonical_name(), "com.app.food.MyFood_InfoJsonAdapter");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    package: String,
    simple_names: Vec<String>,
}

#[inline]
fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c == '_' || c == '-' || c.is_alphanumeric())
}

impl ClassName {
    /// Create a [`ClassName`], validating every segment.
    ///
    /// Package segments and simple names must be non-empty and consist of
    /// alphanumerics, `_` or `-`. The separators `.` and `$` are reserved.
    pub fn try_new<I, S>(package: impl Into<String>, simple_names: I) -> Result<Self, InvalidClassName>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let package = package.into();
        let simple_names: Vec<String> = simple_names.into_iter().map(Into::into).collect();

        if !package.is_empty() && !package.split('.').all(is_valid_segment) {
            return Err(InvalidClassName::Package(package));
        }
        if simple_names.is_empty() {
            return Err(InvalidClassName::NoSimpleName);
        }
        if let Some(bad) = simple_names.iter().find(|name| !is_valid_segment(name)) {
            return Err(InvalidClassName::SimpleName(bad.clone()));
        }

        Ok(Self {
            package,
            simple_names,
        })
    }

    /// Create a [`ClassName`].
    ///
    /// # Panics
    ///
    /// Panics if the names are invalid, see [`ClassName::try_new`].
    #[track_caller]
    pub fn new<I, S>(package: impl Into<String>, simple_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match Self::try_new(package, simple_names) {
            Ok(name) => name,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a [`ClassName`] whose package is a Rust module path,
    /// usually obtained with [`module_path!`].
    ///
    /// ```
    /// use jc_registry::ClassName;
    ///
    /// let name = ClassName::from_module_path("demo::model::food", ["Food"]);
    /// assert_eq!(name.package(), "demo.model.food");
    /// ```
    #[track_caller]
    pub fn from_module_path<I, S>(module_path: &str, simple_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let package = module_path
            .split("::")
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(".");
        Self::new(package, simple_names)
    }

    /// Returns the package, empty for the default package.
    #[inline]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Returns the simple names, outermost first.
    #[inline]
    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// Returns the innermost simple name.
    #[inline]
    pub fn simple_name(&self) -> &str {
        // `simple_names` is never empty.
        self.simple_names.last().map(String::as_str).unwrap_or_default()
    }

    /// Returns the enclosing class, if this class is nested.
    pub fn enclosing_class(&self) -> Option<ClassName> {
        if self.simple_names.len() < 2 {
            return None;
        }
        Some(Self {
            package: self.package.clone(),
            simple_names: self.simple_names[..self.simple_names.len() - 1].to_vec(),
        })
    }

    /// Returns a class nested in this one.
    #[track_caller]
    pub fn nested(&self, simple_name: impl Into<String>) -> ClassName {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(simple_name.into());
        Self::new(self.package.clone(), simple_names)
    }

    fn join_names(&self, separator: &str) -> String {
        let names = self.simple_names.join(separator);
        if self.package.is_empty() {
            names
        } else {
            let mut full = self.package.to_owned();
            full.push('.');
            full.push_str(&names);
            full
        }
    }

    /// Returns `package.Outer.Inner`.
    #[inline]
    pub fn canonical_name(&self) -> String {
        self.join_names(".")
    }

    /// Returns `package.Outer$Inner`, the name a class loader knows the class by.
    #[inline]
    pub fn reflection_name(&self) -> String {
        self.join_names("$")
    }

    /// Returns the conventional adapter class name: the simple names joined by
    /// `_`, suffixed with `JsonAdapter`, in the same package.
    pub fn adapter_name(&self) -> ClassName {
        let mut simple_name = self.simple_names.join("_");
        simple_name.push_str(ADAPTER_NAME_SUFFIX);
        Self {
            package: self.package.clone(),
            simple_names: vec![simple_name],
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

impl fmt::Debug for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reflection_name())
    }
}
