use std::fmt;
use std::path::PathBuf;

use jc_registry::ClassName;
use serde::{Deserialize, Serialize};

use crate::error::SymbolError;

// -----------------------------------------------------------------------------
// DeclarationKind

/// What kind of item carries the marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Class,
    Enum,
    Object,
    Interface,
    Function,
    Property,
    TypeAlias,
}

impl DeclarationKind {
    /// Classes, enums and objects can have an adapter.
    #[inline]
    pub const fn is_class(self) -> bool {
        matches!(self, Self::Class | Self::Enum | Self::Object)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Enum => "enum",
            Self::Object => "object",
            Self::Interface => "interface",
            Self::Function => "function",
            Self::Property => "property",
            Self::TypeAlias => "type alias",
        }
    }
}

impl fmt::Display for DeclarationKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Declaration

/// A declaration carrying the `json_class` marker, as supplied by a
/// [`SymbolSource`](crate::symbol::SymbolSource).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    /// Dot separated package, `None` when the source could not determine it.
    pub package: Option<String>,
    /// Simple names, outermost first.
    pub names: Vec<String>,
    pub kind: DeclarationKind,
    #[serde(default)]
    pub type_parameters: usize,
    #[serde(default = "generate_adapter_default")]
    pub generate_adapter: bool,
    /// The file declaring it.
    #[serde(default)]
    pub origin: Option<PathBuf>,
}

fn generate_adapter_default() -> bool {
    true
}

impl Declaration {
    /// Create a declaration of a marked class.
    pub fn class<I, S>(package: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            package: Some(package.into()),
            names: names.into_iter().map(Into::into).collect(),
            kind: DeclarationKind::Class,
            type_parameters: 0,
            generate_adapter: true,
            origin: None,
        }
    }

    #[inline]
    pub fn with_kind(mut self, kind: DeclarationKind) -> Self {
        self.kind = kind;
        self
    }

    #[inline]
    pub fn with_type_parameters(mut self, type_parameters: usize) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    #[inline]
    pub fn with_generate_adapter(mut self, generate_adapter: bool) -> Self {
        self.generate_adapter = generate_adapter;
        self
    }

    #[inline]
    pub fn with_origin(mut self, origin: impl Into<PathBuf>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Returns a readable name for diagnostics.
    pub fn display_name(&self) -> String {
        match &self.package {
            Some(package) if !package.is_empty() => format!("{package}.{}", self.names.join(".")),
            _ => self.names.join("."),
        }
    }

    /// Resolve this declaration to a concrete class.
    pub fn resolve(&self) -> Result<ClassName, SymbolError> {
        if !self.kind.is_class() {
            return Err(SymbolError::NotAClass {
                name: self.display_name(),
                kind: self.kind.as_str(),
            });
        }
        let Some(package) = &self.package else {
            return Err(SymbolError::NoPackage {
                name: self.display_name(),
            });
        };
        ClassName::try_new(package.clone(), self.names.iter().cloned()).map_err(|source| {
            SymbolError::InvalidName {
                name: self.display_name(),
                source,
            }
        })
    }
}
