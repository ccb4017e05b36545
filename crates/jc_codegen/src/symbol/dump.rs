use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CodegenError;
use crate::symbol::{Declaration, SymbolSource};

/// A [`SymbolSource`] over a JSON dump produced by an external symbol resolver.
///
/// ```json
/// {
///   "declarations": [
///     { "package": "com.app", "names": ["MyFood", "Info"], "kind": "class" },
///     { "package": "com.app.net", "names": ["Response"], "kind": "class", "typeParameters": 1 },
///     { "package": "com.app", "names": ["Legacy"], "kind": "class", "generateAdapter": false }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDump {
    pub declarations: Vec<Declaration>,
    /// Path of the dump, used as origin of declarations that name none.
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl SymbolDump {
    /// Parse a dump.
    pub fn from_json(json: &str) -> Result<Self, CodegenError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dump file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, CodegenError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut dump = Self::from_json(&json)?;
        dump.path = Some(path.to_path_buf());
        Ok(dump)
    }
}

impl From<Vec<Declaration>> for SymbolDump {
    #[inline]
    fn from(declarations: Vec<Declaration>) -> Self {
        Self {
            declarations,
            path: None,
        }
    }
}

impl SymbolSource for SymbolDump {
    fn declarations(&mut self) -> Result<Vec<Declaration>, CodegenError> {
        let mut declarations = self.declarations.clone();
        if let Some(path) = &self.path {
            for declaration in declarations.iter_mut().filter(|d| d.origin.is_none()) {
                declaration.origin = Some(path.clone());
            }
        }
        Ok(declarations)
    }
}
