//! Destinations of generated files.

use std::fs;
use std::path::{Path, PathBuf};

use jc_utils::hash::{HashSet, IndexMap};

use crate::error::FilerError;

// -----------------------------------------------------------------------------
// GeneratedFile

/// A file produced by a generator pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the root of the [`Filer`].
    pub relative_path: PathBuf,
    pub contents: String,
    /// Source files the contents are derived from.
    pub origins: Vec<PathBuf>,
}

// -----------------------------------------------------------------------------
// Filer

/// Storage for generated files.
pub trait Filer {
    /// Store `file` and return where it was stored.
    ///
    /// Fails with [`FilerError::AlreadyExists`] if the same relative path was
    /// already created through this filer.
    fn create(&mut self, file: &GeneratedFile) -> Result<PathBuf, FilerError>;
}

impl<F: Filer + ?Sized> Filer for &mut F {
    #[inline]
    fn create(&mut self, file: &GeneratedFile) -> Result<PathBuf, FilerError> {
        (**self).create(file)
    }
}

// -----------------------------------------------------------------------------
// FsFiler

/// A [`Filer`] writing below a directory, usually `OUT_DIR`.
///
/// Files whose contents are already on disk are left untouched, so repeated
/// runs keep their modification times.
#[derive(Debug)]
pub struct FsFiler {
    root: PathBuf,
    created: HashSet<PathBuf>,
}

impl FsFiler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            created: HashSet::default(),
        }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Filer for FsFiler {
    fn create(&mut self, file: &GeneratedFile) -> Result<PathBuf, FilerError> {
        let path = self.root.join(&file.relative_path);
        if !self.created.insert(file.relative_path.clone()) {
            return Err(FilerError::AlreadyExists { path });
        }

        if fs::read(&path).is_ok_and(|existing| existing == file.contents.as_bytes()) {
            log::debug!("{} is up to date", path.display());
            return Ok(path);
        }

        let io_error = |source| FilerError::Io {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(&path, &file.contents).map_err(io_error)?;
        log::debug!("wrote {}", path.display());
        Ok(path)
    }
}

// -----------------------------------------------------------------------------
// MemoryFiler

/// A [`Filer`] keeping files in memory, in creation order.
#[derive(Clone, Debug, Default)]
pub struct MemoryFiler {
    files: IndexMap<PathBuf, GeneratedFile>,
}

impl MemoryFiler {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, relative_path: impl AsRef<Path>) -> Option<&GeneratedFile> {
        self.files.get(relative_path.as_ref())
    }

    pub fn files(&self) -> impl ExactSizeIterator<Item = &GeneratedFile> {
        self.files.values()
    }
}

impl Filer for MemoryFiler {
    fn create(&mut self, file: &GeneratedFile) -> Result<PathBuf, FilerError> {
        let path = file.relative_path.clone();
        if self.files.contains_key(&path) {
            return Err(FilerError::AlreadyExists { path });
        }
        self.files.insert(path.clone(), file.clone());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::{Filer, FsFiler, GeneratedFile, MemoryFiler};
    use crate::error::FilerError;

    fn file(contents: &str) -> GeneratedFile {
        GeneratedFile {
            relative_path: PathBuf::from("a/b/Table.rs"),
            contents: contents.to_owned(),
            origins: Vec::new(),
        }
    }

    #[test]
    fn fs_filer_sessions() {
        let dir = tempfile::tempdir().unwrap();

        let mut filer = FsFiler::new(dir.path());
        let path = filer.create(&file("one")).unwrap();
        assert_eq!(path, dir.path().join("a/b/Table.rs"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "one");

        let err = filer.create(&file("one")).unwrap_err();
        assert!(matches!(err, FilerError::AlreadyExists { .. }));

        // A new session overwrites changed contents.
        let mut filer = FsFiler::new(dir.path());
        filer.create(&file("two")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "two");
    }

    #[test]
    fn memory_filer() {
        let mut filer = MemoryFiler::new();
        filer.create(&file("one")).unwrap();
        assert!(filer.create(&file("two")).is_err());

        assert_eq!(filer.files().len(), 1);
        assert_eq!(filer.get("a/b/Table.rs").unwrap().contents, "one");
    }
}
