use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use thiserror::Error;
use toml_edit::{Document, Item, Table, TableLike};

// -----------------------------------------------------------------------------
// Error

/// Failure while locating, reading or parsing a `Cargo.toml`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ManifestError {
    #[error("unable to read cargo manifest {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse cargo manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml_edit::TomlError,
    },
}

// -----------------------------------------------------------------------------
// Manifest

/// A parsed `Cargo.toml` of the crate being compiled.
///
/// Used in two places:
///
/// - by proc-macros, to locate an accessible [`syn::Path`] for another crate
///   as seen from the caller's Cargo.toml ([`Manifest::shared`]);
/// - by build scripts, to read `[package.metadata.<tool>]` configuration
///   ([`Manifest::read`], [`Manifest::package_metadata`]).
///
/// # Example
///
/// ```rust
/// # use jc_macro_utils::Manifest;
/// let manifest = Manifest::parse(
///     r#"
///     [package]
///     name = "demo"
///
///     [dependencies]
///     jc_core = "0.0.1"
///     "#,
/// ).unwrap();
///
/// let path: syn::Path = manifest.get_crate_path("jc_registry");
/// assert_eq!(path, syn::parse_quote!(::jc_core::registry));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If requested crate name begins with `jc_`, and target crate depends on
///    the workspace crate `jc_core`, return `::jc_core::short_name`
///    (e.g. `jc_registry` -> `::jc_core::registry`).
/// 3. Repeat step 1-2 in `dev-dependencies`, then in `build-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
/// When a crate needs to reference itself, library code should use
/// `crate::...`, while doctests and other external code typically use the
/// absolute path `::crate_name`.
///
/// To support both cases adding an alias such as
/// `extern crate self as jc_registry;` in the crate root can resolve the conflict.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: Option<SystemTime>,
}

const CORE_CRATE_NAME: &str = "jc_core";
const CRATE_PREFIX: &str = "jc_";

const DEPENDENCY_TABLES: [&str; 3] = ["dependencies", "dev-dependencies", "build-dependencies"];

impl Manifest {
    // Try get `Cargo.toml` path.
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    // Try get `Cargo.toml` modified time.
    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    /// Parse a manifest from its text.
    pub fn parse(text: &str) -> Result<Self, toml_edit::TomlError> {
        Ok(Self {
            manifest: Document::parse(Box::<str>::from(text))?,
            modified_time: None,
        })
    }

    /// Read and parse the manifest at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manifest = Self::parse(&text).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        manifest.modified_time = Self::get_manifest_modified_time(path).ok();
        Ok(manifest)
    }

    /// Read the manifest of the crate currently being built, located through
    /// the `CARGO_MANIFEST_DIR` environment variable set by cargo.
    pub fn current() -> Result<Self, ManifestError> {
        Self::read(Self::get_manifest_path())
    }

    // Attempt to parse the provided path as a syntax tree node.
    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    #[inline]
    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            // This dependency exists in this crate
            return Some(Self::parse_str(&format!("::{name}")));
        }

        if let Some(module) = name.strip_prefix(CRATE_PREFIX)
            && deps.contains_key(CORE_CRATE_NAME)
        {
            let mut path = Self::parse_str::<syn::Path>(&format!("::{CORE_CRATE_NAME}"));
            path.segments.push(Self::parse_str(module));
            return Some(path);
        }

        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution
    /// order and examples.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in DEPENDENCY_TABLES {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(val) = Self::find_in_deps(deps, name)
            {
                return val;
            }
        }

        Self::parse_str(&format!("::{name}"))
    }

    /// Returns `[package] name`, if present.
    pub fn package_name(&self) -> Option<&str> {
        self.manifest
            .get("package")
            .and_then(Item::as_table_like)
            .and_then(|package| package.get("name"))
            .and_then(Item::as_str)
    }

    /// Returns the `[package.metadata.<tool>]` table, if present.
    pub fn package_metadata(&self, tool: &str) -> Option<&dyn TableLike> {
        self.manifest
            .get("package")
            .and_then(Item::as_table_like)
            .and_then(|package| package.get("metadata"))
            .and_then(Item::as_table_like)
            .and_then(|metadata| metadata.get(tool))
            .and_then(Item::as_table_like)
    }

    /// Obtain the [Manifest] of the caller's Cargo.toml.
    ///
    /// This function reads and caches the caller's `Cargo.toml`. Parsing the
    /// manifest and acquiring the global cache lock are relatively expensive for
    /// proc-macros, so callers should invoke [`Manifest::shared`] sparingly (typically
    /// once per macro invocation) and cache the returned [`syn::Path`] where possible.
    ///
    /// # Panics
    ///
    /// Panics when the manifest cannot be read, which aborts the macro expansion
    /// with the message.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == Some(modified_time)
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Self::read(&manifest_path).unwrap_or_else(|e| panic!("{e}"));

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;

    const MANIFEST: &str = r#"
        [package]
        name = "demo-app"

        [package.metadata.jc-codegen]
        registryClassName = "AppRegistry"
        generateKeepRules = false

        [dependencies]
        serde = "1"

        [build-dependencies]
        jc_codegen = "0.0.1"
    "#;

    #[test]
    fn crate_path_resolution() {
        let manifest = Manifest::parse(MANIFEST).unwrap();

        let direct: syn::Path = manifest.get_crate_path("jc_codegen");
        assert_eq!(direct, syn::parse_quote!(::jc_codegen));

        let fallback: syn::Path = manifest.get_crate_path("jc_registry");
        assert_eq!(fallback, syn::parse_quote!(::jc_registry));
    }

    #[test]
    fn core_crate_alias() {
        let manifest = Manifest::parse("[dependencies]\njc_core = \"0.0.1\"\n").unwrap();
        let path: syn::Path = manifest.get_crate_path("jc_registry");
        assert_eq!(path, syn::parse_quote!(::jc_core::registry));
    }

    #[test]
    fn package_metadata() {
        let manifest = Manifest::parse(MANIFEST).unwrap();
        assert_eq!(manifest.package_name(), Some("demo-app"));

        let table = manifest.package_metadata("jc-codegen").unwrap();
        assert_eq!(
            table.get("registryClassName").and_then(|v| v.as_str()),
            Some("AppRegistry")
        );
        assert_eq!(
            table.get("generateKeepRules").and_then(|v| v.as_bool()),
            Some(false)
        );
        assert!(manifest.package_metadata("other").is_none());
    }

    #[test]
    fn read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        std::fs::write(&path, MANIFEST).unwrap();

        let manifest = Manifest::read(&path).unwrap();
        assert_eq!(manifest.package_name(), Some("demo-app"));
        assert!(manifest.modified_time.is_some());

        assert!(Manifest::read(dir.path().join("missing.toml")).is_err());
    }
}
