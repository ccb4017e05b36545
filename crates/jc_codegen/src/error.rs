use std::io;
use std::path::PathBuf;

use jc_macro_utils::ManifestError;
use jc_registry::types::InvalidClassName;
use thiserror::Error;

// -----------------------------------------------------------------------------
// CodegenError

/// An error that aborts a generator pass.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodegenError {
    /// Keep rules would be emitted by both this generator and the upstream one.
    #[error(
        "keep rules generation of the upstream engine is enabled, set the \
        \"moshi.generateProguardRules\" option to \"false\" to avoid duplicate rules"
    )]
    ConflictingKeepRules,

    #[error("invalid value `{value}` for option `{key}`: {reason}")]
    InvalidOption {
        key: String,
        value: String,
        reason: &'static str,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("environment variable `{name}` is not set, is this a build script?")]
    MissingEnv { name: &'static str },

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("malformed symbol dump: {0}")]
    SymbolDump(#[from] serde_json::Error),

    #[error(transparent)]
    Filer(FilerError),
}

// -----------------------------------------------------------------------------
// SymbolError

/// A problem with a single declaration. Recovered by skipping the declaration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SymbolError {
    #[error("`{name}` is a {kind}, not a class")]
    NotAClass { name: String, kind: &'static str },

    #[error("`{name}` has no resolvable package")]
    NoPackage { name: String },

    #[error("`{name}` cannot be resolved: {source}")]
    InvalidName {
        name: String,
        #[source]
        source: InvalidClassName,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// -----------------------------------------------------------------------------
// FilerError

/// An error of a [`Filer`](crate::filer::Filer).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FilerError {
    /// The file was already created in this session.
    #[error("file {path} already exists")]
    AlreadyExists { path: PathBuf },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<FilerError> for CodegenError {
    #[inline]
    fn from(value: FilerError) -> Self {
        Self::Filer(value)
    }
}
