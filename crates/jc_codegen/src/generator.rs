use std::path::PathBuf;

use jc_macro_utils::Manifest;
use jc_registry::ClassName;

use crate::election::{elect_package, registry_package};
use crate::emit::{KeepRules, ShrinkerSymbols, TableSource};
use crate::error::{CodegenError, FilerError};
use crate::filer::{Filer, FsFiler, GeneratedFile};
use crate::options::{CodegenOptions, REGISTRY_CLASS_NAME};
use crate::registration::{AdapterRegistration, RegistrationTable};
use crate::symbol::{SourceScanner, SymbolSource};

/// Environment variable holding the path of the generated table, set for the
/// crate being built by [`build_script`].
pub const REGISTRY_ENV: &str = "JC_ADAPTER_REGISTRY";

// -----------------------------------------------------------------------------
// GenerationReport

/// Outcome of one [`RegistryTableGenerator::process`] pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// The generated registry type, `None` when nothing was generated.
    pub registry_class: Option<ClassName>,
    pub table_path: Option<PathBuf>,
    pub keep_rules_path: Option<PathBuf>,
    pub registrations: Vec<AdapterRegistration>,
    /// Files the generated output depends on.
    pub origins: Vec<PathBuf>,
}

impl GenerationReport {
    /// Returns the `cargo:` instructions a build script should print.
    ///
    /// ```
    /// use jc_codegen::GenerationReport;
    ///
    /// let report = GenerationReport {
    ///     origins: vec!["src/model.rs".into()],
    ///     table_path: Some("out/DefaultAdapterRegistry.rs".into()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(report.cargo_directives(), [
    ///     "cargo:rerun-if-changed=src/model.rs",
    ///     "cargo:rustc-env=JC_ADAPTER_REGISTRY=out/DefaultAdapterRegistry.rs",
    /// ]);
    /// ```
    pub fn cargo_directives(&self) -> Vec<String> {
        let mut directives: Vec<String> = self
            .origins
            .iter()
            .map(|origin| format!("cargo:rerun-if-changed={}", origin.display()))
            .collect();
        if let Some(table) = &self.table_path {
            directives.push(format!("cargo:rustc-env={REGISTRY_ENV}={}", table.display()));
        }
        directives
    }
}

// -----------------------------------------------------------------------------
// RegistryTableGenerator

/// Generates the adapter registry table and the matching keep rules from
/// the marked declarations of one compilation unit.
///
/// A pass runs in order:
///
/// 1. The options are checked for conflicting keep rules generation. Nothing
///    is written when they conflict.
/// 2. Marked declarations are discovered into a [`RegistrationTable`].
///    A pass without registrations ends here.
/// 3. The registry package is elected, see [`crate::election`].
/// 4. The table source and, when enabled, the keep rules are written.
///
/// Files already created through the same filer count as written, so a
/// pass may be repeated.
#[derive(Clone, Debug, Default)]
pub struct RegistryTableGenerator {
    options: CodegenOptions,
    symbols: ShrinkerSymbols,
}

impl RegistryTableGenerator {
    #[inline]
    pub fn new(options: CodegenOptions) -> Self {
        Self {
            options,
            symbols: ShrinkerSymbols::default(),
        }
    }

    /// Replace the runtime class names used by the keep rules.
    #[inline]
    pub fn with_symbols(mut self, symbols: ShrinkerSymbols) -> Self {
        self.symbols = symbols;
        self
    }

    #[inline]
    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    /// Run one pass.
    pub fn process(
        &self,
        mut source: impl SymbolSource,
        mut filer: impl Filer,
    ) -> Result<GenerationReport, CodegenError> {
        self.options.check_conflicts()?;

        let declarations = source.declarations()?;
        let table = RegistrationTable::discover(&declarations);

        let mut report = GenerationReport {
            registrations: table.registrations().to_vec(),
            origins: table.origins().to_vec(),
            ..GenerationReport::default()
        };
        if table.is_empty() {
            log::debug!("no adapters to register, skipping generation");
            return Ok(report);
        }

        let registry = self.registry_class(&table)?;
        let source = TableSource {
            table: &table,
            registry: &registry,
            restricted_access: self.options.restricted_access,
            registry_crate: &self.options.registry_crate,
        };
        let file = GeneratedFile {
            relative_path: source.relative_path(),
            contents: source.render(),
            origins: table.origins().to_vec(),
        };
        report.table_path = Some(write(&mut filer, &file)?);

        if self.options.generate_keep_rules {
            let rules = KeepRules {
                table: &table,
                symbols: &self.symbols,
                keep_enum_classes: self.options.keep_enum_classes,
            };
            if let Some(relative_path) = rules.relative_path() {
                let file = GeneratedFile {
                    relative_path,
                    contents: rules.render(),
                    origins: table.origins().to_vec(),
                };
                report.keep_rules_path = Some(write(&mut filer, &file)?);
            }
        }

        log::debug!("generated `{registry}` with {} adapters", table.len());
        report.registry_class = Some(registry);
        Ok(report)
    }

    fn registry_class(&self, table: &RegistrationTable) -> Result<ClassName, CodegenError> {
        let elected = elect_package(table.registrations().iter().map(|r| r.target.package()));
        let package = registry_package(elected, self.options.registry_package.as_deref());
        let class = &self.options.registry_class;

        ClassName::try_new(package.as_str(), [class.as_str()]).map_err(|_| {
            CodegenError::InvalidOption {
                key: REGISTRY_CLASS_NAME.to_owned(),
                value: format!("{package}.{class}"),
                reason: "not a valid class name",
            }
        })
    }
}

fn write(filer: &mut impl Filer, file: &GeneratedFile) -> Result<PathBuf, CodegenError> {
    match filer.create(file) {
        Ok(path) => Ok(path),
        Err(FilerError::AlreadyExists { path }) => {
            log::debug!("{} was already generated", path.display());
            Ok(path)
        }
        Err(err) => Err(err.into()),
    }
}

// -----------------------------------------------------------------------------
// build_script

/// Run a pass from a build script.
///
/// Options are read from the `[package.metadata.jc-codegen]` table of the
/// package manifest, `src` is scanned and the output is written to
/// `OUT_DIR`. The `cargo:` instructions are printed, so the crate can
/// include the table:
///
/// ```ignore
/// // build.rs
/// fn main() {
///     jc_codegen::build_script().unwrap();
/// }
///
/// // src/lib.rs
/// include!(env!("JC_ADAPTER_REGISTRY"));
/// ```
pub fn build_script() -> Result<GenerationReport, CodegenError> {
    let manifest_dir = env_path("CARGO_MANIFEST_DIR")?;
    let out_dir = env_path("OUT_DIR")?;

    let manifest_path = manifest_dir.join("Cargo.toml");
    let manifest = Manifest::read(&manifest_path)?;
    let options = CodegenOptions::from_manifest(&manifest)?;

    let crate_name = manifest.package_name().unwrap_or_default().to_owned();
    let source_root = manifest_dir.join("src");
    let scanner = SourceScanner::new(&crate_name, &source_root);

    let report = RegistryTableGenerator::new(options).process(scanner, FsFiler::new(out_dir))?;

    println!("cargo:rerun-if-changed={}", manifest_path.display());
    println!("cargo:rerun-if-changed={}", source_root.display());
    for directive in report.cargo_directives() {
        println!("{directive}");
    }
    Ok(report)
}

fn env_path(name: &'static str) -> Result<PathBuf, CodegenError> {
    std::env::var_os(name)
        .map(PathBuf::from)
        .ok_or(CodegenError::MissingEnv { name })
}
