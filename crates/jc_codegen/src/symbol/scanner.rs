use std::io;
use std::mem;
use std::path::{Path, PathBuf};

use jc_macro_utils::JsonClassArgs;
use jc_utils::hash::HashSet;
use syn::ext::IdentExt;
use syn::{Attribute, Expr, ExprLit, Generics, Item, ItemMod, Lit, Meta};

use crate::error::{CodegenError, SymbolError};
use crate::symbol::{Declaration, DeclarationKind, SymbolSource};

// -----------------------------------------------------------------------------
// SourceScanner

/// A [`SymbolSource`] reading `#[json_class]` markers from the Rust sources
/// of one crate.
///
/// The package of a declaration is its module path with `.` separators,
/// starting with the crate name: module `model::food` of crate `demo-app`
/// declares into `demo_app.model.food`. This is the package `#[json_class]`
/// gives the type at runtime.
///
/// The scan starts at the crate root, `lib.rs` or else `main.rs` under
/// `root`, and follows `mod` declarations the way the compiler loads them:
/// `mod net;` reads `net.rs` or `net/mod.rs`, and `#[path = "..."]` is
/// honored. Files no module declares are not part of the crate and are not
/// scanned, which excludes the targets under `src/bin`. Limitations:
///
/// - `cfg` attributes are not evaluated, a declared module is always scanned;
/// - modules brought in by macros or `include!` are not seen.
///
/// The declarations of a file come in source order, before those of the
/// outline modules it declares. A module file that cannot be read or parsed
/// is reported and skipped.
///
/// # Example
///
/// ```
/// use jc_codegen::symbol::SourceScanner;
///
/// let scanner = SourceScanner::new("demo-app", "src");
/// let found = scanner
///     .scan_str(&["model"], "#[json_class] pub struct Food { name: String }", None)
///     .unwrap();
///
/// assert_eq!(found[0].package.as_deref(), Some("demo_app.model"));
/// assert_eq!(found[0].names, ["Food"]);
/// ```
#[derive(Clone, Debug)]
pub struct SourceScanner {
    crate_name: String,
    root: PathBuf,
}

impl SourceScanner {
    /// Scan the crate `crate_name` whose crate root lives in `root`, usually `src`.
    pub fn new(crate_name: &str, root: impl Into<PathBuf>) -> Self {
        Self {
            crate_name: crate_name.replace('-', "_"),
            root: root.into(),
        }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan source text belonging to the module `modules` (relative to the crate root).
    ///
    /// Inline modules are walked, outline `mod` declarations are not loaded.
    pub fn scan_str<S: AsRef<str>>(
        &self,
        modules: &[S],
        source: &str,
        origin: Option<&Path>,
    ) -> Result<Vec<Declaration>, syn::Error> {
        let file = syn::parse_file(source)?;

        let mut found = Vec::new();
        let mut walk = Walk::new(self.module_path(modules), &self.root, origin, &mut found);
        walk.items(&file.items);
        Ok(found)
    }

    fn module_path<S: AsRef<str>>(&self, modules: &[S]) -> Vec<String> {
        let mut module_path = vec![self.crate_name.clone()];
        module_path.extend(modules.iter().map(|m| m.as_ref().to_owned()));
        module_path
    }

    fn crate_root(&self) -> Result<PathBuf, CodegenError> {
        if !self.root.is_dir() {
            return Err(CodegenError::Io {
                path: self.root.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "not a directory"),
            });
        }
        ["lib.rs", "main.rs"]
            .into_iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
            .ok_or_else(|| CodegenError::Io {
                path: self.root.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "no `lib.rs` or `main.rs`"),
            })
    }

    fn scan_module(&self, module: ModuleFile, visited: &mut HashSet<PathBuf>, found: &mut Vec<Declaration>) {
        let key = module.path.canonicalize().unwrap_or_else(|_| module.path.clone());
        if !visited.insert(key) {
            log::warn!("{} is loaded by more than one module, scanned once", module.path.display());
            return;
        }

        let parsed = std::fs::read_to_string(&module.path)
            .map_err(|source| SymbolError::Read {
                path: module.path.clone(),
                source,
            })
            .and_then(|text| {
                syn::parse_file(&text).map_err(|source| SymbolError::Parse {
                    path: module.path.clone(),
                    source,
                })
            });
        let file = match parsed {
            Ok(file) => file,
            Err(err) => {
                log::error!("{err}");
                return;
            }
        };

        // `#[path]` on a top level `mod` is relative to the file's directory.
        let base = module.path.parent().unwrap_or(Path::new(""));
        let outline = {
            let mut walk = Walk::new(module.module_path, base, Some(&module.path), found);
            walk.dir = module.dir;
            walk.items(&file.items);
            walk.outline
        };

        for child in outline {
            self.scan_module(child, visited, found);
        }
    }
}

impl SymbolSource for SourceScanner {
    fn declarations(&mut self) -> Result<Vec<Declaration>, CodegenError> {
        let path = self.crate_root()?;

        let mut found = Vec::new();
        let crate_root = ModuleFile {
            path,
            module_path: self.module_path::<&str>(&[]),
            dir: self.root.clone(),
        };
        self.scan_module(crate_root, &mut HashSet::default(), &mut found);
        Ok(found)
    }
}

// -----------------------------------------------------------------------------
// Item walk

/// A module loaded from its own file.
struct ModuleFile {
    path: PathBuf,
    module_path: Vec<String>,
    /// Directory of the outline modules the file declares.
    dir: PathBuf,
}

struct Walk<'a> {
    module_path: Vec<String>,
    /// Directory of `mod name;` files at the current nesting.
    dir: PathBuf,
    /// Directory `#[path]` attributes are relative to.
    base: PathBuf,
    origin: Option<&'a Path>,
    found: &'a mut Vec<Declaration>,
    outline: Vec<ModuleFile>,
}

impl<'a> Walk<'a> {
    fn new(
        module_path: Vec<String>,
        dir: &Path,
        origin: Option<&'a Path>,
        found: &'a mut Vec<Declaration>,
    ) -> Self {
        Self {
            module_path,
            dir: dir.to_path_buf(),
            base: dir.to_path_buf(),
            origin,
            found,
            outline: Vec::new(),
        }
    }

    fn items(&mut self, items: &[Item]) {
        for item in items {
            let (attrs, ident, kind, generics) = match item {
                Item::Mod(item) => {
                    self.module(item);
                    continue;
                }
                Item::Struct(item) => (&item.attrs, &item.ident, DeclarationKind::Class, Some(&item.generics)),
                Item::Union(item) => (&item.attrs, &item.ident, DeclarationKind::Class, Some(&item.generics)),
                Item::Enum(item) => (&item.attrs, &item.ident, DeclarationKind::Enum, Some(&item.generics)),
                Item::Trait(item) => (&item.attrs, &item.ident, DeclarationKind::Interface, None),
                Item::Type(item) => (&item.attrs, &item.ident, DeclarationKind::TypeAlias, None),
                Item::Fn(item) => (&item.attrs, &item.sig.ident, DeclarationKind::Function, None),
                Item::Const(item) => (&item.attrs, &item.ident, DeclarationKind::Property, None),
                Item::Static(item) => (&item.attrs, &item.ident, DeclarationKind::Property, None),
                _ => continue,
            };

            let name = ident.unraw().to_string();
            let Some(args) = marker_args(attrs, &name) else {
                continue;
            };

            self.found.push(Declaration {
                package: Some(self.module_path.join(".")),
                names: vec![name],
                kind,
                type_parameters: generics.map_or(0, type_parameters),
                generate_adapter: args.generate_adapter,
                origin: self.origin.map(Path::to_path_buf),
            });
        }
    }

    fn module(&mut self, item: &ItemMod) {
        let name = item.ident.unraw().to_string();
        let explicit = path_attribute(&item.attrs);

        let Some((_, content)) = &item.content else {
            let (path, dir) = match explicit {
                Some(explicit) => {
                    let path = self.base.join(explicit);
                    let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
                    (path, dir)
                }
                None => {
                    let dir = self.dir.join(&name);
                    let flat = self.dir.join(format!("{name}.rs"));
                    let path = if flat.is_file() { flat } else { dir.join("mod.rs") };
                    (path, dir)
                }
            };
            let mut module_path = self.module_path.clone();
            module_path.push(name);
            self.outline.push(ModuleFile { path, module_path, dir });
            return;
        };

        let dir = match explicit {
            Some(explicit) => self.base.join(explicit),
            None => self.dir.join(&name),
        };
        let saved_dir = mem::replace(&mut self.dir, dir.clone());
        let saved_base = mem::replace(&mut self.base, dir);
        self.module_path.push(name);
        self.items(content);
        self.module_path.pop();
        self.dir = saved_dir;
        self.base = saved_base;
    }
}

fn path_attribute(attrs: &[Attribute]) -> Option<String> {
    attrs.iter().find_map(|attr| match &attr.meta {
        Meta::NameValue(meta) if meta.path.is_ident("path") => match &meta.value {
            Expr::Lit(ExprLit { lit: Lit::Str(path), .. }) => Some(path.value()),
            _ => None,
        },
        _ => None,
    })
}

fn marker_args(attrs: &[Attribute], name: &str) -> Option<JsonClassArgs> {
    let attr = attrs.iter().find(|attr| JsonClassArgs::is_marker(attr))?;
    match JsonClassArgs::from_attribute(attr) {
        Ok(args) => Some(args),
        Err(err) => {
            log::error!("skipping `{name}`: malformed json_class marker: {err}");
            None
        }
    }
}

#[inline]
fn type_parameters(generics: &Generics) -> usize {
    generics.type_params().count()
}
