use jc_macro_utils::Manifest;
use toml_edit::{Item, Value};

use crate::error::CodegenError;

// -----------------------------------------------------------------------------
// Keys

/// Prefix of this generator's option keys, also the name of its
/// `[package.metadata]` table.
pub const OPTION_PREFIX: &str = "jc-codegen";

/// Overrides the base package of the generated registry.
pub const REGISTRY_PACKAGE_NAME: &str = "jc-codegen.registryPackageName";
/// Overrides the name of the generated registry type.
pub const REGISTRY_CLASS_NAME: &str = "jc-codegen.registryClassName";
/// Restricts the generated registry type to `pub(crate)`.
pub const REGISTRY_RESTRICTED_ACCESS: &str = "jc-codegen.registryRestrictedAccess";
/// Enables keep rules emission.
pub const GENERATE_KEEP_RULES: &str = "jc-codegen.generateKeepRules";
/// Adds enum introspection rules to the keep rules.
pub const KEEP_RULES_KEEP_ENUM_CLASSES: &str = "jc-codegen.keepRulesKeepEnumClasses";
/// Keep rules generation of the upstream engine, must be `false` while ours is enabled.
pub const UPSTREAM_KEEP_RULES: &str = "moshi.generateProguardRules";

/// Default name of the generated registry type.
pub const DEFAULT_REGISTRY_CLASS_NAME: &str = "DefaultAdapterRegistry";

// -----------------------------------------------------------------------------
// CodegenOptions

/// Configuration of a [`RegistryTableGenerator`](crate::RegistryTableGenerator) pass.
///
/// Options come as string pairs ([`CodegenOptions::from_options`]) or from the
/// `[package.metadata.jc-codegen]` table of a manifest
/// ([`CodegenOptions::from_manifest`]):
///
/// ```toml
/// [package.metadata.jc-codegen]
/// registryPackageName = "com.app"
/// registryRestrictedAccess = true
/// "moshi.generateProguardRules" = false
/// ```
///
/// Booleans accept exactly `true` or `false`; any other value is reported and
/// replaced by the default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodegenOptions {
    pub registry_package: Option<String>,
    pub registry_class: String,
    pub restricted_access: bool,
    pub generate_keep_rules: bool,
    pub keep_enum_classes: bool,
    /// `None` when the upstream option is not set.
    pub upstream_keep_rules: Option<bool>,
    /// Path to `jc_registry` used by the generated code.
    pub registry_crate: syn::Path,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            registry_package: None,
            registry_class: DEFAULT_REGISTRY_CLASS_NAME.to_owned(),
            restricted_access: false,
            generate_keep_rules: true,
            keep_enum_classes: true,
            upstream_keep_rules: None,
            registry_crate: syn::parse_quote!(::jc_registry),
        }
    }
}

impl CodegenOptions {
    /// Build options from `key = value` pairs. Unknown keys are ignored.
    ///
    /// ```
    /// use jc_codegen::CodegenOptions;
    ///
    /// let options = CodegenOptions::from_options([
    ///     ("jc-codegen.registryClassName", "AppAdapterRegistry"),
    ///     ("moshi.generateProguardRules", "false"),
    /// ]).unwrap();
    ///
    /// assert_eq!(options.registry_class, "AppAdapterRegistry");
    /// assert_eq!(options.upstream_keep_rules, Some(false));
    /// ```
    pub fn from_options<I, K, V>(options: I) -> Result<Self, CodegenError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut this = Self::default();
        for (key, value) in options {
            this.set(key.as_ref(), value.as_ref())?;
        }
        Ok(this)
    }

    /// Build options from the `[package.metadata.jc-codegen]` table of
    /// `manifest`, and resolve the path of `jc_registry` from its dependencies.
    ///
    /// Keys without a `.` are relative to `jc-codegen`, other keys are used
    /// as written.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, CodegenError> {
        let mut this = Self {
            registry_crate: manifest.get_crate_path("jc_registry"),
            ..Self::default()
        };

        let Some(table) = manifest.package_metadata(OPTION_PREFIX) else {
            return Ok(this);
        };
        for (key, item) in table.iter() {
            let key = if key.contains('.') {
                key.to_owned()
            } else {
                format!("{OPTION_PREFIX}.{key}")
            };
            let value = match item {
                Item::Value(Value::String(value)) => value.value().clone(),
                Item::Value(Value::Boolean(value)) => value.value().to_string(),
                Item::Value(Value::Integer(value)) => value.value().to_string(),
                Item::Value(Value::Float(value)) => value.value().to_string(),
                _ => {
                    log::warn!("ignoring option `{key}`: expected a string, a boolean or a number");
                    continue;
                }
            };
            this.set(&key, &value)?;
        }
        Ok(this)
    }

    /// Set one option.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CodegenError> {
        match key {
            REGISTRY_PACKAGE_NAME => {
                if !is_valid_package(value) {
                    return Err(invalid(key, value, "expected a dot separated package name"));
                }
                self.registry_package = Some(value.to_owned());
            }
            REGISTRY_CLASS_NAME => {
                if syn::parse_str::<syn::Ident>(value).is_err() {
                    return Err(invalid(key, value, "expected a Rust identifier"));
                }
                self.registry_class = value.to_owned();
            }
            REGISTRY_RESTRICTED_ACCESS => {
                self.restricted_access = parse_bool(key, value).unwrap_or(false);
            }
            GENERATE_KEEP_RULES => {
                self.generate_keep_rules = parse_bool(key, value).unwrap_or(true);
            }
            KEEP_RULES_KEEP_ENUM_CLASSES => {
                self.keep_enum_classes = parse_bool(key, value).unwrap_or(true);
            }
            UPSTREAM_KEEP_RULES => {
                self.upstream_keep_rules = parse_bool(key, value);
            }
            _ if key.starts_with(OPTION_PREFIX) => {
                log::warn!("unknown option `{key}`");
            }
            _ => {}
        }
        Ok(())
    }

    /// Fails when keep rules would be emitted by both this generator and the
    /// upstream engine, which happens unless the upstream option is explicitly `false`.
    pub fn check_conflicts(&self) -> Result<(), CodegenError> {
        if self.generate_keep_rules && self.upstream_keep_rules != Some(false) {
            return Err(CodegenError::ConflictingKeepRules);
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => {
            log::warn!("option `{key}` expects `true` or `false`, got `{value}`; using the default");
            None
        }
    }
}

fn is_valid_package(value: &str) -> bool {
    !value.is_empty()
        && value.split('.').all(|segment| {
            !segment.is_empty() && segment.chars().all(|c| c.is_alphanumeric() || c == '_')
        })
}

fn invalid(key: &str, value: &str, reason: &'static str) -> CodegenError {
    CodegenError::InvalidOption {
        key: key.to_owned(),
        value: value.to_owned(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use jc_macro_utils::Manifest;

    use super::CodegenOptions;
    use crate::error::CodegenError;

    #[test]
    fn defaults() {
        let options = CodegenOptions::default();
        assert_eq!(options.registry_class, "DefaultAdapterRegistry");
        assert!(options.generate_keep_rules);
        assert!(options.keep_enum_classes);
        assert!(!options.restricted_access);
        // Keep rules are on while the upstream option is unset.
        assert!(matches!(options.check_conflicts(), Err(CodegenError::ConflictingKeepRules)));
    }

    #[test]
    fn strict_booleans() {
        let options = CodegenOptions::from_options([
            ("jc-codegen.registryRestrictedAccess", "yes"),
            ("jc-codegen.keepRulesKeepEnumClasses", "false"),
            ("moshi.generateProguardRules", "False"),
        ])
        .unwrap();

        assert!(!options.restricted_access);
        assert!(!options.keep_enum_classes);
        assert_eq!(options.upstream_keep_rules, None);
    }

    #[test]
    fn conflicts() {
        let off = CodegenOptions::from_options([("moshi.generateProguardRules", "false")]).unwrap();
        assert!(off.check_conflicts().is_ok());

        let on = CodegenOptions::from_options([("moshi.generateProguardRules", "true")]).unwrap();
        assert!(on.check_conflicts().is_err());

        let disabled = CodegenOptions::from_options([("jc-codegen.generateKeepRules", "false")]).unwrap();
        assert!(disabled.check_conflicts().is_ok());
    }

    #[test]
    fn invalid_names() {
        let err = CodegenOptions::from_options([("jc-codegen.registryClassName", "Not A Name")]).unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOption { .. }));

        assert!(CodegenOptions::from_options([("jc-codegen.registryPackageName", "com..app")]).is_err());
        assert!(CodegenOptions::from_options([("jc-codegen.registryPackageName", "com.app")]).is_ok());
    }

    #[test]
    fn manifest_metadata() {
        let manifest = Manifest::parse(
            r#"
            [package]
            name = "demo"

            [package.metadata.jc-codegen]
            registryPackageName = "com.demo"
            registryRestrictedAccess = true
            "moshi.generateProguardRules" = false

            [dependencies]
            jc_core = "0.0.1"
            "#,
        )
        .unwrap();

        let options = CodegenOptions::from_manifest(&manifest).unwrap();
        assert_eq!(options.registry_package.as_deref(), Some("com.demo"));
        assert!(options.restricted_access);
        assert_eq!(options.upstream_keep_rules, Some(false));
        assert_eq!(options.registry_crate, syn::parse_quote!(::jc_core::registry));
        assert!(options.check_conflicts().is_ok());
    }

    #[test]
    fn manifest_value_kinds() {
        let manifest = Manifest::parse(
            r#"
            [package]
            name = "demo"

            [package.metadata.jc-codegen]
            registryPackageName = 42
            registryClassName = ["AppRegistry"]
            generateKeepRules = { enabled = false }
            "#,
        )
        .unwrap();

        let options = CodegenOptions::from_manifest(&manifest).unwrap();
        assert_eq!(options.registry_package.as_deref(), Some("42"));
        // Arrays and tables are skipped, the defaults stay.
        assert_eq!(options.registry_class, "DefaultAdapterRegistry");
        assert!(options.generate_keep_rules);

        let manifest = Manifest::parse(
            r#"
            [package]
            name = "demo"

            [package.metadata.jc-codegen]
            registryClassName = 7
            "#,
        )
        .unwrap();
        let err = CodegenOptions::from_manifest(&manifest).unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOption { .. }));
    }
}
