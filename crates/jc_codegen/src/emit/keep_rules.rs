use std::fmt::{self, Write};
use std::path::PathBuf;

use crate::hash::hash_string;
use crate::registration::RegistrationTable;

/// Directory the keep rules are written to, relative to the resource root.
pub const KEEP_RULES_DIR: &str = "META-INF/proguard";

// -----------------------------------------------------------------------------
// ShrinkerSymbols

/// Fully qualified names of the runtime classes the keep rules refer to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShrinkerSymbols {
    /// The JSON engine passed to every adapter constructor.
    pub engine_class: String,
    /// Element type of the type-argument array of generic adapters.
    pub type_class: String,
    /// The marker annotation as seen at runtime.
    pub marker_annotation: String,
    /// The synthetic parameter of default-argument constructors.
    pub default_constructor_marker: String,
    /// Base class of captured generic type references.
    pub type_ref_class: String,
    /// Base type of generated registry tables.
    pub registry_class: String,
}

impl Default for ShrinkerSymbols {
    fn default() -> Self {
        Self {
            engine_class: "com.squareup.moshi.Moshi".into(),
            type_class: "java.lang.reflect.Type".into(),
            marker_annotation: "com.squareup.moshi.JsonClass".into(),
            default_constructor_marker: "kotlin.jvm.internal.DefaultConstructorMarker".into(),
            type_ref_class: "jc.companion.api.TypeRef".into(),
            registry_class: "jc.companion.api.AdapterRegistry".into(),
        }
    }
}

// -----------------------------------------------------------------------------
// KeepRules

/// Shrinker configuration keeping the generated adapters reachable by name.
pub(crate) struct KeepRules<'a> {
    pub table: &'a RegistrationTable,
    pub symbols: &'a ShrinkerSymbols,
    pub keep_enum_classes: bool,
}

impl KeepRules<'_> {
    /// `META-INF/proguard/jc-companion-r<hash>.pro`, hashed from the first
    /// target. `None` for an empty table.
    pub fn relative_path(&self) -> Option<PathBuf> {
        let first = self.table.registrations().first()?;
        let hash = hash_string(&first.target.canonical_name());
        Some(PathBuf::from(KEEP_RULES_DIR).join(format!("jc-companion-r{hash}.pro")))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        let s = self.symbols;

        writeln!(out, "-keepnames class {}", s.default_constructor_marker)?;
        writeln!(out)?;
        writeln!(out, "-keep,allowobfuscation @{} class *", s.marker_annotation)?;
        writeln!(out)?;
        write_keep_members(out, "-keep,allowobfuscation class", &s.type_ref_class)?;
        writeln!(out, "-keep,allowobfuscation class * extends {}", s.type_ref_class)?;
        writeln!(out)?;
        write_keep_members(out, "-keep class", &s.registry_class)?;
        write_keep_members(out, "-keep class * implements", &s.registry_class)?;
        writeln!(out, "-keepattributes Signature")?;
        writeln!(out)?;

        if self.keep_enum_classes {
            writeln!(out, "-keepclassmembers enum * {{")?;
            writeln!(out, "    public static **[] values();")?;
            writeln!(out, "    public static ** valueOf(java.lang.String);")?;
            writeln!(out, "    public static <fields>;")?;
            writeln!(out, "}}")?;
            writeln!(out)?;
        }

        for registration in self.table.registrations() {
            let target = registration.target.reflection_name();
            let adapter = registration.adapter.reflection_name();

            writeln!(out, "-if class {target}")?;
            writeln!(out, "-keepclassmembers class {adapter} {{")?;
            if registration.has_type_parameters {
                writeln!(out, "    public <init>({}, {}[]);", s.engine_class, s.type_class)?;
            } else {
                writeln!(out, "    public <init>({});", s.engine_class)?;
            }
            writeln!(out, "}}")?;
            writeln!(out)?;
            writeln!(out, "-keepclassmembers class {target} {{")?;
            writeln!(out, "    public synthetic <init>(...);")?;
            writeln!(out, "}}")?;
            writeln!(out)?;
        }
        Ok(())
    }
}

fn write_keep_members(out: &mut impl Write, rule: &str, class: &str) -> fmt::Result {
    writeln!(out, "{rule} {class} {{")?;
    writeln!(out, "    <fields>;")?;
    writeln!(out, "    <methods>;")?;
    writeln!(out, "}}")?;
    writeln!(out)
}
