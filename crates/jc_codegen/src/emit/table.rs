use std::fmt::Write;
use std::path::PathBuf;

use jc_registry::ClassName;
use proc_macro2::Literal;
use quote::ToTokens;

use crate::registration::RegistrationTable;

/// Header of every generated source file.
pub const GENERATED_HEADER: &str = "\
// This file is auto generated by jc-codegen.
// **DO NOT EDIT THIS FILE MANUALLY**
";

/// The generated registry type: a unit struct implementing `AdapterRegistry`
/// whose table lists the registrations in discovery order.
pub(crate) struct TableSource<'a> {
    pub table: &'a RegistrationTable,
    /// Package and name of the generated type.
    pub registry: &'a ClassName,
    pub restricted_access: bool,
    pub registry_crate: &'a syn::Path,
}

impl TableSource<'_> {
    /// `<package as directories>/<type name>.rs`
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.registry.package().split('.').collect();
        path.push(format!("{}.rs", self.registry.simple_name()));
        path
    }

    pub fn render(&self) -> String {
        let krate = path_string(self.registry_crate);
        let name = self.registry.simple_name();
        let visibility = if self.restricted_access { "pub(crate)" } else { "pub" };

        let mut out = String::from(GENERATED_HEADER);
        // Writing into a `String` cannot fail.
        let _ = writeln!(out);
        let _ = writeln!(out, "/// Adapter registry of `{}`.", self.registry.package());
        let _ = writeln!(out, "{visibility} struct {name};");
        let _ = writeln!(out);
        let _ = writeln!(out, "impl {krate}::AdapterRegistry for {name} {{");
        let _ = writeln!(out, "    fn adapters(&self) -> {krate}::AdapterTable {{");
        let _ = writeln!(out, "        {krate}::AdapterTable::from_entries([");
        for registration in self.table.registrations() {
            let _ = writeln!(out, "            (");
            let _ = writeln!(out, "                {},", class_expr(&krate, &registration.target));
            let _ = writeln!(out, "                {},", class_expr(&krate, &registration.adapter));
            let _ = writeln!(out, "            ),");
        }
        let _ = writeln!(out, "        ])");
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out, "}}");
        out
    }
}

fn class_expr(krate: &str, class: &ClassName) -> String {
    let names = class
        .simple_names()
        .iter()
        .map(|name| Literal::string(name).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{krate}::ClassName::new({}, [{names}])",
        Literal::string(class.package())
    )
}

fn path_string(path: &syn::Path) -> String {
    path.to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}
