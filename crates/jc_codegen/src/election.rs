//! Election of the package the generated registry lives in.

use jc_utils::hash::IndexMap;

use crate::hash::hash_string;

/// Base package used when no target has a package.
pub const FALLBACK_PACKAGE: &str = "default";
/// Prefix of the derived registry package.
pub const REGISTRY_PACKAGE_PREFIX: &str = "jc.companion";
/// Last segment of every registry package.
pub const GENERATED_PACKAGE_SUFFIX: &str = "generated";

/// Number of leading package segments compared by the election.
const PREFIX_SEGMENTS: usize = 3;

/// Elect one package out of the target packages, given in discovery order.
///
/// Empty packages are ignored. Packages are grouped by their first three
/// segments and the least frequent group wins, the first discovered one on
/// ties. If that group has a single member, that package is elected.
/// Otherwise the shortest package wins, the first discovered one on ties.
/// Returns `None` when no package remains.
///
/// ```
/// use jc_codegen::election::elect_package;
///
/// let elected = elect_package(["com.app.one", "com.app.one", "com.app.two"]);
/// assert_eq!(elected, Some("com.app.two"));
///
/// let elected = elect_package(["com.app.one.model", "com.app.one", "com.app.one.net"]);
/// assert_eq!(elected, Some("com.app.one"));
/// ```
pub fn elect_package<'a>(packages: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let packages: Vec<&str> = packages.into_iter().filter(|p| !p.is_empty()).collect();

    let mut prefix_count: IndexMap<String, usize> = IndexMap::default();
    for package in &packages {
        *prefix_count.entry(prefix_of(package)).or_default() += 1;
    }

    // `min_by_key` keeps the first of equal minimums.
    let (rarest, count) = prefix_count.iter().min_by_key(|(_, count)| **count)?;
    if *count == 1 {
        return packages.iter().copied().find(|package| prefix_of(package) == *rarest);
    }

    packages.iter().copied().min_by_key(|package| package.len())
}

/// Returns the package of the generated registry.
///
/// With an override it is `<override>.generated`, otherwise
/// `jc.companion.r<hash of the elected package>.generated`.
///
/// ```
/// use jc_codegen::election::registry_package;
///
/// assert_eq!(registry_package(Some("com.app"), None), "jc.companion.rf9317e8b341a5094.generated");
/// assert_eq!(registry_package(None, None), "jc.companion.r37a8eec1ce19687d.generated");
/// assert_eq!(registry_package(Some("com.app"), Some("org.custom")), "org.custom.generated");
/// ```
pub fn registry_package(elected: Option<&str>, override_package: Option<&str>) -> String {
    match override_package {
        Some(base) => format!("{base}.{GENERATED_PACKAGE_SUFFIX}"),
        None => {
            let hash = hash_string(elected.unwrap_or(FALLBACK_PACKAGE));
            format!("{REGISTRY_PACKAGE_PREFIX}.r{hash}.{GENERATED_PACKAGE_SUFFIX}")
        }
    }
}

fn prefix_of(package: &str) -> String {
    package
        .split('.')
        .take(PREFIX_SEGMENTS)
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::{elect_package, registry_package};

    #[test]
    fn odd_prefix_wins() {
        let packages = ["com.app.one", "com.app.one", "com.app.two"];
        assert_eq!(elect_package(packages), Some("com.app.two"));

        // The first package carrying the odd prefix.
        let packages = ["com.app.core", "com.app.core.model", "com.feature.x.deep", "com.app.core.net"];
        assert_eq!(elect_package(packages), Some("com.feature.x.deep"));
    }

    #[test]
    fn shared_prefix_elects_shortest() {
        let packages = ["com.app.one.model", "com.app.one.net", "com.app.one"];
        assert_eq!(elect_package(packages), Some("com.app.one"));
    }

    #[test]
    fn ties_keep_discovery_order() {
        // Every prefix is unique, the first discovered one wins.
        assert_eq!(elect_package(["demo.model", "demo.net"]), Some("demo.model"));
        assert_eq!(elect_package(["org.zeta.b", "org.beta.a", "org.alpha"]), Some("org.zeta.b"));

        // Equally frequent prefixes, the first discovered one wins.
        let packages = ["com.app.b", "com.app.b", "com.app.a", "com.app.a"];
        assert_eq!(elect_package(packages), Some("com.app.b"));

        // Shortest package, the first discovered one on equal length.
        let packages = ["com.app.one.bb", "com.app.one.aa", "com.app.one.cc"];
        assert_eq!(elect_package(packages), Some("com.app.one.bb"));
    }

    #[test]
    fn empty_packages_are_ignored() {
        assert_eq!(elect_package(["", ""]), None);
        assert_eq!(elect_package(["", "com.app"]), Some("com.app"));
        assert_eq!(
            registry_package(elect_package([""]), None),
            "jc.companion.r37a8eec1ce19687d.generated"
        );
    }

    #[test]
    fn derived_package() {
        assert_eq!(
            registry_package(Some("com.app.two"), None),
            "jc.companion.rdaf38ee7e8ee56f8.generated"
        );
    }
}
