//! Supplier resolution by package ecosystem.

use crate::model::{Ecosystem, Supplier};
use crate::registry::{extract_supplier, PackageRegistry};
use regex::Regex;
use std::sync::LazyLock;

/// Trailing version-specifier syntax sometimes found in component names
/// (e.g. `requests>=2.0`).
static VERSION_SPEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[<>=!].*").expect("static regex"));

/// Strip version-specifier syntax from a component name for registry lookup.
fn normalize_name(name: &str) -> String {
    VERSION_SPEC.replace(name, "").trim().to_string()
}

/// Derive supplier info for a component from its PURL.
///
/// PyPI components get a registry lookup; npm and Maven components get a
/// fixed placeholder naming their public registry; everything else resolves
/// to `None`.
pub fn resolve_supplier<R: PackageRegistry>(
    purl: &str,
    component_name: &str,
    registry: &mut R,
) -> Option<Supplier> {
    if purl.is_empty() {
        return None;
    }

    match Ecosystem::detect(purl) {
        Ecosystem::PyPi => {
            let name = normalize_name(component_name);
            let meta = registry.get_package(&name)?;
            extract_supplier(meta)
        }
        Ecosystem::Npm => Some(Supplier::placeholder(
            "npm Registry",
            "https://www.npmjs.com/",
        )),
        Ecosystem::Maven => Some(Supplier::placeholder(
            "Maven Central",
            "https://search.maven.org/",
        )),
        Ecosystem::Unsupported => None,
    }
}
