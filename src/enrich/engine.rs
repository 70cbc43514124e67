//! The enrichment engine: load, walk, resolve, persist.

use super::report::EnrichmentReport;
use crate::error::{EnrichError, Result};
use crate::registry::{PackageRegistry, PyPiClient, PyPiClientConfig};
use crate::resolve::resolve_supplier;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Options for one enrichment run.
#[derive(Debug, Clone)]
pub struct EnrichOptions {
    /// Pause before each outbound registry request
    pub request_delay: Duration,
    /// Per-request network timeout
    pub timeout: Duration,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        let config = PyPiClientConfig::default();
        Self {
            request_delay: config.request_delay,
            timeout: config.timeout,
        }
    }
}

/// Try to add a `supplier` field to a single component object.
///
/// Components that already carry a supplier are never touched. Returns true
/// when a field was added.
fn enrich_component<R: PackageRegistry>(
    component: &mut Map<String, Value>,
    registry: &mut R,
) -> bool {
    if component.contains_key("supplier") {
        return false;
    }

    let name = component.get("name").and_then(Value::as_str).unwrap_or("");
    let purl = component.get("purl").and_then(Value::as_str).unwrap_or("");

    match resolve_supplier(purl, name, registry) {
        Some(supplier) => match serde_json::to_value(&supplier) {
            Ok(value) => {
                component.insert("supplier".to_string(), value);
                true
            }
            // Supplier holds only strings; this arm is unreachable in practice.
            Err(e) => {
                tracing::debug!("could not serialize supplier for {name}: {e}");
                false
            }
        },
        None => {
            tracing::debug!("no supplier derived for component '{name}'");
            false
        }
    }
}

/// Enrich an already-loaded SBOM document in place.
///
/// Walks the top-level `components` array and then `metadata.component`,
/// which is a component in all but location. Non-object entries are left
/// alone.
pub fn enrich_document<R: PackageRegistry>(sbom: &mut Value, registry: &mut R) -> EnrichmentReport {
    let mut report = EnrichmentReport::default();

    if let Some(components) = sbom.get_mut("components").and_then(Value::as_array_mut) {
        for entry in components {
            if let Some(component) = entry.as_object_mut() {
                tally(&mut report, component, registry);
            }
        }
    }

    if let Some(meta_comp) = sbom
        .get_mut("metadata")
        .and_then(|m| m.get_mut("component"))
        .and_then(Value::as_object_mut)
    {
        tally(&mut report, meta_comp, registry);
    }

    let stats = registry.stats();
    report.registry_requests = stats.requests;
    report.cache_hits = stats.cache_hits;
    report.notes = registry.take_notes();
    report
}

fn tally<R: PackageRegistry>(
    report: &mut EnrichmentReport,
    component: &mut Map<String, Value>,
    registry: &mut R,
) {
    report.components_examined += 1;
    if component.contains_key("supplier") {
        report.components_skipped += 1;
    } else if enrich_component(component, registry) {
        report.components_updated += 1;
    }
}

/// Enrich the SBOM at `input` and write the result to `output`, using the
/// provided registry.
///
/// The input is read fully before anything is written, so `output` may equal
/// `input` for an in-place update. A missing or unparseable input is fatal
/// and no output is written.
pub fn enrich_sbom_with<R: PackageRegistry>(
    input: &Path,
    output: &Path,
    registry: &mut R,
) -> Result<EnrichmentReport> {
    let content = fs::read_to_string(input).map_err(|e| EnrichError::io(input, e))?;
    let mut sbom: Value =
        serde_json::from_str(&content).map_err(|e| EnrichError::parse(input, e))?;

    let report = enrich_document(&mut sbom, registry);

    // Pretty, 2-space indented output; serde_json leaves non-ASCII unescaped.
    let mut rendered = serde_json::to_string_pretty(&sbom)
        .map_err(|e| EnrichError::write(output, std::io::Error::other(e)))?;
    rendered.push('\n');
    fs::write(output, rendered).map_err(|e| EnrichError::write(output, e))?;

    Ok(report)
}

/// Enrich the SBOM at `input` against the live PyPI registry.
///
/// One client (and thus one lookup cache) serves the whole run.
pub fn enrich_sbom(input: &Path, output: &Path, options: &EnrichOptions) -> Result<EnrichmentReport> {
    let mut registry = PyPiClient::new(PyPiClientConfig {
        request_delay: options.request_delay,
        timeout: options.timeout,
        ..PyPiClientConfig::default()
    });
    enrich_sbom_with(input, output, &mut registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Default)]
    struct StubRegistry {
        packages: HashMap<String, Value>,
    }

    impl PackageRegistry for StubRegistry {
        fn get_package(&mut self, name: &str) -> Option<&Value> {
            self.packages.get(name)
        }
    }

    fn alice_registry() -> StubRegistry {
        let mut registry = StubRegistry::default();
        registry.packages.insert(
            "requests".to_string(),
            json!({"info": {
                "maintainer": "Alice",
                "maintainer_email": "alice@example.com",
            }}),
        );
        registry
    }

    #[test]
    fn test_enrich_document_counts() {
        let mut sbom = json!({
            "components": [
                {"name": "requests", "purl": "pkg:pypi/requests@2.31.0"},
                {"name": "ghost", "purl": "pkg:pypi/ghost@1.0"},
                {"name": "supplied", "purl": "pkg:pypi/requests@2.31.0",
                 "supplier": {"name": "Existing"}},
                "not an object",
            ]
        });
        let mut registry = alice_registry();
        let report = enrich_document(&mut sbom, &mut registry);

        assert_eq!(report.components_examined, 3);
        assert_eq!(report.components_updated, 1);
        assert_eq!(report.components_skipped, 1);
    }

    #[test]
    fn test_existing_supplier_untouched() {
        let original = json!({"name": "Existing", "custom": [1, 2, 3]});
        let mut sbom = json!({
            "components": [
                {"name": "requests", "purl": "pkg:pypi/requests", "supplier": original.clone()},
            ]
        });
        let mut registry = alice_registry();
        enrich_document(&mut sbom, &mut registry);

        assert_eq!(sbom["components"][0]["supplier"], original);
    }

    #[test]
    fn test_metadata_component_enriched() {
        let mut sbom = json!({
            "metadata": {"component": {"name": "requests", "purl": "pkg:pypi/requests"}},
            "components": []
        });
        let mut registry = alice_registry();
        let report = enrich_document(&mut sbom, &mut registry);

        assert_eq!(report.components_updated, 1);
        assert_eq!(
            sbom["metadata"]["component"]["supplier"]["name"],
            json!("Alice")
        );
    }

    #[test]
    fn test_document_without_components() {
        let mut sbom = json!({"bomFormat": "CycloneDX"});
        let mut registry = StubRegistry::default();
        let report = enrich_document(&mut sbom, &mut registry);
        assert_eq!(report.components_examined, 0);
        assert_eq!(sbom, json!({"bomFormat": "CycloneDX"}));
    }

    #[test]
    fn test_default_options_match_client_defaults() {
        let options = EnrichOptions::default();
        assert_eq!(options.request_delay, Duration::from_millis(100));
        assert_eq!(options.timeout, Duration::from_secs(10));
    }
}
