//! Registry abstraction.

use serde_json::Value;

/// Counters for registry activity during one enrichment run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryStats {
    /// Outbound HTTP requests actually issued
    pub requests: usize,
    /// Lookups answered from the in-memory cache
    pub cache_hits: usize,
}

/// A package registry queried by name.
///
/// The enrichment engine only depends on this trait, so tests can substitute
/// a stub and never touch the network.
pub trait PackageRegistry {
    /// Return the registry metadata document for a package, or `None` if the
    /// package is unknown, the name is unsafe, or the lookup failed.
    ///
    /// Implementations must cache both hits and misses so a given name is
    /// looked up at most once per run.
    fn get_package(&mut self, name: &str) -> Option<&Value>;

    /// Registry activity counters.
    fn stats(&self) -> RegistryStats {
        RegistryStats::default()
    }

    /// Drain advisory notes accumulated during lookups (failed requests,
    /// unparseable responses). Never fatal.
    fn take_notes(&mut self) -> Vec<String> {
        Vec::new()
    }
}
