//! PyPI JSON API client with in-memory caching.

use super::traits::{PackageRegistry, RegistryStats};
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Duration;

/// Conservative safe-character pattern for package names. Anything outside it
/// is never interpolated into a request URL.
static SAFE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("static regex"));

/// PyPI client configuration.
#[derive(Debug, Clone)]
pub struct PyPiClientConfig {
    /// Base URL for the PyPI JSON API
    pub base_url: String,
    /// Pause before each outbound request (rate-limit courtesy)
    pub request_delay: Duration,
    /// Per-request network timeout
    pub timeout: Duration,
}

impl Default for PyPiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pypi.org/pypi".to_string(),
            request_delay: Duration::from_millis(100),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Blocking PyPI JSON API client.
///
/// The cache maps package name to `Some(metadata)` or `None` (the absent
/// marker: "looked up, nothing usable"), so repeated references to the same
/// name - including repeats of failures - never re-query the registry. The
/// cache lives for the client, which lives for one enrichment run.
pub struct PyPiClient {
    config: PyPiClientConfig,
    cache: HashMap<String, Option<Value>>,
    stats: RegistryStats,
    notes: Vec<String>,
}

impl PyPiClient {
    /// Create a new client with the given configuration.
    #[must_use]
    pub fn new(config: PyPiClientConfig) -> Self {
        Self {
            config,
            cache: HashMap::new(),
            stats: RegistryStats::default(),
            notes: Vec::new(),
        }
    }

    /// Perform the actual lookup for an uncached name.
    ///
    /// Every failure mode collapses to `None`; nothing here aborts the run.
    fn lookup(&mut self, name: &str) -> Option<Value> {
        if !SAFE_NAME.is_match(name) {
            tracing::debug!("skipping PyPI lookup for suspicious name: {name}");
            return None;
        }

        let url = format!("{}/{name}/json", self.config.base_url);
        // The request target must stay on a secure scheme even if the base
        // URL was reconfigured.
        if !url.starts_with("https://") {
            tracing::debug!("refusing non-https registry URL: {url}");
            return None;
        }

        std::thread::sleep(self.config.request_delay);
        self.stats.requests += 1;
        self.fetch(name, &url)
    }

    #[cfg(feature = "enrichment")]
    fn fetch(&mut self, name: &str, url: &str) -> Option<Value> {
        let client = match reqwest::blocking::Client::builder()
            .timeout(self.config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                self.notes.push(format!("{name}: failed to build HTTP client: {e}"));
                return None;
            }
        };

        match client.get(url).send() {
            Ok(resp) if resp.status().is_success() => match resp.json::<Value>() {
                Ok(meta) => Some(meta),
                Err(e) => {
                    tracing::debug!("PyPI response for {name} is not valid JSON: {e}");
                    self.notes.push(format!("{name}: invalid registry response: {e}"));
                    None
                }
            },
            Ok(resp) => {
                tracing::debug!("PyPI returned {} for {name}", resp.status());
                if resp.status() != reqwest::StatusCode::NOT_FOUND {
                    self.notes
                        .push(format!("{name}: PyPI returned {}", resp.status()));
                }
                None
            }
            Err(e) => {
                tracing::debug!("PyPI lookup failed for {name}: {e}");
                self.notes.push(format!("{name}: lookup failed: {e}"));
                None
            }
        }
    }

    /// Stub for non-enrichment builds: every lookup misses.
    #[cfg(not(feature = "enrichment"))]
    fn fetch(&mut self, _name: &str, _url: &str) -> Option<Value> {
        None
    }
}

impl PackageRegistry for PyPiClient {
    fn get_package(&mut self, name: &str) -> Option<&Value> {
        if self.cache.contains_key(name) {
            self.stats.cache_hits += 1;
        } else {
            let fetched = self.lookup(name);
            self.cache.insert(name.to_string(), fetched);
        }
        self.cache.get(name).and_then(Option::as_ref)
    }

    fn stats(&self) -> RegistryStats {
        self.stats
    }

    fn take_notes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notes)
    }
}
