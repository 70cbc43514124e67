//! Enrichment run statistics.

use serde::Serialize;

/// Statistics from one enrichment run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct EnrichmentReport {
    /// Components examined (including `metadata.component` when present)
    pub components_examined: usize,
    /// Components that received a new `supplier` field
    pub components_updated: usize,
    /// Components skipped because they already carry a supplier
    pub components_skipped: usize,
    /// Outbound registry requests issued
    pub registry_requests: usize,
    /// Lookups answered from the per-run cache
    pub cache_hits: usize,
    /// Advisory notes from failed registry lookups (never fatal)
    pub notes: Vec<String>,
}

impl EnrichmentReport {
    /// Log a summary of the run.
    pub fn log_summary(&self) {
        tracing::info!(
            "Supplier enrichment complete: {} components updated ({} examined, \
             {} already supplied, {} registry requests, {} cache hits)",
            self.components_updated,
            self.components_examined,
            self.components_skipped,
            self.registry_requests,
            self.cache_hits,
        );

        for note in &self.notes {
            tracing::warn!("registry lookup: {note}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let report = EnrichmentReport::default();
        assert_eq!(report.components_updated, 0);
        assert!(report.notes.is_empty());
    }
}
