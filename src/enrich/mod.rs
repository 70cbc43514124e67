//! SBOM supplier enrichment engine.

mod engine;
mod report;

pub use engine::{enrich_document, enrich_sbom, enrich_sbom_with, EnrichOptions};
pub use report::EnrichmentReport;
