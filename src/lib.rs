//! **CycloneDX SBOM supplier enrichment.**
//!
//! `sbom-enrich` fills in supplier (publisher) metadata for SBOM components
//! that lack it, deriving the data from public package registries instead of
//! hard-coding it. PyPI components get a real registry lookup; npm and Maven
//! components get a static record naming their public registry; everything
//! else is left alone.
//!
//! The SBOM is treated as a loosely-typed JSON tree: no schema validation,
//! and every field outside the touched `supplier` fields round-trips
//! byte-for-byte (including field order and non-ASCII content).
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use sbom_enrich::{enrich_sbom, EnrichOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = enrich_sbom(
//!         Path::new("sbom.json"),
//!         Path::new("enriched.json"),
//!         &EnrichOptions::default(),
//!     )?;
//!     println!("Components updated: {}", report.components_updated);
//!     Ok(())
//! }
//! ```
//!
//! Tests (and embedders with their own metadata source) can swap the live
//! client for anything implementing [`registry::PackageRegistry`] via
//! [`enrich_sbom_with`].

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod enrich;
pub mod error;
pub mod model;
pub mod registry;
pub mod resolve;

// Re-export main types for convenience
pub use enrich::{enrich_document, enrich_sbom, enrich_sbom_with, EnrichOptions, EnrichmentReport};
pub use error::{EnrichError, Result};
pub use model::{Ecosystem, Supplier, SupplierContact};
pub use registry::{PackageRegistry, PyPiClient, PyPiClientConfig, RegistryStats};
pub use resolve::resolve_supplier;
