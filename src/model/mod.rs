//! Data model for supplier enrichment.
//!
//! The SBOM itself is handled as a loosely-typed `serde_json::Value` tree so
//! unknown fields round-trip untouched; only the supplier record written into
//! that tree is strongly typed.

mod ecosystem;
mod supplier;

pub use ecosystem::Ecosystem;
pub use supplier::{Supplier, SupplierContact};
