//! Package registry clients and metadata extraction.

mod extract;
mod pypi;
mod traits;

pub use extract::extract_supplier;
pub use pypi::{PyPiClient, PyPiClientConfig};
pub use traits::{PackageRegistry, RegistryStats};
