//! Unified error types for sbom-enrich.
//!
//! Only input/output handling of the SBOM document itself is fatal. Registry
//! failures never surface here; they degrade to "no supplier found" inside
//! the registry client.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for enrichment operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EnrichError {
    /// Input SBOM could not be read (missing file, permissions, ...)
    #[error("failed to read SBOM at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input SBOM is not valid JSON
    #[error("invalid JSON in SBOM at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Enriched SBOM could not be written out
    #[error("failed to write enriched SBOM to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenient Result type for enrichment operations
pub type Result<T> = std::result::Result<T, EnrichError>;

impl EnrichError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with path context
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Create a write error with path context
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Process exit code the CLI maps this error to.
    ///
    /// Input-side problems (unreadable or unparseable SBOM) exit with 2,
    /// everything else with 3.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } | Self::Parse { .. } => 2,
            Self::Write { .. } => 3,
        }
    }
}
