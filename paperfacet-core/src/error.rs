//! Error types for loading the catalog and writing exports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the catalog document or writing an export.
///
/// Everything except `Export` is a load failure and ends the session.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document could not be read
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not valid JSON, or not the expected shape
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document failed JSON Schema validation
    #[error("catalog document does not match the expected shape:\n  {}", .0.join("\n  "))]
    Schema(Vec<String>),

    /// An export artifact could not be written
    #[error("failed to write '{}': {source}", path.display())]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CatalogError {
    /// True for the errors that abort loading (everything but `Export`)
    pub fn is_load_failure(&self) -> bool {
        !matches!(self, CatalogError::Export { .. })
    }
}
