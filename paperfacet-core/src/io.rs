use crate::error::CatalogError;
use crate::models::{Catalog, CatalogDocument};
use crate::schema_validation::{document_schema, validate_against_schema};
use crate::validation::validate_catalog;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load the catalog from a JSON file
/// The file is read fresh on every call; nothing is cached.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&contents)?;
    info!(
        path = %path.display(),
        papers = catalog.papers.len(),
        facets = catalog.schema.facets.len(),
        "Loaded catalog"
    );
    Ok(catalog)
}

/// Parse and validate a catalog document held in memory
pub fn parse_catalog(contents: &str) -> Result<Catalog, CatalogError> {
    let value: Value = serde_json::from_str(contents)?;
    validate_against_schema(&document_schema(), &value).map_err(CatalogError::Schema)?;

    let document: CatalogDocument = serde_json::from_value(value)?;
    let catalog = Catalog::from_document(document);
    debug!(columns = ?catalog.schema.columns, "Resolved column list");

    if let Err(warnings) = validate_catalog(&catalog) {
        for warning in &warnings {
            warn!(%warning, "Catalog lint");
        }
    }

    Ok(catalog)
}

/// Write an export artifact to disk
pub fn save_export<P: AsRef<Path>>(contents: &str, path: P) -> Result<(), CatalogError> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|source| CatalogError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "Wrote export");
    Ok(())
}
