// Public modules
pub mod browser;
pub mod category;
pub mod counting;
pub mod error;
pub mod export;
pub mod filtering;
pub mod grouping;
pub mod io;
pub mod models;
pub mod schema;
pub mod schema_validation;
pub mod sorting;
pub mod splitting;
pub mod validation;

// Re-export commonly used types for convenience
pub use browser::Browser;
pub use category::{derive_anomaly_type, CANONICAL_LABELS};
pub use counting::{all_facet_values, facet_counts, facet_options, FacetOption};
pub use error::CatalogError;
pub use export::{
    to_bibtex, to_csv, BIBTEX_FILENAME, BIBTEX_MIME, CSV_FILENAME, CSV_MIME,
};
pub use filtering::{apply_filters, has_filters, matches, parse_facet_filters, parse_year};
pub use grouping::{facet_distribution, year_series, UNSPECIFIED};
pub use io::{load_catalog, parse_catalog, save_export};
pub use models::{Catalog, FacetDefinition, FilterState, Record};
pub use schema::{build_columns, build_facets, Schema, ANOMALY_TYPE_KEY};
pub use schema_validation::validate_against_schema;
pub use sorting::{collation_key, compare_labels};
pub use splitting::split_values;
pub use validation::validate_catalog;
