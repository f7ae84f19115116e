use anyhow::{Context, Result};
use paperfacet_core::{save_export, Browser, BIBTEX_FILENAME, CSV_FILENAME};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Export orchestration
/// Writes the current result set to disk in the supported formats
pub struct FileOperations<'a> {
    browser: &'a Browser,
}

impl<'a> FileOperations<'a> {
    pub fn new(browser: &'a Browser) -> Self {
        Self { browser }
    }

    /// Export the filtered papers as CSV over every column
    pub fn export_csv(&self, target: &Path) -> Result<PathBuf> {
        let path = resolve_target(target, CSV_FILENAME);
        let contents = self.browser.export_csv();
        debug!(path = %path.display(), bytes = contents.len(), "Writing CSV export");

        save_export(&contents, &path)
            .with_context(|| format!("Failed to export CSV to {}", path.display()))?;
        Ok(path)
    }

    /// Export the filtered papers as a BibTeX bibliography
    pub fn export_bib(&self, target: &Path) -> Result<PathBuf> {
        let path = resolve_target(target, BIBTEX_FILENAME);
        let contents = self.browser.export_bibtex();
        debug!(path = %path.display(), bytes = contents.len(), "Writing BibTeX export");

        save_export(&contents, &path)
            .with_context(|| format!("Failed to export BibTeX to {}", path.display()))?;
        Ok(path)
    }
}

/// A directory target gets the default download file name appended
fn resolve_target(target: &Path, default_name: &str) -> PathBuf {
    if target.is_dir() {
        target.join(default_name)
    } else {
        target.to_path_buf()
    }
}
