use paperfacet_core::{load_catalog, Browser, CatalogError};
use std::path::PathBuf;
use tracing::warn;

/// Application state management
/// Owns the browse session and the presentation choices made on top of it
#[derive(Debug)]
pub struct AppState {
    /// Currently loaded catalog and its filters
    pub browser: Option<Browser>,
    /// Path the catalog was loaded from
    pub current_file: Option<PathBuf>,
    /// Columns shown per paper; exports ignore this
    pub visible_columns: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            browser: None,
            current_file: None,
            visible_columns: Vec::new(),
        }
    }

    /// Load the catalog file and start a fresh session with every column visible
    pub fn load_from_file(&mut self, path: PathBuf) -> Result<(), CatalogError> {
        let catalog = load_catalog(&path)?;
        let browser = Browser::new(catalog);

        self.visible_columns = browser.columns().to_vec();
        self.browser = Some(browser);
        self.current_file = Some(path);

        Ok(())
    }

    /// Restrict the displayed columns, keeping the requested order
    /// Unknown names are skipped; an empty request shows everything.
    pub fn set_visible_columns(&mut self, requested: &[String]) {
        let Some(ref browser) = self.browser else {
            return;
        };
        let all = browser.columns();

        if requested.is_empty() {
            self.visible_columns = all.to_vec();
            return;
        }

        let mut visible = Vec::new();
        for column in requested {
            let column = column.trim();
            if all.iter().any(|known| known == column) {
                if !visible.iter().any(|seen: &String| seen == column) {
                    visible.push(column.to_string());
                }
            } else {
                warn!(column, "Unknown column ignored");
            }
        }

        self.visible_columns = if visible.is_empty() {
            all.to_vec()
        } else {
            visible
        };
    }

    /// Report heading with the catalog file name
    pub fn get_title(&self) -> String {
        let file_name = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("No catalog");

        format!("Paper Catalog - {}", file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn loaded_state() -> (AppState, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"papers": [{"Title": "A", "Year": "2020", "Pillar": "X"}], "facets": []}"#,
        )
        .unwrap();

        let mut state = AppState::new();
        state.load_from_file(file.path().to_path_buf()).unwrap();
        (state, file)
    }

    #[test]
    fn test_load_shows_all_columns() {
        let (state, _file) = loaded_state();
        assert_eq!(state.visible_columns, vec!["Title", "Year", "Pillar", "AnomalyType"]);
        assert!(state.get_title().starts_with("Paper Catalog - "));
    }

    #[test]
    fn test_visible_columns_filtering() {
        let (mut state, _file) = loaded_state();

        state.set_visible_columns(&["Year".to_string(), " Title ".to_string(), "Nope".to_string()]);
        assert_eq!(state.visible_columns, vec!["Year", "Title"]);

        state.set_visible_columns(&["Nope".to_string()]);
        assert_eq!(state.visible_columns.len(), 4);

        state.set_visible_columns(&[]);
        assert_eq!(state.visible_columns.len(), 4);
    }

    #[test]
    fn test_failed_load_keeps_empty_state() {
        let mut state = AppState::new();
        let result = state.load_from_file(PathBuf::from("/definitely/not/here.json"));
        assert!(result.is_err());
        assert!(state.browser.is_none());
        assert_eq!(state.get_title(), "Paper Catalog - No catalog");
    }
}
