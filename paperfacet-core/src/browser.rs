use crate::counting::{self, FacetOption};
use crate::export;
use crate::filtering::{apply_filters, parse_year};
use crate::grouping;
use crate::models::{Catalog, FacetDefinition, FilterState, Record, PILLAR};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Faceted browse session over one loaded catalog
///
/// Owns the dataset and the only mutable state, the current filters.
/// Every query recomputes from scratch against the current filters.
#[derive(Debug, Clone)]
pub struct Browser {
    catalog: Catalog,
    filters: FilterState,
}

impl Browser {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filters: FilterState::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn facets(&self) -> &[FacetDefinition] {
        &self.catalog.schema.facets
    }

    pub fn columns(&self) -> &[String] {
        &self.catalog.schema.columns
    }

    /// Records matching every active filter, in source order
    pub fn result_set(&self) -> Vec<&Record> {
        let results = apply_filters(&self.catalog.papers, &self.filters, &self.catalog.schema);
        debug!(
            matched = results.len(),
            total = self.catalog.papers.len(),
            "Recomputed result set"
        );
        results
    }

    /// Live option counts for one facet, ignoring that facet's own selection
    pub fn facet_counts(&self, facet_key: &str) -> HashMap<String, usize> {
        counting::facet_counts(
            &self.catalog.papers,
            &self.filters,
            &self.catalog.schema,
            facet_key,
        )
    }

    /// Every value the facet takes in the unfiltered dataset
    pub fn all_facet_values(&self, facet_key: &str) -> Vec<String> {
        let known: &[String] = if facet_key == PILLAR {
            &self.catalog.pillars
        } else {
            &[]
        };
        counting::all_facet_values(&self.catalog.papers, facet_key, known)
    }

    pub fn facet_options(&self, facet_key: &str) -> Vec<FacetOption> {
        counting::facet_options(
            &self.all_facet_values(facet_key),
            &self.facet_counts(facet_key),
            &self.filters,
            facet_key,
        )
    }

    pub fn year_series(&self) -> BTreeMap<i32, usize> {
        grouping::year_series(self.result_set())
    }

    pub fn facet_distribution(&self, facet_key: &str) -> Vec<(String, usize)> {
        grouping::facet_distribution(self.result_set(), facet_key)
    }

    pub fn export_csv(&self) -> String {
        export::to_csv(self.result_set(), self.columns())
    }

    pub fn export_bibtex(&self) -> String {
        export::to_bibtex(self.result_set())
    }

    /// "Showing N / M papers"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} / {} papers",
            self.result_set().len(),
            self.catalog.papers.len()
        )
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filters.text = text.into();
        debug!(text = %self.filters.text, "Filter text changed");
    }

    pub fn set_year_min(&mut self, year: Option<i32>) {
        self.filters.year_min = year;
        debug!(?year, "Minimum year changed");
    }

    pub fn set_year_max(&mut self, year: Option<i32>) {
        self.filters.year_max = year;
        debug!(?year, "Maximum year changed");
    }

    /// Set the lower bound from raw user input; anything that is not a number clears it
    pub fn set_year_min_text(&mut self, input: &str) {
        self.set_year_min(parse_year(input));
    }

    /// Set the upper bound from raw user input; anything that is not a number clears it
    pub fn set_year_max_text(&mut self, input: &str) {
        self.set_year_max(parse_year(input));
    }

    /// Flip one facet value. Returns whether it is now selected.
    pub fn toggle_facet_value(&mut self, facet_key: &str, value: &str) -> bool {
        let selected = self.filters.toggle(facet_key, value);
        debug!(facet = facet_key, value, selected, "Facet value toggled");
        selected
    }

    pub fn clear_facet(&mut self, facet_key: &str) {
        self.filters.clear_facet(facet_key);
        debug!(facet = facet_key, "Facet cleared");
    }

    pub fn reset_all(&mut self) {
        self.filters.reset();
        debug!("Filters reset");
    }
}
