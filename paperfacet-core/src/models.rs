use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashMap};

use crate::category::derive_anomaly_type;
use crate::schema::{build_columns, build_facets, Schema, ANOMALY_TYPE_KEY};

pub const TITLE: &str = "Title";
pub const AUTHORS: &str = "Authors";
pub const YEAR: &str = "Year";
pub const PILLAR: &str = "Pillar";
pub const SOURCE_OF_ANOMALY: &str = "SourceOfAnomaly";
pub const DOI_OR_URL: &str = "DOI_or_URL";
pub const BIBTEX: &str = "BibTeX";
pub const BIB_KEY: &str = "BibKey";

/// The startup document exactly as it is stored on disk
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub papers: Vec<Map<String, Value>>,
    #[serde(default)]
    pub pillars: Vec<String>,
    #[serde(default)]
    pub facets: Vec<FacetDefinition>,
}

/// A browsable multi-valued field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetDefinition {
    pub key: String,
    pub label: String,
}

impl FacetDefinition {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// One paper. Columns the engine knows about are typed fields, everything
/// else is kept in `extra` for search and data-driven facets.
///
/// Absent and empty columns are indistinguishable: both read back as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    pub authors: String,
    pub year: String,
    pub pillar: String,
    pub source_of_anomaly: String,
    pub doi_or_url: String,
    pub bibtex: String,
    pub bib_key: String,
    pub extra: HashMap<String, String>,
    anomaly_type: String,
}

impl Record {
    /// Build a record from column/value pairs and derive its `AnomalyType`.
    /// A literal `AnomalyType` column is ignored; the derived value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Record::default();
        for (column, value) in pairs {
            record.set(column.into(), value.into());
        }
        record.anomaly_type = derive_anomaly_type(&record);
        record
    }

    /// Build a record from one JSON object of the `papers` array
    pub fn from_json(object: &Map<String, Value>) -> Self {
        Self::from_pairs(
            object
                .iter()
                .map(|(column, value)| (column.clone(), scalar_to_string(value))),
        )
    }

    fn set(&mut self, column: String, value: String) {
        match column.as_str() {
            TITLE => self.title = value,
            AUTHORS => self.authors = value,
            YEAR => self.year = value,
            PILLAR => self.pillar = value,
            SOURCE_OF_ANOMALY => self.source_of_anomaly = value,
            DOI_OR_URL => self.doi_or_url = value,
            BIBTEX => self.bibtex = value,
            BIB_KEY => self.bib_key = value,
            ANOMALY_TYPE_KEY => {}
            _ => {
                self.extra.insert(column, value);
            }
        }
    }

    /// Value of any column, `""` when the record does not carry it
    pub fn get(&self, column: &str) -> &str {
        match column {
            TITLE => &self.title,
            AUTHORS => &self.authors,
            YEAR => &self.year,
            PILLAR => &self.pillar,
            SOURCE_OF_ANOMALY => &self.source_of_anomaly,
            DOI_OR_URL => &self.doi_or_url,
            BIBTEX => &self.bibtex,
            BIB_KEY => &self.bib_key,
            ANOMALY_TYPE_KEY => &self.anomaly_type,
            other => self.extra.get(other).map(String::as_str).unwrap_or(""),
        }
    }

    /// Derived coarse category, empty when uncategorized
    pub fn anomaly_type(&self) -> &str {
        &self.anomaly_type
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// The loaded dataset: records in source order plus the session schema
#[derive(Debug, Clone)]
pub struct Catalog {
    pub papers: Vec<Record>,
    pub pillars: Vec<String>,
    pub schema: Schema,
}

impl Catalog {
    pub fn from_document(document: CatalogDocument) -> Self {
        let first_keys: Vec<String> = document
            .papers
            .first()
            .map(|paper| paper.keys().cloned().collect())
            .unwrap_or_default();

        let schema = Schema {
            columns: build_columns(&first_keys),
            facets: build_facets(document.facets),
        };

        let papers = document.papers.iter().map(Record::from_json).collect();

        Self {
            papers,
            pillars: document.pillars,
            schema,
        }
    }
}

/// The user's current query
///
/// An empty (or missing) selection set for a facet means that facet does
/// not constrain anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub text: String,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub facets: HashMap<String, BTreeSet<String>>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected values for a facet, `None` when the facet is unconstrained
    pub fn selection(&self, facet_key: &str) -> Option<&BTreeSet<String>> {
        self.facets.get(facet_key).filter(|values| !values.is_empty())
    }

    pub fn is_selected(&self, facet_key: &str, value: &str) -> bool {
        self.facets
            .get(facet_key)
            .is_some_and(|values| values.contains(value))
    }

    /// Flip one value in a facet's selection. Returns whether it is now selected.
    pub fn toggle(&mut self, facet_key: &str, value: &str) -> bool {
        let values = self.facets.entry(facet_key.to_string()).or_default();
        if values.remove(value) {
            if values.is_empty() {
                self.facets.remove(facet_key);
            }
            false
        } else {
            values.insert(value.to_string());
            true
        }
    }

    pub fn clear_facet(&mut self, facet_key: &str) {
        self.facets.remove(facet_key);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
