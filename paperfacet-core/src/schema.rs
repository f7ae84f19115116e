use crate::models::{FacetDefinition, PILLAR};

/// Key of the engine-synthesized facet
pub const ANOMALY_TYPE_KEY: &str = "AnomalyType";
pub const ANOMALY_TYPE_LABEL: &str = "Anomaly type";

/// Session schema: the fixed column list plus every browsable facet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub columns: Vec<String>,
    pub facets: Vec<FacetDefinition>,
}

impl Schema {
    pub fn facet(&self, key: &str) -> Option<&FacetDefinition> {
        self.facets.iter().find(|facet| facet.key == key)
    }

    /// Every column free-text search looks at (the literal citation is skipped)
    pub fn searchable_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|column| *column != crate::models::BIBTEX)
    }
}

/// Build the column list from the first paper's keys
/// The derived `AnomalyType` column is appended unless the dataset has it already.
pub fn build_columns(first_keys: &[String]) -> Vec<String> {
    if first_keys.is_empty() {
        return Vec::new();
    }

    let mut columns = first_keys.to_vec();
    if !columns.iter().any(|column| column == ANOMALY_TYPE_KEY) {
        columns.push(ANOMALY_TYPE_KEY.to_string());
    }
    columns
}

/// Insert the `AnomalyType` facet right after `Pillar`
/// Idempotent: nothing happens if a facet with that key (any casing) exists.
/// Without a `Pillar` facet it goes at the end.
pub fn build_facets(declared: Vec<FacetDefinition>) -> Vec<FacetDefinition> {
    let mut facets = declared;

    if facets
        .iter()
        .any(|facet| facet.key.eq_ignore_ascii_case(ANOMALY_TYPE_KEY))
    {
        return facets;
    }

    let synthesized = FacetDefinition::new(ANOMALY_TYPE_KEY, ANOMALY_TYPE_LABEL);
    match facets.iter().position(|facet| facet.key == PILLAR) {
        Some(index) => facets.insert(index + 1, synthesized),
        None => facets.push(synthesized),
    }
    facets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared() -> Vec<FacetDefinition> {
        vec![
            FacetDefinition::new("Pillar", "Pillar"),
            FacetDefinition::new("Technique", "Technique"),
            FacetDefinition::new("SourceOfAnomaly", "Source of anomaly"),
        ]
    }

    #[test]
    fn test_anomaly_type_inserted_after_pillar() {
        let facets = build_facets(declared());
        let keys: Vec<_> = facets.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["Pillar", "AnomalyType", "Technique", "SourceOfAnomaly"]
        );
        assert_eq!(facets[1].label, "Anomaly type");
    }

    #[test]
    fn test_insertion_is_idempotent() {
        let once = build_facets(declared());
        let twice = build_facets(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_existing_key_matched_case_insensitively() {
        let mut facets = declared();
        facets.push(FacetDefinition::new("anomalytype", "Custom"));
        let built = build_facets(facets.clone());
        assert_eq!(built, facets);
    }

    #[test]
    fn test_appended_without_pillar() {
        let facets = build_facets(vec![FacetDefinition::new("Technique", "Technique")]);
        assert_eq!(facets.last().unwrap().key, "AnomalyType");
    }

    #[test]
    fn test_build_columns() {
        let keys = vec!["Title".to_string(), "BibTeX".to_string()];
        assert_eq!(build_columns(&keys), vec!["Title", "BibTeX", "AnomalyType"]);

        let with_derived = vec!["AnomalyType".to_string(), "Title".to_string()];
        assert_eq!(build_columns(&with_derived), with_derived);

        assert!(build_columns(&[]).is_empty());
    }

    #[test]
    fn test_searchable_columns_skip_citation() {
        let schema = Schema {
            columns: build_columns(&["Title".to_string(), "BibTeX".to_string()]),
            facets: Vec::new(),
        };
        let searchable: Vec<_> = schema.searchable_columns().collect();
        assert_eq!(searchable, vec!["Title", "AnomalyType"]);
    }
}
