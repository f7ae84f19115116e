use crate::filtering::parse_year;
use crate::models::{Catalog, PILLAR};
use crate::splitting::split_values;
use std::collections::{BTreeSet, HashSet};

/// Lint a loaded catalog
/// Returns Ok(()) if clean, or Err(Vec<String>) with warnings. None of these
/// stop the session: the engine degrades to "unknown" or "uncategorized".
pub fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<String>> {
    let mut warnings = Vec::new();

    validate_facets(catalog, &mut warnings);
    validate_pillars(catalog, &mut warnings);
    validate_years(catalog, &mut warnings);

    if warnings.is_empty() {
        Ok(())
    } else {
        Err(warnings)
    }
}

fn validate_facets(catalog: &Catalog, warnings: &mut Vec<String>) {
    let mut seen = HashSet::new();
    let columns: HashSet<&str> = catalog.schema.columns.iter().map(String::as_str).collect();

    for facet in &catalog.schema.facets {
        if facet.key.trim().is_empty() {
            warnings.push(format!("Facet '{}' has an empty key", facet.label));
            continue;
        }

        if !seen.insert(facet.key.as_str()) {
            warnings.push(format!("Facet '{}' is declared more than once", facet.key));
        }

        if !columns.is_empty() && !columns.contains(facet.key.as_str()) {
            warnings.push(format!(
                "Facet '{}' is not a column of the first paper",
                facet.key
            ));
        }
    }
}

fn validate_pillars(catalog: &Catalog, warnings: &mut Vec<String>) {
    let mut declared = HashSet::new();

    for pillar in &catalog.pillars {
        if pillar.trim().is_empty() {
            warnings.push("Pillar list contains an empty value".to_string());
        } else if !declared.insert(pillar.trim()) {
            warnings.push(format!("Pillar '{}' is declared more than once", pillar));
        }
    }

    if declared.is_empty() {
        return;
    }

    let undeclared: BTreeSet<String> = catalog
        .papers
        .iter()
        .flat_map(|paper| split_values(&paper.pillar))
        .filter(|value| !declared.contains(value.as_str()))
        .collect();

    for value in undeclared {
        warnings.push(format!("{} '{}' is used by papers but not declared", PILLAR, value));
    }
}

fn validate_years(catalog: &Catalog, warnings: &mut Vec<String>) {
    let unparseable = catalog
        .papers
        .iter()
        .filter(|paper| !paper.year.trim().is_empty() && parse_year(&paper.year).is_none())
        .count();

    if unparseable > 0 {
        warnings.push(format!(
            "{} paper(s) have a Year that is not a number and will not match year bounds",
            unparseable
        ));
    }
}
