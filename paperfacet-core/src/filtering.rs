use crate::models::{FilterState, Record};
use crate::schema::Schema;
use crate::splitting::split_values;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("leading integer regex is valid"));

/// Parse facet filter strings in the format "key=value" into a filter map
/// Multiple values for the same key are collected into a vector
pub fn parse_facet_filters(facet_strings: &[String]) -> HashMap<String, Vec<String>> {
    let mut facet_map = HashMap::new();

    for facet_str in facet_strings {
        if let Some((key, value)) = facet_str.split_once('=') {
            facet_map
                .entry(key.trim().to_string())
                .or_insert_with(Vec::new)
                .push(value.trim().to_string());
        }
    }

    facet_map
}

/// Read the leading integer of a year-like string
/// `"2020"`, `" 2020"` and `"2020.0"` all give 2020; text without leading
/// digits (or out of range) is unknown.
pub fn parse_year(raw: &str) -> Option<i32> {
    LEADING_INTEGER
        .captures(raw)
        .and_then(|caps| caps[1].parse::<i32>().ok())
}

/// Apply filters to the records, keeping source order
pub fn apply_filters<'a>(
    records: &'a [Record],
    filters: &FilterState,
    schema: &Schema,
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| matches(record, filters, schema, None))
        .collect()
}

/// Check if a record matches the given filters
/// AND logic between text, year range and each facet; OR within one facet.
///
/// With `exclude_facet` set, that facet's own selection is ignored while
/// everything else still applies. This is the count basis for the facet.
pub fn matches(
    record: &Record,
    filters: &FilterState,
    schema: &Schema,
    exclude_facet: Option<&str>,
) -> bool {
    if !filters.text.is_empty() {
        let needle = filters.text.to_lowercase();
        let haystack = schema
            .searchable_columns()
            .map(|column| record.get(column).to_lowercase())
            .collect::<Vec<_>>()
            .join(" | ");

        if !haystack.contains(&needle) {
            return false;
        }
    }

    if filters.year_min.is_some() || filters.year_max.is_some() {
        let year = parse_year(&record.year);

        if let Some(min) = filters.year_min {
            if !year.is_some_and(|y| y >= min) {
                return false;
            }
        }
        if let Some(max) = filters.year_max {
            if !year.is_some_and(|y| y <= max) {
                return false;
            }
        }
    }

    for facet in &schema.facets {
        if exclude_facet == Some(facet.key.as_str()) {
            continue;
        }
        let Some(selected) = filters.selection(&facet.key) else {
            continue;
        };

        let values = split_values(record.get(&facet.key));
        if !values.iter().any(|value| selected.contains(value)) {
            return false;
        }
    }

    true
}

/// Check if any filter is active
pub fn has_filters(filters: &FilterState) -> bool {
    !filters.text.is_empty()
        || filters.year_min.is_some()
        || filters.year_max.is_some()
        || filters.facets.values().any(|values| !values.is_empty())
}
