use crate::filtering::matches;
use crate::models::{FilterState, Record};
use crate::schema::Schema;
use crate::sorting::compare_labels;
use crate::splitting::split_values;
use std::collections::HashMap;

/// One checkbox of a facet, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub value: String,
    pub count: usize,
    pub selected: bool,
    /// Zero matches and not selected: shown, but cannot be picked
    pub disabled: bool,
}

/// Count facet values over the records that pass every filter except the
/// facet's own selection
pub fn facet_counts(
    records: &[Record],
    filters: &FilterState,
    schema: &Schema,
    facet_key: &str,
) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records
        .iter()
        .filter(|record| matches(record, filters, schema, Some(facet_key)))
    {
        for value in split_values(record.get(facet_key)) {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    counts
}

/// Every value the facet takes anywhere in the unfiltered dataset
/// Ordered by descending frequency, ties alphabetical. `known` values are
/// part of the universe even when no record carries them.
pub fn all_facet_values(records: &[Record], facet_key: &str, known: &[String]) -> Vec<String> {
    let mut frequencies: HashMap<String, usize> = HashMap::new();

    for record in records {
        for value in split_values(record.get(facet_key)) {
            *frequencies.entry(value).or_insert(0) += 1;
        }
    }
    for value in known {
        let value = value.trim();
        if !value.is_empty() {
            frequencies.entry(value.to_string()).or_insert(0);
        }
    }

    rank_by_frequency(frequencies)
        .into_iter()
        .map(|(value, _)| value)
        .collect()
}

/// Sort a value -> count map by descending count, ties alphabetical
pub(crate) fn rank_by_frequency(frequencies: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = frequencies.into_iter().collect();
    ranked.sort_by(|(a, a_count), (b, b_count)| {
        b_count.cmp(a_count).then_with(|| compare_labels(a, b))
    });
    ranked
}

/// Join the stable option universe with live counts and the current selection
/// Selected values missing from the universe are appended so they can still
/// be deselected.
pub fn facet_options(
    universe: &[String],
    counts: &HashMap<String, usize>,
    filters: &FilterState,
    facet_key: &str,
) -> Vec<FacetOption> {
    let option = |value: &str| {
        let count = counts.get(value).copied().unwrap_or(0);
        let selected = filters.is_selected(facet_key, value);
        FacetOption {
            value: value.to_string(),
            count,
            selected,
            disabled: count == 0 && !selected,
        }
    };

    let mut options: Vec<FacetOption> = universe
        .iter()
        .map(|value| option(value.as_str()))
        .collect();

    if let Some(selected) = filters.selection(facet_key) {
        for value in selected {
            if !universe.contains(value) {
                options.push(option(value.as_str()));
            }
        }
    }

    options
}
