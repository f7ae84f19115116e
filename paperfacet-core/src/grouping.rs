use crate::counting::rank_by_frequency;
use crate::filtering::parse_year;
use crate::models::Record;
use crate::splitting::split_values;
use std::collections::{BTreeMap, HashMap};

/// Bucket name for records that carry no value for the grouped facet
pub const UNSPECIFIED: &str = "(unspecified)";

/// Papers per publication year
/// Records whose year cannot be parsed are left out of the series.
pub fn year_series<'a, I>(records: I) -> BTreeMap<i32, usize>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut series = BTreeMap::new();

    for record in records {
        if let Some(year) = parse_year(&record.year) {
            *series.entry(year).or_insert(0) += 1;
        }
    }

    series
}

/// Papers per facet value, most frequent first
/// Records with several values count once under each of them.
pub fn facet_distribution<'a, I>(records: I, facet_key: &str) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut groups: HashMap<String, usize> = HashMap::new();

    for record in records {
        let values = split_values(record.get(facet_key));

        if values.is_empty() {
            *groups.entry(UNSPECIFIED.to_string()).or_default() += 1;
        } else {
            for value in values {
                *groups.entry(value).or_default() += 1;
            }
        }
    }

    rank_by_frequency(groups)
}
