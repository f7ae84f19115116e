use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Normalize a label for alphabetical ordering
/// - Normalize unicode (NFD then lowercase)
/// - Drop combining marks so accented letters sort next to their base letter
/// - Collapse internal whitespace
pub fn collation_key(s: &str) -> String {
    let decomposed: String = s
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    decomposed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Alphabetical comparison of two labels: by collation key, then by raw text for ties
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    match collation_key(a).cmp(&collation_key(b)) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}
