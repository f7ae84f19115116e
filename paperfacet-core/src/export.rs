use crate::filtering::parse_year;
use crate::models::Record;

pub const CSV_FILENAME: &str = "filtered_papers.csv";
pub const CSV_MIME: &str = "text/csv;charset=utf-8";
pub const BIBTEX_FILENAME: &str = "filtered_papers.bib";
pub const BIBTEX_MIME: &str = "application/x-bibtex;charset=utf-8";

/// Key used for synthesized entries of papers without a `BibKey`
pub const MISSING_KEY: &str = "missingkey";

/// Escape one CSV field
/// Line breaks become spaces first; the result is quoted (quotes doubled)
/// when it contains a quote, comma or tab.
pub fn escape_csv(value: &str) -> String {
    let flat = value.replace(['\r', '\n'], " ");
    if flat.contains(['"', ',', '\t']) {
        format!("\"{}\"", flat.replace('"', "\"\""))
    } else {
        flat
    }
}

/// Render records as CSV over the full column list
/// The header row is always present, so an empty result gives a header-only file.
pub fn to_csv<'a, I>(records: I, columns: &[String]) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let header = columns
        .iter()
        .map(|column| escape_csv(column))
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = vec![header];
    for record in records {
        lines.push(
            columns
                .iter()
                .map(|column| escape_csv(record.get(column)))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}

/// Render records as BibTeX
/// A stored citation is used verbatim; otherwise a minimal `@article` is built.
pub fn to_bibtex<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let entries: Vec<String> = records.into_iter().map(bibtex_entry).collect();

    if entries.is_empty() {
        return String::new();
    }
    format!("{}\n", entries.join("\n\n"))
}

/// Citation for a single record
pub fn bibtex_entry(record: &Record) -> String {
    let literal = record.bibtex.trim();
    if !literal.is_empty() {
        return literal.to_string();
    }

    let key = match record.bib_key.trim() {
        "" => MISSING_KEY,
        key => key,
    };
    let title = record.title.replace(['{', '}'], "");
    let year = parse_year(&record.year)
        .map(|year| year.to_string())
        .unwrap_or_default();

    format!(
        "@article{{{key},\n  title = {{{title}}},\n  author = {{{author}}},\n  year = {{{year}}}\n}}",
        author = record.authors,
    )
}
