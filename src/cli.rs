use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Faceted paper browser - filter a literature catalog and export the matches
///
/// Examples:
///   # Show every paper
///   paperfacet data.json
///
///   # Free-text search plus a year range
///   paperfacet data.json --search "gps spoofing" --year-min 2018 --year-max 2022
///
///   # Facet filters (OR within the same facet, AND across facets)
///   paperfacet data.json --facet Pillar=Detection --facet Pillar=Prevention \
///       --facet AnomalyType=Hardware
///
///   # Show live facet counts and the per-year chart series
///   paperfacet data.json --facet Pillar=Detection --counts --chart
///
///   # Export the current matches
///   paperfacet data.json --search lstm --export-csv out/ --export-bib out/lstm.bib
#[derive(Parser, Debug)]
#[command(name = "paperfacet")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Text search matches any column except BibTeX, case-insensitively\n  \
    - Year bounds are inclusive; papers without a numeric year never match a bound\n  \
    - Multiple --facet values for the SAME facet are combined with OR\n  \
    - Different facets, text and year are combined with AND\n\n\
Facet Counts:\n  \
    - Each facet's counts apply every filter except that facet's own selection\n  \
    - Options with zero matches stay listed but are marked disabled\n\n\
Exports:\n  \
    - CSV uses every column of the dataset regardless of --columns\n  \
    - A directory target receives filtered_papers.csv / filtered_papers.bib")]
pub struct Cli {
    /// Path to the catalog JSON document
    #[arg(value_name = "FILE", env = "PAPERFACET_DATA", default_value = "data.json")]
    pub file: PathBuf,

    /// Free-text search over every column except BibTeX
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Lowest publication year to keep (inclusive)
    #[arg(long, value_name = "YEAR")]
    pub year_min: Option<String>,

    /// Highest publication year to keep (inclusive)
    #[arg(long, value_name = "YEAR")]
    pub year_max: Option<String>,

    /// Select a facet value (format: facet_key=value, can be specified multiple times)
    #[arg(short, long = "facet", value_name = "KEY=VALUE")]
    pub facets: Vec<String>,

    /// Print every facet with its live option counts
    #[arg(short, long)]
    pub counts: bool,

    /// Print the per-year and per-pillar chart series of the matches
    #[arg(long)]
    pub chart: bool,

    /// Columns to show for each paper (comma separated, default: all)
    #[arg(long, value_name = "COLUMNS", value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Output format for the report on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Write the matches as CSV (file path or directory)
    #[arg(long, value_name = "PATH")]
    pub export_csv: Option<PathBuf>,

    /// Write the matches as BibTeX (file path or directory)
    #[arg(long, value_name = "PATH")]
    pub export_bib: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}
