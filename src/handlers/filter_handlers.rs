use paperfacet_core::{has_filters, parse_facet_filters, Browser};
use tracing::warn;

use crate::cli::Cli;

/// Apply the filter arguments to the browse session
/// Goes through the same mutators an interactive front end would call.
pub fn apply_cli_filters(browser: &mut Browser, cli: &Cli) {
    if let Some(ref text) = cli.search {
        browser.set_filter_text(text.as_str());
    }

    if let Some(ref input) = cli.year_min {
        browser.set_year_min_text(input);
        if browser.filters().year_min.is_none() {
            warn!(input = %input, "Ignoring --year-min that is not a number");
        }
    }
    if let Some(ref input) = cli.year_max {
        browser.set_year_max_text(input);
        if browser.filters().year_max.is_none() {
            warn!(input = %input, "Ignoring --year-max that is not a number");
        }
    }

    // Check for invalid facet formats and warn
    for facet_str in &cli.facets {
        if !facet_str.contains('=') {
            warn!(facet = %facet_str, "Invalid facet format, expected 'key=value'");
        }
    }

    let mut facet_map: Vec<_> = parse_facet_filters(&cli.facets).into_iter().collect();
    facet_map.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (key, values) in facet_map {
        if !browser.facets().iter().any(|facet| facet.key == key) {
            warn!(facet = %key, "Unknown facet, selection has no effect");
        }
        for value in values {
            browser.toggle_facet_value(&key, &value);
        }
    }
}

/// Human-readable (label, value) pairs for every active filter
pub fn describe_active_filters(browser: &Browser) -> Vec<(String, String)> {
    let filters = browser.filters();
    let mut lines = Vec::new();

    if !has_filters(filters) {
        return lines;
    }

    if !filters.text.is_empty() {
        lines.push(("Search".to_string(), filters.text.clone()));
    }

    let years = match (filters.year_min, filters.year_max) {
        (Some(min), Some(max)) => Some(format!("{} to {}", min, max)),
        (Some(min), None) => Some(format!("from {}", min)),
        (None, Some(max)) => Some(format!("up to {}", max)),
        (None, None) => None,
    };
    if let Some(years) = years {
        lines.push(("Year".to_string(), years));
    }

    for facet in browser.facets() {
        if let Some(selected) = filters.selection(&facet.key) {
            let values: Vec<&str> = selected.iter().map(String::as_str).collect();
            lines.push((facet.label.clone(), values.join(" OR ")));
        }
    }

    lines
}
