use colored::Colorize;
use paperfacet_core::{FacetDefinition, FacetOption, Record};
use std::collections::BTreeMap;

const BAR_WIDTH: usize = 30;

/// Format one paper as a Markdown section over the visible columns
pub fn format_record(record: &Record, columns: &[String]) -> String {
    let title = match record.title.trim() {
        "" => "(untitled)",
        title => title,
    };
    let mut out = format!("### {}\n\n", title);

    for column in columns.iter().filter(|column| column.as_str() != "Title") {
        let value = record.get(column).replace(['\r', '\n'], " ");
        let value = value.trim();
        if !value.is_empty() {
            out.push_str(&format!("- **{}:** {}\n", column, value));
        }
    }

    out
}

/// Format a facet as a checkbox list with live counts
pub fn format_facet_options(facet: &FacetDefinition, options: &[FacetOption]) -> String {
    let mut out = format!("### {}\n\n", facet.label);

    if options.is_empty() {
        out.push_str("_No values._\n");
        return out;
    }

    for option in options {
        let mark = if option.selected { "x" } else { " " };
        let line = format!("- [{}] {} ({})", mark, option.value, option.count);
        if option.disabled {
            out.push_str(&format!("{}\n", format!("{} disabled", line).dimmed()));
        } else {
            out.push_str(&line);
            out.push('\n');
        }
    }

    out
}

/// Format the per-year series as a text bar chart
pub fn format_year_series(series: &BTreeMap<i32, usize>) -> String {
    let rows: Vec<(String, usize)> = series
        .iter()
        .map(|(year, count)| (year.to_string(), *count))
        .collect();
    format_bars(&rows)
}

/// Format a value distribution as a text bar chart
pub fn format_distribution(rows: &[(String, usize)]) -> String {
    format_bars(rows)
}

fn format_bars(rows: &[(String, usize)]) -> String {
    if rows.is_empty() {
        return "_No data._\n".to_string();
    }

    let max = rows.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);
    let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);

    let mut out = String::from("```\n");
    for (label, count) in rows {
        let width = (count * BAR_WIDTH).div_ceil(max);
        out.push_str(&format!(
            "{:<label_width$}  {} {}\n",
            label,
            "#".repeat(width),
            count
        ));
    }
    out.push_str("```\n");
    out
}
