use anyhow::Result;
use paperfacet_core::models::PILLAR;
use paperfacet_core::Browser;

use super::formatting::{
    format_distribution, format_facet_options, format_record, format_year_series,
};
use super::report::ReportOut;
use super::types::ViewOptions;
use crate::handlers::describe_active_filters;
use crate::state::AppState;

/// Render the current session as a Markdown report
pub fn render_markdown(state: &AppState, browser: &Browser, view: &ViewOptions) -> String {
    let mut out = format!("# {}\n\n", state.get_title());

    let filters = describe_active_filters(browser);
    if !filters.is_empty() {
        out.push_str("## Active Filters\n\n");
        for (label, value) in &filters {
            out.push_str(&format!("- **{}:** {}\n", label, value));
        }
        out.push('\n');
    }

    out.push_str(&browser.summary());
    out.push_str("\n\n");

    if view.show_counts {
        out.push_str("## Facets\n\n");
        for facet in browser.facets() {
            out.push_str(&format_facet_options(facet, &browser.facet_options(&facet.key)));
            out.push('\n');
        }
    }

    if view.show_chart {
        out.push_str("## Charts\n\n### Papers per year\n\n");
        out.push_str(&format_year_series(&browser.year_series()));
        out.push_str("\n### Papers per pillar\n\n");
        out.push_str(&format_distribution(&browser.facet_distribution(PILLAR)));
        out.push('\n');
    }

    out.push_str("## Papers\n\n");
    let results = browser.result_set();
    if results.is_empty() {
        out.push_str("_No papers match the specified filters._\n");
    } else {
        let sections: Vec<String> = results
            .iter()
            .map(|record| format_record(record, &state.visible_columns))
            .collect();
        out.push_str(&sections.join("\n"));
    }

    out
}

/// Render the current session as pretty-printed JSON
pub fn render_json(state: &AppState, browser: &Browser, view: &ViewOptions) -> Result<String> {
    let report = ReportOut::build(
        state.get_title(),
        browser,
        &state.visible_columns,
        describe_active_filters(browser),
        view,
    );
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn loaded_state(dir: &TempDir) -> AppState {
        let path = dir.path().join("papers.json");
        fs::write(
            &path,
            r#"{
                "papers": [
                    {"Title": "Sensor drift", "Year": "2019", "Pillar": "Detection", "SourceOfAnomaly": "Hardware"},
                    {"Title": "Packet storms", "Year": "2021", "Pillar": "Prevention", "SourceOfAnomaly": "network"}
                ],
                "facets": [{"key": "Pillar", "label": "Pillar"}]
            }"#,
        )
        .unwrap();

        let mut state = AppState::new();
        state.load_from_file(path).unwrap();
        state
    }

    #[test]
    fn test_render_markdown_sections() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let mut state = loaded_state(&dir);
        let mut browser = state.browser.take().unwrap();
        browser.toggle_facet_value("Pillar", "Detection");

        let view = ViewOptions {
            show_counts: true,
            show_chart: true,
        };
        let report = render_markdown(&state, &browser, &view);

        assert!(report.starts_with("# Paper Catalog - papers.json\n\n## Active Filters\n\n"));
        assert!(report.contains("- **Pillar:** Detection\n"));
        assert!(report.contains("Showing 1 / 2 papers"));
        assert!(report.contains("### Pillar\n\n- [x] Detection (1)\n- [ ] Prevention (1)\n"));
        assert!(report.contains(
            "### Anomaly type\n\n- [ ] Communication (0) disabled\n- [ ] Hardware (1)\n"
        ));
        assert!(report.contains("### Papers per year"));
        assert!(report.contains("### Sensor drift"));
        assert!(!report.contains("### Packet storms"));
    }

    #[test]
    fn test_render_markdown_no_results() {
        let dir = TempDir::new().unwrap();
        let mut state = loaded_state(&dir);
        let mut browser = state.browser.take().unwrap();
        browser.set_filter_text("nothing like this");

        let report = render_markdown(&state, &browser, &ViewOptions::default());

        assert!(report.contains("Showing 0 / 2 papers"));
        assert!(report.contains("_No papers match the specified filters._"));
        assert!(!report.contains("## Facets"));
    }

    #[test]
    fn test_render_json() {
        let dir = TempDir::new().unwrap();
        let mut state = loaded_state(&dir);
        state.set_visible_columns(&["Title".to_string(), "AnomalyType".to_string()]);
        let browser = state.browser.take().unwrap();

        let json = render_json(&state, &browser, &ViewOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["matched"], 2);
        assert_eq!(value["total"], 2);
        assert_eq!(value["papers"][1]["AnomalyType"], "Communication");
        assert!(value["papers"][0].get("Year").is_none());
        assert!(value.get("facets").is_none());
    }
}
