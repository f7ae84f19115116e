use paperfacet_core::{Browser, FacetOption};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::types::ViewOptions;

#[derive(Debug, Serialize)]
pub struct ActiveFilterOut {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct FacetOptionOut {
    pub value: String,
    pub count: usize,
    pub selected: bool,
    pub disabled: bool,
}

impl From<FacetOption> for FacetOptionOut {
    fn from(option: FacetOption) -> Self {
        Self {
            value: option.value,
            count: option.count,
            selected: option.selected,
            disabled: option.disabled,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FacetOut {
    pub key: String,
    pub label: String,
    pub options: Vec<FacetOptionOut>,
}

#[derive(Debug, Serialize)]
pub struct ChartOut {
    pub years: BTreeMap<i32, usize>,
    pub pillars: Vec<(String, usize)>,
}

/// Machine-readable report printed by `--format json`
#[derive(Debug, Serialize)]
pub struct ReportOut {
    pub title: String,
    pub summary: String,
    pub matched: usize,
    pub total: usize,
    pub filters: Vec<ActiveFilterOut>,
    pub papers: Vec<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<Vec<FacetOut>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartOut>,
}

impl ReportOut {
    pub fn build(
        title: String,
        browser: &Browser,
        columns: &[String],
        filters: Vec<(String, String)>,
        view: &ViewOptions,
    ) -> Self {
        let results = browser.result_set();

        let papers = results
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| (column.clone(), Value::String(record.get(column).to_string())))
                    .collect::<Map<String, Value>>()
            })
            .collect();

        let facets = view.show_counts.then(|| {
            browser
                .facets()
                .iter()
                .map(|facet| FacetOut {
                    key: facet.key.clone(),
                    label: facet.label.clone(),
                    options: browser
                        .facet_options(&facet.key)
                        .into_iter()
                        .map(FacetOptionOut::from)
                        .collect(),
                })
                .collect()
        });

        let chart = view.show_chart.then(|| ChartOut {
            years: browser.year_series(),
            pillars: browser.facet_distribution(paperfacet_core::models::PILLAR),
        });

        Self {
            title,
            summary: browser.summary(),
            matched: results.len(),
            total: browser.catalog().papers.len(),
            filters: filters
                .into_iter()
                .map(|(label, value)| ActiveFilterOut { label, value })
                .collect(),
            papers,
            facets,
            chart,
        }
    }
}
