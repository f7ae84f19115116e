//! End-to-end tests for the paperfacet binary.

// `Command::cargo_bin` is deprecated in newer assert_cmd releases.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "pillars": ["Detection", "Prevention", "Recovery"],
    "facets": [
        {"key": "Pillar", "label": "Pillar"},
        {"key": "Domain", "label": "Domain"}
    ],
    "papers": [
        {
            "Title": "Sensor drift, revisited",
            "Authors": "Doe, J.",
            "Year": "2018",
            "Pillar": "Detection",
            "Domain": "Avionics; Space",
            "SourceOfAnomaly": "hw",
            "BibKey": "doe2018"
        },
        {
            "Title": "Packet storms",
            "Authors": "Roe, R.",
            "Year": 2020,
            "Pillar": "Prevention",
            "Domain": "Automotive",
            "SourceOfAnomaly": "network"
        },
        {
            "Title": "Fault trees for \"legacy\" fleets",
            "Authors": "Poe, P.",
            "Year": "n.d.",
            "Pillar": "Detection",
            "Domain": "Avionics",
            "SourceOfAnomaly": "Operational/Policy"
        }
    ]
}"#;

fn write_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("papers.json");
    fs::write(&path, CATALOG).unwrap();
    path
}

fn paperfacet() -> Command {
    let mut cmd = Command::cargo_bin("paperfacet").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG").env_remove("PAPERFACET_DATA");
    cmd
}

#[test]
fn missing_file_reports_error_and_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    paperfacet()
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: File Not Found"));
}

#[test]
fn invalid_document_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"papers": "not a list"}"#).unwrap();

    paperfacet()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Validation Error"));
}

#[test]
fn lists_every_paper_without_filters() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path());

    paperfacet()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Paper Catalog - papers.json"))
        .stdout(predicate::str::contains("Showing 3 / 3 papers"))
        .stdout(predicate::str::contains("### Packet storms"))
        .stdout(predicate::str::contains("- **AnomalyType:** Communication"))
        .stdout(predicate::str::contains("## Active Filters").not());
}

#[test]
fn data_file_can_come_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path());

    paperfacet()
        .env("PAPERFACET_DATA", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 3 / 3 papers"));
}

#[test]
fn filters_combine_conjunctively() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path());

    paperfacet()
        .arg(&path)
        .args(["--facet", "Domain=Avionics", "--year-min", "2017"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 / 3 papers"))
        .stdout(predicate::str::contains("### Sensor drift, revisited"))
        .stdout(predicate::str::contains("### Fault trees").not())
        .stdout(predicate::str::contains("- **Domain:** Avionics"))
        .stdout(predicate::str::contains("- **Year:** from 2017"));
}

#[test]
fn text_search_matches_derived_category() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path());

    paperfacet()
        .arg(&path)
        .args(["--search", "HARDWARE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 / 3 papers"))
        .stdout(predicate::str::contains("### Sensor drift, revisited"));
}

#[test]
fn counts_exclude_own_selection_and_mark_empty_options() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path());

    paperfacet()
        .arg(&path)
        .args(["--facet", "Pillar=Prevention", "--counts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [ ] Detection (2)"))
        .stdout(predicate::str::contains("- [x] Prevention (1)"))
        .stdout(predicate::str::contains("- [ ] Recovery (0) disabled"))
        .stdout(predicate::str::contains("- [ ] Avionics (0) disabled"))
        .stdout(predicate::str::contains("- [ ] Automotive (1)"));
}

#[test]
fn chart_shows_numeric_years_only() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path());

    paperfacet()
        .arg(&path)
        .arg("--chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("### Papers per year"))
        .stdout(predicate::str::contains("2018  "))
        .stdout(predicate::str::contains("2020  "))
        .stdout(predicate::str::contains("n.d.").count(1));
}

#[test]
fn empty_result_set_prints_placeholder() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path());

    paperfacet()
        .arg(&path)
        .args(["--year-min", "2030"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 / 3 papers"))
        .stdout(predicate::str::contains("_No papers match the specified filters._"));
}

#[test]
fn exports_write_filtered_papers() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path());
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    paperfacet()
        .arg(&path)
        .args(["--facet", "Pillar=Detection", "--columns", "Title"])
        .arg("--export-csv")
        .arg(&out)
        .arg("--export-bib")
        .arg(out.join("refs.bib"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported CSV to"))
        .stderr(predicate::str::contains("Exported BibTeX to"));

    let csv = fs::read_to_string(out.join("filtered_papers.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Title,Authors,Year,Pillar,Domain,SourceOfAnomaly,BibKey,AnomalyType"
    );
    assert!(csv.contains("\"Sensor drift, revisited\""));
    assert!(csv.contains("\"Fault trees for \"\"legacy\"\" fleets\""));
    assert!(!csv.contains("Packet storms"));
    assert!(!csv.ends_with('\n'));

    let bib = fs::read_to_string(out.join("refs.bib")).unwrap();
    assert!(bib.contains("@article{doe2018,"));
    assert!(bib.contains("@article{missingkey,"));
    assert!(bib.contains("  title = {Fault trees for \"legacy\" fleets},"));
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path());

    paperfacet()
        .arg(&path)
        .arg("--export-csv")
        .arg(dir.path().join("missing").join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Directory Not Found"));
}

#[test]
fn json_format_reports_visible_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path());

    let output = paperfacet()
        .arg(&path)
        .args(["--format", "json", "--columns", "Title,AnomalyType", "--counts"])
        .args(["--facet", "Pillar=Detection"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["matched"], 2);
    assert_eq!(report["total"], 3);
    assert_eq!(report["filters"][0]["label"], "Pillar");
    assert_eq!(report["papers"][0]["AnomalyType"], "Hardware");
    assert_eq!(report["papers"][1]["AnomalyType"], "Operational/Policy");
    assert!(report["papers"][0].get("Authors").is_none());
    assert_eq!(report["facets"][0]["key"], "Pillar");
}
