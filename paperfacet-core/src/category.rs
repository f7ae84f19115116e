use crate::models::Record;

pub const HARDWARE: &str = "Hardware";
pub const SOFTWARE_CONTROL: &str = "Software/Control";
pub const COMMUNICATION: &str = "Communication";
pub const ENVIRONMENTAL: &str = "Environmental";
pub const OPERATIONAL_POLICY: &str = "Operational/Policy";

/// The coarse anomaly categories, in display order
pub const CANONICAL_LABELS: [&str; 5] = [
    HARDWARE,
    SOFTWARE_CONTROL,
    COMMUNICATION,
    ENVIRONMENTAL,
    OPERATIONAL_POLICY,
];

// Normalized spelling -> canonical label. Anything not listed is uncategorized.
const SYNONYMS: &[(&str, &str)] = &[
    ("hardware", HARDWARE),
    ("hw", HARDWARE),
    ("hardware fault", HARDWARE),
    ("hardware failure", HARDWARE),
    ("software", SOFTWARE_CONTROL),
    ("sw", SOFTWARE_CONTROL),
    ("control", SOFTWARE_CONTROL),
    ("software/control", SOFTWARE_CONTROL),
    ("software control", SOFTWARE_CONTROL),
    ("software fault", SOFTWARE_CONTROL),
    ("communication", COMMUNICATION),
    ("communications", COMMUNICATION),
    ("comms", COMMUNICATION),
    ("network", COMMUNICATION),
    ("communication/network", COMMUNICATION),
    ("environmental", ENVIRONMENTAL),
    ("environment", ENVIRONMENTAL),
    ("environment/external", ENVIRONMENTAL),
    ("operational", OPERATIONAL_POLICY),
    ("policy", OPERATIONAL_POLICY),
    ("operations/policy", OPERATIONAL_POLICY),
    ("operational policy", OPERATIONAL_POLICY),
    ("operational/policy", OPERATIONAL_POLICY),
];

/// Derive the `AnomalyType` of a record from its `SourceOfAnomaly` text
pub fn derive_anomaly_type(record: &Record) -> String {
    categorize(&record.source_of_anomaly).to_string()
}

/// Map free text to a canonical label, or `""` when it is not recognized
pub fn categorize(source: &str) -> &'static str {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return "";
    }

    let normalized = trimmed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if let Some((_, label)) = SYNONYMS.iter().find(|(synonym, _)| *synonym == normalized) {
        return *label;
    }

    CANONICAL_LABELS
        .iter()
        .find(|label| **label == trimmed)
        .copied()
        .unwrap_or("")
}
