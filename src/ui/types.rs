/// Semantic level of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Warning,
}

/// What the report should contain besides the matching papers
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub show_counts: bool,
    pub show_chart: bool,
}
