use serde::{Deserialize, Serialize};

/// Content statistics gathered from one document, recomputed for every pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatistics {
    pub kpi_count: usize,
    pub table_count: usize,
    pub chart_count: usize,
    pub callout_count: usize,
    /// Longest KPI value, in characters, after conversion to text.
    pub max_kpi_value_length: usize,
    pub max_table_columns: usize,
    pub max_table_rows: usize,
    /// Summed character length of every paragraph.
    pub total_content_length: usize,
    pub has_long_text: bool,
}
