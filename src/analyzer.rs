//! Gathers the content statistics that drive layout adjustment.
//!
//! The analyzer is diagnostic: it never fails. Unknown node types are skipped
//! and missing fields count as empty.

use quire_idf::{
    Callout, Chart, Document, KpiGrid, NodeVisitor, Paragraph, Table, text_len, walk_document,
};
use quire_types::DocumentStatistics;

/// A callout whose content exceeds this many characters counts as long text.
pub const LONG_CALLOUT_CHARS: usize = 200;
/// A single paragraph exceeding this many characters counts as long text.
pub const LONG_PARAGRAPH_CHARS: usize = 500;

/// Walks `document`, including arbitrarily nested sections, and returns its statistics.
pub fn analyze(document: &Document) -> DocumentStatistics {
    let mut collector = StatsCollector::default();
    walk_document(document, &mut collector);
    log::debug!("Document analysis complete: {:?}", collector.stats);
    collector.stats
}

#[derive(Default)]
struct StatsCollector {
    stats: DocumentStatistics,
}

impl NodeVisitor for StatsCollector {
    fn visit_kpi_grid(&mut self, grid: &KpiGrid) {
        let stats = &mut self.stats;
        stats.kpi_count += grid.kpis.len();
        for kpi in &grid.kpis {
            stats.max_kpi_value_length = stats.max_kpi_value_length.max(text_len(&kpi.value));
        }
    }

    fn visit_table(&mut self, table: &Table) {
        let stats = &mut self.stats;
        stats.table_count += 1;
        stats.max_table_columns = stats.max_table_columns.max(table.column_count());
        stats.max_table_rows = stats.max_table_rows.max(table.row_count());
    }

    fn visit_chart(&mut self, _chart: &Chart) {
        self.stats.chart_count += 1;
    }

    fn visit_callout(&mut self, callout: &Callout) {
        self.stats.callout_count += 1;
        if text_len(&callout.content) > LONG_CALLOUT_CHARS {
            self.stats.has_long_text = true;
        }
    }

    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        let len = text_len(&paragraph.text);
        self.stats.total_content_length += len;
        if len > LONG_PARAGRAPH_CHARS {
            self.stats.has_long_text = true;
        }
    }

    fn visit_unknown(&mut self, kind: &str) {
        log::debug!("Skipping node of unrecognised type '{}'", kind);
    }
}
