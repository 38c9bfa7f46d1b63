//! The layout optimizer: one owned `LayoutConfig` plus the analyze, adjust
//! and generate operations over it.

use crate::adjuster;
use crate::analyzer;
use crate::error::OptimizerError;
use crate::persistence::{self, LoadedLayout};
use crate::record::OptimizationRecord;
use quire_idf::Document;
use quire_types::{DocumentStatistics, LayoutConfig};
use std::path::Path;

/// The outcome of one optimization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimization {
    pub config: LayoutConfig,
    pub record: OptimizationRecord,
}

impl Optimization {
    pub fn adjustments(&self) -> &[String] {
        &self.record.adjustments
    }
}

/// Holds the base configuration that optimization passes start from.
///
/// Passes never mutate the optimizer; each returns its own [`Optimization`].
/// Use [`LayoutOptimizer::apply`] to adopt a result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutOptimizer {
    config: LayoutConfig,
}

impl LayoutOptimizer {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn analyze(&self, document: &Document) -> DocumentStatistics {
        analyzer::analyze(document)
    }

    /// Analyzes `document` and adjusts the current config to suit it.
    pub fn optimize_for_document(&self, document: &Document) -> Optimization {
        log::info!("Analyzing document to optimize layout...");
        let stats = self.analyze(document);
        self.optimize_with_stats(stats)
    }

    /// Adjusts the current config for already-gathered statistics.
    pub fn optimize_with_stats(&self, stats: DocumentStatistics) -> Optimization {
        let (config, adjustments) = adjuster::adjust(&self.config, &stats);

        log::info!(
            "Layout optimization complete, {} adjustment(s) applied",
            adjustments.len()
        );
        for note in &adjustments {
            log::info!("  - {}", note);
        }

        let record = OptimizationRecord::new(stats, adjustments, config.clone());
        Optimization { config, record }
    }

    /// Replaces the current config with the result of a pass.
    pub fn apply(&mut self, optimization: &Optimization) {
        self.config = optimization.config.clone();
    }

    /// Print stylesheet for the current config.
    pub fn generate_css(&self) -> String {
        quire_style::generate(&self.config)
    }

    pub fn save(
        &self,
        path: impl AsRef<Path>,
        record: Option<&OptimizationRecord>,
    ) -> Result<(), OptimizerError> {
        persistence::save_layout(path.as_ref(), &self.config, record)
    }

    /// Loads an optimizer from `path`, falling back to defaults when the file is absent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OptimizerError> {
        let path = path.as_ref();
        match persistence::load_layout(path)? {
            Some(LoadedLayout { config, .. }) => Ok(Self::new(config)),
            None => {
                log::warn!(
                    "Layout config {} not found, using default configuration",
                    path.display()
                );
                Ok(Self::default())
            }
        }
    }
}

impl From<LayoutConfig> for LayoutOptimizer {
    fn from(config: LayoutConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kpi_document(values: &[&str]) -> Document {
        let kpis: Vec<_> = values.iter().map(|v| json!({ "value": v })).collect();
        Document::from(json!({
            "sections": [{ "children": [{ "type": "kpi_grid", "kpis": kpis }] }]
        }))
    }

    #[test]
    fn test_pass_does_not_mutate_optimizer() {
        let optimizer = LayoutOptimizer::default();
        let result = optimizer.optimize_for_document(&kpi_document(&["1"; 8]));
        assert_eq!(result.config.grid.columns, 3);
        assert_eq!(optimizer.config().grid.columns, 2);
        assert_eq!(result.record.config, result.config);
        assert_eq!(result.record.stats.kpi_count, 8);
    }

    #[test]
    fn test_adjustments_do_not_leak_between_passes() {
        let optimizer = LayoutOptimizer::default();
        let first = optimizer.optimize_for_document(&kpi_document(&["123456789012"]));
        let second = optimizer.optimize_for_document(&kpi_document(&["1", "2", "3"]));
        assert_eq!(first.adjustments().len(), 2);
        assert!(second.adjustments().is_empty());
    }

    #[test]
    fn test_apply_then_generate_css() {
        let mut optimizer = LayoutOptimizer::default();
        let result = optimizer.optimize_for_document(&kpi_document(&["a"]));
        optimizer.apply(&result);
        assert_eq!(optimizer.config().grid.columns, 1);
        assert!(optimizer.generate_css().contains("repeat(1, 1fr)"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let optimizer = LayoutOptimizer::load(dir.path().join("none.json")).unwrap();
        assert_eq!(optimizer, LayoutOptimizer::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layouts/chosen.json");
        let mut optimizer = LayoutOptimizer::default();
        let result = optimizer.optimize_with_stats(DocumentStatistics {
            max_table_columns: 9,
            ..Default::default()
        });
        optimizer.apply(&result);
        optimizer.save(&path, Some(&result.record)).unwrap();

        let reloaded = LayoutOptimizer::load(&path).unwrap();
        assert_eq!(reloaded, optimizer);
        assert_eq!(reloaded.config().table.cell_padding, 8);
    }
}
