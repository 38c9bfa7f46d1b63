//! # quire
//!
//! Adaptive print layout for report documents.
//!
//! An optimization pass inspects a document tree, derives a `LayoutConfig`
//! tuned to its content and emits the matching print stylesheet:
//! - **analyzer**: content statistics from the document tree
//! - **adjuster**: rule-based config adjustment from those statistics
//! - **persistence**: JSON storage of chosen configs and their audit records
//! - **optimizer**: the `LayoutOptimizer` tying the passes together
//! - **print**: splicing the stylesheet into rendered HTML for the PDF engine

// Re-export foundation crates
pub use quire_idf as idf;
pub use quire_style as style;
pub use quire_types as types;

pub mod adjuster;
pub mod analyzer;
pub mod error;
pub mod optimizer;
pub mod persistence;
pub mod print;
pub mod record;

pub use analyzer::analyze;
pub use adjuster::adjust;
pub use error::OptimizerError;
pub use optimizer::{LayoutOptimizer, Optimization};
pub use persistence::{LoadedLayout, layout_log_path, load_layout, save_layout};
pub use print::{EmbeddedFont, FontFormat, MarkupRenderer, PrintAssembler, inject_stylesheet};
pub use record::OptimizationRecord;

pub use idf::{Document, Node};
pub use types::{DocumentStatistics, LayoutConfig, OverflowStrategy};
