//! Document Intermediate Representation
//!
//! The hierarchical content tree (sections holding KPI grids, tables, charts,
//! callouts and paragraphs) that report renderers and the layout optimizer
//! consume. Conversion from JSON is lenient: unknown node types become
//! [`Node::Unknown`] and missing fields read as empty, so a partially formed
//! document never fails to load.

mod convert;
pub mod visit;

pub use visit::{NodeVisitor, walk_document, walk_node, walk_section};

use serde::Deserialize;

/// A whole document: an ordered list of top-level sections.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct Document {
    pub title: Option<String>,
    pub sections: Vec<Section>,
}

impl Document {
    /// Parses a document from JSON text with no nesting limit.
    ///
    /// `serde_json::from_str` stops at 128 levels, which is roughly 62
    /// nested sections. This entry point lifts that limit and grows the stack
    /// on demand, so arbitrarily deep section chains load.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let mut de = serde_json::Deserializer::from_str(text);
        de.disable_recursion_limit();
        let value = serde_json::Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        Ok(Document::from(value))
    }
}

/// A section and its ordered children. Sections nest without limit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    pub title: Option<String>,
    pub children: Vec<Node>,
}

/// A block-level content node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    KpiGrid(KpiGrid),
    Table(Table),
    Chart(Chart),
    Callout(Callout),
    Paragraph(Paragraph),
    Section(Section),
    /// A node whose `type` is not recognised. Holds the raw type name.
    Unknown(String),
}

impl Node {
    /// Returns the `type` tag this node is written with.
    pub fn kind(&self) -> &str {
        match self {
            Node::KpiGrid(_) => "kpi_grid",
            Node::Table(_) => "table",
            Node::Chart(_) => "chart",
            Node::Callout(_) => "callout",
            Node::Paragraph(_) => "paragraph",
            Node::Section(_) => "section",
            Node::Unknown(kind) => kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct KpiGrid {
    pub kpis: Vec<KpiItem>,
}

/// A single KPI. `value` holds the text form of whatever the source carried.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KpiItem {
    pub label: String,
    pub value: String,
    pub change: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chart {
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Callout {
    pub title: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub text: String,
}

/// Character length of a text run, counted in Unicode scalar values.
pub fn text_len(text: &str) -> usize {
    text.chars().count()
}
