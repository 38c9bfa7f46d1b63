//! Read-only traversal over the document tree.
//!
//! Implementors override only the callbacks they care about; everything else
//! is a no-op. Nested sections are entered recursively, so a visitor sees
//! every node regardless of depth.

use crate::{Callout, Chart, Document, KpiGrid, Node, Paragraph, Section, Table};

pub trait NodeVisitor {
    fn visit_kpi_grid(&mut self, _grid: &KpiGrid) {}
    fn visit_table(&mut self, _table: &Table) {}
    fn visit_chart(&mut self, _chart: &Chart) {}
    fn visit_callout(&mut self, _callout: &Callout) {}
    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {}
    /// Called before the children of a nested section are walked.
    fn enter_section(&mut self, _section: &Section) {}
    fn visit_unknown(&mut self, _kind: &str) {}
}

pub fn walk_document<V: NodeVisitor + ?Sized>(document: &Document, visitor: &mut V) {
    for section in &document.sections {
        walk_section(section, visitor);
    }
}

pub fn walk_section<V: NodeVisitor + ?Sized>(section: &Section, visitor: &mut V) {
    for child in &section.children {
        walk_node(child, visitor);
    }
}

pub fn walk_node<V: NodeVisitor + ?Sized>(node: &Node, visitor: &mut V) {
    match node {
        Node::KpiGrid(grid) => visitor.visit_kpi_grid(grid),
        Node::Table(table) => visitor.visit_table(table),
        Node::Chart(chart) => visitor.visit_chart(chart),
        Node::Callout(callout) => visitor.visit_callout(callout),
        Node::Paragraph(paragraph) => visitor.visit_paragraph(paragraph),
        Node::Section(section) => {
            visitor.enter_section(section);
            walk_section(section, visitor);
        }
        Node::Unknown(kind) => visitor.visit_unknown(kind),
    }
}
