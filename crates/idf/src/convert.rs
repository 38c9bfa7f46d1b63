//! Lenient conversion from untyped JSON into the typed tree.

use crate::{Callout, Chart, Document, KpiGrid, KpiItem, Node, Paragraph, Section, Table};
use serde_json::Value;

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Document::from(&value)
    }
}

impl From<&Value> for Document {
    fn from(value: &Value) -> Self {
        let sections = array(value, "sections")
            .iter()
            .map(section_from)
            .collect();
        Document {
            title: opt_text(value, "title"),
            sections,
        }
    }
}

impl From<&Value> for Node {
    fn from(value: &Value) -> Self {
        let Some(kind) = value.get("type").and_then(Value::as_str) else {
            log::debug!("Node without a string 'type' treated as unknown");
            return Node::Unknown(String::new());
        };
        match kind {
            "kpi_grid" => Node::KpiGrid(KpiGrid {
                kpis: array(value, "kpis").iter().map(kpi_from).collect(),
            }),
            "table" => Node::Table(Table {
                headers: array(value, "headers").iter().map(stringify).collect(),
                rows: array(value, "rows").iter().map(row_from).collect(),
            }),
            "chart" => Node::Chart(Chart {
                title: opt_text(value, "title"),
            }),
            "callout" => Node::Callout(Callout {
                title: opt_text(value, "title"),
                content: text(value, "content"),
            }),
            "paragraph" => Node::Paragraph(Paragraph {
                text: text(value, "text"),
            }),
            "section" => Node::Section(section_from(value)),
            other => Node::Unknown(other.to_string()),
        }
    }
}

fn section_from(value: &Value) -> Section {
    Section {
        title: opt_text(value, "title"),
        children: array(value, "children").iter().map(Node::from).collect(),
    }
}

fn kpi_from(value: &Value) -> KpiItem {
    KpiItem {
        label: value.get("label").map(stringify).unwrap_or_default(),
        value: value.get("value").map(stringify).unwrap_or_default(),
        change: value.get("change").filter(|v| !v.is_null()).map(stringify),
    }
}

/// A row is normally an array of cells; an object row contributes its values in key order.
fn row_from(value: &Value) -> Vec<String> {
    match value {
        Value::Array(cells) => cells.iter().map(stringify).collect(),
        Value::Object(map) => map.values().map(stringify).collect(),
        other => vec![stringify(other)],
    }
}

/// Text form of any JSON value. Null becomes the empty string.
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn array<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn opt_text(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}
