//! JSON node builders for document fixtures.

use serde_json::{Value, json};

pub fn kpi_grid(values: &[&str]) -> Value {
    let kpis: Vec<Value> = values
        .iter()
        .enumerate()
        .map(|(i, v)| json!({ "label": format!("KPI {}", i + 1), "value": v, "change": "+1%" }))
        .collect();
    json!({ "type": "kpi_grid", "kpis": kpis })
}

pub fn kpi_grid_of(count: usize) -> Value {
    let values: Vec<String> = (0..count).map(|i| format!("{}", 100 + i)).collect();
    let refs: Vec<&str> = values.iter().map(String::as_str).collect();
    kpi_grid(&refs)
}

pub fn table(columns: usize, rows: usize) -> Value {
    let headers: Vec<String> = (0..columns).map(|c| format!("Col {}", c)).collect();
    let body: Vec<Vec<usize>> = (0..rows).map(|r| (0..columns).map(|c| r * c).collect()).collect();
    json!({ "type": "table", "headers": headers, "rows": body })
}

pub fn paragraph(len: usize) -> Value {
    json!({ "type": "paragraph", "text": "a".repeat(len) })
}

pub fn callout(len: usize) -> Value {
    json!({ "type": "callout", "title": "Note", "content": "c".repeat(len) })
}

pub fn chart() -> Value {
    json!({ "type": "chart", "title": "Trend" })
}

pub fn section(children: Vec<Value>) -> Value {
    json!({ "type": "section", "children": children })
}
