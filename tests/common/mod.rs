pub mod fixtures;

use quire::Document;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Builds a document with a single top-level section holding `children`.
pub fn single_section(children: Vec<Value>) -> Document {
    Document::from(serde_json::json!({
        "sections": [{ "title": "Main", "children": children }]
    }))
}
