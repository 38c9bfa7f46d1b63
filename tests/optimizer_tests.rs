mod common;

use common::fixtures::{callout, chart, kpi_grid, kpi_grid_of, paragraph, section, table};
use common::{TestResult, single_section};
use quire::style::generate;
use quire::{LayoutConfig, LayoutOptimizer, analyze};
use serde_json::json;

#[test]
fn analysis_is_deterministic() {
    let doc = single_section(vec![
        kpi_grid(&["1.2M", "98.5%", "n/a"]),
        table(4, 10),
        chart(),
        callout(50),
        paragraph(120),
        section(vec![table(2, 3), paragraph(30)]),
    ]);
    let first = analyze(&doc);
    let second = analyze(&doc);
    assert_eq!(first, second);
    assert_eq!(first.table_count, 2);
    assert_eq!(first.total_content_length, 150);
}

#[test]
fn kpi_count_drives_grid_columns() {
    let optimizer = LayoutOptimizer::default();
    let columns = |count: usize| {
        let result = optimizer.optimize_for_document(&single_section(vec![kpi_grid_of(count)]));
        (result.config.grid.columns, result.config.kpi_card.min_height)
    };

    assert_eq!(columns(7), (3, 100));
    assert_eq!(columns(2), (1, 120));
    assert_eq!(columns(4), (2, 120));
}

#[test]
fn kpis_are_counted_across_grids() {
    let doc = single_section(vec![kpi_grid_of(4), section(vec![kpi_grid_of(3)])]);
    let result = LayoutOptimizer::default().optimize_for_document(&doc);
    assert_eq!(result.record.stats.kpi_count, 7);
    assert_eq!(result.config.grid.columns, 3);
}

#[test]
fn wide_tables_shrink_table_text() {
    let optimizer = LayoutOptimizer::default();

    let seven = optimizer.optimize_for_document(&single_section(vec![kpi_grid_of(4), table(7, 2)]));
    assert_eq!(seven.config.table.font_size_header, 11);
    assert_eq!(seven.config.table.font_size_body, 10);
    assert_eq!(seven.config.table.cell_padding, 8);
    assert_eq!(seven.adjustments().len(), 1);

    let six = optimizer.optimize_for_document(&single_section(vec![kpi_grid_of(4), table(6, 2)]));
    assert_eq!(six.config.table, LayoutConfig::default().table);
    assert!(six.adjustments().is_empty());
}

#[test]
fn long_paragraph_raises_line_height() {
    let optimizer = LayoutOptimizer::default();

    let long = optimizer.optimize_for_document(&single_section(vec![paragraph(501)]));
    assert!(long.record.stats.has_long_text);
    assert_eq!(long.config.page.line_height, 1.8);
    assert_eq!(long.config.callout.line_height, 1.8);

    let short = optimizer.optimize_for_document(&single_section(vec![
        paragraph(400),
        paragraph(400),
        paragraph(400),
    ]));
    assert!(!short.record.stats.has_long_text);
    assert_eq!(short.config.page.line_height, 1.6);
    assert_eq!(short.config.callout.line_height, 1.6);
}

#[test]
fn nested_tables_reach_top_level_statistics() {
    let doc = single_section(vec![section(vec![section(vec![table(8, 40)])])]);
    let stats = analyze(&doc);
    assert_eq!(stats.table_count, 1);
    assert_eq!(stats.max_table_columns, 8);
    assert_eq!(stats.max_table_rows, 40);

    let result = LayoutOptimizer::default().optimize_for_document(&doc);
    assert_eq!(result.config.table.font_size_header, 11);
}

#[test]
fn every_fired_rule_is_recorded_once() {
    let doc = single_section(vec![
        kpi_grid(&["123,456,789,012,345", "1", "2", "3", "4", "5", "6"]),
        table(9, 1),
        callout(250),
    ]);
    let result = LayoutOptimizer::default().optimize_for_document(&doc);
    let notes = result.adjustments();
    assert_eq!(notes.len(), 4, "{:?}", notes);
    assert!(notes[0].contains("32px -> 24px"));
    assert!(notes[1].contains("grid columns 2 -> 3"));
    assert!(notes[2].contains("cell padding 12px -> 8px"));
    assert!(notes[3].starts_with("Long text detected"));
}

#[test]
fn stylesheet_reflects_optimized_config() -> TestResult {
    let doc: quire::Document = serde_json::from_value(json!({
        "sections": [{ "children": [
            { "type": "kpi_grid", "kpis": [{ "value": "42" }] },
            { "type": "paragraph", "text": "p".repeat(600) }
        ]}]
    }))?;

    let mut optimizer = LayoutOptimizer::default();
    let result = optimizer.optimize_for_document(&doc);
    optimizer.apply(&result);

    let css = optimizer.generate_css();
    assert_eq!(css, generate(&result.config));
    assert_eq!(css, optimizer.generate_css());
    assert!(css.contains("grid-template-columns: repeat(1, 1fr);"));
    assert!(css.contains("line-height: 1.8;"));
    Ok(())
}

#[test]
fn deeply_nested_document_text_is_analyzed() -> TestResult {
    let mut node = table(7, 2).to_string();
    for _ in 0..200 {
        node = format!(r#"{{"type":"section","children":[{}]}}"#, node);
    }
    let text = format!(r#"{{"sections":[{{"children":[{}]}}]}}"#, node);

    let doc = quire::Document::from_json_str(&text)?;
    let stats = analyze(&doc);
    assert_eq!(stats.table_count, 1);
    assert_eq!(stats.max_table_columns, 7);
    Ok(())
}
