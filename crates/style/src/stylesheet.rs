//! Turns a `LayoutConfig` into the print stylesheet handed to the HTML renderer.

use crate::css::{CssRule, CssSheet};
use quire_types::{LayoutConfig, OverflowStrategy};

/// Generates the print stylesheet for `config`.
///
/// Pure and deterministic: the same config always yields the same text.
pub fn generate(config: &LayoutConfig) -> String {
    build_sheet(config).to_string()
}

/// Builds the ordered rule set behind [`generate`].
pub fn build_sheet(config: &LayoutConfig) -> CssSheet {
    let mut sheet = CssSheet::new();
    sheet.comment("Print layout generated by quire");
    page_rules(&mut sheet, config);
    kpi_rules(&mut sheet, config);
    callout_rules(&mut sheet, config);
    table_rules(&mut sheet, config);
    chart_rules(&mut sheet, config);
    pagination_rules(&mut sheet, config);
    sheet
}

fn px(value: u32) -> String {
    format!("{}px", value)
}

fn page_rules(sheet: &mut CssSheet, config: &LayoutConfig) {
    let page = &config.page;
    sheet
        .rule(
            CssRule::new("body")
                .decl("font-size", px(page.font_size_base))
                .decl("line-height", page.line_height),
        )
        .rule(
            CssRule::new("main")
                .important("padding", px(page.page_padding))
                .decl("max-width", px(page.max_content_width))
                .decl("margin", "0 auto"),
        );

    let headings = [
        ("h1", page.font_size_h1),
        ("h2", page.font_size_h2),
        ("h3", page.font_size_h3),
        ("h4", page.font_size_h4),
    ];
    for (tag, size) in headings {
        sheet.rule(CssRule::new(tag).important("font-size", px(size)));
    }

    sheet
        .rule(CssRule::new("p").decl("margin-bottom", px(page.paragraph_spacing)))
        .rule(CssRule::new(".chapter").decl("margin-bottom", px(page.section_spacing)));
}

fn kpi_rules(sheet: &mut CssSheet, config: &LayoutConfig) {
    let print = config.optimize_for_print;
    let (grid, kpi) = (&config.grid, &config.kpi_card);

    let mut card = CssRule::new(".kpi-card")
        .important("padding", px(kpi.padding))
        .decl("min-height", px(kpi.min_height));
    if print {
        card = card.avoid_break_inside();
    }

    sheet
        .rule(
            CssRule::new(".kpi-grid")
                .decl("display", "grid")
                .decl("grid-template-columns", format!("repeat({}, 1fr)", grid.columns))
                .decl("gap", px(grid.gap))
                .decl("margin", "20px 0"),
        )
        .rule(card)
        .rule(
            CssRule::new(".kpi-card .value")
                .important("font-size", px(kpi.font_size_value))
                .decl("line-height", "1.2")
                .decl("word-break", "break-word"),
        )
        .rule(CssRule::new(".kpi-card .label").important("font-size", px(kpi.font_size_label)))
        .rule(CssRule::new(".kpi-card .change").important("font-size", px(kpi.font_size_change)))
        .media(
            format!("screen and (max-width: {}px)", grid.responsive_breakpoint),
            vec![CssRule::new(".kpi-grid").decl("grid-template-columns", "1fr")],
        );
}

fn callout_rules(sheet: &mut CssSheet, config: &LayoutConfig) {
    let callout = &config.callout;
    let mut block = CssRule::new(".callout")
        .important("padding", px(callout.padding))
        .decl("margin", "20px 0")
        .decl("line-height", callout.line_height)
        .decl("max-width", callout.max_width);
    if config.optimize_for_print {
        block = block.avoid_break_inside();
    }

    sheet
        .rule(block)
        .rule(
            CssRule::new(".callout-title")
                .important("font-size", px(callout.font_size_title))
                .decl("margin-bottom", "10px"),
        )
        .rule(CssRule::new(".callout-content").important("font-size", px(callout.font_size_content)));
}

fn table_rules(sheet: &mut CssSheet, config: &LayoutConfig) {
    let table = &config.table;
    let ellipsis = table.overflow_strategy == OverflowStrategy::Ellipsis;

    sheet.rule(CssRule::new("table").decl("width", "100%"));
    if config.optimize_for_print {
        sheet.rule(CssRule::new("tr").avoid_break_inside());
    }

    sheet
        .rule(
            CssRule::new("th")
                .important("font-size", px(table.font_size_header))
                .important("padding", px(table.cell_padding)),
        )
        .rule(
            CssRule::new("td")
                .important("font-size", px(table.font_size_body))
                .important("padding", px(table.cell_padding))
                .decl("max-width", px(table.max_cell_width))
                .decl("word-wrap", "break-word")
                .decl("overflow-wrap", "break-word")
                .decl_if(ellipsis, "white-space", "nowrap")
                .decl_if(ellipsis, "overflow", "hidden")
                .decl_if(ellipsis, "text-overflow", "ellipsis"),
        );
}

fn chart_rules(sheet: &mut CssSheet, config: &LayoutConfig) {
    let chart = &config.chart;
    let mut card = CssRule::new(".chart-card")
        .decl("min-height", px(chart.min_height))
        .decl("max-height", px(chart.max_height))
        .decl("padding", px(chart.padding));
    if config.optimize_for_print {
        card = card.avoid_break_inside();
    }

    sheet
        .rule(card)
        .rule(CssRule::new(".chart-title").important("font-size", px(chart.font_size_title)))
        .rule(CssRule::new(".chart-card .chart-label").decl("font-size", px(chart.font_size_label)));
}

fn pagination_rules(sheet: &mut CssSheet, config: &LayoutConfig) {
    if config.prevent_orphan_headers {
        sheet.rule(
            CssRule::new("h1, h2, h3, h4, h5, h6")
                .decl("break-after", "avoid")
                .decl("page-break-after", "avoid"),
        );
    }
    if config.optimize_for_print {
        sheet.rule(CssRule::new(".content-block").avoid_break_inside());
    }
}
