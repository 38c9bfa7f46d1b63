//! Derives an adjusted `LayoutConfig` from document statistics.
//!
//! Rules run in a fixed order, each gated on its own condition:
//!
//! 1. KPI values longer than [`KPI_VALUE_VERY_LONG`] characters shrink the
//!    value font to [`KPI_FONT_VERY_LONG`]; otherwise values longer than
//!    [`KPI_VALUE_LONG`] shrink it to [`KPI_FONT_LONG`]. The two thresholds are
//!    checked independently, so a 16-character value gets the smaller font.
//! 2. More than [`MANY_KPIS`] KPIs: three grid columns and shorter cards.
//! 3. Otherwise, at most [`FEW_KPIS`] KPIs: a single grid column. Counts in
//!    between keep the base column count.
//! 4. A table wider than [`WIDE_TABLE_COLUMNS`] columns: smaller table fonts
//!    and tighter cell padding.
//! 5. Long text anywhere: page and callout line-height rise to
//!    [`LONG_TEXT_LINE_HEIGHT`].
//!
//! Every rule that fires contributes exactly one description.

use quire_types::{DocumentStatistics, LayoutConfig};

pub const KPI_VALUE_LONG: usize = 10;
pub const KPI_VALUE_VERY_LONG: usize = 15;
pub const KPI_FONT_LONG: u32 = 28;
pub const KPI_FONT_VERY_LONG: u32 = 24;

pub const MANY_KPIS: usize = 6;
pub const FEW_KPIS: usize = 2;
pub const MANY_KPIS_COLUMNS: u32 = 3;
pub const MANY_KPIS_CARD_HEIGHT: u32 = 100;
pub const FEW_KPIS_COLUMNS: u32 = 1;

pub const WIDE_TABLE_COLUMNS: usize = 6;
pub const WIDE_TABLE_HEADER_FONT: u32 = 11;
pub const WIDE_TABLE_BODY_FONT: u32 = 10;
pub const WIDE_TABLE_CELL_PADDING: u32 = 8;

pub const LONG_TEXT_LINE_HEIGHT: f32 = 1.8;

/// Returns a copy of `base` adjusted for `stats`, plus one description per rule applied.
pub fn adjust(base: &LayoutConfig, stats: &DocumentStatistics) -> (LayoutConfig, Vec<String>) {
    let mut config = base.clone();
    let mut notes = Vec::new();

    let value_len = stats.max_kpi_value_length;
    let kpi_font = if value_len > KPI_VALUE_VERY_LONG {
        Some((KPI_FONT_VERY_LONG, KPI_VALUE_VERY_LONG))
    } else if value_len > KPI_VALUE_LONG {
        Some((KPI_FONT_LONG, KPI_VALUE_LONG))
    } else {
        None
    };
    if let Some((font, threshold)) = kpi_font {
        notes.push(format!(
            "KPI values up to {} characters (over {}): value font size {}px -> {}px",
            value_len, threshold, config.kpi_card.font_size_value, font
        ));
        config.kpi_card.font_size_value = font;
    }

    let kpis = stats.kpi_count;
    if kpis > MANY_KPIS {
        notes.push(format!(
            "{} KPI cards (over {}): grid columns {} -> {}, card min-height {}px -> {}px",
            kpis,
            MANY_KPIS,
            config.grid.columns,
            MANY_KPIS_COLUMNS,
            config.kpi_card.min_height,
            MANY_KPIS_CARD_HEIGHT
        ));
        config.grid.columns = MANY_KPIS_COLUMNS;
        config.kpi_card.min_height = MANY_KPIS_CARD_HEIGHT;
    } else if kpis <= FEW_KPIS {
        notes.push(format!(
            "{} KPI cards (at most {}): grid columns {} -> {}",
            kpis, FEW_KPIS, config.grid.columns, FEW_KPIS_COLUMNS
        ));
        config.grid.columns = FEW_KPIS_COLUMNS;
    }

    let columns = stats.max_table_columns;
    if columns > WIDE_TABLE_COLUMNS {
        let table = &mut config.table;
        notes.push(format!(
            "Widest table has {} columns (over {}): header font {}px -> {}px, body font {}px -> {}px, cell padding {}px -> {}px",
            columns,
            WIDE_TABLE_COLUMNS,
            table.font_size_header,
            WIDE_TABLE_HEADER_FONT,
            table.font_size_body,
            WIDE_TABLE_BODY_FONT,
            table.cell_padding,
            WIDE_TABLE_CELL_PADDING
        ));
        table.font_size_header = WIDE_TABLE_HEADER_FONT;
        table.font_size_body = WIDE_TABLE_BODY_FONT;
        table.cell_padding = WIDE_TABLE_CELL_PADDING;
    }

    if stats.has_long_text {
        notes.push(format!(
            "Long text detected: page line-height {} -> {}, callout line-height {} -> {}",
            config.page.line_height,
            LONG_TEXT_LINE_HEIGHT,
            config.callout.line_height,
            LONG_TEXT_LINE_HEIGHT
        ));
        config.page.line_height = LONG_TEXT_LINE_HEIGHT;
        config.callout.line_height = LONG_TEXT_LINE_HEIGHT;
    }

    (config, notes)
}
