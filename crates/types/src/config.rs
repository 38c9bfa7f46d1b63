//! The tunable layout parameters consumed by the stylesheet generator.
//!
//! A `LayoutConfig` is a value object: it is built from defaults or a persisted
//! file, copied when adjusted, and replaced wholesale by the next optimization
//! pass. Every sub-record is always present.

use crate::error::ConfigError;
use crate::length::{Length, RawLength};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum OverflowStrategy {
    #[default]
    Wrap,
    Ellipsis,
}

/// Page-wide typography and spacing, in pixels unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub font_size_base: u32,
    pub font_size_h1: u32,
    pub font_size_h2: u32,
    pub font_size_h3: u32,
    pub font_size_h4: u32,
    /// Multiplier of the font size.
    pub line_height: f32,
    pub paragraph_spacing: u32,
    pub section_spacing: u32,
    pub page_padding: u32,
    pub max_content_width: u32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            font_size_base: 14,
            font_size_h1: 28,
            font_size_h2: 24,
            font_size_h3: 20,
            font_size_h4: 16,
            line_height: 1.6,
            paragraph_spacing: 16,
            section_spacing: 32,
            page_padding: 40,
            max_content_width: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiCardLayout {
    pub font_size_value: u32,
    pub font_size_label: u32,
    pub font_size_change: u32,
    pub padding: u32,
    pub min_height: u32,
    /// Character count a value is expected to fit in. Informational only.
    pub value_max_length: u32,
}

impl Default for KpiCardLayout {
    fn default() -> Self {
        Self {
            font_size_value: 32,
            font_size_label: 14,
            font_size_change: 13,
            padding: 20,
            min_height: 120,
            value_max_length: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalloutLayout {
    pub font_size_title: u32,
    pub font_size_content: u32,
    pub padding: u32,
    pub line_height: f32,
    pub max_width: Length,
}

impl Default for CalloutLayout {
    fn default() -> Self {
        Self {
            font_size_title: 16,
            font_size_content: 14,
            padding: 20,
            line_height: 1.6,
            max_width: Length::Percent(100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    pub font_size_header: u32,
    pub font_size_body: u32,
    pub cell_padding: u32,
    pub max_cell_width: u32,
    pub overflow_strategy: OverflowStrategy,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            font_size_header: 13,
            font_size_body: 12,
            cell_padding: 12,
            max_cell_width: 200,
            overflow_strategy: OverflowStrategy::Wrap,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub font_size_title: u32,
    pub font_size_label: u32,
    pub min_height: u32,
    pub max_height: u32,
    pub padding: u32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            font_size_title: 16,
            font_size_label: 12,
            min_height: 300,
            max_height: 600,
            padding: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub columns: u32,
    pub gap: u32,
    /// Viewport width below which the KPI grid collapses to one column.
    pub responsive_breakpoint: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 2,
            gap: 20,
            responsive_breakpoint: 768,
        }
    }
}

/// The complete layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLayoutConfig")]
pub struct LayoutConfig {
    pub page: PageLayout,
    pub kpi_card: KpiCardLayout,
    pub callout: CalloutLayout,
    pub table: TableLayout,
    pub chart: ChartLayout,
    pub grid: GridLayout,

    pub auto_adjust_font_size: bool,
    pub auto_adjust_grid_columns: bool,
    pub prevent_orphan_headers: bool,
    pub optimize_for_print: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page: PageLayout::default(),
            kpi_card: KpiCardLayout::default(),
            callout: CalloutLayout::default(),
            table: TableLayout::default(),
            chart: ChartLayout::default(),
            grid: GridLayout::default(),
            auto_adjust_font_size: true,
            auto_adjust_grid_columns: true,
            prevent_orphan_headers: true,
            optimize_for_print: true,
        }
    }
}

impl LayoutConfig {
    /// Checks that every numeric parameter is positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let PageLayout {
            font_size_base,
            font_size_h1,
            font_size_h2,
            font_size_h3,
            font_size_h4,
            line_height,
            paragraph_spacing,
            section_spacing,
            page_padding,
            max_content_width,
        } = &self.page;
        positive("page.font_size_base", *font_size_base)?;
        positive("page.font_size_h1", *font_size_h1)?;
        positive("page.font_size_h2", *font_size_h2)?;
        positive("page.font_size_h3", *font_size_h3)?;
        positive("page.font_size_h4", *font_size_h4)?;
        positive_ratio("page.line_height", *line_height)?;
        positive("page.paragraph_spacing", *paragraph_spacing)?;
        positive("page.section_spacing", *section_spacing)?;
        positive("page.page_padding", *page_padding)?;
        positive("page.max_content_width", *max_content_width)?;

        let kpi = &self.kpi_card;
        positive("kpi_card.font_size_value", kpi.font_size_value)?;
        positive("kpi_card.font_size_label", kpi.font_size_label)?;
        positive("kpi_card.font_size_change", kpi.font_size_change)?;
        positive("kpi_card.padding", kpi.padding)?;
        positive("kpi_card.min_height", kpi.min_height)?;
        positive("kpi_card.value_max_length", kpi.value_max_length)?;

        let callout = &self.callout;
        positive("callout.font_size_title", callout.font_size_title)?;
        positive("callout.font_size_content", callout.font_size_content)?;
        positive("callout.padding", callout.padding)?;
        positive_ratio("callout.line_height", callout.line_height)?;
        if !callout.max_width.is_positive() {
            return Err(ConfigError::invalid(
                "callout.max_width",
                format!("must be positive, got {}", callout.max_width),
            ));
        }

        let table = &self.table;
        positive("table.font_size_header", table.font_size_header)?;
        positive("table.font_size_body", table.font_size_body)?;
        positive("table.cell_padding", table.cell_padding)?;
        positive("table.max_cell_width", table.max_cell_width)?;

        let chart = &self.chart;
        positive("chart.font_size_title", chart.font_size_title)?;
        positive("chart.font_size_label", chart.font_size_label)?;
        positive("chart.min_height", chart.min_height)?;
        positive("chart.max_height", chart.max_height)?;
        positive("chart.padding", chart.padding)?;

        positive("grid.columns", self.grid.columns)?;
        positive("grid.gap", self.grid.gap)?;
        positive("grid.responsive_breakpoint", self.grid.responsive_breakpoint)?;
        Ok(())
    }
}

fn positive(field: &str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::invalid(field, "must be greater than zero"));
    }
    Ok(())
}

fn positive_ratio(field: &str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::invalid(
            field,
            format!("must be a positive number, got {}", value),
        ));
    }
    Ok(())
}

/// A callout sub-record whose `max_width` has not been parsed yet.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RawCalloutLayout {
    pub font_size_title: u32,
    pub font_size_content: u32,
    pub padding: u32,
    pub line_height: f32,
    pub max_width: RawLength,
}

impl Default for RawCalloutLayout {
    fn default() -> Self {
        let callout = CalloutLayout::default();
        Self {
            font_size_title: callout.font_size_title,
            font_size_content: callout.font_size_content,
            padding: callout.padding,
            line_height: callout.line_height,
            max_width: callout.max_width.into(),
        }
    }
}

impl TryFrom<RawCalloutLayout> for CalloutLayout {
    type Error = ConfigError;

    fn try_from(raw: RawCalloutLayout) -> Result<Self, Self::Error> {
        let max_width = raw
            .max_width
            .parse()
            .map_err(|reason| ConfigError::invalid("callout.max_width", reason))?;
        Ok(CalloutLayout {
            font_size_title: raw.font_size_title,
            font_size_content: raw.font_size_content,
            padding: raw.padding,
            line_height: raw.line_height,
            max_width,
        })
    }
}

fn default_switch() -> bool {
    true
}

/// The persisted shape of a `LayoutConfig` before its sub-records are checked.
///
/// Sub-records are optional here so their absence can be reported by name;
/// switches fall back to `true`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLayoutConfig {
    pub page: Option<PageLayout>,
    pub kpi_card: Option<KpiCardLayout>,
    pub callout: Option<RawCalloutLayout>,
    pub table: Option<TableLayout>,
    pub chart: Option<ChartLayout>,
    pub grid: Option<GridLayout>,
    #[serde(default = "default_switch")]
    pub auto_adjust_font_size: bool,
    #[serde(default = "default_switch")]
    pub auto_adjust_grid_columns: bool,
    #[serde(default = "default_switch")]
    pub prevent_orphan_headers: bool,
    #[serde(default = "default_switch")]
    pub optimize_for_print: bool,
}

impl TryFrom<RawLayoutConfig> for LayoutConfig {
    type Error = ConfigError;

    fn try_from(raw: RawLayoutConfig) -> Result<Self, Self::Error> {
        Ok(LayoutConfig {
            page: raw.page.ok_or(ConfigError::MissingSection("page"))?,
            kpi_card: raw.kpi_card.ok_or(ConfigError::MissingSection("kpi_card"))?,
            callout: raw
                .callout
                .ok_or(ConfigError::MissingSection("callout"))?
                .try_into()?,
            table: raw.table.ok_or(ConfigError::MissingSection("table"))?,
            chart: raw.chart.ok_or(ConfigError::MissingSection("chart"))?,
            grid: raw.grid.ok_or(ConfigError::MissingSection("grid"))?,
            auto_adjust_font_size: raw.auto_adjust_font_size,
            auto_adjust_grid_columns: raw.auto_adjust_grid_columns,
            prevent_orphan_headers: raw.prevent_orphan_headers,
            optimize_for_print: raw.optimize_for_print,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_are_valid() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid.columns, 2);
        assert_eq!(config.kpi_card.font_size_value, 32);
        assert_eq!(config.table.overflow_strategy, OverflowStrategy::Wrap);
        assert_eq!(config.callout.max_width, Length::Percent(100.0));
    }

    #[test]
    fn test_validate_names_the_field() {
        let mut config = LayoutConfig::default();
        config.table.cell_padding = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "table.cell_padding".to_string(),
                reason: "must be greater than zero".to_string(),
            })
        );

        let mut config = LayoutConfig::default();
        config.page.line_height = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "page.line_height"
        ));
    }

    #[test]
    fn test_missing_switch_defaults_to_true() {
        let mut value = serde_json::to_value(LayoutConfig::default()).unwrap();
        let obj = value.as_object_mut().unwrap();
        obj.remove("optimize_for_print");
        obj.insert("prevent_orphan_headers".into(), json!(false));

        let config: LayoutConfig = serde_json::from_value(value).unwrap();
        assert!(config.optimize_for_print);
        assert!(!config.prevent_orphan_headers);
    }

    #[test]
    fn test_missing_sub_record_is_an_error() {
        let mut value = serde_json::to_value(LayoutConfig::default()).unwrap();
        value.as_object_mut().unwrap().remove("chart");

        let err = serde_json::from_value::<LayoutConfig>(value).unwrap_err();
        assert!(err.to_string().contains("'chart'"), "{}", err);

        let raw: RawLayoutConfig = serde_json::from_value(json!({
            "page": {}, "kpi_card": {}, "callout": {}, "table": {}, "chart": {}
        }))
        .unwrap();
        assert_eq!(
            LayoutConfig::try_from(raw),
            Err(ConfigError::MissingSection("grid"))
        );
    }

    #[test]
    fn test_partial_sub_record_keeps_field_defaults() {
        let mut value = serde_json::to_value(LayoutConfig::default()).unwrap();
        value["table"] = json!({ "cell_padding": 6, "overflow_strategy": "ellipsis" });

        let config: LayoutConfig = serde_json::from_value(value).unwrap();
        assert_eq!(config.table.cell_padding, 6);
        assert_eq!(config.table.overflow_strategy, OverflowStrategy::Ellipsis);
        assert_eq!(config.table.font_size_header, 13);
    }

    #[test]
    fn test_unparsable_max_width_names_the_field() {
        let mut value = serde_json::to_value(LayoutConfig::default()).unwrap();
        value["callout"]["max_width"] = json!("wide");
        let raw: RawLayoutConfig = serde_json::from_value(value).unwrap();

        assert!(matches!(
            LayoutConfig::try_from(raw),
            Err(ConfigError::InvalidValue { field, reason })
                if field == "callout.max_width" && reason.contains("'wide'")
        ));
    }

    #[test]
    fn test_unknown_overflow_strategy_is_rejected() {
        let mut value = serde_json::to_value(LayoutConfig::default()).unwrap();
        value["table"]["overflow_strategy"] = json!("clip");
        assert!(serde_json::from_value::<LayoutConfig>(value).is_err());
    }
}
