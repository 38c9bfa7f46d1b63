pub mod config;
pub mod error;
pub mod length;
pub mod stats;

pub use config::{
    CalloutLayout, ChartLayout, GridLayout, KpiCardLayout, LayoutConfig, OverflowStrategy,
    PageLayout, RawCalloutLayout, RawLayoutConfig, TableLayout,
};
pub use error::ConfigError;
pub use length::{Length, RawLength};
pub use stats::DocumentStatistics;
