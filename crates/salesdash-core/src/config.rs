//! Report configuration loaded from YAML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SalesError};
use crate::serde::from_yaml_str;

/// Header names the report looks for. Every entry is optional in the data;
/// a missing header only disables the views that need it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    /// Order date column.
    pub date: String,
    /// Order amount (measure) column.
    pub amount: String,
    /// Product category column.
    pub category: String,
    /// Order identifier column.
    pub order_id: String,
    /// Product identifier column.
    pub sku: String,
    /// Shipping city column.
    pub ship_city: String,
    /// Shipping state column.
    pub ship_state: String,
    /// Sales channel column.
    pub sales_channel: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            date: "Date".into(),
            amount: "Amount".into(),
            category: "Category".into(),
            order_id: "Order ID".into(),
            sku: "SKU".into(),
            ship_city: "ship-city".into(),
            ship_state: "ship-state".into(),
            sales_channel: "Sales Channel".into(),
        }
    }
}

/// Pixel dimensions for rendered charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    /// Chart width in pixels.
    pub width: u32,
    /// Chart height in pixels.
    pub height: u32,
    /// Horizontal space reserved for category labels on bar charts.
    pub label_width: u32,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 320,
            label_width: 140,
        }
    }
}

fn default_date_formats() -> Vec<String> {
    [
        "%Y-%m-%d", "%m-%d-%y", "%m-%d-%Y", "%m/%d/%Y", "%m/%d/%y", "%d.%m.%Y", "%Y/%m/%d",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Top level configuration for a report render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Page title.
    pub title: String,
    /// File read when no input is supplied for the render.
    pub default_source: PathBuf,
    /// Currency symbol prefixed to monetary values.
    pub currency_symbol: String,
    /// Length of the top-N rankings.
    pub top_n: usize,
    /// Number of rows shown in the dataset preview.
    pub preview_rows: usize,
    /// Date formats tried in order when deriving months.
    pub date_formats: Vec<String>,
    /// Header names.
    pub columns: ColumnMap,
    /// Chart dimensions.
    pub figures: FigureConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "E-commerce Data Analysis".into(),
            default_source: PathBuf::from("Amazon Sale Report.csv"),
            currency_symbol: "\u{20b9}".into(),
            top_n: 5,
            preview_rows: 5,
            date_formats: default_date_formats(),
            columns: ColumnMap::default(),
            figures: FigureConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Reads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, SalesError> {
        let raw = fs::read_to_string(path).map_err(|err| {
            SalesError::Config(
                ErrorInfo::new("config.read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        let config: ReportConfig = from_yaml_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file when given, otherwise falls back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SalesError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Rejects configurations the renderer cannot honour.
    pub fn validate(&self) -> Result<(), SalesError> {
        if self.title.trim().is_empty() {
            return Err(SalesError::Config(ErrorInfo::new(
                "config.title",
                "report title cannot be empty",
            )));
        }
        if self.currency_symbol.is_empty() {
            return Err(SalesError::Config(ErrorInfo::new(
                "config.currency_symbol",
                "currency symbol cannot be empty",
            )));
        }
        if self.top_n == 0 {
            return Err(SalesError::Config(
                ErrorInfo::new("config.top_n", "top_n must be at least 1")
                    .with_context("top_n", self.top_n.to_string()),
            ));
        }
        if self.figures.width <= self.figures.label_width || self.figures.height == 0 {
            return Err(SalesError::Config(
                ErrorInfo::new("config.figures", "figure area is empty")
                    .with_context("width", self.figures.width.to_string())
                    .with_context("height", self.figures.height.to_string())
                    .with_hint("width must exceed label_width"),
            ));
        }
        Ok(())
    }
}
