use salesdash_core::config::{ColumnMap, ReportConfig};
use salesdash_core::errors::{ErrorInfo, SalesError};
use salesdash_data::{Dataset, DerivedMonths};
use serde::{Deserialize, Serialize};

/// Logical column a metric depends on. The actual header name comes from
/// [`ColumnMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Date,
    Amount,
    Category,
    OrderId,
    Sku,
    ShipCity,
    ShipState,
    SalesChannel,
}

impl ColumnRole {
    pub fn header<'a>(&self, columns: &'a ColumnMap) -> &'a str {
        match self {
            ColumnRole::Date => &columns.date,
            ColumnRole::Amount => &columns.amount,
            ColumnRole::Category => &columns.category,
            ColumnRole::OrderId => &columns.order_id,
            ColumnRole::Sku => &columns.sku,
            ColumnRole::ShipCity => &columns.ship_city,
            ColumnRole::ShipState => &columns.ship_state,
            ColumnRole::SalesChannel => &columns.sales_channel,
        }
    }
}

/// Everything a metric may read during one render. Built once per render and
/// passed to each metric in turn.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    dataset: &'a Dataset,
    config: &'a ReportConfig,
}

impl<'a> ReportContext<'a> {
    pub fn new(dataset: &'a Dataset, config: &'a ReportConfig) -> Self {
        Self { dataset, config }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn config(&self) -> &'a ReportConfig {
        self.config
    }

    pub fn header(&self, role: ColumnRole) -> &'a str {
        role.header(&self.config.columns)
    }

    /// Header names for `roles` that the dataset lacks.
    pub fn missing(&self, roles: &[ColumnRole]) -> Vec<String> {
        let headers: Vec<&str> = roles.iter().map(|role| self.header(*role)).collect();
        self.dataset.missing_columns(&headers)
    }

    /// Raw cell text of a column.
    pub fn keys(&self, role: ColumnRole) -> Result<Vec<&'a str>, SalesError> {
        let header = self.header(role);
        self.dataset
            .column(header)
            .ok_or_else(|| missing_column(header))
    }

    /// Parsed amounts, `None` where a cell is empty or not a number.
    pub fn amounts(&self) -> Result<Vec<Option<f64>>, SalesError> {
        let header = self.header(ColumnRole::Amount);
        let values = self
            .dataset
            .numbers(header)
            .ok_or_else(|| missing_column(header))?;
        let skipped = values.iter().filter(|value| value.is_none()).count();
        if skipped > 0 {
            log::debug!("{skipped} {header:?} cells are empty or not numeric; excluded from sums");
        }
        Ok(values)
    }

    /// Sum of the amount column over the full dataset. Revenue Summary and
    /// Average Order Value both read this.
    pub fn total_revenue(&self) -> Result<f64, SalesError> {
        Ok(crate::aggregate::total(&self.amounts()?))
    }

    pub fn months(&self) -> Result<&'a DerivedMonths, SalesError> {
        self.dataset.months().ok_or_else(|| {
            SalesError::Metric(
                ErrorInfo::new("metrics.months_missing", "month column has not been derived")
                    .with_context("date_column", self.header(ColumnRole::Date))
                    .with_hint("call prepare_dataset before building the context"),
            )
        })
    }

    pub fn top_n(&self) -> usize {
        self.config.top_n
    }
}

fn missing_column(header: &str) -> SalesError {
    SalesError::Metric(
        ErrorInfo::new("metrics.column_missing", "required column is absent")
            .with_context("column", header),
    )
}
