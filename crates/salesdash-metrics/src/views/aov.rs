use salesdash_core::config::ReportConfig;
use salesdash_core::errors::SalesError;

use crate::aggregate::distinct_count;
use crate::context::{ColumnRole, ReportContext};
use crate::registry::{Metric, MetricId};
use crate::section::{Scalar, Section};

pub const TOTAL_ORDERS_LABEL: &str = "Total Orders";
pub const AOV_LABEL: &str = "Average Order Value";

/// Total revenue over the number of distinct order ids; zero when there are
/// no orders.
pub fn average_order_value(total_revenue: f64, distinct_orders: usize) -> f64 {
    if distinct_orders == 0 {
        0.0
    } else {
        total_revenue / distinct_orders as f64
    }
}

pub struct AverageOrderValue;

impl Metric for AverageOrderValue {
    fn id(&self) -> MetricId {
        MetricId::AverageOrderValue
    }

    fn title(&self, _config: &ReportConfig) -> String {
        "Average Order Value (AOV)".into()
    }

    fn required(&self) -> &'static [ColumnRole] {
        &[ColumnRole::OrderId, ColumnRole::Amount]
    }

    fn compute(&self, ctx: &ReportContext<'_>) -> Result<Section, SalesError> {
        let orders = distinct_count(&ctx.keys(ColumnRole::OrderId)?);
        let aov = average_order_value(ctx.total_revenue()?, orders);
        Ok(Section::new(self.id(), self.title(ctx.config()))
            .with_scalar(Scalar::count(TOTAL_ORDERS_LABEL, orders))
            .with_scalar(Scalar::currency(AOV_LABEL, aov)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_orders_means_zero_aov() {
        assert_eq!(average_order_value(120.0, 0), 0.0);
        assert_eq!(average_order_value(150.0, 1), 150.0);
        assert_eq!(average_order_value(90.0, 4), 22.5);
    }
}
