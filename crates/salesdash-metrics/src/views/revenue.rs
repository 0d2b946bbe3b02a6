use salesdash_core::config::ReportConfig;
use salesdash_core::errors::SalesError;

use crate::context::{ColumnRole, ReportContext};
use crate::registry::{Metric, MetricId};
use crate::section::{Scalar, Section};

pub const TOTAL_REVENUE_LABEL: &str = "Total Revenue Generated";

pub struct TotalRevenue;

impl Metric for TotalRevenue {
    fn id(&self) -> MetricId {
        MetricId::TotalRevenue
    }

    fn title(&self, _config: &ReportConfig) -> String {
        "Revenue Summary".into()
    }

    fn required(&self) -> &'static [ColumnRole] {
        &[ColumnRole::Amount]
    }

    fn compute(&self, ctx: &ReportContext<'_>) -> Result<Section, SalesError> {
        let total = ctx.total_revenue()?;
        Ok(Section::new(self.id(), self.title(ctx.config()))
            .with_scalar(Scalar::currency(TOTAL_REVENUE_LABEL, total)))
    }
}
