use salesdash_core::config::ReportConfig;
use salesdash_core::errors::SalesError;

use crate::aggregate::{group_sum, sort_descending};
use crate::context::{ColumnRole, ReportContext};
use crate::registry::{Metric, MetricId};
use crate::section::{ChartKind, ChartSpec, Panel, Section};
use crate::table::{AggregateTable, ValueKind};

pub struct CategoryRevenue;

impl Metric for CategoryRevenue {
    fn id(&self) -> MetricId {
        MetricId::CategoryRevenue
    }

    fn title(&self, _config: &ReportConfig) -> String {
        "Revenue by Product Category".into()
    }

    fn required(&self) -> &'static [ColumnRole] {
        &[ColumnRole::Category, ColumnRole::Amount]
    }

    fn compute(&self, ctx: &ReportContext<'_>) -> Result<Section, SalesError> {
        let mut rows = group_sum(&ctx.keys(ColumnRole::Category)?, &ctx.amounts()?);
        sort_descending(&mut rows);
        let table = AggregateTable::new(
            ctx.header(ColumnRole::Category),
            ctx.header(ColumnRole::Amount),
            ValueKind::Currency,
            rows,
        );
        let chart = ChartSpec::new(ChartKind::HorizontalBar, self.title(ctx.config()))
            .with_axes(
                format!("Revenue ({})", ctx.config().currency_symbol),
                ctx.header(ColumnRole::Category),
            )
            .annotated();
        Ok(Section::new(self.id(), self.title(ctx.config()))
            .with_panel(Panel::new(table).with_chart(chart)))
    }
}
