use salesdash_core::config::ReportConfig;
use salesdash_core::errors::SalesError;
use salesdash_core::notice::Notice;

use crate::aggregate::{group_sum, top_n};
use crate::context::{ColumnRole, ReportContext};
use crate::registry::{Metric, MetricId};
use crate::section::{ChartKind, ChartSpec, Panel, Section};
use crate::table::{AggregateTable, ValueKind};

/// Top-N revenue ranking over one key column.
pub(crate) fn ranking_panel(
    ctx: &ReportContext<'_>,
    key: ColumnRole,
    chart_title: String,
) -> Result<Panel, SalesError> {
    let rows = top_n(group_sum(&ctx.keys(key)?, &ctx.amounts()?), ctx.top_n());
    let table = AggregateTable::new(
        ctx.header(key),
        ctx.header(ColumnRole::Amount),
        ValueKind::Currency,
        rows,
    );
    let chart = ChartSpec::new(ChartKind::HorizontalBar, chart_title)
        .with_axes("Revenue", ctx.header(key));
    Ok(Panel::new(table).with_chart(chart))
}

pub struct TopProducts;

impl Metric for TopProducts {
    fn id(&self) -> MetricId {
        MetricId::TopProducts
    }

    fn title(&self, config: &ReportConfig) -> String {
        format!("Top {} Products by Revenue", config.top_n)
    }

    fn required(&self) -> &'static [ColumnRole] {
        &[ColumnRole::Sku, ColumnRole::Amount]
    }

    fn compute(&self, ctx: &ReportContext<'_>) -> Result<Section, SalesError> {
        let title = self.title(ctx.config());
        let panel = ranking_panel(ctx, ColumnRole::Sku, title.clone())?;
        Ok(Section::new(self.id(), title).with_panel(panel))
    }
}

/// Highest-value orders. There is no customer column in the source data, so
/// this ranks order ids rather than customers.
pub struct TopOrders;

impl Metric for TopOrders {
    fn id(&self) -> MetricId {
        MetricId::TopOrders
    }

    fn title(&self, config: &ReportConfig) -> String {
        format!("Top {} Highest-Value Orders", config.top_n)
    }

    fn required(&self) -> &'static [ColumnRole] {
        &[ColumnRole::OrderId, ColumnRole::Amount]
    }

    fn compute(&self, ctx: &ReportContext<'_>) -> Result<Section, SalesError> {
        let title = self.title(ctx.config());
        let panel = ranking_panel(ctx, ColumnRole::OrderId, title.clone())?;
        Ok(Section::new(self.id(), title)
            .with_panel(panel)
            .with_note(Notice::info(format!(
                "Ranked by {}; the dataset has no customer identifier, so each entry is a single order.",
                ctx.header(ColumnRole::OrderId)
            ))))
    }
}
