use salesdash_core::config::ReportConfig;
use salesdash_core::errors::SalesError;
use salesdash_core::notice::Notice;

use crate::aggregate::{distinct_by_month, sum_by_month};
use crate::context::{ColumnRole, ReportContext};
use crate::registry::{Metric, MetricId};
use crate::section::{ChartKind, ChartSpec, Panel, Section};
use crate::table::{AggregateTable, ValueKind};

fn unparsed_note(ctx: &ReportContext<'_>, unparsed: usize) -> Option<Notice> {
    (unparsed > 0).then(|| {
        Notice::info(format!(
            "{unparsed} rows with an unreadable {} value are not included",
            ctx.header(ColumnRole::Date)
        ))
    })
}

pub struct MonthlyRevenue;

impl Metric for MonthlyRevenue {
    fn id(&self) -> MetricId {
        MetricId::MonthlyRevenue
    }

    fn title(&self, _config: &ReportConfig) -> String {
        "Monthly Revenue Trend".into()
    }

    fn required(&self) -> &'static [ColumnRole] {
        &[ColumnRole::Date, ColumnRole::Amount]
    }

    fn compute(&self, ctx: &ReportContext<'_>) -> Result<Section, SalesError> {
        let months = ctx.months()?;
        let rows = sum_by_month(&months.values, &ctx.amounts()?);
        let table = AggregateTable::new("Month", ctx.header(ColumnRole::Amount), ValueKind::Currency, rows);
        let chart = ChartSpec::new(ChartKind::Line, self.title(ctx.config()))
            .with_axes("Month", ctx.header(ColumnRole::Amount));
        let mut section = Section::new(self.id(), self.title(ctx.config()))
            .with_panel(Panel::new(table).with_chart(chart));
        if let Some(note) = unparsed_note(ctx, months.unparsed) {
            section = section.with_note(note);
        }
        Ok(section)
    }
}

/// Distinct orders per month. Gated like Average Order Value, plus the date
/// column the month buckets come from.
pub struct MonthlyOrders;

impl Metric for MonthlyOrders {
    fn id(&self) -> MetricId {
        MetricId::MonthlyOrders
    }

    fn title(&self, _config: &ReportConfig) -> String {
        "Monthly Orders".into()
    }

    fn required(&self) -> &'static [ColumnRole] {
        &[ColumnRole::OrderId, ColumnRole::Amount, ColumnRole::Date]
    }

    fn compute(&self, ctx: &ReportContext<'_>) -> Result<Section, SalesError> {
        let months = ctx.months()?;
        let rows = distinct_by_month(&months.values, &ctx.keys(ColumnRole::OrderId)?);
        let table = AggregateTable::new("Month", ctx.header(ColumnRole::OrderId), ValueKind::Count, rows);
        let chart = ChartSpec::new(ChartKind::VerticalBar, "Monthly Orders Count")
            .with_axes("Month", "Number of Orders");
        let mut section = Section::new(self.id(), self.title(ctx.config()))
            .with_panel(Panel::new(table).with_chart(chart));
        if let Some(note) = unparsed_note(ctx, months.unparsed) {
            section = section.with_note(note);
        }
        Ok(section)
    }
}
