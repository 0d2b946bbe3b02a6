use salesdash_core::config::ReportConfig;
use salesdash_core::errors::SalesError;

use super::ranking::ranking_panel;
use crate::context::{ColumnRole, ReportContext};
use crate::registry::{Metric, MetricId};
use crate::section::Section;

/// City and state rankings, computed independently of each other.
pub struct GeoRevenue;

impl Metric for GeoRevenue {
    fn id(&self) -> MetricId {
        MetricId::GeoRevenue
    }

    fn title(&self, _config: &ReportConfig) -> String {
        "Top Cities and States by Revenue".into()
    }

    fn required(&self) -> &'static [ColumnRole] {
        &[ColumnRole::ShipCity, ColumnRole::ShipState, ColumnRole::Amount]
    }

    fn compute(&self, ctx: &ReportContext<'_>) -> Result<Section, SalesError> {
        let n = ctx.top_n();
        let cities_title = format!("Top {n} Cities by Revenue");
        let states_title = format!("Top {n} States by Revenue");
        let cities = ranking_panel(ctx, ColumnRole::ShipCity, cities_title.clone())?.titled(cities_title);
        let states = ranking_panel(ctx, ColumnRole::ShipState, states_title.clone())?.titled(states_title);
        Ok(Section::new(self.id(), self.title(ctx.config()))
            .with_panel(cities)
            .with_panel(states)
            .side_by_side())
    }
}
