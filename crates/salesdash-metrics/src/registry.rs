use salesdash_core::config::ReportConfig;
use salesdash_core::errors::SalesError;
use serde::{Deserialize, Serialize};

use crate::context::{ColumnRole, ReportContext};
use crate::section::Section;
use crate::views;

/// Stable identifier for each registered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    TotalRevenue,
    MonthlyRevenue,
    CategoryRevenue,
    AverageOrderValue,
    MonthlyOrders,
    TopProducts,
    TopOrders,
    GeoRevenue,
}

impl MetricId {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricId::TotalRevenue => "total_revenue",
            MetricId::MonthlyRevenue => "monthly_revenue",
            MetricId::CategoryRevenue => "category_revenue",
            MetricId::AverageOrderValue => "average_order_value",
            MetricId::MonthlyOrders => "monthly_orders",
            MetricId::TopProducts => "top_products",
            MetricId::TopOrders => "top_orders",
            MetricId::GeoRevenue => "geo_revenue",
        }
    }
}

/// A report view gated on the columns it needs.
pub trait Metric {
    fn id(&self) -> MetricId;

    fn title(&self, config: &ReportConfig) -> String;

    /// Columns that must all be present for [`Metric::compute`] to run.
    fn required(&self) -> &'static [ColumnRole];

    fn compute(&self, ctx: &ReportContext<'_>) -> Result<Section, SalesError>;
}

/// Whether a metric would run against the current dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub id: MetricId,
    pub title: String,
    pub required: Vec<String>,
    pub missing: Vec<String>,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Metric left out of the page because columns were missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedMetric {
    pub id: MetricId,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryRun {
    pub sections: Vec<Section>,
    pub skipped: Vec<SkippedMetric>,
}

impl RegistryRun {
    pub fn section(&self, id: MetricId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }
}

/// Ordered list of metrics. Page order is registration order.
#[derive(Default)]
pub struct MetricRegistry {
    metrics: Vec<Box<dyn Metric>>,
}

impl MetricRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full sales report in page order.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(views::TotalRevenue));
        registry.register(Box::new(views::MonthlyRevenue));
        registry.register(Box::new(views::CategoryRevenue));
        registry.register(Box::new(views::AverageOrderValue));
        registry.register(Box::new(views::MonthlyOrders));
        registry.register(Box::new(views::TopProducts));
        registry.register(Box::new(views::TopOrders));
        registry.register(Box::new(views::GeoRevenue));
        registry
    }

    pub fn register(&mut self, metric: Box<dyn Metric>) {
        self.metrics.push(metric);
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn ids(&self) -> Vec<MetricId> {
        self.metrics.iter().map(|metric| metric.id()).collect()
    }

    pub fn availability(&self, ctx: &ReportContext<'_>) -> Vec<Availability> {
        self.metrics
            .iter()
            .map(|metric| Availability {
                id: metric.id(),
                title: metric.title(ctx.config()),
                required: metric
                    .required()
                    .iter()
                    .map(|role| ctx.header(*role).to_string())
                    .collect(),
                missing: ctx.missing(metric.required()),
            })
            .collect()
    }

    /// Runs every metric whose columns are present. Each metric is isolated:
    /// an error becomes a warning inside its own section.
    pub fn run(&self, ctx: &ReportContext<'_>) -> RegistryRun {
        let mut run = RegistryRun::default();
        for metric in &self.metrics {
            let missing = ctx.missing(metric.required());
            if !missing.is_empty() {
                log::debug!("skipping {}: missing {:?}", metric.id().as_str(), missing);
                run.skipped.push(SkippedMetric {
                    id: metric.id(),
                    missing,
                });
                continue;
            }
            let section = match metric.compute(ctx) {
                Ok(section) => section,
                Err(err) => {
                    log::warn!("{} failed: {err}", metric.id().as_str());
                    Section::failed(metric.id(), metric.title(ctx.config()), &err)
                }
            };
            run.sections.push(section);
        }
        run
    }
}
