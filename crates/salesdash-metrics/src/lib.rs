//! Metric views over a loaded sales dataset.
//!
//! Every view is a [`Metric`] registered in a [`MetricRegistry`]. A view only
//! runs when the dataset has all the columns it declares, and views never
//! depend on each other: a missing column or a failing view leaves the rest of
//! the report untouched. Views produce plain [`Section`] values; rendering
//! lives in `salesdash-web`.

pub mod aggregate;
pub mod context;
pub mod lookup;
pub mod registry;
pub mod report;
pub mod section;
pub mod table;
pub mod views;

pub use context::{ColumnRole, ReportContext};
pub use lookup::{lookup_order, LookupOutcome, LookupRequest, OrderSummary, NOT_AVAILABLE};
pub use registry::{Availability, Metric, MetricId, MetricRegistry, RegistryRun, SkippedMetric};
pub use report::{build_report, prepare_dataset, ReportDocument};
pub use section::{ChartKind, ChartSpec, Panel, Scalar, ScalarValue, Section};
pub use table::{AggregateTable, TableRow, ValueKind};
