use salesdash_core::notice::Notice;
use serde::{Deserialize, Serialize};

use crate::aggregate::total;
use crate::context::{ColumnRole, ReportContext};

pub const NOT_AVAILABLE: &str = "N/A";

/// An explicit request to look up one order id. Only constructed from a
/// non-empty input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    order_id: String,
}

impl LookupRequest {
    pub fn new(input: impl Into<String>) -> Option<Self> {
        let order_id = input.into();
        (!order_id.is_empty()).then_some(Self { order_id })
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: String,
    /// Rows (line items) carrying this order id.
    pub row_count: usize,
    pub total_amount: f64,
    pub ship_city: String,
    pub ship_state: String,
    pub sales_channel: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// The dataset lacks the order id or amount column.
    Unavailable { missing: Vec<String> },
    NotFound { order_id: String },
    Found(OrderSummary),
}

impl LookupOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            LookupOutcome::Unavailable { missing } => Some(Notice::warning(format!(
                "Order lookup needs the column(s): {}",
                missing.join(", ")
            ))),
            LookupOutcome::NotFound { .. } => {
                Some(Notice::warning("No record found for this Order ID"))
            }
            LookupOutcome::Found(_) => None,
        }
    }
}

/// Exact, case-sensitive match of the order id cell text against the request.
pub fn lookup_order(ctx: &ReportContext<'_>, request: &LookupRequest) -> LookupOutcome {
    let missing = ctx.missing(&[ColumnRole::OrderId, ColumnRole::Amount]);
    if !missing.is_empty() {
        return LookupOutcome::Unavailable { missing };
    }
    let dataset = ctx.dataset();
    let matches = dataset.matching_rows(ctx.header(ColumnRole::OrderId), request.order_id());
    let Some(&first) = matches.first() else {
        log::info!("order lookup {:?}: no rows", request.order_id());
        return LookupOutcome::NotFound {
            order_id: request.order_id().to_string(),
        };
    };
    let amounts = dataset
        .numbers(ctx.header(ColumnRole::Amount))
        .unwrap_or_default();
    let matched: Vec<Option<f64>> = matches
        .iter()
        .map(|idx| amounts.get(*idx).copied().flatten())
        .collect();
    let attribute = |role: ColumnRole| {
        dataset
            .cell(first, ctx.header(role))
            .filter(|value| !value.is_empty())
            .unwrap_or(NOT_AVAILABLE)
            .to_string()
    };
    LookupOutcome::Found(OrderSummary {
        order_id: request.order_id().to_string(),
        row_count: matches.len(),
        total_amount: total(&matched),
        ship_city: attribute(ColumnRole::ShipCity),
        ship_state: attribute(ColumnRole::ShipState),
        sales_channel: attribute(ColumnRole::SalesChannel),
    })
}
