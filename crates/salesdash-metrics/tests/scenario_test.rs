mod common;

use salesdash_core::config::ReportConfig;
use salesdash_metrics::views::{AOV_LABEL, TOTAL_ORDERS_LABEL, TOTAL_REVENUE_LABEL};
use salesdash_metrics::{
    lookup_order, LookupOutcome, LookupRequest, MetricId, MetricRegistry, ReportContext,
    ScalarValue, NOT_AVAILABLE,
};

#[test]
fn two_line_items_of_one_order() {
    let dataset = common::two_row_order();
    let config = ReportConfig::default();
    let ctx = ReportContext::new(&dataset, &config);
    let run = MetricRegistry::standard().run(&ctx);

    let revenue = run.section(MetricId::TotalRevenue).expect("revenue");
    assert_eq!(revenue.scalar(TOTAL_REVENUE_LABEL), Some(ScalarValue::Currency(150.0)));

    let aov = run.section(MetricId::AverageOrderValue).expect("aov");
    assert_eq!(aov.scalar(TOTAL_ORDERS_LABEL), Some(ScalarValue::Count(1)));
    assert_eq!(aov.scalar(AOV_LABEL), Some(ScalarValue::Currency(150.0)));

    let monthly = run.section(MetricId::MonthlyRevenue).expect("monthly");
    assert_eq!(monthly.panels[0].table.get("2023-01"), Some(150.0));
    assert_eq!(monthly.panels[0].table.len(), 1);

    let category = run.section(MetricId::CategoryRevenue).expect("category");
    assert_eq!(category.panels[0].table.get("X"), Some(150.0));

    let orders = run.section(MetricId::MonthlyOrders).expect("monthly orders");
    assert_eq!(orders.panels[0].table.get("2023-01"), Some(1.0));
}

#[test]
fn lookup_found_and_not_found() {
    let dataset = common::two_row_order();
    let config = ReportConfig::default();
    let ctx = ReportContext::new(&dataset, &config);

    let found = lookup_order(&ctx, &LookupRequest::new("A1").unwrap());
    let LookupOutcome::Found(summary) = found else {
        panic!("A1 exists");
    };
    assert_eq!(summary.row_count, 2);
    assert_eq!(summary.total_amount, 150.0);
    assert_eq!(summary.ship_city, NOT_AVAILABLE);
    assert_eq!(summary.ship_state, NOT_AVAILABLE);
    assert_eq!(summary.sales_channel, NOT_AVAILABLE);

    let missing = lookup_order(&ctx, &LookupRequest::new("ZZZ").unwrap());
    assert!(matches!(missing, LookupOutcome::NotFound { .. }));
    assert_eq!(
        missing.notice().unwrap().message,
        "No record found for this Order ID"
    );
}

#[test]
fn lookup_is_exact_and_reads_first_row_attributes() {
    let dataset = common::full_dataset();
    let config = ReportConfig::default();
    let ctx = ReportContext::new(&dataset, &config);

    let LookupOutcome::Found(summary) = lookup_order(&ctx, &LookupRequest::new("O-1").unwrap()) else {
        panic!("O-1 exists");
    };
    assert_eq!(summary.row_count, 2);
    assert_eq!(summary.total_amount, 200.0);
    assert_eq!(summary.ship_city, "MUMBAI");
    assert_eq!(summary.ship_state, "MAHARASHTRA");
    assert_eq!(summary.sales_channel, "Amazon.in");

    assert!(matches!(
        lookup_order(&ctx, &LookupRequest::new("O-").unwrap()),
        LookupOutcome::NotFound { .. }
    ));
    assert!(matches!(
        lookup_order(&ctx, &LookupRequest::new("o-1").unwrap()),
        LookupOutcome::NotFound { .. }
    ));
}

#[test]
fn empty_lookup_input_is_not_a_request() {
    assert!(LookupRequest::new("").is_none());
    assert_eq!(LookupRequest::new(" A1").unwrap().order_id(), " A1");
}

#[test]
fn lookup_without_amount_column_is_unavailable() {
    let dataset = common::dataset(&["Order ID"], &[&["A1"]]);
    let config = ReportConfig::default();
    let ctx = ReportContext::new(&dataset, &config);
    let outcome = lookup_order(&ctx, &LookupRequest::new("A1").unwrap());
    assert_eq!(
        outcome,
        LookupOutcome::Unavailable {
            missing: vec!["Amount".to_string()]
        }
    );
}

#[test]
fn full_dataset_sections_in_page_order() {
    let dataset = common::full_dataset();
    let config = ReportConfig::default();
    let ctx = ReportContext::new(&dataset, &config);
    let run = MetricRegistry::standard().run(&ctx);
    let ids: Vec<_> = run.sections.iter().map(|section| section.id).collect();
    assert_eq!(ids, MetricRegistry::standard().ids());
    assert!(run.skipped.is_empty());

    let monthly = run.section(MetricId::MonthlyRevenue).unwrap();
    assert_eq!(monthly.panels[0].table.keys(), vec!["2023-12", "2024-01", "2024-02"]);
    assert_eq!(monthly.panels[0].table.get("2024-02"), Some(15.0));
    assert_eq!(monthly.notes.len(), 1, "one row has an unreadable date");

    let geo = run.section(MetricId::GeoRevenue).unwrap();
    assert!(geo.side_by_side);
    assert_eq!(geo.panels.len(), 2);
    assert_eq!(geo.panels[0].table.keys()[0], "PUNE");
    assert_eq!(geo.panels[1].table.get("MAHARASHTRA"), Some(500.0));
    assert_eq!(geo.panels[1].table.len(), 5);

    let top_orders = run.section(MetricId::TopOrders).unwrap();
    assert_eq!(top_orders.title, "Top 5 Highest-Value Orders");
    assert_eq!(top_orders.panels[0].table.keys()[0], "O-2");
    assert_eq!(top_orders.notes.len(), 1);

    let aov = run.section(MetricId::AverageOrderValue).unwrap();
    assert_eq!(aov.scalar(TOTAL_ORDERS_LABEL), Some(ScalarValue::Count(7)));
}

#[test]
fn top_n_follows_config() {
    let dataset = common::full_dataset();
    let config = ReportConfig {
        top_n: 2,
        ..ReportConfig::default()
    };
    let ctx = ReportContext::new(&dataset, &config);
    let run = MetricRegistry::standard().run(&ctx);
    let products = run.section(MetricId::TopProducts).unwrap();
    assert_eq!(products.title, "Top 2 Products by Revenue");
    assert_eq!(products.panels[0].table.keys(), vec!["SKU-1", "SKU-2"]);
}
