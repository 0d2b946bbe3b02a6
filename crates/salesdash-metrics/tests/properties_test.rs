use proptest::prelude::*;
use salesdash_core::config::ReportConfig;
use salesdash_data::Dataset;
use salesdash_metrics::views::{AOV_LABEL, TOTAL_ORDERS_LABEL, TOTAL_REVENUE_LABEL};
use salesdash_metrics::{prepare_dataset, MetricId, MetricRegistry, ReportContext, ScalarValue};

#[derive(Debug, Clone)]
struct Line {
    order: u8,
    sku: u8,
    category: u8,
    year: i32,
    month: u32,
    amount_cents: u32,
}

fn line() -> impl Strategy<Value = Line> {
    (0u8..12, 0u8..9, 0u8..4, 2022i32..2025, 1u32..=12, 0u32..100_000).prop_map(
        |(order, sku, category, year, month, amount_cents)| Line {
            order,
            sku,
            category,
            year,
            month,
            amount_cents,
        },
    )
}

fn build(lines: &[Line]) -> Dataset {
    let columns = ["Order ID", "SKU", "Category", "Date", "Amount"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    let rows = lines
        .iter()
        .map(|line| {
            vec![
                format!("ORD-{}", line.order),
                format!("SKU-{}", line.sku),
                format!("CAT-{}", line.category),
                format!("{:04}-{:02}-15", line.year, line.month),
                format!("{}.{:02}", line.amount_cents / 100, line.amount_cents % 100),
            ]
        })
        .collect();
    let mut dataset = Dataset::new(columns, rows);
    prepare_dataset(&mut dataset, &ReportConfig::default());
    dataset
}

fn currency(value: Option<ScalarValue>) -> f64 {
    match value {
        Some(ScalarValue::Currency(value)) => value,
        other => panic!("expected currency, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn report_invariants(lines in prop::collection::vec(line(), 0..40)) {
        let dataset = build(&lines);
        let config = ReportConfig::default();
        let ctx = ReportContext::new(&dataset, &config);
        let run = MetricRegistry::standard().run(&ctx);

        let total = currency(run.section(MetricId::TotalRevenue).unwrap().scalar(TOTAL_REVENUE_LABEL));
        let expected: f64 = lines.iter().map(|l| l.amount_cents as f64 / 100.0).sum();
        prop_assert!((total - expected).abs() < 1e-6);

        // categories partition revenue
        let category = &run.section(MetricId::CategoryRevenue).unwrap().panels[0].table;
        prop_assert!((category.total() - total).abs() < 1e-6);

        // AOV * distinct orders == total
        let aov_section = run.section(MetricId::AverageOrderValue).unwrap();
        let Some(ScalarValue::Count(orders)) = aov_section.scalar(TOTAL_ORDERS_LABEL) else {
            panic!("missing order count");
        };
        let aov = currency(aov_section.scalar(AOV_LABEL));
        let distinct: std::collections::BTreeSet<u8> = lines.iter().map(|l| l.order).collect();
        prop_assert_eq!(orders, distinct.len());
        if orders == 0 {
            prop_assert_eq!(aov, 0.0);
        } else {
            prop_assert!((aov * orders as f64 - total).abs() < 1e-6);
        }

        // rankings are sorted and sized min(top_n, groups)
        let skus: std::collections::BTreeSet<u8> = lines.iter().map(|l| l.sku).collect();
        let products = &run.section(MetricId::TopProducts).unwrap().panels[0].table;
        prop_assert_eq!(products.len(), skus.len().min(5));
        prop_assert!(products.rows.windows(2).all(|w| w[0].value >= w[1].value));
        let top_orders = &run.section(MetricId::TopOrders).unwrap().panels[0].table;
        prop_assert_eq!(top_orders.len(), distinct.len().min(5));
        prop_assert!(top_orders.rows.windows(2).all(|w| w[0].value >= w[1].value));

        // months come out chronologically and cover every row
        let monthly = &run.section(MetricId::MonthlyRevenue).unwrap().panels[0].table;
        prop_assert!(monthly.rows.windows(2).all(|w| w[0].key < w[1].key));
        prop_assert!((monthly.total() - total).abs() < 1e-6);
    }
}

#[test]
fn december_precedes_january() {
    let lines = vec![
        Line { order: 1, sku: 1, category: 1, year: 2024, month: 1, amount_cents: 100 },
        Line { order: 2, sku: 1, category: 1, year: 2023, month: 12, amount_cents: 200 },
        Line { order: 3, sku: 1, category: 1, year: 2023, month: 2, amount_cents: 300 },
    ];
    let dataset = build(&lines);
    let config = ReportConfig::default();
    let ctx = ReportContext::new(&dataset, &config);
    let run = MetricRegistry::standard().run(&ctx);
    let monthly = &run.section(MetricId::MonthlyRevenue).unwrap().panels[0].table;
    assert_eq!(monthly.keys(), vec!["2023-02", "2023-12", "2024-01"]);
}
