use criterion::{black_box, criterion_group, criterion_main, Criterion};
use salesdash_core::config::ReportConfig;
use salesdash_data::Dataset;
use salesdash_metrics::{prepare_dataset, MetricRegistry, ReportContext};

fn synthetic(rows: usize) -> Dataset {
    let columns = [
        "Order ID",
        "Date",
        "Amount",
        "Category",
        "SKU",
        "ship-city",
        "ship-state",
        "Sales Channel",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();
    let rows = (0..rows)
        .map(|i| {
            vec![
                format!("ORD-{}", i / 2),
                format!("{:04}-{:02}-{:02}", 2022 + i % 3, 1 + i % 12, 1 + i % 28),
                format!("{}.{:02}", 100 + i % 900, i % 100),
                format!("CAT-{}", i % 9),
                format!("SKU-{}", i % 250),
                format!("CITY-{}", i % 40),
                format!("STATE-{}", i % 12),
                "Amazon.in".to_string(),
            ]
        })
        .collect();
    Dataset::new(columns, rows)
}

fn report_pass_bench(c: &mut Criterion) {
    let config = ReportConfig::default();
    let mut dataset = synthetic(20_000);
    prepare_dataset(&mut dataset, &config);
    let registry = MetricRegistry::standard();
    c.bench_function("report_pass_20k", |b| {
        b.iter(|| {
            let ctx = ReportContext::new(&dataset, &config);
            black_box(registry.run(&ctx));
        });
    });
}

criterion_group!(benches, report_pass_bench);
criterion_main!(benches);
