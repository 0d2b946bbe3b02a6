#![allow(dead_code)]

use salesdash_core::config::ReportConfig;
use salesdash_data::Dataset;
use salesdash_metrics::prepare_dataset;

pub fn dataset(columns: &[&str], rows: &[&[&str]]) -> Dataset {
    let config = ReportConfig::default();
    let mut dataset = Dataset::new(
        columns.iter().map(|c| c.to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect(),
    );
    prepare_dataset(&mut dataset, &config);
    dataset
}

/// The two line items of order A1 used throughout the tests.
pub fn two_row_order() -> Dataset {
    dataset(
        &["Order ID", "Amount", "Date", "Category"],
        &[
            &["A1", "100", "2023-01-05", "X"],
            &["A1", "50", "2023-01-20", "X"],
        ],
    )
}

pub const FULL_HEADER: [&str; 8] = [
    "Order ID",
    "Date",
    "Amount",
    "Category",
    "SKU",
    "ship-city",
    "ship-state",
    "Sales Channel",
];

pub fn full_dataset() -> Dataset {
    dataset(
        &FULL_HEADER,
        &[
            &["O-1", "2023-12-30", "120.50", "Set", "SKU-1", "MUMBAI", "MAHARASHTRA", "Amazon.in"],
            &["O-1", "2023-12-30", "79.50", "Kurta", "SKU-2", "MUMBAI", "MAHARASHTRA", "Amazon.in"],
            &["O-2", "2024-01-02", "300", "Set", "SKU-1", "PUNE", "MAHARASHTRA", "Amazon.in"],
            &["O-3", "2024-01-15", "45", "Top", "SKU-3", "CHENNAI", "TAMIL NADU", "Non-Amazon"],
            &["O-4", "not a date", "60", "Kurta", "SKU-4", "BENGALURU", "KARNATAKA", "Amazon.in"],
            &["O-5", "2024-02-01", "", "Top", "SKU-5", "DELHI", "DELHI", "Amazon.in"],
            &["O-6", "2024-02-11", "10", "Blouse", "SKU-6", "KOLKATA", "WEST BENGAL", "Amazon.in"],
            &["O-7", "2024-02-12", "5", "Saree", "SKU-7", "JAIPUR", "RAJASTHAN", "Amazon.in"],
        ],
    )
}
