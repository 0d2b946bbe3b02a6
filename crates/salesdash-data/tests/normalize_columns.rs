use proptest::prelude::*;
use salesdash_data::{normalize_columns, Dataset};

#[test]
fn trims_every_header() {
    let mut columns = vec!["  Date".to_string(), "Amount ".to_string(), "\tship-city\n".to_string()];
    normalize_columns(&mut columns);
    assert_eq!(columns, vec!["Date", "Amount", "ship-city"]);
}

#[test]
fn summary_reports_shape_and_preview() {
    let rows = (0..8).map(|i| vec![i.to_string()]).collect();
    let dataset = Dataset::new(vec!["n".into()], rows);
    let summary = dataset.summary(5);
    assert_eq!(summary.row_count, 8);
    assert_eq!(summary.column_count, 1);
    assert_eq!(summary.preview.len(), 5);
    assert_eq!(summary.preview[4], vec!["4".to_string()]);
}

proptest! {
    #[test]
    fn normalization_is_idempotent(headers in prop::collection::vec("[ \t]{0,2}[A-Za-z -]{0,8}[ \t]{0,2}", 0..8)) {
        let mut once = headers.clone();
        normalize_columns(&mut once);
        let mut twice = once.clone();
        normalize_columns(&mut twice);
        prop_assert_eq!(&once, &twice);
        for header in &once {
            prop_assert_eq!(header.trim(), header.as_str());
        }
    }
}
