//! Pure group-and-aggregate helpers. Empty key cells are left out of every
//! grouping; missing measure values contribute nothing to a sum.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use salesdash_data::Month;

use crate::table::TableRow;

/// Sum of all present values.
pub fn total(values: &[Option<f64>]) -> f64 {
    values.iter().flatten().sum()
}

/// Sums `values` per key, keeping groups in first-seen order.
pub fn group_sum(keys: &[&str], values: &[Option<f64>]) -> Vec<TableRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<TableRow> = Vec::new();
    for (key, value) in keys.iter().zip(values) {
        if key.is_empty() {
            continue;
        }
        let slot = *index.entry(*key).or_insert_with(|| {
            rows.push(TableRow::new(*key, 0.0));
            rows.len() - 1
        });
        if let Some(value) = value {
            rows[slot].value += value;
        }
    }
    rows
}

/// Stable sort, largest value first. Ties keep their existing order.
pub fn sort_descending(rows: &mut [TableRow]) {
    rows.sort_by(|a, b| b.value.total_cmp(&a.value));
}

/// Sorted copy truncated to `n` rows.
pub fn top_n(mut rows: Vec<TableRow>, n: usize) -> Vec<TableRow> {
    sort_descending(&mut rows);
    rows.truncate(n);
    rows
}

/// Number of distinct non-empty keys.
pub fn distinct_count(keys: &[&str]) -> usize {
    keys.iter()
        .filter(|key| !key.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// Sums `values` per month in chronological order. Rows without a month are
/// skipped.
pub fn sum_by_month(months: &[Option<Month>], values: &[Option<f64>]) -> Vec<TableRow> {
    let mut buckets: BTreeMap<Month, f64> = BTreeMap::new();
    for (month, value) in months.iter().zip(values) {
        let Some(month) = month else { continue };
        let bucket = buckets.entry(*month).or_insert(0.0);
        if let Some(value) = value {
            *bucket += value;
        }
    }
    buckets
        .into_iter()
        .map(|(month, value)| TableRow::new(month.label(), value))
        .collect()
}

/// Distinct non-empty keys per month in chronological order.
pub fn distinct_by_month(months: &[Option<Month>], keys: &[&str]) -> Vec<TableRow> {
    let mut buckets: BTreeMap<Month, BTreeSet<&str>> = BTreeMap::new();
    for (month, key) in months.iter().zip(keys) {
        let Some(month) = month else { continue };
        let bucket = buckets.entry(*month).or_default();
        if !key.is_empty() {
            bucket.insert(*key);
        }
    }
    buckets
        .into_iter()
        .map(|(month, keys)| TableRow::new(month.label(), keys.len() as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_sum_keeps_first_seen_order_and_skips_empty_keys() {
        let keys = ["b", "a", "", "b"];
        let values = [Some(1.0), Some(2.0), Some(5.0), None];
        let rows = group_sum(&keys, &values);
        assert_eq!(rows, vec![TableRow::new("b", 1.0), TableRow::new("a", 2.0)]);
    }

    #[test]
    fn top_n_is_stable_on_ties() {
        let rows = vec![
            TableRow::new("x", 1.0),
            TableRow::new("y", 3.0),
            TableRow::new("z", 1.0),
            TableRow::new("w", 3.0),
        ];
        let top = top_n(rows, 3);
        let keys: Vec<_> = top.iter().map(|row| row.key.as_str()).collect();
        assert_eq!(keys, vec!["y", "w", "x"]);
    }

    #[test]
    fn month_buckets_are_chronological() {
        let months = [Month::new(2024, 1), Month::new(2023, 12), None, Month::new(2024, 1)];
        let values = [Some(1.0), Some(2.0), Some(9.0), Some(3.0)];
        let rows = sum_by_month(&months, &values);
        assert_eq!(rows, vec![TableRow::new("2023-12", 2.0), TableRow::new("2024-01", 4.0)]);
    }

    #[test]
    fn distinct_by_month_counts_unique_ids() {
        let months = [Month::new(2023, 1), Month::new(2023, 1), Month::new(2023, 2)];
        let keys = ["A1", "A1", "A2"];
        let rows = distinct_by_month(&months, &keys);
        assert_eq!(rows, vec![TableRow::new("2023-01", 1.0), TableRow::new("2023-02", 1.0)]);
        assert_eq!(distinct_count(&["A1", "", "A2", "A1"]), 2);
    }
}
