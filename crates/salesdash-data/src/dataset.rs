use serde::{Deserialize, Serialize};

use crate::month::{parse_date, Month};

/// Trims surrounding whitespace from every header. Idempotent.
pub fn normalize_columns(columns: &mut [String]) {
    for column in columns.iter_mut() {
        let trimmed = column.trim();
        if trimmed.len() != column.len() {
            *column = trimmed.to_string();
        }
    }
}

/// Month derived from a date column, one entry per row.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMonths {
    pub source_column: String,
    pub values: Vec<Option<Month>>,
    /// Rows whose date cell could not be parsed.
    pub unparsed: usize,
}

/// Shape and leading rows, shown at the top of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<String>,
    pub preview: Vec<Vec<String>>,
}

/// Rows of raw text cells under a header. Values are kept exactly as read;
/// numbers and dates are parsed by whoever needs them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    months: Option<DerivedMonths>,
}

impl Dataset {
    /// Builds a dataset, normalizing the headers. Short rows are padded with
    /// empty cells so every row matches the header width.
    pub fn new(mut columns: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        normalize_columns(&mut columns);
        for row in &mut rows {
            row.resize(columns.len(), String::new());
        }
        Self {
            columns,
            rows,
            months: None,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Names from `required` that are not present, in the order given.
    pub fn missing_columns<S: AsRef<str>>(&self, required: &[S]) -> Vec<String> {
        required
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !self.has_column(name))
            .map(String::from)
            .collect()
    }

    /// Cell text for every row of `name`.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&str> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|cells| cells[idx].as_str())
    }

    /// Parses every cell of `name` as a number. Empty, non-numeric and
    /// non-finite cells become `None`.
    pub fn numbers(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let values = self.column(name)?;
        Some(values.into_iter().map(parse_number).collect())
    }

    /// Adds (or replaces) the derived month column computed from `date_column`.
    /// Returns `None` when the date column does not exist.
    pub fn derive_months<S: AsRef<str>>(
        &mut self,
        date_column: &str,
        formats: &[S],
    ) -> Option<&DerivedMonths> {
        let values: Vec<Option<Month>> = self
            .column(date_column)?
            .into_iter()
            .map(|raw| parse_date(raw, formats).map(Month::from_date))
            .collect();
        let unparsed = values.iter().filter(|value| value.is_none()).count();
        if unparsed > 0 {
            log::debug!(
                "{unparsed} of {} rows have no parseable {date_column:?}",
                values.len()
            );
        }
        self.months = Some(DerivedMonths {
            source_column: date_column.to_string(),
            values,
            unparsed,
        });
        self.months.as_ref()
    }

    pub fn months(&self) -> Option<&DerivedMonths> {
        self.months.as_ref()
    }

    /// Indices of rows whose `name` cell equals `value` exactly.
    pub fn matching_rows(&self, name: &str, value: &str) -> Vec<usize> {
        let Some(idx) = self.column_index(name) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row[idx] == value)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn summary(&self, preview_rows: usize) -> DatasetSummary {
        DatasetSummary {
            row_count: self.row_count(),
            column_count: self.column_count(),
            columns: self.columns.clone(),
            preview: self.rows.iter().take(preview_rows).cloned().collect(),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
