use serde::{Deserialize, Serialize};

/// How the value column of a table is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Currency,
    Count,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub key: String,
    pub value: f64,
}

impl TableRow {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Ordered `(key, value)` rows produced by one group-and-aggregate pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateTable {
    pub key_label: String,
    pub value_label: String,
    pub kind: ValueKind,
    pub rows: Vec<TableRow>,
}

impl AggregateTable {
    pub fn new(
        key_label: impl Into<String>,
        value_label: impl Into<String>,
        kind: ValueKind,
        rows: Vec<TableRow>,
    ) -> Self {
        Self {
            key_label: key_label.into(),
            value_label: value_label.into(),
            kind,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.rows.iter().find(|row| row.key == key).map(|row| row.value)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.key.as_str()).collect()
    }

    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.value).sum()
    }
}
