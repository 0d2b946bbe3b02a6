//! Source loading, header normalization and the in-memory dataset.

pub mod dataset;
pub mod load;
pub mod month;

pub use dataset::{normalize_columns, Dataset, DatasetSummary, DerivedMonths};
pub use load::{load, parse_csv_bytes, read_dataset, resolve_source, DataSource, LoadOutcome, LoadedDataset};
pub use month::{parse_date, Month};
