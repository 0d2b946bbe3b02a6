use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use salesdash_core::errors::{ErrorInfo, SalesError};
use salesdash_core::notice::Notice;
use sha2::{Digest, Sha256};

use crate::dataset::Dataset;

/// Where the rows for a render come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// File supplied for this render.
    Upload(PathBuf),
    /// Rows piped on standard input (`--input -`).
    Stdin,
    /// The configured fallback file.
    LocalDefault(PathBuf),
}

impl DataSource {
    pub fn describe(&self) -> String {
        match self {
            DataSource::Upload(path) | DataSource::LocalDefault(path) => {
                path.display().to_string()
            }
            DataSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Notice shown once the source has been read.
    pub fn loaded_notice(&self) -> Notice {
        match self {
            DataSource::Upload(_) | DataSource::Stdin => Notice::success("File uploaded successfully"),
            DataSource::LocalDefault(_) => Notice::success("CSV loaded from local file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub source: DataSource,
    /// Hex SHA-256 of the raw source bytes.
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(LoadedDataset),
    /// No input was given and the default file does not exist.
    Missing { default_path: PathBuf },
}

impl LoadOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            LoadOutcome::Loaded(loaded) => loaded.source.loaded_notice(),
            LoadOutcome::Missing { .. } => {
                Notice::warning("CSV not found. Please upload your dataset")
            }
        }
    }
}

fn data_error(code: &str, err: impl ToString) -> SalesError {
    SalesError::Data(ErrorInfo::new(code, err.to_string()))
}

/// Picks the source for this render: the explicit input wins (`-` means
/// stdin), then the default file if it exists.
pub fn resolve_source(input: Option<&Path>, default_path: &Path) -> Option<DataSource> {
    match input {
        Some(path) if path == Path::new("-") => Some(DataSource::Stdin),
        Some(path) => Some(DataSource::Upload(path.to_path_buf())),
        None if default_path.is_file() => Some(DataSource::LocalDefault(default_path.to_path_buf())),
        None => None,
    }
}

/// Loads the dataset for one render.
pub fn load(input: Option<&Path>, default_path: &Path) -> Result<LoadOutcome, SalesError> {
    let Some(source) = resolve_source(input, default_path) else {
        log::warn!("no input given and {} does not exist", default_path.display());
        return Ok(LoadOutcome::Missing {
            default_path: default_path.to_path_buf(),
        });
    };
    let bytes = read_source(&source)?;
    let sha256 = hex::encode(Sha256::digest(&bytes));
    let dataset = parse_csv_bytes(&bytes).map_err(|err| match err {
        SalesError::Data(info) => SalesError::Data(info.with_context("source", source.describe())),
        other => other,
    })?;
    log::info!(
        "loaded {} rows x {} columns from {}",
        dataset.row_count(),
        dataset.column_count(),
        source.describe()
    );
    Ok(LoadOutcome::Loaded(LoadedDataset {
        dataset,
        source,
        sha256,
    }))
}

fn read_source(source: &DataSource) -> Result<Vec<u8>, SalesError> {
    match source {
        DataSource::Upload(path) | DataSource::LocalDefault(path) => fs::read(path).map_err(|err| {
            SalesError::Data(
                ErrorInfo::new("data.source_open", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        }),
        DataSource::Stdin => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(|err| data_error("data.source_open", err))?;
            Ok(bytes)
        }
    }
}

/// Reads a whole CSV document from `reader`.
pub fn read_dataset<R: Read>(mut reader: R) -> Result<Dataset, SalesError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|err| data_error("data.read", err))?;
    parse_csv_bytes(&bytes)
}

/// Parses CSV bytes with a header row. Ragged rows and invalid UTF-8 are
/// fatal; header whitespace is trimmed.
pub fn parse_csv_bytes(bytes: &[u8]) -> Result<Dataset, SalesError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);
    let columns: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(String::from)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        rows.push(record.iter().map(String::from).collect());
    }
    Ok(Dataset::new(columns, rows))
}

fn parse_error(err: csv::Error) -> SalesError {
    let mut info = ErrorInfo::new("data.parse", err.to_string())
        .with_hint("check the file is comma separated with one header row");
    if let Some(position) = err.position() {
        info = info.with_context("line", position.line().to_string());
    }
    SalesError::Data(info)
}
