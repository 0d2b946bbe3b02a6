#![deny(missing_docs)]
#![doc = "Core error, configuration and formatting types shared by the salesdash crates."]

pub mod config;
pub mod errors;
pub mod logging;
pub mod money;
pub mod notice;
pub mod serde;

pub use config::{ColumnMap, FigureConfig, ReportConfig};
pub use errors::{ErrorInfo, SalesError};
pub use money::{format_count, format_currency, group_thousands};
pub use notice::{Notice, NoticeLevel};
pub use self::serde::{from_json_slice, from_yaml_str, to_canonical_json_bytes};
