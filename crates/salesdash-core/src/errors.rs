//! The error type every salesdash crate returns.
//!
//! A failure is identified by a dotted code (`data.parse`, `web.write`) that
//! tests and callers match on; the message is for people.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code, message and the facts needed to find the bad input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Dotted code, prefixed by the crate area (`config.`, `data.`, `web.`).
    pub code: String,
    /// Underlying error text, usually from csv, serde or the filesystem.
    pub message: String,
    /// Where it happened: source path, CSV line, column header.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// What the user can change to get a report out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with no context.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records one location fact, e.g. `("line", "3")`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Attaches the suggested fix.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Error families of a report run. `Metric` errors stay inside their
/// section; the others end the command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SalesError {
    /// YAML config unreadable or rejected by `ReportConfig::validate`.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Input CSV could not be opened or parsed.
    #[error("data error: {0}")]
    Data(ErrorInfo),
    /// One view could not be computed.
    #[error("metric error: {0}")]
    Metric(ErrorInfo),
    /// Output directory or report files could not be written.
    #[error("render error: {0}")]
    Render(ErrorInfo),
    /// JSON or YAML encoding and decoding.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    /// One line: `code: message (key=value, ...); hint`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " ({})", pairs.join(", "))?;
        }
        if let Some(hint) = &self.hint {
            write!(f, "; {hint}")?;
        }
        Ok(())
    }
}

impl SalesError {
    /// Payload of whichever family this is.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SalesError::Config(info)
            | SalesError::Data(info)
            | SalesError::Metric(info)
            | SalesError::Render(info)
            | SalesError::Serde(info) => info,
        }
    }

    /// Shorthand for `info().code`.
    pub fn code(&self) -> &str {
        &self.info().code
    }
}
