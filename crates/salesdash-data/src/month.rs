use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Calendar month used as a grouping key. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Returns `None` unless `month` is in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// `YYYY-MM`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses a date cell with the configured formats, then the datetime forms,
/// then RFC 3339. Returns `None` for anything else, including empty cells.
pub fn parse_date<S: AsRef<str>>(raw: &str, formats: &[S]) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in formats {
        let fmt = fmt.as_ref();
        if !full_year_fits(trimmed, fmt) {
            continue;
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.date_naive())
}

// chrono's %Y accepts short years, so "04-03-22" would parse as year 4
// under %Y-%m-%d. Require four digits where the format puts %Y.
fn full_year_fits(value: &str, fmt: &str) -> bool {
    let four_digits = |part: Option<&str>| part.is_some_and(|p| p.bytes().all(|b| b.is_ascii_digit()));
    if fmt.starts_with("%Y") && !four_digits(value.get(..4)) {
        return false;
    }
    if fmt.ends_with("%Y") && !four_digits(value.len().checked_sub(4).and_then(|at| value.get(at..))) {
        return false;
    }
    true
}
