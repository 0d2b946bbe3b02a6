use salesdash_core::errors::SalesError;
use salesdash_core::notice::Notice;
use serde::{Deserialize, Serialize};

use crate::registry::MetricId;
use crate::table::AggregateTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Points joined in key order.
    Line,
    /// One bar per row, keys on the vertical axis.
    HorizontalBar,
    /// One bar per row, keys on the horizontal axis.
    VerticalBar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Print each bar's formatted value next to it.
    #[serde(default)]
    pub annotate: bool,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            annotate: false,
        }
    }

    pub fn with_axes(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn annotated(mut self) -> Self {
        self.annotate = true;
        self
    }
}

/// A table plus the chart drawn from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub table: AggregateTable,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSpec>,
}

impl Panel {
    pub fn new(table: AggregateTable) -> Self {
        Self {
            title: None,
            table,
            chart: None,
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_chart(mut self, chart: ChartSpec) -> Self {
        self.chart = Some(chart);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ScalarValue {
    Currency(f64),
    Count(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scalar {
    pub label: String,
    pub value: ScalarValue,
}

impl Scalar {
    pub fn currency(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value: ScalarValue::Currency(value),
        }
    }

    pub fn count(label: impl Into<String>, value: usize) -> Self {
        Self {
            label: label.into(),
            value: ScalarValue::Count(value),
        }
    }
}

/// Output of one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: MetricId,
    pub title: String,
    #[serde(default)]
    pub scalars: Vec<Scalar>,
    #[serde(default)]
    pub panels: Vec<Panel>,
    #[serde(default)]
    pub notes: Vec<Notice>,
    /// Panels are laid out next to each other instead of stacked.
    #[serde(default)]
    pub side_by_side: bool,
}

impl Section {
    pub fn new(id: MetricId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            scalars: Vec::new(),
            panels: Vec::new(),
            notes: Vec::new(),
            side_by_side: false,
        }
    }

    /// Section standing in for a metric that failed; carries only the error.
    pub fn failed(id: MetricId, title: impl Into<String>, err: &SalesError) -> Self {
        let mut section = Self::new(id, title);
        section
            .notes
            .push(Notice::warning(format!("Could not compute this view: {}", err.info().message)));
        section
    }

    pub fn with_scalar(mut self, scalar: Scalar) -> Self {
        self.scalars.push(scalar);
        self
    }

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    pub fn with_note(mut self, note: Notice) -> Self {
        self.notes.push(note);
        self
    }

    pub fn side_by_side(mut self) -> Self {
        self.side_by_side = true;
        self
    }

    pub fn scalar(&self, label: &str) -> Option<ScalarValue> {
        self.scalars
            .iter()
            .find(|scalar| scalar.label == label)
            .map(|scalar| scalar.value)
    }
}
