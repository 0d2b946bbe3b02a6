use salesdash_core::config::ReportConfig;
use salesdash_core::notice::Notice;
use salesdash_data::{Dataset, DatasetSummary, LoadOutcome};
use serde::{Deserialize, Serialize};

use crate::context::{ColumnRole, ReportContext};
use crate::lookup::{lookup_order, LookupOutcome, LookupRequest};
use crate::registry::{MetricId, MetricRegistry, SkippedMetric};
use crate::section::Section;

/// Everything one render produces, ready for the page renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub title: String,
    pub currency_symbol: String,
    pub notices: Vec<Notice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<DatasetSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_sha256: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub skipped: Vec<SkippedMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup: Option<LookupOutcome>,
}

impl ReportDocument {
    fn empty(config: &ReportConfig) -> Self {
        Self {
            title: config.title.clone(),
            currency_symbol: config.currency_symbol.clone(),
            notices: Vec::new(),
            summary: None,
            source_sha256: None,
            sections: Vec::new(),
            skipped: Vec::new(),
            lookup: None,
        }
    }

    pub fn section(&self, id: MetricId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }
}

/// Adds the derived month column when the dataset has a date column.
pub fn prepare_dataset(dataset: &mut Dataset, config: &ReportConfig) {
    let date_column = ColumnRole::Date.header(&config.columns);
    dataset.derive_months(date_column, &config.date_formats);
}

/// Runs one full render: every available metric, then the lookup if one was
/// requested. A missing source yields a document with only the warning.
pub fn build_report(
    outcome: LoadOutcome,
    config: &ReportConfig,
    registry: &MetricRegistry,
    lookup: Option<&LookupRequest>,
) -> ReportDocument {
    let mut document = ReportDocument::empty(config);
    document.notices.push(outcome.notice());
    let LoadOutcome::Loaded(loaded) = outcome else {
        return document;
    };
    let mut dataset = loaded.dataset;
    prepare_dataset(&mut dataset, config);
    let ctx = ReportContext::new(&dataset, config);
    let run = registry.run(&ctx);
    log::info!(
        "rendered {} sections, skipped {}",
        run.sections.len(),
        run.skipped.len()
    );
    document.summary = Some(dataset.summary(config.preview_rows));
    document.source_sha256 = Some(loaded.sha256);
    document.sections = run.sections;
    document.skipped = run.skipped;
    document.lookup = lookup.map(|request| lookup_order(&ctx, request));
    document
}
