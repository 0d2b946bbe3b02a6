use std::fs;
use std::path::Path;

use salesdash_core::config::ReportConfig;
use salesdash_core::errors::{ErrorInfo, SalesError};
use salesdash_core::serde::to_canonical_json_bytes;
use salesdash_metrics::{MetricId, ReportDocument};
use serde::{Deserialize, Serialize};

use crate::pages::render_pages;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildManifest {
    pub page_count: usize,
    pub generated_at: String,
    /// Fingerprint of the raw input bytes; absent when no dataset was loaded.
    pub dataset_sha256: Option<String>,
    /// Sections on the page, in page order.
    pub sections: Vec<MetricId>,
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), SalesError> {
    fs::write(path, bytes).map_err(|err| {
        SalesError::Render(
            ErrorInfo::new("web.write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

/// Writes `index.html`, `report.json` and `manifest.json` into `out_dir`.
pub fn build_site(
    document: &ReportDocument,
    config: &ReportConfig,
    out_dir: &Path,
) -> Result<BuildManifest, SalesError> {
    let pages = render_pages(config, document)?;
    fs::create_dir_all(out_dir).map_err(|err| {
        SalesError::Render(
            ErrorInfo::new("web.output_dir", err.to_string())
                .with_context("path", out_dir.display().to_string()),
        )
    })?;
    for page in &pages {
        let path = out_dir.join(&page.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                SalesError::Render(
                    ErrorInfo::new("web.output_dir", err.to_string())
                        .with_context("path", parent.display().to_string()),
                )
            })?;
        }
        write_file(&path, page.content.as_bytes())?;
    }
    write_file(&out_dir.join("report.json"), &to_canonical_json_bytes(document)?)?;
    let manifest = BuildManifest {
        page_count: pages.len(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        dataset_sha256: document.source_sha256.clone(),
        sections: document.sections.iter().map(|section| section.id).collect(),
    };
    write_file(&out_dir.join("manifest.json"), &to_canonical_json_bytes(&manifest)?)?;
    log::info!(
        "wrote {} page(s) and {} sections to {}",
        manifest.page_count,
        manifest.sections.len(),
        out_dir.display()
    );
    Ok(manifest)
}
