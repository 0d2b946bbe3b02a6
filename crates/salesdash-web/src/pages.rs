use std::path::PathBuf;

use salesdash_core::config::ReportConfig;
use salesdash_core::errors::SalesError;
use salesdash_core::money::{format_count, format_currency};
use salesdash_core::notice::{Notice, NoticeLevel};
use salesdash_data::DatasetSummary;
use salesdash_metrics::{
    AggregateTable, LookupOutcome, Panel, ReportDocument, ScalarValue, Section, ValueKind,
};

use crate::figures::render_chart;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;color:#111827}\
table{border-collapse:collapse;margin:0.5rem 0}\
td,th{border:1px solid #e5e7eb;padding:0.25rem 0.5rem;text-align:left}\
td.num{text-align:right}\
.notice{padding:0.5rem 0.75rem;border-radius:4px}\
.notice-info{background:#eff6ff}.notice-success{background:#ecfdf5}.notice-warning{background:#fffbeb}\
.columns{display:flex;gap:2rem}.metric .value{font-size:1.6rem;font-weight:bold}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    pub path: PathBuf,
    pub content: String,
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn render_pages(
    config: &ReportConfig,
    document: &ReportDocument,
) -> Result<Vec<PageDescriptor>, SalesError> {
    config.validate()?;
    Ok(vec![PageDescriptor {
        path: PathBuf::from("index.html"),
        content: render_page(config, document),
    }])
}

/// Full report page: title, notices, dataset overview, one block per
/// section, then the lookup panel if a lookup ran.
pub fn render_page(config: &ReportConfig, document: &ReportDocument) -> String {
    let mut body = format!("<h1>{}</h1>", html_escape(&document.title));
    for notice in &document.notices {
        body.push_str(&render_notice(notice));
    }
    if let Some(summary) = &document.summary {
        body.push_str(&render_summary(summary));
    }
    for section in &document.sections {
        body.push_str(&render_section(config, &document.currency_symbol, section));
    }
    if let Some(outcome) = &document.lookup {
        body.push_str(&render_lookup(&document.currency_symbol, outcome));
    }
    format!(
        "<!DOCTYPE html><html><head><meta charset='utf-8'><title>{title}</title><style>{STYLE}</style></head><body>{body}</body></html>",
        title = html_escape(&document.title),
    )
}

fn render_notice(notice: &Notice) -> String {
    let level = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Success => "success",
        NoticeLevel::Warning => "warning",
    };
    format!(
        "<p class='notice notice-{level}'>{}</p>",
        html_escape(&notice.message)
    )
}

fn render_summary(summary: &DatasetSummary) -> String {
    let header: String = summary
        .columns
        .iter()
        .map(|name| format!("<th>{}</th>", html_escape(name)))
        .collect();
    let rows: String = summary
        .preview
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| format!("<td>{}</td>", html_escape(cell)))
                .collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();
    format!(
        "<section id='dataset'><h2>Dataset Preview</h2><table><thead><tr>{header}</tr></thead><tbody>{rows}</tbody></table>\
<h2>Dataset Information</h2><p>Shape: ({rows_n}, {cols_n})</p></section>",
        rows_n = summary.row_count,
        cols_n = summary.column_count,
    )
}

fn render_section(config: &ReportConfig, symbol: &str, section: &Section) -> String {
    let mut out = format!(
        "<section id='{id}'><h2>{title}</h2>",
        id = section.id.as_str(),
        title = html_escape(&section.title)
    );
    for scalar in &section.scalars {
        let value = match scalar.value {
            ScalarValue::Currency(value) => format_currency(value, symbol),
            ScalarValue::Count(value) => format_count(value),
        };
        out.push_str(&format!(
            "<div class='metric'><div class='label'>{}</div><div class='value'>{}</div></div>",
            html_escape(&scalar.label),
            html_escape(&value)
        ));
    }
    let panels: String = section
        .panels
        .iter()
        .map(|panel| render_panel(config, symbol, panel))
        .collect();
    if section.side_by_side {
        out.push_str(&format!("<div class='columns'>{panels}</div>"));
    } else {
        out.push_str(&panels);
    }
    for note in &section.notes {
        out.push_str(&render_notice(note));
    }
    out.push_str("</section>");
    out
}

fn render_panel(config: &ReportConfig, symbol: &str, panel: &Panel) -> String {
    let mut out = String::from("<div class='panel'>");
    if let Some(title) = &panel.title {
        out.push_str(&format!("<h3>{}</h3>", html_escape(title)));
    }
    out.push_str(&render_table(symbol, &panel.table));
    if let Some(chart) = &panel.chart {
        out.push_str(&render_chart(&panel.table, chart, &config.figures, symbol));
    }
    out.push_str("</div>");
    out
}

fn render_table(symbol: &str, table: &AggregateTable) -> String {
    let rows: String = table
        .rows
        .iter()
        .map(|row| {
            let value = match table.kind {
                ValueKind::Currency => format_currency(row.value, symbol),
                ValueKind::Count => format_count(row.value.max(0.0).round() as usize),
            };
            format!(
                "<tr><td>{}</td><td class='num'>{}</td></tr>",
                html_escape(&row.key),
                html_escape(&value)
            )
        })
        .collect();
    format!(
        "<table><thead><tr><th>{}</th><th>{}</th></tr></thead><tbody>{rows}</tbody></table>",
        html_escape(&table.key_label),
        html_escape(&table.value_label)
    )
}

fn render_lookup(symbol: &str, outcome: &LookupOutcome) -> String {
    let mut out = String::from("<section id='order_lookup'><h2>Order Summary by Order ID</h2>");
    match outcome {
        LookupOutcome::Found(summary) => {
            let fields = [
                ("Order ID", summary.order_id.clone()),
                ("Line Items", format_count(summary.row_count)),
                ("Total Revenue", format_currency(summary.total_amount, symbol)),
                ("City", summary.ship_city.clone()),
                ("State", summary.ship_state.clone()),
                ("Sales Channel", summary.sales_channel.clone()),
            ];
            out.push_str("<dl>");
            for (label, value) in fields {
                out.push_str(&format!(
                    "<dt>{label}</dt><dd>{}</dd>",
                    html_escape(&value)
                ));
            }
            out.push_str("</dl>");
        }
        other => {
            if let Some(notice) = other.notice() {
                out.push_str(&render_notice(&notice));
            }
        }
    }
    out.push_str("</section>");
    out
}
