//! Inline SVG charts. Output depends only on the input rows and the figure
//! config, so the same table always renders to the same bytes.

use salesdash_core::config::FigureConfig;
use salesdash_core::money::{format_count, format_currency};
use salesdash_metrics::{AggregateTable, ChartKind, ChartSpec, TableRow, ValueKind};

use crate::pages::html_escape;

const MARGIN: f64 = 28.0;
const ANNOTATION_WIDTH: f64 = 110.0;
const BAR_FILL: &str = "#3b82f6";

fn empty_svg(config: &FigureConfig) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}'></svg>",
        w = config.width,
        h = config.height
    )
}

fn open_svg(config: &FigureConfig, title: &str) -> Vec<String> {
    let mut parts = vec![format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}' font-size='11'>",
        w = config.width,
        h = config.height
    )];
    if !title.is_empty() {
        parts.push(format!("<title>{}</title>", html_escape(title)));
    }
    parts
}

/// Largest positive value, or 1 when nothing is positive.
fn scale_max(rows: &[TableRow]) -> f64 {
    let max = rows
        .iter()
        .map(|row| row.value)
        .fold(f64::NEG_INFINITY, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

fn format_value(value: f64, kind: ValueKind, symbol: &str) -> String {
    match kind {
        ValueKind::Currency => format_currency(value, symbol),
        ValueKind::Count => format_count(value.max(0.0).round() as usize),
    }
}

/// Line chart with a point marker per row, keys along the x axis.
pub fn render_line_svg(rows: &[TableRow], config: &FigureConfig, title: &str) -> String {
    if rows.is_empty() {
        return empty_svg(config);
    }
    let width = config.width as f64;
    let height = config.height as f64;
    let plot_w = (width - 2.0 * MARGIN).max(1.0);
    let plot_h = (height - 2.0 * MARGIN).max(1.0);
    let max = scale_max(rows);
    let step = if rows.len() > 1 {
        plot_w / (rows.len() - 1) as f64
    } else {
        0.0
    };
    let points: Vec<(f64, f64)> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let x = MARGIN + step * idx as f64;
            let y = MARGIN + plot_h - (row.value.max(0.0) / max) * plot_h;
            (x, y)
        })
        .collect();
    let mut parts = open_svg(config, title);
    parts.push(format!(
        "<line x1='{m:.2}' y1='{b:.2}' x2='{r:.2}' y2='{b:.2}' stroke='#9ca3af' />",
        m = MARGIN,
        b = MARGIN + plot_h,
        r = MARGIN + plot_w
    ));
    let path: Vec<String> = points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect();
    parts.push(format!(
        "<polyline points='{}' fill='none' stroke='{BAR_FILL}' stroke-width='2' />",
        path.join(" ")
    ));
    for ((x, y), row) in points.iter().zip(rows) {
        parts.push(format!("<circle cx='{x:.2}' cy='{y:.2}' r='3' fill='{BAR_FILL}' />"));
        parts.push(format!(
            "<text x='{x:.2}' y='{ty:.2}' text-anchor='middle'>{label}</text>",
            ty = height - MARGIN / 3.0,
            label = html_escape(&row.key)
        ));
    }
    parts.push("</svg>".into());
    parts.join("")
}

/// Horizontal bars, one per row, labels on the left. When `annotations` is
/// given, each bar carries its text just past the bar end.
pub fn render_hbar_svg(
    rows: &[TableRow],
    config: &FigureConfig,
    title: &str,
    annotations: Option<&[String]>,
) -> String {
    if rows.is_empty() {
        return empty_svg(config);
    }
    let width = config.width as f64;
    let height = config.height as f64;
    let label_width = config.label_width as f64;
    let reserved = if annotations.is_some() { ANNOTATION_WIDTH } else { 0.0 };
    let plot_w = (width - label_width - reserved - MARGIN / 2.0).max(1.0);
    let band = (height - MARGIN) / rows.len() as f64;
    let bar_h = (band * 0.7).max(1.0);
    let max = scale_max(rows);
    let mut parts = open_svg(config, title);
    for (idx, row) in rows.iter().enumerate() {
        let y = MARGIN / 2.0 + band * idx as f64;
        let length = (row.value.max(0.0) / max) * plot_w;
        let mid = y + bar_h / 2.0;
        parts.push(format!(
            "<text x='{lx:.2}' y='{mid:.2}' text-anchor='end' dominant-baseline='middle'>{label}</text>",
            lx = label_width - 6.0,
            label = html_escape(&row.key)
        ));
        parts.push(format!(
            "<rect x='{label_width:.2}' y='{y:.2}' width='{length:.2}' height='{bar_h:.2}' fill='{BAR_FILL}' />"
        ));
        if let Some(text) = annotations.and_then(|texts| texts.get(idx)) {
            parts.push(format!(
                "<text x='{ax:.2}' y='{mid:.2}' dominant-baseline='middle'>{text}</text>",
                ax = label_width + length + 4.0,
                text = html_escape(text)
            ));
        }
    }
    parts.push("</svg>".into());
    parts.join("")
}

/// Vertical bars with keys under each bar.
pub fn render_vbar_svg(rows: &[TableRow], config: &FigureConfig, title: &str) -> String {
    if rows.is_empty() {
        return empty_svg(config);
    }
    let width = config.width as f64;
    let height = config.height as f64;
    let plot_w = (width - 2.0 * MARGIN).max(1.0);
    let plot_h = (height - 2.0 * MARGIN).max(1.0);
    let band = plot_w / rows.len() as f64;
    let bar_w = (band * 0.7).max(1.0);
    let max = scale_max(rows);
    let mut parts = open_svg(config, title);
    for (idx, row) in rows.iter().enumerate() {
        let bar_h = (row.value.max(0.0) / max) * plot_h;
        let x = MARGIN + band * idx as f64 + (band - bar_w) / 2.0;
        let y = MARGIN + plot_h - bar_h;
        parts.push(format!(
            "<rect x='{x:.2}' y='{y:.2}' width='{bar_w:.2}' height='{bar_h:.2}' fill='{BAR_FILL}' />"
        ));
        parts.push(format!(
            "<text x='{cx:.2}' y='{ty:.2}' text-anchor='middle'>{label}</text>",
            cx = x + bar_w / 2.0,
            ty = height - MARGIN / 3.0,
            label = html_escape(&row.key)
        ));
    }
    parts.push("</svg>".into());
    parts.join("")
}

/// Renders the chart a panel asks for.
pub fn render_chart(
    table: &AggregateTable,
    chart: &ChartSpec,
    config: &FigureConfig,
    currency_symbol: &str,
) -> String {
    match chart.kind {
        ChartKind::Line => render_line_svg(&table.rows, config, &chart.title),
        ChartKind::VerticalBar => render_vbar_svg(&table.rows, config, &chart.title),
        ChartKind::HorizontalBar => {
            let annotations: Option<Vec<String>> = chart.annotate.then(|| {
                table
                    .rows
                    .iter()
                    .map(|row| format_value(row.value, table.kind, currency_symbol))
                    .collect()
            });
            render_hbar_svg(&table.rows, config, &chart.title, annotations.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values_draw_zero_length_bars() {
        let rows = vec![TableRow::new("refund", -40.0), TableRow::new("sale", 10.0)];
        let svg = render_vbar_svg(&rows, &FigureConfig::default(), "");
        assert!(svg.contains("height='0.00'"));
    }

    #[test]
    fn single_point_line_stays_inside_the_plot() {
        let rows = vec![TableRow::new("2024-01", 5.0)];
        let svg = render_line_svg(&rows, &FigureConfig::default(), "trend");
        assert!(svg.contains("<circle cx='28.00'"));
        assert!(svg.contains("<title>trend</title>"));
    }
}
