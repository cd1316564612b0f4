//! Report rendering
//!
//! Text reports list the statistics in a fixed order, one `Label: value`
//! per line. Without a configured precision, float statistics are rounded
//! half away from zero to whole numbers.

use imstat_stats::{ParsePolicy, ParseReport, Summary};

/// Statistic labels in display order
pub const LABELS: [&str; 8] = [
    "Average",
    "Median",
    "Range",
    "Interquartile",
    "Min",
    "Max",
    "Variance",
    "Standard Deviation",
];

/// Shown in place of a statistic that is undefined for the sample
const UNDEFINED: &str = "n/a";

/// Render a summary as labeled lines
pub fn render_text(summary: &Summary, precision: Option<u32>) -> String {
    let float = |x: f64| format_float(x, precision);
    let values = [
        float(summary.mean),
        float(summary.median),
        summary.range.to_string(),
        summary
            .interquartile_range
            .map(|iqr| iqr.to_string())
            .unwrap_or_else(|| UNDEFINED.to_string()),
        summary.min.to_string(),
        summary.max.to_string(),
        float(summary.variance),
        float(summary.std_dev),
    ];

    let mut out = String::new();
    for (label, value) in LABELS.iter().zip(values.iter()) {
        out.push_str(&format!("{}: {}\n", label, value));
    }
    if let Some(note) = parse_note(&summary.parse_report) {
        out.push_str(&note);
        out.push('\n');
    }
    out
}

/// Render a summary as pretty-printed JSON
pub fn render_json(summary: &Summary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

/// Report for a sample with no values
pub fn render_empty_text(report: &ParseReport) -> String {
    let mut out = String::from("No values\n");
    if let Some(note) = parse_note(report) {
        out.push_str(&note);
        out.push('\n');
    }
    out
}

fn format_float(x: f64, precision: Option<u32>) -> String {
    match precision {
        Some(places) => format!("{:.*}", places as usize, x),
        None => {
            let rounded = x.round();
            // Small negatives round to -0.0, which formats as "-0"
            if rounded == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", rounded)
            }
        }
    }
}

fn parse_note(report: &ParseReport) -> Option<String> {
    if report.is_clean() {
        return None;
    }
    let action = match report.policy {
        ParsePolicy::Zero => "counted as zero",
        ParsePolicy::Skip => "skipped",
        ParsePolicy::Abort => "rejected",
    };
    Some(format!(
        "Unparsed lines: {} of {} ({})",
        report.failures(),
        report.lines_read,
        action
    ))
}
