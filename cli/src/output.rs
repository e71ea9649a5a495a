use pathcost_core::{Metric, PathReport};

fn heading(metric: Metric) -> &'static str {
    match metric {
        Metric::Distance => "Shortest",
        Metric::Cost => "Cheapest",
    }
}

/// Human-readable block for one report.
pub fn render_text(report: &PathReport, separator: &str) -> String {
    format!(
        "{} path between {} and {}:\nPath: {}\nDistance: {}\nCost of travel: {}\n",
        heading(report.metric),
        report.source,
        report.destination,
        report.path.join(separator),
        report.distance,
        report.cost,
    )
}

/// All reports as text, separated by blank lines.
pub fn render_text_all(reports: &[&PathReport], separator: &str) -> String {
    reports
        .iter()
        .map(|r| render_text(r, separator))
        .collect::<Vec<_>>()
        .join("\n")
}

/// All reports as a pretty-printed JSON array.
pub fn render_json(reports: &[&PathReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
