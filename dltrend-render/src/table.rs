//! Plain-text, markdown and JSON views of a [`SeriesSummary`].

use dltrend_types::SeriesSummary;

pub fn render_series_text(summary: &SeriesSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {:<12} {:<12} {:>10} {:>12}\n",
        "DATE", "VERSION", "DOWNLOADS", "CUMULATIVE"
    ));
    out.push_str(&format!(
        "  {:<12} {:<12} {:>10} {:>12}\n",
        "----", "-------", "---------", "----------"
    ));
    for row in &summary.rows {
        let marker = if row.major { " *" } else { "" };
        out.push_str(&format!(
            "  {:<12} {:<12} {:>10} {:>12}\n",
            row.date.to_string(),
            format!("{}{}", row.label, marker),
            row.delta,
            row.cumulative_total
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "Total downloads: {} ({} releases, {} major; * marks a major release)\n",
        summary.totals.total_downloads, summary.totals.releases, summary.totals.majors
    ));
    out
}

pub fn render_series_md(summary: &SeriesSummary) -> String {
    let mut out = String::new();
    out.push_str("# Downloads trend\n\n");
    out.push_str(&format!(
        "- Total downloads: {}\n",
        summary.totals.total_downloads
    ));
    out.push_str(&format!(
        "- Releases: {} ({} major)\n",
        summary.totals.releases, summary.totals.majors
    ));
    out.push_str(&format!("- Generated on: {}\n\n", summary.generated_on));

    if summary.rows.is_empty() {
        out.push_str("_No releases._\n");
        return out;
    }

    out.push_str("| Date | Version | Downloads | Cumulative |\n");
    out.push_str("|---|---|---:|---:|\n");
    for row in &summary.rows {
        let label = if row.major {
            format!("**{}**", row.label)
        } else {
            row.label.clone()
        };
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            row.date, label, row.delta, row.cumulative_total
        ));
    }
    out
}

pub fn render_series_json(summary: &SeriesSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
