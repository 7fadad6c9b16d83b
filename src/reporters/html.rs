//! HTML reporter with embedded styles
//!
//! Generates a standalone forensic dashboard that can be viewed in any browser.
//! Includes:
//! - Risk assessment banner colored by verdict band
//! - Metrics table with per-category status
//! - Evidence legend and the statement with matched phrases highlighted
//! - Qualitative conclusion

use super::highlight::Segment;
use super::StatementReport;
use crate::models::{Category, Status, Verdict};
use anyhow::Result;
use chrono::Local;

/// Render report as standalone HTML
pub fn render(report: &StatementReport) -> Result<String> {
    let mut html = String::new();

    // DOCTYPE and head
    html.push_str(&render_head(report));

    // Body
    html.push_str("<body>\n<div class=\"container\">\n");

    html.push_str(&render_header(report));
    html.push_str(&render_risk_banner(report));
    html.push_str(&render_metrics_table(report));
    html.push_str(&render_legend(report));
    html.push_str(&render_evidence(report));
    html.push_str(&render_conclusion(report));

    html.push_str("</div>\n</body>\n</html>\n");

    Ok(html)
}

/// Highlight background per category
fn category_background(category: Category) -> &'static str {
    match category {
        Category::Qualifier => "#ffcccc",
        Category::TemporalDiscontinuity => "#ffd9b3",
        Category::Hedging => "#ffffcc",
        Category::SelfReference => "#ccf2ff",
        Category::Filler => "#e6ccff",
    }
}

fn status_color(status: Status) -> &'static str {
    match status {
        Status::Ok => "#27ae60",
        Status::Warning => "#e67e22",
        Status::Critical => "#e74c3c",
    }
}

fn risk_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::High => "high",
        Verdict::Moderate => "med",
        Verdict::Low => "low",
    }
}

fn render_head(report: &StatementReport) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>LYAR Forensic Report - Risk {}/100</title>
    <style>
{CSS}
    </style>
</head>
"#,
        report.risk_score
    )
}

fn render_header(report: &StatementReport) -> String {
    let date = Local::now().format("%Y-%m-%d");
    format!(
        r#"<h1>LYAR Forensic Analysis Dashboard</h1>
<p><strong>Analysis Date:</strong> {} | <strong>Total Word Count:</strong> {}</p>
"#,
        date, report.total_words
    )
}

fn render_risk_banner(report: &StatementReport) -> String {
    format!(
        r#"<div class="risk {}">
    Risk Assessment Score: {} / 100
</div>
"#,
        risk_class(report.verdict),
        report.risk_score
    )
}

fn render_metrics_table(report: &StatementReport) -> String {
    let mut rows = String::new();
    for row in &report.categories {
        let baseline = format!(
            "{} {:.1}%",
            html_escape(row.direction.symbol()),
            row.baseline
        );
        rows.push_str(&format!(
            r#"            <tr>
                <td><strong>{}</strong></td>
                <td>{:.2}%</td>
                <td>{}</td>
                <td style="color: {}; font-weight: bold;">{}</td>
            </tr>
"#,
            html_escape(&row.label),
            row.density,
            baseline,
            status_color(row.status),
            row.status.label()
        ));
    }

    format!(
        r#"<h3>Statistical Metrics</h3>
<table>
    <thead>
        <tr><th>Indicator</th><th>Measured Value</th><th>Baseline</th><th>Status</th></tr>
    </thead>
    <tbody>
{}    </tbody>
</table>
"#,
        rows
    )
}

fn render_legend(report: &StatementReport) -> String {
    // Legend order follows severity of the evidence, strongest first
    let order = [
        Category::Qualifier,
        Category::TemporalDiscontinuity,
        Category::Hedging,
        Category::SelfReference,
        Category::Filler,
    ];
    let mut items = String::new();
    for category in order {
        let Some(row) = report.categories.iter().find(|r| r.category == category) else {
            continue;
        };
        items.push_str(&format!(
            "    <div class=\"legend-item\"><div class=\"color-box\" style=\"background: {};\"></div> {}</div>\n",
            category_background(category),
            html_escape(&row.legend)
        ));
    }
    format!(
        "<h3>Linguistic Evidence Legend</h3>\n<div class=\"legend\">\n{}</div>\n",
        items
    )
}

fn render_evidence(report: &StatementReport) -> String {
    let mut body = String::new();
    for segment in report.highlighter().segments(&report.statement) {
        match segment {
            Segment::Plain(text) => body.push_str(&html_escape(text)),
            Segment::Marked(text, category) => body.push_str(&format!(
                "<span class=\"mark\" style=\"background-color: {};\">{}</span>",
                category_background(category),
                html_escape(text)
            )),
        }
    }
    format!(
        "<h3>Highlighted Text Evidence</h3>\n<div class=\"box\">{}</div>\n",
        body
    )
}

fn render_conclusion(report: &StatementReport) -> String {
    format!(
        r#"<div class="conclusion">
    <strong>Conclusion:</strong> {}
</div>
"#,
        html_escape(&report.conclusion)
    )
}

pub(super) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Embedded CSS
const CSS: &str = r#"
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 40px; background: #f4f4f9; color: #333; }
.container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 4px 15px rgba(0,0,0,0.1); max-width: 900px; margin: auto; }
h1, h3 { color: #2c3e50; border-bottom: 2px solid #eee; padding-bottom: 10px; }
.risk { padding: 20px; text-align: center; font-size: 24px; font-weight: bold; margin: 20px 0; border-radius: 6px; color: white; text-transform: uppercase; letter-spacing: 1px; }
.high { background: #e74c3c; box-shadow: 0 4px 10px rgba(231, 76, 60, 0.3); }
.med { background: #f39c12; box-shadow: 0 4px 10px rgba(243, 156, 18, 0.3); }
.low { background: #27ae60; box-shadow: 0 4px 10px rgba(39, 174, 96, 0.3); }

.legend { display: flex; flex-wrap: wrap; gap: 15px; margin: 15px 0; padding: 15px; background: #f8fafc; border-radius: 5px; border: 1px solid #e2e8f0; }
.legend-item { display: flex; align-items: center; font-size: 0.85em; font-weight: bold; }
.color-box { width: 18px; height: 18px; border-radius: 3px; margin-right: 8px; border: 1px solid #cbd5e1; }

.box { background: #fafafa; border: 1px solid #eee; padding: 25px; white-space: pre-wrap; line-height: 1.8; font-size: 1.1em; border-radius: 4px; }
.mark { font-weight: bold; padding: 1px 3px; border-radius: 3px; }
table { width: 100%; border-collapse: collapse; margin: 25px 0; font-size: 0.95em; }
th, td { padding: 12px 15px; border-bottom: 1px solid #edf2f7; text-align: left; }
th { background-color: #f8fafc; color: #64748b; text-transform: uppercase; font-size: 0.85em; }
.conclusion { font-style: italic; color: #475569; margin-top: 20px; padding: 15px; background: #f1f5f9; border-left: 4px solid #cbd5e1; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MetricsEngine;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_html_render_structure() {
        let html = render(&test_report()).expect("render HTML");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Risk Assessment Score: 20 / 100"));
        assert!(html.contains("<div class=\"risk low\">"));
        assert!(html.contains("<strong>Total Word Count:</strong> 9"));
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        assert!(html.contains(&format!("<strong>Analysis Date:</strong> {}", date)));
        assert!(html.contains("&lt; 3.5%"));
        assert!(html.contains("&gt; 4.0%"));
        assert!(html.contains("[WARNING]"));
        assert!(html.contains("Time Leaps (Narrative Gaps)"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_html_highlights_without_nesting() {
        let html = render(&test_report()).unwrap();
        assert!(html.contains(
            "<span class=\"mark\" style=\"background-color: #ffd9b3;\">Then</span>"
        ));
        assert!(!html.contains("<span class=\"mark\" style=\"background-color: #ccf2ff;\"><span"));
    }

    #[test]
    fn test_html_escapes_statement() {
        let engine = MetricsEngine::standard().unwrap();
        let text = "<script>alert('x')</script> Honestly I was there & then left.";
        let result = engine.analyze(text).unwrap();
        let report = StatementReport::new(text, &result, engine.lexicon());
        let html = render(&report).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; "));
        assert!(html.contains(">Honestly</span>"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<a href=\"x\">'&'</a>"), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }
}
