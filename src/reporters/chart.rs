//! SVG bar chart of batch risk scores
//!
//! One bar per statement in rank order, colored by verdict band, with a
//! dashed reference line at the high-risk threshold.

use super::html::html_escape;
use crate::models::Verdict;
use std::fmt::Write;

/// Default chart file name
pub const DEFAULT_CHART_PATH: &str = "batch_risk_analysis.svg";

const HEIGHT: usize = 420;
const MARGIN_LEFT: usize = 70;
const MARGIN_RIGHT: usize = 30;
const MARGIN_TOP: usize = 60;
const MARGIN_BOTTOM: usize = 130;
const SLOT: usize = 64;
const MIN_WIDTH: usize = 640;
const HIGH_RISK_LINE: u32 = 70;

fn bar_color(score: u32) -> &'static str {
    match Verdict::from_score(score) {
        Verdict::High => "#e74c3c",
        Verdict::Moderate => "#f39c12",
        Verdict::Low => "#27ae60",
    }
}

/// Render `(file name, risk score)` pairs as a standalone SVG document
pub fn render_svg(scores: &[(&str, u32)]) -> String {
    let plot_w = (scores.len() * SLOT).max(MIN_WIDTH - MARGIN_LEFT - MARGIN_RIGHT);
    let width = MARGIN_LEFT + plot_w + MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let base_y = MARGIN_TOP + plot_h;
    let y_of = |score: u32| base_y as f64 - score.min(100) as f64 / 100.0 * plot_h as f64;

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{HEIGHT}\" viewBox=\"0 0 {width} {HEIGHT}\">\n"
    );
    svg.push_str(
        "<style>text{font-family:'Segoe UI',Tahoma,Verdana,sans-serif;fill:#333}\
.title{font-size:16px;font-weight:bold}.tick{font-size:11px;fill:#64748b}\
.label{font-size:11px}.axis{font-size:12px}</style>\n",
    );
    let _ = write!(svg, "<rect width=\"{width}\" height=\"{HEIGHT}\" fill=\"white\"/>\n");
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"30\" text-anchor=\"middle\" class=\"title\">Batch Risk Distribution Across Statements</text>\n",
        width / 2
    );

    // Grid and y ticks
    for tick in (0..=100).step_by(20) {
        let y = y_of(tick);
        let _ = write!(
            svg,
            "<line x1=\"{MARGIN_LEFT}\" y1=\"{y:.1}\" x2=\"{}\" y2=\"{y:.1}\" stroke=\"#edf2f7\"/>\n\
<text x=\"{}\" y=\"{:.1}\" text-anchor=\"end\" class=\"tick\">{tick}</text>\n",
            MARGIN_LEFT + plot_w,
            MARGIN_LEFT - 8,
            y + 4.0
        );
    }
    let _ = write!(
        svg,
        "<text x=\"18\" y=\"{}\" text-anchor=\"middle\" class=\"axis\" transform=\"rotate(-90 18 {})\">Risk Score</text>\n",
        MARGIN_TOP + plot_h / 2,
        MARGIN_TOP + plot_h / 2
    );

    if scores.is_empty() {
        let _ = write!(
            svg,
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" class=\"axis\">No statements to chart</text>\n",
            MARGIN_LEFT + plot_w / 2,
            MARGIN_TOP + plot_h / 2
        );
    }

    let bar_w = SLOT * 2 / 3;
    for (i, (name, score)) in scores.iter().enumerate() {
        let x = MARGIN_LEFT + i * SLOT + (SLOT - bar_w) / 2;
        let top = y_of(*score);
        let cx = x + bar_w / 2;
        let label_y = base_y + 14;
        let _ = write!(
            svg,
            "<rect x=\"{x}\" y=\"{top:.1}\" width=\"{bar_w}\" height=\"{:.1}\" fill=\"{}\"><title>{}: {score}</title></rect>\n\
<text x=\"{cx}\" y=\"{label_y}\" text-anchor=\"end\" class=\"label\" transform=\"rotate(-45 {cx} {label_y})\">{}</text>\n",
            base_y as f64 - top,
            bar_color(*score),
            html_escape(name),
            html_escape(name)
        );
    }

    // High risk threshold
    let y = y_of(HIGH_RISK_LINE);
    let _ = write!(
        svg,
        "<line x1=\"{MARGIN_LEFT}\" y1=\"{y:.1}\" x2=\"{}\" y2=\"{y:.1}\" stroke=\"red\" stroke-opacity=\"0.5\" stroke-dasharray=\"6 4\"/>\n\
<text x=\"{}\" y=\"{:.1}\" text-anchor=\"end\" class=\"tick\" fill=\"red\">High Risk</text>\n",
        MARGIN_LEFT + plot_w,
        MARGIN_LEFT + plot_w,
        y - 4.0
    );
    let _ = write!(
        svg,
        "<line x1=\"{MARGIN_LEFT}\" y1=\"{base_y}\" x2=\"{}\" y2=\"{base_y}\" stroke=\"#333\"/>\n",
        MARGIN_LEFT + plot_w
    );

    svg.push_str("</svg>\n");
    svg
}
