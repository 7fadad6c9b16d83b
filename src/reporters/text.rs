//! Text (terminal) reporter with colors and formatting

use super::highlight::Segment;
use super::StatementReport;
use crate::batch::BatchRanking;
use crate::compare::Comparison;
use crate::lexicon::Lexicon;
use crate::models::{Category, Status, Verdict};
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[91m";
const YELLOW: &str = "\x1b[93m";
const CYAN: &str = "\x1b[96m";
const GREEN: &str = "\x1b[32m";

const WIDTH: usize = 65;

/// Evidence colors per category
fn category_color(category: Category) -> &'static str {
    match category {
        Category::Qualifier | Category::TemporalDiscontinuity => RED,
        Category::Hedging => YELLOW,
        Category::SelfReference | Category::Filler => CYAN,
    }
}

fn status_color(status: Status) -> &'static str {
    match status {
        Status::Ok => GREEN,
        Status::Warning => YELLOW,
        Status::Critical => RED,
    }
}

fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Low => GREEN,
        Verdict::Moderate => YELLOW,
        Verdict::High => RED,
    }
}

fn rule(c: char) -> String {
    c.to_string().repeat(WIDTH)
}

fn banner(out: &mut String, title: &str) {
    out.push_str(&format!("\n{}\n", rule('=')));
    out.push_str(&format!("{BOLD}{:^WIDTH$}{RESET}\n", title));
    out.push_str(&format!("{}\n", rule('=')));
}

fn finish(out: String, color: bool) -> String {
    if color {
        out
    } else {
        console::strip_ansi_codes(&out).into_owned()
    }
}

/// Render report as formatted terminal output
pub fn render(report: &StatementReport, color: bool) -> Result<String> {
    let mut out = String::new();

    banner(&mut out, "LYAR FORENSIC LINGUISTIC ANALYSIS REPORT");
    out.push_str(&format!(
        "{:<25} | {:<10} | {:<10} | {:<12}\n",
        "INDICATOR", "VALUE", "BASELINE", "STATUS"
    ));
    out.push_str(&format!("{}\n", rule('-')));

    for row in &report.categories {
        let baseline = format!("{} {:.1}%", row.direction.symbol(), row.baseline);
        out.push_str(&format!(
            "{:<25} | {:>9.2}% | {:<10} | {}{:<12}{RESET}\n",
            row.label,
            row.density,
            baseline,
            status_color(row.status),
            row.status.label()
        ));
    }

    let verdict_c = verdict_color(report.verdict);
    out.push_str(&format!("{}\n", rule('-')));
    out.push_str(&format!(
        "FINAL RISK SCORE: {verdict_c}{BOLD}{}{RESET} / 100\n",
        report.risk_score
    ));
    out.push_str(&format!(
        "CONCLUSION: {verdict_c}{}{RESET}\n",
        report.conclusion
    ));
    out.push_str(&format!(
        "{DIM}Total words: {}{RESET}\n",
        report.total_words
    ));
    out.push_str(&format!("{}\n", rule('-')));

    // Highlighted evidence
    out.push_str(&format!("{BOLD}EVIDENCE{RESET}\n"));
    for segment in report.highlighter().segments(report.statement.trim_end()) {
        match segment {
            Segment::Plain(text) => out.push_str(text),
            Segment::Marked(text, category) => {
                out.push_str(&format!("{BOLD}{}{}{RESET}", category_color(category), text))
            }
        }
    }
    out.push('\n');
    out.push_str(&format!("{}\n", rule('-')));
    out.push_str(&format!(
        "{DIM}For a visual analysis generate the HTML report (--format html).{RESET}\n"
    ));

    Ok(finish(out, color))
}

/// Render a comparison as a side-by-side table
pub fn render_comparison(comparison: &Comparison, lexicon: &Lexicon, color: bool) -> Result<String> {
    let mut out = String::new();
    let (a, b) = (&comparison.first, &comparison.second);

    banner(&mut out, "COMPARATIVE FORENSIC ANALYSIS");
    out.push_str(&format!("{:<25} | {:<15} | {:<15}\n", "METRIC", "ST. 1", "ST. 2"));
    out.push_str(&format!("{}\n", rule('-')));
    out.push_str(&format!(
        "{:<25} | {:<15} | {:<15}\n",
        "Total Words", a.total_words, b.total_words
    ));
    for entry in lexicon.entries() {
        out.push_str(&format!(
            "{:<25} | {:<15} | {:<15}\n",
            entry.label,
            format!("{:.2}%", a.density(entry.category)),
            format!("{:.2}%", b.density(entry.category))
        ));
    }
    out.push_str(&format!(
        "{:<25} | {:<15} | {:<15}\n",
        "Risk Score", a.risk_score, b.risk_score
    ));
    out.push_str(&format!("{}\n", rule('-')));
    out.push_str(&format!(
        "VERDICT: {GREEN}{BOLD}{}{RESET} is LINGUISTICALLY MORE CREDIBLE.\n",
        comparison.more_credible
    ));
    if comparison.tied {
        out.push_str(&format!(
            "{DIM}Scores are tied; ties resolve to the second statement.{RESET}\n"
        ));
    }
    out.push_str(&format!("{}\n", rule('=')));

    Ok(finish(out, color))
}

/// Render a batch ranking table
pub fn render_batch(ranking: &BatchRanking, color: bool) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", rule('=')));
    out.push_str(&format!("{:<5} | {:<30} | {}\n", "RANK", "FILENAME", "RISK SCORE"));
    out.push_str(&format!("{}\n", rule('-')));

    if ranking.entries.is_empty() {
        out.push_str(&format!(
            "{DIM}No statements to rank in {}{RESET}\n",
            ranking.directory.display()
        ));
    }
    for entry in &ranking.entries {
        // Truncate by chars to stay UTF-8 safe
        let name: String = if entry.file_name.chars().count() > 30 {
            let head: String = entry.file_name.chars().take(27).collect();
            format!("{}...", head)
        } else {
            entry.file_name.clone()
        };
        out.push_str(&format!(
            "{:<5} | {:<30} | {}{:>3}{RESET} / 100\n",
            entry.rank,
            name,
            verdict_color(entry.verdict),
            entry.risk_score
        ));
    }
    out.push_str(&format!("{}\n", rule('=')));

    if !ranking.skipped.is_empty() {
        out.push_str(&format!(
            "{DIM}Skipped {} file(s):{RESET}\n",
            ranking.skipped.len()
        ));
        for skipped in &ranking.skipped {
            out.push_str(&format!(
                "{DIM}  {}: {}{RESET}\n",
                skipped.file_name, skipped.reason
            ));
        }
    }

    Ok(finish(out, color))
}

/// Render the lexicon as a parameter listing
pub fn render_lexicon(lexicon: &Lexicon) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<25} | {:<10} | {:<6} | {}\n",
        "CATEGORY", "BASELINE", "WEIGHT", "PHRASES"
    ));
    out.push_str(&format!("{}\n", rule('-')));
    for entry in lexicon.entries() {
        out.push_str(&format!(
            "{:<25} | {:<10} | {:<6} | {}\n",
            entry.label,
            entry.baseline_display(),
            entry.weight,
            entry.phrases.len()
        ));
        out.push_str(&format!("    {}\n", entry.phrases.join(", ")));
    }
    out.push_str(&format!("{}\n", rule('-')));
    out.push_str(&format!("Total weight: {} / 100\n", lexicon.total_weight()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{rank_results, SkipReason, SkippedFile};
    use crate::engine::MetricsEngine;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_render_plain_table() {
        let out = render(&test_report(), false).unwrap();
        assert!(!out.contains('\x1b'));
        assert!(out.contains("LYAR FORENSIC LINGUISTIC ANALYSIS REPORT"));
        assert!(out.contains("Pronoun Density           |     22.22% | < 3.5%     | [OK]"));
        assert!(out.contains("Time Leap Density         |     22.22% | > 4.0%     | [WARNING]"));
        assert!(out.contains("FINAL RISK SCORE: 20 / 100"));
        assert!(out.contains("CONCLUSION: LOW RISK"));
        assert!(out.contains("I went to the store. Then suddenly I left."));
    }

    #[test]
    fn test_render_colored_evidence() {
        let out = render(&test_report(), true).unwrap();
        assert!(out.contains(&format!("{BOLD}{RED}Then{RESET}")));
        assert!(out.contains(&format!("{BOLD}{CYAN}I{RESET}")));
    }

    #[test]
    fn test_render_comparison_verdict() {
        let engine = MetricsEngine::standard().unwrap();
        let cmp = crate::compare::compare(
            &engine,
            "Honestly, obviously the car was clearly red.",
            "I went to the store and I bought milk for my mother.",
        )
        .unwrap();
        let out = render_comparison(&cmp, engine.lexicon(), false).unwrap();
        assert!(out.contains("VERDICT: Statement 2 is LINGUISTICALLY MORE CREDIBLE."));
        assert!(out.contains("Risk Score                | 55              | 0"));
        assert!(!out.contains("tied"));
    }

    #[test]
    fn test_render_batch_table() {
        let engine = MetricsEngine::standard().unwrap();
        let results = vec![
            ("calm.txt".to_string(), engine.analyze("I went home").unwrap()),
            (
                "shifty.txt".to_string(),
                engine.analyze("Honestly, obviously the car was clearly red.").unwrap(),
            ),
        ];
        let ranking = BatchRanking {
            directory: "statements".into(),
            entries: rank_results(results),
            skipped: vec![SkippedFile {
                file_name: "blank.txt".into(),
                reason: SkipReason::NoWords,
            }],
        };
        let out = render_batch(&ranking, false).unwrap();
        assert!(out.contains("1     | shifty.txt                     |  55 / 100"));
        assert!(out.contains("2     | calm.txt                       |   0 / 100"));
        assert!(out.contains("blank.txt: no words to analyze"));
    }

    #[test]
    fn test_render_lexicon_lists_weights() {
        let out = render_lexicon(&Lexicon::standard().unwrap());
        assert!(out.contains("Negative Qualifiers       | > 0.5%     | 30"));
        assert!(out.contains("Total weight: 100 / 100"));
    }
}
