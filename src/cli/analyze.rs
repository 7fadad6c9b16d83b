//! Analyze command - single statement report

use super::{read_statement, write_output, Session, SkipNotice};
use crate::models::Verdict;
use crate::reporters::{render_statement, OutputFormat, StatementReport};
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Build the report for a statement, `None` when it has no words
pub(super) fn build_report(session: &Session, text: &str) -> Option<StatementReport> {
    let result = session.engine.analyze(text)?;
    Some(StatementReport::new(text, &result, session.engine.lexicon()))
}

/// Write the HTML dashboard for a report
pub(super) fn export_html(report: &StatementReport, path: &Path) -> Result<()> {
    let html = render_statement(report, OutputFormat::Html, false)?;
    write_output(path, &html)
}

/// Run the analyze command.
///
/// Returns the verdict, or `None` when the statement was skipped.
pub fn run(
    session: &Session,
    file: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<Option<Verdict>> {
    let text = read_statement(file)?;
    let Some(report) = build_report(session, &text) else {
        if format == OutputFormat::Json && output.is_none() {
            SkipNotice::no_words([file]).write_json(out)?;
        } else {
            writeln!(out, "No words to analyze in {}; skipping.", file.display())?;
        }
        return Ok(None);
    };
    info!(
        "Analyzed {}: {} words, risk {}",
        file.display(),
        report.total_words,
        report.risk_score
    );

    // HTML always goes to a file
    let target: Option<PathBuf> = match (format, output) {
        (_, Some(path)) => Some(path.to_path_buf()),
        (OutputFormat::Html, None) => Some(session.config.html_output()),
        _ => None,
    };

    match target {
        Some(path) => {
            let rendered = render_statement(&report, format, false)?;
            write_output(&path, &rendered)?;
            writeln!(out, "[SUCCESS] {} report saved: {}", format, path.display())?;
        }
        None => {
            let rendered = render_statement(&report, format, session.color)?;
            out.write_all(rendered.as_bytes())?;
        }
    }

    Ok(Some(report.verdict))
}
