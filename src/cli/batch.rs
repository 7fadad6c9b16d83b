//! Batch command - rank a folder of statements

use super::{write_output, Session};
use crate::batch::{collect_statement_files, rank_files, BatchRanking};
use crate::reporters::{chart, render_batch, OutputFormat};
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;
use tracing::info;

fn create_bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap()
        .progress_chars("█▓▒░  ")
}

/// Analyze every matching file in `dir` on the session's worker pool
pub(super) fn rank(session: &Session, dir: &Path, extension: &str) -> Result<BatchRanking> {
    let files = collect_statement_files(dir, extension)?;

    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(create_bar_style());
    bar.set_message("Analyzing statements...");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(session.workers)
        .build()
        .context("Failed to build worker pool")?;
    let ranking = pool.install(|| rank_files(&session.engine, dir, &files, |_| bar.inc(1)));
    bar.finish_and_clear();

    info!(
        "Ranked {} statements in {} ({} skipped)",
        ranking.entries.len(),
        dir.display(),
        ranking.skipped.len()
    );
    Ok(ranking)
}

/// Write the SVG risk chart for a ranking
pub(super) fn write_chart(ranking: &BatchRanking, path: &Path) -> Result<()> {
    write_output(path, &chart::render_svg(&ranking.scores()))
}

pub fn run(
    session: &Session,
    dir: &Path,
    extension: &str,
    format: OutputFormat,
    output: Option<&Path>,
    chart_path: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let ranking = rank(session, dir, extension)?;

    if ranking.entries.is_empty() && ranking.skipped.is_empty() {
        writeln!(
            out,
            "No .{} files found in {}",
            extension.trim_start_matches('.'),
            dir.display()
        )?;
        return Ok(());
    }

    match output {
        Some(path) => {
            write_output(path, &render_batch(&ranking, format, false)?)?;
            writeln!(out, "[SUCCESS] Ranking saved: {}", path.display())?;
        }
        None => out.write_all(render_batch(&ranking, format, session.color)?.as_bytes())?,
    }

    if let Some(path) = chart_path {
        if ranking.entries.is_empty() {
            info!("No analyzable statements; chart not written");
        } else {
            write_chart(&ranking, path)?;
            // Keep JSON on stdout parseable
            if format == OutputFormat::Json && output.is_none() {
                eprintln!("Chart saved: {}", path.display());
            } else {
                writeln!(out, "{} Chart saved: {}", style("✓").green(), path.display())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;

    fn session() -> Session {
        Session::new(ProjectConfig::default(), true, Some(2)).unwrap()
    }

    #[test]
    fn test_batch_ranks_and_writes_chart() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("calm.txt"), "I went to the store.").unwrap();
        std::fs::write(
            dir.path().join("shaky.txt"),
            "Honestly, obviously the car was clearly red.",
        )
        .unwrap();
        std::fs::write(dir.path().join("ignored.md"), "Honestly.").unwrap();
        let chart_path = dir.path().join("out").join("chart.svg");

        let mut out = Vec::new();
        run(
            &session(),
            dir.path(),
            "txt",
            OutputFormat::Text,
            None,
            Some(&chart_path),
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let shaky = text.find("shaky.txt").unwrap();
        let calm = text.find("calm.txt").unwrap();
        assert!(shaky < calm);
        assert!(!text.contains("ignored.md"));
        assert!(std::fs::read_to_string(&chart_path).unwrap().contains("<svg"));
    }

    #[test]
    fn test_batch_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        let chart_path = dir.path().join("chart.svg");
        let mut out = Vec::new();
        run(
            &session(),
            dir.path(),
            "txt",
            OutputFormat::Text,
            None,
            Some(&chart_path),
            &mut out,
        )
        .unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No .txt files found"));
        assert!(!chart_path.exists());
    }

    #[test]
    fn test_batch_missing_folder_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let result = run(
            &session(),
            &dir.path().join("missing"),
            "txt",
            OutputFormat::Text,
            None,
            None,
            &mut out,
        );
        assert!(result.is_err());
    }
}
