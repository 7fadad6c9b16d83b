//! Batch ranking of a directory of statements
//!
//! Every matching file is analyzed independently (in parallel on the
//! current rayon pool), then the results are stable-sorted by descending
//! risk score so ties keep file-name order. Files without words and files
//! that cannot be read are skipped and reported, never fatal.

use crate::engine::MetricsEngine;
use crate::models::{AnalysisResult, Verdict};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Default statement file extension
pub const DEFAULT_EXTENSION: &str = "txt";

/// Errors locating the statements to rank
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to list {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One ranked statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    /// 1-based position in the ranking
    pub rank: usize,
    pub file_name: String,
    pub risk_score: u32,
    pub total_words: usize,
    pub verdict: Verdict,
}

/// Why a file did not make it into the ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    NoWords,
    Unreadable(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoWords => write!(f, "no words to analyze"),
            SkipReason::Unreadable(e) => write!(f, "unreadable: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: SkipReason,
}

/// Ranking across all statements of a directory
#[derive(Debug, Clone, Serialize)]
pub struct BatchRanking {
    pub directory: PathBuf,
    pub entries: Vec<BatchEntry>,
    pub skipped: Vec<SkippedFile>,
}

impl BatchRanking {
    /// `(file name, risk score)` pairs in rank order, as fed to the chart
    pub fn scores(&self) -> Vec<(&str, u32)> {
        self.entries
            .iter()
            .map(|e| (e.file_name.as_str(), e.risk_score))
            .collect()
    }
}

/// List regular files with the given extension, sorted by file name.
///
/// Non-recursive. Name order stands in for directory listing order so
/// runs are reproducible across platforms.
pub fn collect_statement_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, BatchError> {
    if !dir.is_dir() {
        return Err(BatchError::NotADirectory(dir.to_path_buf()));
    }
    let read_dir = std::fs::read_dir(dir).map_err(|source| BatchError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let extension = extension.trim_start_matches('.');
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!("Found {} .{} files in {}", files.len(), extension, dir.display());
    Ok(files)
}

/// Stable sort of analyzed statements by descending risk score.
///
/// Equal scores keep their input order.
pub fn rank_results(results: Vec<(String, AnalysisResult)>) -> Vec<BatchEntry> {
    let mut entries: Vec<BatchEntry> = results
        .into_iter()
        .map(|(file_name, result)| BatchEntry {
            rank: 0,
            file_name,
            risk_score: result.risk_score,
            total_words: result.total_words,
            verdict: Verdict::from_score(result.risk_score),
        })
        .collect();
    entries.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    entries
}

enum Outcome {
    Analyzed(String, AnalysisResult),
    Skipped(SkippedFile),
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Analyze and rank the given files, calling `on_file` after each one
pub fn rank_files<F>(engine: &MetricsEngine, directory: &Path, files: &[PathBuf], on_file: F) -> BatchRanking
where
    F: Fn(&Path) + Sync,
{
    let outcomes: Vec<Outcome> = files
        .par_iter()
        .map(|path| {
            let file_name = file_name_of(path);
            let outcome = match std::fs::read_to_string(path) {
                Ok(text) => match engine.analyze(&text) {
                    Some(result) => Outcome::Analyzed(file_name, result),
                    None => {
                        debug!("Skipping {}: no words", path.display());
                        Outcome::Skipped(SkippedFile {
                            file_name,
                            reason: SkipReason::NoWords,
                        })
                    }
                },
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    Outcome::Skipped(SkippedFile {
                        file_name,
                        reason: SkipReason::Unreadable(e.to_string()),
                    })
                }
            };
            on_file(path);
            outcome
        })
        .collect();

    let mut analyzed = Vec::with_capacity(outcomes.len());
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Analyzed(name, result) => analyzed.push((name, result)),
            Outcome::Skipped(s) => skipped.push(s),
        }
    }

    BatchRanking {
        directory: directory.to_path_buf(),
        entries: rank_results(analyzed),
        skipped,
    }
}

/// Rank every statement file with `extension` in `dir`
pub fn rank_directory(
    engine: &MetricsEngine,
    dir: &Path,
    extension: &str,
) -> Result<BatchRanking, BatchError> {
    let files = collect_statement_files(dir, extension)?;
    Ok(rank_files(engine, dir, &files, |_| {}))
}
