//! Output reporters for Lyar analysis results
//!
//! Supports multiple output formats:
//! - `text` - Terminal report with colors and highlighted evidence
//! - `json` - Machine-readable JSON
//! - `html` - Standalone HTML dashboard with highlighted evidence
//!
//! Batch rankings can additionally be drawn as an SVG bar chart.

pub mod chart;
mod highlight;
mod html;
mod json;
mod text;

pub use highlight::{Highlighter, Segment};

use crate::batch::BatchRanking;
use crate::compare::Comparison;
use crate::lexicon::Lexicon;
use crate::models::{AnalysisResult, Category, Verdict};
use crate::scoring::{self, CategoryAssessment};
use anyhow::{anyhow, bail, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, html",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Html => "html",
    }
}

/// Everything a renderer needs about one analyzed statement
#[derive(Debug, Clone, Serialize)]
pub struct StatementReport {
    pub statement: String,
    pub total_words: usize,
    pub risk_score: u32,
    pub verdict: Verdict,
    pub conclusion: String,
    pub categories: Vec<CategoryAssessment>,
    pub found_phrases: BTreeMap<Category, BTreeSet<String>>,
}

impl StatementReport {
    pub fn new(statement: &str, result: &AnalysisResult, lexicon: &Lexicon) -> Self {
        let verdict = scoring::verdict(result.risk_score);
        Self {
            statement: statement.to_string(),
            total_words: result.total_words,
            risk_score: result.risk_score,
            verdict,
            conclusion: verdict.conclusion().to_string(),
            categories: scoring::assess(result, lexicon),
            found_phrases: result.found_phrases.clone(),
        }
    }

    pub fn highlighter(&self) -> Highlighter {
        Highlighter::new(&self.found_phrases)
    }
}

/// Render a single-statement report
pub fn render_statement(report: &StatementReport, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, color),
        OutputFormat::Json => json::render(report),
        OutputFormat::Html => html::render(report),
    }
}

/// Render a two-statement comparison
pub fn render_comparison(
    comparison: &Comparison,
    lexicon: &Lexicon,
    format: OutputFormat,
    color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_comparison(comparison, lexicon, color),
        OutputFormat::Json => json::render(comparison),
        OutputFormat::Html => bail!("HTML output is only available for single statements"),
    }
}

/// Render a batch ranking
pub fn render_batch(ranking: &BatchRanking, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_batch(ranking, color),
        OutputFormat::Json => json::render(ranking),
        OutputFormat::Html => bail!("HTML output is only available for single statements"),
    }
}

/// Render the lexicon constants
pub fn render_lexicon(lexicon: &Lexicon, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_lexicon(lexicon)),
        OutputFormat::Json => json::render(lexicon),
        OutputFormat::Html => bail!("HTML output is only available for single statements"),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::engine::MetricsEngine;

    pub(crate) const STORE: &str = "I went to the store. Then suddenly I left.";

    /// Report for the store statement (score 20)
    pub(crate) fn test_report() -> StatementReport {
        let engine = MetricsEngine::standard().unwrap();
        let result = engine.analyze(STORE).unwrap();
        StatementReport::new(STORE, &result, engine.lexicon())
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("html").unwrap(), OutputFormat::Html);
        assert!(OutputFormat::from_str("sarif").is_err());
        assert_eq!(file_extension(OutputFormat::Html), "html");
    }

    #[test]
    fn test_statement_report_fields() {
        let report = test_report();
        assert_eq!(report.total_words, 9);
        assert_eq!(report.risk_score, 20);
        assert_eq!(report.verdict, Verdict::Low);
        assert_eq!(report.categories.len(), 5);
        assert_eq!(report.categories[0].label, "Pronoun Density");
        assert!(report.conclusion.starts_with("LOW RISK"));
    }

    #[test]
    fn test_html_rejected_for_batch_and_lexicon() {
        let lexicon = Lexicon::standard().unwrap();
        assert!(render_lexicon(&lexicon, OutputFormat::Html).is_err());
        let ranking = BatchRanking {
            directory: "statements".into(),
            entries: vec![],
            skipped: vec![],
        };
        assert!(render_batch(&ranking, OutputFormat::Html, false).is_err());
    }
}
