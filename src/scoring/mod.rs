//! Baseline Risk Scoring
//!
//! Pure functions over already computed densities. Nothing here re-runs
//! phrase matching, so any consumer holding an [`AnalysisResult`] and the
//! [`Lexicon`] it was produced with can re-derive status and verdict.
//!
//! # Scoring Formula
//!
//! ```text
//! risk_score = Σ weight(c)  for every category c where
//!     density(c) < baseline(c)   if direction(c) = below
//!     density(c) > baseline(c)   if direction(c) = above
//! ```
//!
//! Comparisons are strict: a density sitting exactly on its baseline never
//! triggers. With the standard weights (25 + 15 + 20 + 30 + 10) the score
//! is bounded to 0..=100.
//!
//! # Example
//!
//! "I went to the store. Then suddenly I left." has 9 words, 2 pronouns
//! (22.2%, not below 3.5%) and 2 time leaps (22.2% > 4.0%), so only the
//! temporal weight applies: score = 20, verdict = low risk.

use crate::lexicon::Lexicon;
use crate::models::{AnalysisResult, Category, Direction, Status, Verdict};
use serde::Serialize;
use std::collections::BTreeMap;

/// Whether a density lies strictly on the risk side of its baseline
pub fn crosses_baseline(density: f64, baseline: f64, direction: Direction) -> bool {
    match direction {
        Direction::Below => density < baseline,
        Direction::Above => density > baseline,
    }
}

/// Display status of one category
pub fn status(density: f64, baseline: f64, direction: Direction) -> Status {
    if !crosses_baseline(density, baseline, direction) {
        return Status::Ok;
    }
    match direction {
        Direction::Below => Status::Critical,
        Direction::Above => Status::Warning,
    }
}

/// Sum of the weights of every category crossing its baseline.
///
/// A category missing from `densities` is treated as density 0.0.
pub fn risk_score(densities: &BTreeMap<Category, f64>, lexicon: &Lexicon) -> u32 {
    lexicon
        .entries()
        .iter()
        .filter(|entry| {
            let density = densities.get(&entry.category).copied().unwrap_or(0.0);
            crosses_baseline(density, entry.baseline, entry.direction)
        })
        .map(|entry| entry.weight)
        .sum()
}

/// Qualitative verdict for a risk score
pub fn verdict(score: u32) -> Verdict {
    Verdict::from_score(score)
}

/// Status for every category of a result
pub fn category_statuses(result: &AnalysisResult, lexicon: &Lexicon) -> BTreeMap<Category, Status> {
    lexicon
        .entries()
        .iter()
        .map(|entry| {
            (
                entry.category,
                status(result.density(entry.category), entry.baseline, entry.direction),
            )
        })
        .collect()
}

/// One row of the metrics table: a category measured against its baseline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAssessment {
    pub category: Category,
    pub label: String,
    pub legend: String,
    pub density: f64,
    pub matches: usize,
    pub baseline: f64,
    pub direction: Direction,
    pub weight: u32,
    pub status: Status,
    /// Points this category contributes to the risk score
    pub contribution: u32,
}

/// Assess every category of a result, in lexicon (display) order
pub fn assess(result: &AnalysisResult, lexicon: &Lexicon) -> Vec<CategoryAssessment> {
    lexicon
        .entries()
        .iter()
        .map(|entry| {
            let density = result.density(entry.category);
            let status = status(density, entry.baseline, entry.direction);
            CategoryAssessment {
                category: entry.category,
                label: entry.label.clone(),
                legend: entry.legend.clone(),
                density,
                matches: result.match_count(entry.category),
                baseline: entry.baseline,
                direction: entry.direction,
                weight: entry.weight,
                status,
                contribution: if status.is_flagged() { entry.weight } else { 0 },
            }
        })
        .collect()
}
