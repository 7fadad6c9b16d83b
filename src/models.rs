//! Core data models for Lyar
//!
//! These models are shared by the engine, the scoring helpers and every
//! reporter: the five marker categories, the direction in which a category
//! signals risk, and the per-statement analysis result.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Linguistic marker categories.
///
/// Declaration order is the display order used by all reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// First-person pronouns
    SelfReference,
    Hedging,
    TemporalDiscontinuity,
    /// Conviction qualifiers ("honestly", "believe me")
    Qualifier,
    Filler,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::SelfReference,
        Category::Hedging,
        Category::TemporalDiscontinuity,
        Category::Qualifier,
        Category::Filler,
    ];

    /// Stable machine key, matches the serde name
    pub fn key(&self) -> &'static str {
        match self {
            Category::SelfReference => "self_reference",
            Category::Hedging => "hedging",
            Category::TemporalDiscontinuity => "temporal_discontinuity",
            Category::Qualifier => "qualifier",
            Category::Filler => "filler",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Which side of the baseline indicates risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Risk when density is strictly below the baseline
    Below,
    /// Risk when density is strictly above the baseline
    Above,
}

impl Direction {
    /// Comparison sign shown next to a baseline, e.g. `< 3.5%`
    pub fn symbol(&self) -> &'static str {
        match self {
            Direction::Below => "<",
            Direction::Above => ">",
        }
    }
}

/// Result of analyzing one statement.
///
/// Only produced for statements with at least one word token; empty input
/// is represented by `None` at the engine boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_words: usize,
    /// Percentage of total words matched per category, unrounded
    pub densities: BTreeMap<Category, f64>,
    /// Distinct matched phrases per category, for evidence display
    pub found_phrases: BTreeMap<Category, BTreeSet<String>>,
    /// Raw non-overlapping match counts behind each density
    #[serde(default)]
    pub match_counts: BTreeMap<Category, usize>,
    pub risk_score: u32,
}

impl AnalysisResult {
    /// Density for a category, 0.0 when the category was not measured
    pub fn density(&self, category: Category) -> f64 {
        self.densities.get(&category).copied().unwrap_or(0.0)
    }

    /// Matched phrases for a category (empty when nothing matched)
    pub fn phrases(&self, category: Category) -> impl Iterator<Item = &str> {
        self.found_phrases
            .get(&category)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn match_count(&self, category: Category) -> usize {
        self.match_counts.get(&category).copied().unwrap_or(0)
    }
}

/// Per-category status relative to its baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    /// Above-baseline category crossed into its risk direction
    Warning,
    /// Below-baseline category crossed into its risk direction
    Critical,
}

impl Status {
    pub fn is_flagged(&self) -> bool {
        !matches!(self, Status::Ok)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Ok => "[OK]",
            Status::Warning => "[WARNING]",
            Status::Critical => "[CRITICAL]",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative verdict bands over the risk score
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Low,
    Moderate,
    High,
}

impl Verdict {
    /// Calculate verdict from score (lower bound of each band is inclusive)
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 70 => Verdict::High,
            s if s >= 40 => Verdict::Moderate,
            _ => Verdict::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Low => "low risk",
            Verdict::Moderate => "moderate risk",
            Verdict::High => "high risk",
        }
    }

    /// Full conclusion sentence shown at the bottom of reports
    pub fn conclusion(&self) -> &'static str {
        match self {
            Verdict::High => "HIGH RISK: Strong indicators of deceptive content.",
            Verdict::Moderate => {
                "MODERATE RISK: Linguistic inconsistencies detected. Further interview recommended."
            }
            Verdict::Low => {
                "LOW RISK: Statement appears linguistically consistent with truthful recall."
            }
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Verdict {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Verdict::Low),
            "moderate" | "medium" => Ok(Verdict::Moderate),
            "high" => Ok(Verdict::High),
            _ => Err(anyhow::anyhow!(
                "Unknown verdict level '{}'. Valid levels: low, moderate, high",
                s
            )),
        }
    }
}
