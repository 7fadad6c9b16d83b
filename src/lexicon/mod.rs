//! Marker lexicon
//!
//! A [`Lexicon`] is an immutable configuration value: one entry per
//! [`Category`] holding the ordered phrase list, the baseline density,
//! the risk direction and the weight added to the risk score when the
//! baseline is crossed. It is built once and handed to the engine, so
//! several engines with different lexicons can coexist.
//!
//! # Standard lexicon
//!
//! | category               | direction | baseline | weight |
//! |------------------------|-----------|----------|--------|
//! | self-reference         | below     | 3.5%     | 25     |
//! | hedging                | above     | 2.0%     | 15     |
//! | temporal discontinuity | above     | 4.0%     | 20     |
//! | qualifier              | above     | 0.5%     | 30     |
//! | filler                 | above     | 2.5%     | 10     |
//!
//! Baselines and weights are compile-time tunables; nothing reads them
//! from configuration at runtime.

mod standard;

use crate::models::{Category, Direction};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Upper bound of the risk score; the sum of all weights may not exceed it
pub const MAX_RISK_SCORE: u32 = 100;

static PHRASE_SHAPE: OnceLock<Regex> = OnceLock::new();

/// A phrase must start and end with a word character and may only contain
/// characters that survive normalization (word chars, whitespace, apostrophes).
fn phrase_shape() -> &'static Regex {
    PHRASE_SHAPE.get_or_init(|| Regex::new(r"^\w(?:[\w\s']*\w)?$").unwrap())
}

/// Errors raised while building a lexicon or compiling its patterns.
///
/// These are programming errors in the phrase lists and are fatal at startup.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Lexicon has no entry for category '{0}'")]
    MissingCategory(Category),

    #[error("Lexicon has more than one entry for category '{0}'")]
    DuplicateCategory(Category),

    #[error("Category '{0}' has an empty phrase list")]
    EmptyPhraseList(Category),

    #[error("Invalid phrase {phrase:?} in category '{category}'")]
    InvalidPhrase { category: Category, phrase: String },

    #[error("Phrase {phrase:?} is listed in both '{first}' and '{second}'")]
    DuplicatePhrase {
        phrase: String,
        first: Category,
        second: Category,
    },

    #[error("Baseline {baseline} for category '{category}' must be a finite, non-negative percentage")]
    InvalidBaseline { category: Category, baseline: f64 },

    #[error("Category weights sum to {0}, above the maximum risk score of {max}", max = MAX_RISK_SCORE)]
    WeightOverflow(u32),

    #[error("Failed to compile pattern for category '{category}': {source}")]
    Pattern {
        category: Category,
        #[source]
        source: regex::Error,
    },
}

pub type LexiconResult<T> = Result<T, LexiconError>;

/// One category of the lexicon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexiconEntry {
    pub category: Category,
    /// Lower-cased phrases in match priority order
    pub phrases: Vec<String>,
    /// Baseline density in percent
    pub baseline: f64,
    pub direction: Direction,
    /// Points added to the risk score when the baseline is crossed
    pub weight: u32,
    /// Indicator name in report tables
    pub label: String,
    /// Caption in the evidence legend
    pub legend: String,
}

impl LexiconEntry {
    pub fn new<I, S>(
        category: Category,
        phrases: I,
        baseline: f64,
        direction: Direction,
        weight: u32,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            category,
            phrases: phrases
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .collect(),
            baseline,
            direction,
            weight,
            label: category.key().to_string(),
            legend: category.key().to_string(),
        }
    }

    /// Set the report label and legend caption
    pub fn with_display(mut self, label: impl Into<String>, legend: impl Into<String>) -> Self {
        self.label = label.into();
        self.legend = legend.into();
        self
    }

    /// Baseline as shown in reports, e.g. `< 3.5%`
    pub fn baseline_display(&self) -> String {
        format!("{} {:.1}%", self.direction.symbol(), self.baseline)
    }
}

/// Validated, immutable set of category entries
#[derive(Debug, Clone, Serialize)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Validate entries and build a lexicon.
    ///
    /// Entries are stored in [`Category`] order regardless of input order.
    pub fn new(mut entries: Vec<LexiconEntry>) -> LexiconResult<Self> {
        entries.sort_by_key(|e| e.category);

        for pair in entries.windows(2) {
            if pair[0].category == pair[1].category {
                return Err(LexiconError::DuplicateCategory(pair[0].category));
            }
        }
        for category in Category::ALL {
            if !entries.iter().any(|e| e.category == category) {
                return Err(LexiconError::MissingCategory(category));
            }
        }

        let mut owners: HashMap<&str, Category> = HashMap::new();
        let mut total_weight: u32 = 0;
        for entry in &entries {
            if entry.phrases.is_empty() {
                return Err(LexiconError::EmptyPhraseList(entry.category));
            }
            if !entry.baseline.is_finite() || entry.baseline < 0.0 {
                return Err(LexiconError::InvalidBaseline {
                    category: entry.category,
                    baseline: entry.baseline,
                });
            }
            for phrase in &entry.phrases {
                if !phrase_shape().is_match(phrase) {
                    return Err(LexiconError::InvalidPhrase {
                        category: entry.category,
                        phrase: phrase.clone(),
                    });
                }
                if let Some(first) = owners.insert(phrase.as_str(), entry.category) {
                    return Err(LexiconError::DuplicatePhrase {
                        phrase: phrase.clone(),
                        first,
                        second: entry.category,
                    });
                }
            }
            total_weight = total_weight.saturating_add(entry.weight);
        }
        if total_weight > MAX_RISK_SCORE {
            return Err(LexiconError::WeightOverflow(total_weight));
        }

        Ok(Self { entries })
    }

    /// The curated English lexicon with the forensic baselines
    pub fn standard() -> LexiconResult<Self> {
        Self::new(standard::entries())
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Entry for a category; every category is present after validation
    pub fn entry(&self, category: Category) -> &LexiconEntry {
        // Sorted by category and complete, so the index is the ordinal
        &self.entries[category as usize]
    }

    /// Sum of all category weights
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Category owning a phrase (case-insensitive)
    pub fn category_of(&self, phrase: &str) -> Option<Category> {
        let needle = phrase.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.phrases.iter().any(|p| *p == needle))
            .map(|e| e.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_entries() -> Vec<LexiconEntry> {
        vec![
            LexiconEntry::new(Category::SelfReference, ["i"], 10.0, Direction::Below, 20),
            LexiconEntry::new(Category::Hedging, ["maybe"], 10.0, Direction::Above, 20),
            LexiconEntry::new(Category::TemporalDiscontinuity, ["then"], 10.0, Direction::Above, 20),
            LexiconEntry::new(Category::Qualifier, ["truly"], 10.0, Direction::Above, 20),
            LexiconEntry::new(Category::Filler, ["um"], 10.0, Direction::Above, 20),
        ]
    }

    #[test]
    fn test_standard_lexicon_is_valid() {
        let lexicon = Lexicon::standard().expect("standard lexicon");
        assert_eq!(lexicon.entries().len(), 5);
        assert_eq!(lexicon.total_weight(), 100);

        let pronouns = lexicon.entry(Category::SelfReference);
        assert_eq!(pronouns.direction, Direction::Below);
        assert_eq!(pronouns.baseline, 3.5);
        assert_eq!(pronouns.weight, 25);
        assert_eq!(pronouns.phrases.first().map(String::as_str), Some("i"));

        assert_eq!(lexicon.entry(Category::Qualifier).weight, 30);
        assert_eq!(lexicon.entry(Category::Filler).baseline, 2.5);
    }

    #[test]
    fn test_entries_sorted_by_category() {
        let mut entries = synthetic_entries();
        entries.reverse();
        let lexicon = Lexicon::new(entries).unwrap();
        let order: Vec<Category> = lexicon.entries().iter().map(|e| e.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_phrases_are_lowercased() {
        let entry = LexiconEntry::new(Category::Hedging, ["I Think"], 1.0, Direction::Above, 1);
        assert_eq!(entry.phrases, vec!["i think".to_string()]);
    }

    #[test]
    fn test_missing_category_rejected() {
        let mut entries = synthetic_entries();
        entries.pop();
        assert!(matches!(
            Lexicon::new(entries),
            Err(LexiconError::MissingCategory(Category::Filler))
        ));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let mut entries = synthetic_entries();
        entries.push(LexiconEntry::new(Category::Filler, ["uh"], 1.0, Direction::Above, 0));
        assert!(matches!(
            Lexicon::new(entries),
            Err(LexiconError::DuplicateCategory(Category::Filler))
        ));
    }

    #[test]
    fn test_phrase_shared_across_categories_rejected() {
        let mut entries = synthetic_entries();
        entries[4] = LexiconEntry::new(Category::Filler, ["maybe"], 1.0, Direction::Above, 20);
        let err = Lexicon::new(entries).unwrap_err();
        assert!(matches!(err, LexiconError::DuplicatePhrase { .. }));
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_malformed_phrases_rejected() {
        for bad in ["", " um", "um ", "'um", "um-hum", "um!"] {
            let mut entries = synthetic_entries();
            entries[4] = LexiconEntry::new(Category::Filler, [bad], 1.0, Direction::Above, 20);
            assert!(
                matches!(Lexicon::new(entries), Err(LexiconError::InvalidPhrase { .. })),
                "phrase {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_empty_list_and_bad_baseline_rejected() {
        let mut entries = synthetic_entries();
        entries[1].phrases.clear();
        assert!(matches!(
            Lexicon::new(entries),
            Err(LexiconError::EmptyPhraseList(Category::Hedging))
        ));

        let mut entries = synthetic_entries();
        entries[2].baseline = f64::NAN;
        assert!(matches!(
            Lexicon::new(entries),
            Err(LexiconError::InvalidBaseline { .. })
        ));
    }

    #[test]
    fn test_weight_overflow_rejected() {
        let mut entries = synthetic_entries();
        entries[0].weight = 21;
        assert!(matches!(
            Lexicon::new(entries),
            Err(LexiconError::WeightOverflow(101))
        ));
    }

    #[test]
    fn test_category_of_and_baseline_display() {
        let lexicon = Lexicon::standard().unwrap();
        assert_eq!(lexicon.category_of("Honestly"), Some(Category::Qualifier));
        assert_eq!(
            lexicon.category_of("to the best of my knowledge"),
            Some(Category::Hedging)
        );
        assert_eq!(lexicon.category_of("store"), None);
        assert_eq!(lexicon.entry(Category::SelfReference).baseline_display(), "< 3.5%");
        assert_eq!(lexicon.entry(Category::Hedging).baseline_display(), "> 2.0%");
    }
}
