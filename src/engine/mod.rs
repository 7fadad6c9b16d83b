//! Metrics engine
//!
//! Single-pass lexical statistics over a statement:
//!
//! 1. normalize: lower-case, drop everything except word characters,
//!    whitespace and apostrophes (so contractions like "i'm" survive)
//! 2. count `\w+` tokens; zero tokens means there is nothing to analyze
//! 3. match each category with one word-bounded alternation
//!    (non-overlapping, leftmost-first within a category; categories are
//!    matched independently so a word may count for two of them)
//! 4. density = matches / words × 100, unrounded
//! 5. risk score = sum of weights of categories crossing their baseline

use crate::lexicon::{Lexicon, LexiconError, LexiconResult};
use crate::models::{AnalysisResult, Category};
use crate::scoring;
use regex::{Regex, RegexBuilder};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;
use tracing::trace;

static STRIP: OnceLock<Regex> = OnceLock::new();
static WORD: OnceLock<Regex> = OnceLock::new();

fn strip_pattern() -> &'static Regex {
    STRIP.get_or_init(|| Regex::new(r"[^\w\s']").unwrap())
}

fn word_pattern() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"\w+").unwrap())
}

/// Lower-case text and strip characters that are not word characters,
/// whitespace or apostrophes. Used for matching only.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    strip_pattern().replace_all(&lower, "").into_owned()
}

/// Number of `\w+` tokens in normalized text
pub fn count_words(normalized: &str) -> usize {
    word_pattern().find_iter(normalized).count()
}

/// Build the word-bounded alternation for a phrase list.
///
/// Alternation order follows the list, so earlier phrases take priority
/// over later ones starting at the same position.
pub(crate) fn phrase_pattern<S: AsRef<str>>(phrases: &[S]) -> Result<Regex, regex::Error> {
    phrase_pattern_builder(phrases).build()
}

/// Unbuilt form of [`phrase_pattern`], for callers that tune compile limits
pub(crate) fn phrase_pattern_builder<S: AsRef<str>>(phrases: &[S]) -> RegexBuilder {
    let alternation = phrases
        .iter()
        .map(|p| regex::escape(p.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    let mut builder = RegexBuilder::new(&format!(r"\b(?:{})\b", alternation));
    builder.case_insensitive(true);
    builder
}

/// Category statistics engine bound to one lexicon
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    lexicon: Lexicon,
    patterns: Vec<(Category, Regex)>,
}

impl MetricsEngine {
    /// Compile one pattern per category of the lexicon
    pub fn new(lexicon: Lexicon) -> LexiconResult<Self> {
        let patterns = lexicon
            .entries()
            .iter()
            .map(|entry| {
                phrase_pattern(&entry.phrases)
                    .map(|re| (entry.category, re))
                    .map_err(|source| LexiconError::Pattern {
                        category: entry.category,
                        source,
                    })
            })
            .collect::<LexiconResult<Vec<_>>>()?;
        Ok(Self { lexicon, patterns })
    }

    /// Engine over the standard English lexicon
    pub fn standard() -> LexiconResult<Self> {
        Self::new(Lexicon::standard()?)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyze a statement.
    ///
    /// Returns `None` when the text has no word tokens (empty, whitespace
    /// or symbols only); callers skip such input.
    pub fn analyze(&self, text: &str) -> Option<AnalysisResult> {
        let normalized = normalize(text);
        let total_words = count_words(&normalized);
        if total_words == 0 {
            trace!("no word tokens, skipping analysis");
            return None;
        }

        let mut densities = BTreeMap::new();
        let mut found_phrases = BTreeMap::new();
        let mut match_counts = BTreeMap::new();

        for (category, pattern) in &self.patterns {
            let mut count = 0usize;
            let mut found = BTreeSet::new();
            for m in pattern.find_iter(&normalized) {
                count += 1;
                found.insert(m.as_str().to_string());
            }
            densities.insert(*category, count as f64 / total_words as f64 * 100.0);
            found_phrases.insert(*category, found);
            match_counts.insert(*category, count);
        }

        let risk_score = scoring::risk_score(&densities, &self.lexicon);
        trace!(total_words, risk_score, "statement analyzed");

        Some(AnalysisResult {
            total_words,
            densities,
            found_phrases,
            match_counts,
            risk_score,
        })
    }
}
