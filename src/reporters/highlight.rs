//! Evidence highlighting over the original statement
//!
//! One pass with a single pattern over every found phrase, longest first,
//! so a multi-word phrase wins over a single word it contains and markup
//! never nests.

use crate::engine::phrase_pattern_builder;
use crate::models::Category;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::warn;

/// A run of the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    Plain(&'t str),
    Marked(&'t str, Category),
}

pub struct Highlighter {
    pattern: Option<Regex>,
    owners: HashMap<String, Category>,
}

impl Highlighter {
    pub fn new(found: &BTreeMap<Category, BTreeSet<String>>) -> Self {
        Self::with_size_limit(found, None)
    }

    /// A pattern that fails to compile leaves the text unmarked
    fn with_size_limit(found: &BTreeMap<Category, BTreeSet<String>>, size_limit: Option<usize>) -> Self {
        let mut owners = HashMap::new();
        let mut phrases: Vec<&str> = Vec::new();
        for (category, set) in found {
            for phrase in set {
                owners.insert(phrase.to_lowercase(), *category);
                phrases.push(phrase.as_str());
            }
        }
        phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        phrases.dedup();

        let pattern = if phrases.is_empty() {
            None
        } else {
            let mut builder = phrase_pattern_builder(&phrases);
            if let Some(limit) = size_limit {
                builder.size_limit(limit);
            }
            match builder.build() {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!("Evidence highlighting disabled for {} phrases: {}", phrases.len(), e);
                    None
                }
            }
        };
        Self { pattern, owners }
    }

    /// Split `text` into plain and marked runs; concatenating them yields `text`
    pub fn segments<'t>(&self, text: &'t str) -> Vec<Segment<'t>> {
        let Some(pattern) = &self.pattern else {
            return vec![Segment::Plain(text)];
        };

        let mut segments = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(text) {
            if m.start() > last {
                segments.push(Segment::Plain(&text[last..m.start()]));
            }
            match self.owners.get(&m.as_str().to_lowercase()) {
                Some(category) => segments.push(Segment::Marked(m.as_str(), *category)),
                None => segments.push(Segment::Plain(m.as_str())),
            }
            last = m.end();
        }
        if last < text.len() {
            segments.push(Segment::Plain(&text[last..]));
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(entries: &[(Category, &[&str])]) -> BTreeMap<Category, BTreeSet<String>> {
        entries
            .iter()
            .map(|(c, words)| (*c, words.iter().map(|w| w.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_segments_round_trip_text() {
        let h = Highlighter::new(&found(&[
            (Category::SelfReference, &["i"]),
            (Category::TemporalDiscontinuity, &["then", "suddenly"]),
        ]));
        let text = "I went home. Then, suddenly, I slept.";
        let segments = h.segments(text);
        let joined: String = segments
            .iter()
            .map(|s| match s {
                Segment::Plain(t) | Segment::Marked(t, _) => *t,
            })
            .collect();
        assert_eq!(joined, text);
        assert!(segments.contains(&Segment::Marked("Then", Category::TemporalDiscontinuity)));
        assert_eq!(
            segments
                .iter()
                .filter(|s| matches!(s, Segment::Marked(_, Category::SelfReference)))
                .count(),
            2
        );
    }

    #[test]
    fn test_longest_phrase_wins() {
        let h = Highlighter::new(&found(&[
            (Category::SelfReference, &["my"]),
            (Category::Hedging, &["to the best of my knowledge"]),
        ]));
        let segments = h.segments("To the best of my knowledge it was fine");
        assert_eq!(
            segments[0],
            Segment::Marked("To the best of my knowledge", Category::Hedging)
        );
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn test_pattern_build_failure_leaves_text_plain() {
        let found = found(&[(Category::TemporalDiscontinuity, &["then", "suddenly"])]);
        let h = Highlighter::with_size_limit(&found, Some(1));
        assert!(h.pattern.is_none());
        let text = "Then suddenly it stopped.";
        assert_eq!(h.segments(text), vec![Segment::Plain(text)]);
    }

    #[test]
    fn test_no_phrases_is_plain() {
        let h = Highlighter::new(&BTreeMap::new());
        assert_eq!(h.segments("nothing here"), vec![Segment::Plain("nothing here")]);
    }
}
