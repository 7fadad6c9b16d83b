//! Curated marker lists and baselines
//!
//! Phrase order is significant: each category is matched with a single
//! leftmost-first alternation, so an earlier phrase wins over a later one
//! starting at the same position.

use super::LexiconEntry;
use crate::models::{Category, Direction};

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "i'm", "i've", "i'd", "i'll", "am",
];

const HEDGES: &[&str] = &[
    "probably",
    "maybe",
    "perhaps",
    "possibly",
    "potentially",
    "it seems",
    "it appears",
    "i think",
    "i believe",
    "i suppose",
    "i guess",
    "i assume",
    "i imagine",
    "kind of",
    "sort of",
    "somewhat",
    "roughly",
    "around",
    "about",
    "mainly",
    "mostly",
    "to the best of my knowledge",
    "as far as i recall",
    "i suspect",
];

const FILLERS: &[&str] = &[
    "uh",
    "um",
    "er",
    "ah",
    "well",
    "so",
    "actually",
    "literally",
    "right",
    "like",
    "you know",
    "i mean",
    "let me see",
    "how should i put it",
    "you see",
    "just",
];

const QUALIFIERS: &[&str] = &[
    "honestly",
    "frankly",
    "truthfully",
    "to be honest",
    "to tell you the truth",
    "in all honesty",
    "believe me",
    "to be frank",
    "i swear",
    "hand on heart",
    "to my recollection",
    "for a fact",
    "obviously",
    "clearly",
    "certainly",
];

const TIME_LEAPS: &[&str] = &[
    "then",
    "next",
    "afterward",
    "afterwards",
    "after that",
    "following that",
    "subsequently",
    "thereafter",
    "later",
    "later on",
    "soon after",
    "shortly after",
    "suddenly",
    "all of a sudden",
    "out of nowhere",
    "unexpectedly",
    "at that point",
    "eventually",
    "finally",
    "at last",
    "after a while",
    "some time later",
    "fast forward",
    "skipping ahead",
    "long story short",
    "anyway",
    "basically",
    "the next thing i knew",
    "the next thing i remember",
    "before i knew it",
];

/// Build the standard English entries.
///
/// Baselines are percentages of total words; weights sum to 100.
pub(super) fn entries() -> Vec<LexiconEntry> {
    vec![
        // Low self-reference indicates distancing
        LexiconEntry::new(Category::SelfReference, PRONOUNS, 3.5, Direction::Below, 25)
            .with_display("Pronoun Density", "Pronouns (Self-Reference)"),
        // High hedging indicates uncertainty/evasiveness
        LexiconEntry::new(Category::Hedging, HEDGES, 2.0, Direction::Above, 15)
            .with_display("Hedge Density", "Hedges (Evasiveness)"),
        // High temporal gaps indicate potential omissions
        LexiconEntry::new(
            Category::TemporalDiscontinuity,
            TIME_LEAPS,
            4.0,
            Direction::Above,
            20,
        )
        .with_display("Time Leap Density", "Time Leaps (Narrative Gaps)"),
        // Over-justifying truthfulness (convincing mode)
        LexiconEntry::new(Category::Qualifier, QUALIFIERS, 0.5, Direction::Above, 30)
            .with_display("Negative Qualifiers", "Qualifiers (Convincing Mode)"),
        // High cognitive load during fabrication
        LexiconEntry::new(Category::Filler, FILLERS, 2.5, Direction::Above, 10)
            .with_display("Filler Density", "Fillers (Cognitive Load)"),
    ]
}
