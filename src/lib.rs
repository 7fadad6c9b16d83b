//! Lyar - forensic linguistic analysis of statements
//!
//! Measures how densely five lexical marker categories occur in a
//! statement, compares each density against a fixed baseline and sums
//! the weights of the categories that cross it into a 0-100 risk score.
//!
//! ```
//! use lyar::engine::MetricsEngine;
//! use lyar::models::Verdict;
//!
//! let engine = MetricsEngine::standard().unwrap();
//! let result = engine.analyze("I went to the store. Then suddenly I left.").unwrap();
//! assert_eq!(result.risk_score, 20);
//! assert_eq!(Verdict::from_score(result.risk_score), Verdict::Low);
//! ```

pub mod batch;
pub mod cli;
pub mod compare;
pub mod config;
pub mod engine;
pub mod lexicon;
pub mod models;
pub mod reporters;
pub mod scoring;
