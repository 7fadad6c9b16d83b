//! Two-statement credibility comparison

use crate::engine::MetricsEngine;
use crate::models::AnalysisResult;
use serde::Serialize;

/// Which of the two compared statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Statement {
    First,
    Second,
}

impl Statement {
    pub fn label(&self) -> &'static str {
        match self {
            Statement::First => "Statement 1",
            Statement::Second => "Statement 2",
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Side-by-side analysis of two statements
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub first: AnalysisResult,
    pub second: AnalysisResult,
    /// The statement with the strictly lower risk score, else the second
    pub more_credible: Statement,
    pub tied: bool,
}

impl Comparison {
    pub fn from_results(first: AnalysisResult, second: AnalysisResult) -> Self {
        let more_credible = if first.risk_score < second.risk_score {
            Statement::First
        } else {
            Statement::Second
        };
        let tied = first.risk_score == second.risk_score;
        Self {
            first,
            second,
            more_credible,
            tied,
        }
    }

    /// Absolute difference between the two risk scores
    pub fn score_gap(&self) -> u32 {
        self.first.risk_score.abs_diff(self.second.risk_score)
    }
}

/// Analyze and compare two statements.
///
/// `None` when either statement has no words to analyze.
pub fn compare(engine: &MetricsEngine, first: &str, second: &str) -> Option<Comparison> {
    let first = engine.analyze(first)?;
    let second = engine.analyze(second)?;
    Some(Comparison::from_results(first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MetricsEngine {
        MetricsEngine::standard().unwrap()
    }

    #[test]
    fn test_lower_score_is_more_credible() {
        let engine = engine();
        let calm = "I went to the store and I bought milk for my mother.";
        let shifty = "Honestly, obviously the car was clearly red.";
        let cmp = compare(&engine, calm, shifty).unwrap();
        assert!(cmp.first.risk_score < cmp.second.risk_score);
        assert_eq!(cmp.more_credible, Statement::First);
        assert!(!cmp.tied);

        let reversed = compare(&engine, shifty, calm).unwrap();
        assert_eq!(reversed.more_credible, Statement::Second);
        assert_eq!(reversed.score_gap(), cmp.score_gap());
    }

    #[test]
    fn test_tie_goes_to_second_statement() {
        let engine = engine();
        let text = "I went to the store. Then suddenly I left.";
        let cmp = compare(&engine, text, text).unwrap();
        assert!(cmp.tied);
        assert_eq!(cmp.more_credible, Statement::Second);
        assert_eq!(cmp.score_gap(), 0);
    }

    #[test]
    fn test_absent_statement_yields_none() {
        let engine = engine();
        assert!(compare(&engine, "", "I left").is_none());
        assert!(compare(&engine, "I left", "?!").is_none());
    }
}
