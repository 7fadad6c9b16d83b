//! Library-level integration tests
//!
//! Drives the public API against the statements in `tests/fixtures`:
//! - Single statement scoring and verdicts
//! - Comparison of two statements
//! - Batch ranking of a folder, including skipped files
//! - Rendering of each output format

use lyar::batch::{rank_directory, SkipReason};
use lyar::compare::{compare, Statement};
use lyar::engine::MetricsEngine;
use lyar::models::{Category, Verdict};
use lyar::reporters::{chart, render_statement, OutputFormat, StatementReport};
use std::path::PathBuf;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/statements")
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_path().join(name)).expect("fixture should exist")
}

fn engine() -> MetricsEngine {
    MetricsEngine::standard().expect("standard lexicon is valid")
}

#[test]
fn test_calm_statement_is_low_risk() {
    let result = engine().analyze(&fixture("calm.txt")).unwrap();
    assert_eq!(result.total_words, 25);
    assert_eq!(result.risk_score, 0);
    assert!((result.density(Category::SelfReference) - 28.0).abs() < 1e-9);
    assert_eq!(Verdict::from_score(result.risk_score), Verdict::Low);
}

#[test]
fn test_evasive_statement_is_high_risk() {
    let result = engine().analyze(&fixture("evasive.txt")).unwrap();
    assert_eq!(result.total_words, 27);
    // Self-reference sits just above its baseline, the other four cross theirs
    assert_eq!(result.risk_score, 75);
    assert_eq!(Verdict::from_score(result.risk_score), Verdict::High);

    let hedges: Vec<&str> = result.phrases(Category::Hedging).collect();
    assert_eq!(hedges, vec!["around", "i think", "probably"]);
    assert_eq!(result.match_count(Category::TemporalDiscontinuity), 3);
}

#[test]
fn test_blank_statement_is_absent() {
    assert!(engine().analyze(&fixture("blank.txt")).is_none());
}

#[test]
fn test_compare_prefers_lower_score() {
    let engine = engine();
    let cmp = compare(&engine, &fixture("calm.txt"), &fixture("evasive.txt")).unwrap();
    assert_eq!(cmp.more_credible, Statement::First);
    assert!(!cmp.tied);
    assert_eq!(cmp.score_gap(), 75);

    let reversed = compare(&engine, &fixture("evasive.txt"), &fixture("calm.txt")).unwrap();
    assert_eq!(reversed.more_credible, Statement::Second);

    assert!(compare(&engine, &fixture("calm.txt"), &fixture("blank.txt")).is_none());
}

#[test]
fn test_rank_fixture_directory() {
    let ranking = rank_directory(&engine(), &fixtures_path(), "txt").unwrap();
    let names: Vec<&str> = ranking.entries.iter().map(|e| e.file_name.as_str()).collect();
    assert_eq!(names, vec!["evasive.txt", "calm.txt"]);
    assert_eq!(ranking.entries[0].rank, 1);
    assert_eq!(ranking.entries[0].verdict, Verdict::High);
    assert_eq!(ranking.skipped.len(), 1);
    assert_eq!(ranking.skipped[0].file_name, "blank.txt");
    assert_eq!(ranking.skipped[0].reason, SkipReason::NoWords);

    let svg = chart::render_svg(&ranking.scores());
    assert!(svg.contains("evasive.txt"));
    assert!(!svg.contains("blank.txt"));
}

#[test]
fn test_report_formats() {
    let engine = engine();
    let text = fixture("evasive.txt");
    let result = engine.analyze(&text).unwrap();
    let report = StatementReport::new(&text, &result, engine.lexicon());

    let plain = render_statement(&report, OutputFormat::Text, false).unwrap();
    assert!(plain.contains("FINAL RISK SCORE: 75 / 100"));
    assert!(plain.contains("HIGH RISK: Strong indicators of deceptive content."));
    assert!(!plain.contains('\x1b'));

    let json: serde_json::Value =
        serde_json::from_str(&render_statement(&report, OutputFormat::Json, false).unwrap()).unwrap();
    assert_eq!(json["risk_score"], 75);
    assert_eq!(json["verdict"], "high");
    assert_eq!(json["categories"].as_array().unwrap().len(), 5);

    let html = render_statement(&report, OutputFormat::Html, false).unwrap();
    assert!(html.contains("Risk Assessment Score: 75 / 100"));
    assert!(html.contains("class=\"mark\""));
}
