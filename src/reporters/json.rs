//! JSON reporter
//!
//! Outputs reports, comparisons and rankings as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use anyhow::Result;
use serde::Serialize;

/// Render any report value as JSON
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;
    use crate::engine::MetricsEngine;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["risk_score"], 20);
        assert_eq!(parsed["verdict"], "low");
        assert_eq!(parsed["total_words"], 9);
        assert_eq!(parsed["categories"][0]["category"], "self_reference");
        assert_eq!(parsed["categories"][0]["status"], "ok");
        assert_eq!(parsed["categories"][2]["status"], "warning");
        let temporal = parsed["found_phrases"]["temporal_discontinuity"]
            .as_array()
            .expect("phrase array");
        assert_eq!(temporal.len(), 2);
    }

    #[test]
    fn test_json_comparison() {
        let engine = MetricsEngine::standard().unwrap();
        let cmp = compare(&engine, "I left then.", "I left then.").unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&render(&cmp).unwrap()).expect("parse JSON");
        assert_eq!(parsed["more_credible"], "second");
        assert_eq!(parsed["tied"], true);
        assert!(parsed["first"]["densities"].is_object());
    }
}
