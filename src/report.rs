//! Plain-text rendering of verdicts and profile reports.

use crate::profile::{ProfileReport, Speed};
use crate::verify::{SpecimenVerdict, VerificationOutcome};
use std::fmt::Write as _;

pub const PASS: &str = "✓";
pub const FAIL: &str = "✗";

pub fn render_verdict(verdict: &SpecimenVerdict) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== {} ===", verdict.specimen);
    for outcome in &verdict.outcomes {
        out.push_str(&render_outcome(outcome));
        out.push('\n');
    }
    let failed = verdict.failures().count();
    let _ = writeln!(
        out,
        "  {} {}/{} vectors passed",
        if verdict.passed { PASS } else { FAIL },
        verdict.outcomes.len() - failed,
        verdict.outcomes.len()
    );
    out
}

pub fn render_outcome(outcome: &VerificationOutcome) -> String {
    let mark = if outcome.passed() { PASS } else { FAIL };
    let mut line = format!(
        "  [{}] input: {} | reference: {} | optimized: {}",
        outcome.case, outcome.input, outcome.reference, outcome.optimized
    );
    if let Some(expected) = &outcome.expected {
        let _ = write!(line, " | expected: {expected}");
    }
    let _ = write!(line, " | {mark}");
    line
}

pub fn render_profile(report: &ProfileReport) -> String {
    let delta = match report.delta_percent {
        Some(d) => format!("{d:6.2}%"),
        None => "undefined".to_string(),
    };
    let speed = match report.speed {
        Speed::Faster => "FASTER",
        Speed::Slower => "slower",
        Speed::Equal => "equal",
        Speed::Undefined => "n/a",
    };
    format!(
        "{:<20} reference: {:>12} ns | optimized: {:>12} ns | difference: {} ({})",
        report.specimen, report.reference.elapsed_ns, report.optimized.elapsed_ns, delta, speed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{Category, Value, Variant};
    use crate::profile::BenchmarkSample;

    fn sample(variant: Variant, elapsed_ns: u64) -> BenchmarkSample {
        BenchmarkSample {
            variant,
            iterations: 10,
            elapsed_ns,
        }
    }

    #[test]
    fn undefined_delta_is_spelled_out() {
        let report = ProfileReport {
            specimen: "strlen".into(),
            category: Category::StringLength,
            iterations: 0,
            reference: sample(Variant::Reference, 0),
            optimized: sample(Variant::Optimized, 0),
            delta_percent: None,
            speed: Speed::Undefined,
        };
        let line = render_profile(&report);
        assert!(line.contains("undefined"));
        assert!(line.starts_with("strlen"));
    }

    #[test]
    fn faster_optimized_is_marked() {
        let report = ProfileReport {
            specimen: "strrev".into(),
            category: Category::StringReversal,
            iterations: 10,
            reference: sample(Variant::Reference, 200),
            optimized: sample(Variant::Optimized, 100),
            delta_percent: Some(-50.0),
            speed: Speed::Faster,
        };
        let line = render_profile(&report);
        assert!(line.contains("-50.00%"));
        assert!(line.contains("FASTER"));
    }

    #[test]
    fn outcome_line_carries_oracle_and_mark() {
        let outcome = VerificationOutcome {
            specimen: "second_largest".into(),
            index: 4,
            case: "all-equal".into(),
            input: Value::Array(vec![1, 1, 1, 1]),
            reference: Value::Int(1),
            optimized: Value::Int(1),
            agree: true,
            expected: Some(Value::Int(-1)),
            matches_expected: Some(false),
        };
        let line = render_outcome(&outcome);
        assert!(line.contains("[1, 1, 1, 1]"));
        assert!(line.contains("expected: -1"));
        assert!(line.ends_with(FAIL));
    }
}
