use crate::vitals::{CheckOutcome, Verdict};

use super::runner::RunOutcome;

pub(crate) fn print_summary(outcome: &RunOutcome) {
    for line in summary_lines(outcome) {
        println!("{}", line);
    }
}

fn summary_lines(outcome: &RunOutcome) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Target: {}", outcome.url));
    lines.push(format!("Duration: {}ms", outcome.duration.as_millis()));
    for check in &outcome.outcomes {
        lines.push(check_line(check));
    }
    lines.push(format!(
        "Checks: {} | Passed: {} | Failed: {} | Inconclusive: {}",
        outcome.outcomes.len(),
        outcome.totals.passed,
        outcome.totals.failed,
        outcome.totals.inconclusive
    ));
    lines
}

fn check_line(check: &CheckOutcome) -> String {
    let bound = format_bound(check.threshold.bound(), check.metric.unit());
    let verdict = match check.verdict {
        Verdict::Passed | Verdict::Failed => check.verdict.as_str().to_owned(),
        Verdict::Inconclusive => check.reason.map_or_else(
            || check.verdict.as_str().to_owned(),
            |reason| format!("{} ({})", check.verdict.as_str(), reason.as_str()),
        ),
    };
    match check.observation {
        Some(value) => format!(
            "{}: {} (limit {}) {}",
            check.metric.label(),
            format_value(value, check.metric.unit()),
            bound,
            verdict
        ),
        None => format!(
            "{}: no observation (limit {}) {}",
            check.metric.label(),
            bound,
            verdict
        ),
    }
}

/// Millisecond metrics print with two decimals; the unitless CLS score
/// with three.
fn format_value(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{value:.3}")
    } else {
        format!("{value:.2} {unit}")
    }
}

/// Bounds are configuration values and print as written.
fn format_bound(bound: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{bound}")
    } else {
        format!("{bound} {unit}")
    }
}
