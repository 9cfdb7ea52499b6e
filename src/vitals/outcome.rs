use std::time::Duration;

use super::metric::Metric;
use super::threshold::{InconclusiveReason, Threshold, Verdict};

/// The recorded result of one metric check.
#[derive(Debug, Clone, Copy)]
pub struct CheckOutcome {
    pub metric: Metric,
    pub observation: Option<f64>,
    pub threshold: Threshold,
    pub verdict: Verdict,
    pub reason: Option<InconclusiveReason>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunTotals {
    pub passed: usize,
    pub failed: usize,
    pub inconclusive: usize,
}

impl RunTotals {
    #[must_use]
    pub fn tally(outcomes: &[CheckOutcome]) -> Self {
        let mut totals = Self::default();
        for outcome in outcomes {
            match outcome.verdict {
                Verdict::Passed => totals.passed = totals.passed.saturating_add(1),
                Verdict::Failed => totals.failed = totals.failed.saturating_add(1),
                Verdict::Inconclusive => {
                    totals.inconclusive = totals.inconclusive.saturating_add(1);
                }
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(metric: Metric, verdict: Verdict) -> CheckOutcome {
        CheckOutcome {
            metric,
            observation: None,
            threshold: metric.default_threshold(),
            verdict,
            reason: None,
            elapsed: Duration::from_millis(1),
        }
    }

    #[test]
    fn tally_counts_each_verdict() {
        let outcomes = [
            outcome(Metric::Lcp, Verdict::Passed),
            outcome(Metric::Ttfb, Verdict::Passed),
            outcome(Metric::Fid, Verdict::Failed),
            outcome(Metric::Cls, Verdict::Inconclusive),
        ];
        let totals = RunTotals::tally(&outcomes);
        assert_eq!(totals.passed, 2);
        assert_eq!(totals.failed, 1);
        assert_eq!(totals.inconclusive, 1);
    }
}
