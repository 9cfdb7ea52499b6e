use serde::Serialize;

use super::metric::Metric;

/// A fixed numeric bound compared with strict less-than.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    #[must_use]
    pub const fn new(bound: f64) -> Self {
        Self(bound)
    }

    #[must_use]
    pub const fn bound(self) -> f64 {
        self.0
    }
}

/// Outcome of one threshold evaluation.
///
/// `Inconclusive` is a first-class result: a probe that observed nothing
/// is reported as such, never counted as a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Passed,
    Failed,
    Inconclusive,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Verdict::Passed => "passed",
            Verdict::Failed => "failed",
            Verdict::Inconclusive => "inconclusive",
        }
    }
}

/// Why a check produced no observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InconclusiveReason {
    /// The bounded wait elapsed before the instrumentation signal fired.
    TimedOut,
    /// The signal source reported no usable entry.
    NoSignal,
    /// The simulated interaction could not be performed.
    InteractionFailed,
}

impl InconclusiveReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            InconclusiveReason::TimedOut => "timed out",
            InconclusiveReason::NoSignal => "no signal",
            InconclusiveReason::InteractionFailed => "interaction failed",
        }
    }
}

/// Judges an observation against a threshold.
///
/// Pure: the same `(observation, threshold)` pair always yields the same
/// verdict. An observation exactly equal to the bound fails (strict
/// less-than); an absent observation is inconclusive.
#[must_use]
pub fn evaluate(observation: Option<f64>, threshold: Threshold) -> Verdict {
    match observation {
        None => Verdict::Inconclusive,
        Some(value) if value < threshold.bound() => Verdict::Passed,
        Some(_) => Verdict::Failed,
    }
}

/// Per-metric bounds for one run.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdSet {
    lcp: Threshold,
    ttfb: Threshold,
    fid: Threshold,
    cls: Threshold,
    inp: Threshold,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            lcp: Metric::Lcp.default_threshold(),
            ttfb: Metric::Ttfb.default_threshold(),
            fid: Metric::Fid.default_threshold(),
            cls: Metric::Cls.default_threshold(),
            inp: Metric::Inp.default_threshold(),
        }
    }
}

impl ThresholdSet {
    #[must_use]
    pub const fn get(&self, metric: Metric) -> Threshold {
        match metric {
            Metric::Lcp => self.lcp,
            Metric::Ttfb => self.ttfb,
            Metric::Fid => self.fid,
            Metric::Cls => self.cls,
            Metric::Inp => self.inp,
        }
    }

    pub fn set(&mut self, metric: Metric, threshold: Threshold) {
        match metric {
            Metric::Lcp => self.lcp = threshold,
            Metric::Ttfb => self.ttfb = threshold,
            Metric::Fid => self.fid = threshold,
            Metric::Cls => self.cls = threshold,
            Metric::Inp => self.inp = threshold,
        }
    }
}
