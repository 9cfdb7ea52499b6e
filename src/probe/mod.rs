//! Metric probes.
//!
//! Each probe is an isolated unit of work: given an open [`PageSession`]
//! it registers for one in-page instrumentation signal (or reads an
//! already-captured timing landmark), waits for it to resolve, and
//! extracts a single derived value. Entry batches cross the page
//! boundary as JSON; the derived-value computation happens here so it
//! stays unit-testable without a browser.
mod cls;
mod fid;
mod inp;
mod lcp;
mod ttfb;

pub use cls::{ClsProbe, LayoutShift, accumulate};
pub use fid::{FidProbe, FirstInputSample, input_delay};
pub use inp::InpProbe;
pub use lcp::{LcpProbe, PaintCandidate, select_candidate};
pub use ttfb::{NavigationTiming, TtfbProbe, first_byte_delay};

use async_trait::async_trait;

use crate::error::AppResult;
use crate::session::PageSession;
use crate::vitals::{InconclusiveReason, Metric};

/// Probe parameters fixed at the run level.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Selector of the interaction target used by FID and INP.
    pub selector: String,
}

/// What one probe invocation produced: at most one observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Observed(f64),
    Inconclusive(InconclusiveReason),
}

impl Measurement {
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Measurement::Observed(value) => Some(value),
            Measurement::Inconclusive(_) => None,
        }
    }

    #[must_use]
    pub const fn reason(self) -> Option<InconclusiveReason> {
        match self {
            Measurement::Observed(_) => None,
            Measurement::Inconclusive(reason) => Some(reason),
        }
    }
}

/// Common probe contract.
///
/// `measure` suspends until the in-page signal resolves; the runner
/// bounds every call with a timeout, so implementations never need their
/// own deadline handling.
#[async_trait]
pub trait MetricProbe: Send + Sync {
    fn metric(&self) -> Metric;

    /// Produces at most one observation from an active session.
    ///
    /// # Errors
    ///
    /// Returns an error when the session itself fails (script evaluation,
    /// value decoding). Missing signals and failed interactions are not
    /// errors; they surface as [`Measurement::Inconclusive`].
    async fn measure(&self, session: &PageSession, config: &ProbeConfig)
    -> AppResult<Measurement>;
}

#[must_use]
pub fn probe_for(metric: Metric) -> Box<dyn MetricProbe> {
    match metric {
        Metric::Lcp => Box::new(LcpProbe),
        Metric::Ttfb => Box::new(TtfbProbe),
        Metric::Fid => Box::new(FidProbe),
        Metric::Cls => Box::new(ClsProbe),
        Metric::Inp => Box::new(InpProbe),
    }
}

/// Builds the in-page registration script for one signal class.
///
/// Registers a `PerformanceObserver` for `signal_type` with buffered
/// replay enabled, so entries that fired before registration are still
/// delivered, and resolves with `map_expr` applied to the first reported
/// batch (`entries` is in scope).
pub(crate) fn observer_script(signal_type: &str, map_expr: &str) -> String {
    format!(
        "new Promise((resolve) => {{ \
         new PerformanceObserver((entryList) => {{ \
         const entries = entryList.getEntries(); \
         resolve({map_expr}); \
         }}).observe({{ type: '{signal_type}', buffered: true }}); \
         }})"
    )
}

/// Escapes a selector for interpolation into a single-quoted JS string.
pub(crate) fn escape_js_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len().saturating_add(2));
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_script_registers_buffered_type() {
        let script = observer_script("layout-shift", "entries.length");
        assert!(script.contains("type: 'layout-shift'"));
        assert!(script.contains("buffered: true"));
        assert!(script.contains("resolve(entries.length)"));
    }

    #[test]
    fn escape_js_string_handles_quotes_and_backslashes() {
        assert_eq!(escape_js_string("#plain-id"), "#plain-id");
        assert_eq!(escape_js_string("a'b"), "a\\'b");
        assert_eq!(escape_js_string("a\\b"), "a\\\\b");
    }

    #[test]
    fn probe_for_covers_every_metric() {
        for metric in crate::vitals::ALL_METRICS {
            assert_eq!(probe_for(metric).metric(), metric);
        }
    }

    #[test]
    fn measurement_accessors() {
        let observed = Measurement::Observed(42.0);
        assert_eq!(observed.value(), Some(42.0));
        assert_eq!(observed.reason(), None);

        let missing = Measurement::Inconclusive(InconclusiveReason::NoSignal);
        assert_eq!(missing.value(), None);
        assert_eq!(missing.reason(), Some(InconclusiveReason::NoSignal));
    }
}
