use async_trait::async_trait;
use serde::Deserialize;

use crate::error::AppResult;
use crate::session::PageSession;
use crate::vitals::{InconclusiveReason, Metric};

use super::{Measurement, MetricProbe, ProbeConfig, observer_script};

/// One `largest-contentful-paint` entry as reported by the page.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaintCandidate {
    pub start_time: f64,
}

/// Picks the reported value from a candidate batch.
///
/// LCP is re-evaluated as larger content paints; within a batch only the
/// most recent candidate is meaningful, so this takes the last entry,
/// not the maximum and not the first.
#[must_use]
pub fn select_candidate(entries: &[PaintCandidate]) -> Option<f64> {
    entries.last().map(|entry| entry.start_time)
}

/// Largest Contentful Paint: start time of the final paint candidate,
/// in milliseconds since navigation start.
#[derive(Debug, Clone, Copy)]
pub struct LcpProbe;

#[async_trait]
impl MetricProbe for LcpProbe {
    fn metric(&self) -> Metric {
        Metric::Lcp
    }

    async fn measure(
        &self,
        session: &PageSession,
        _config: &ProbeConfig,
    ) -> AppResult<Measurement> {
        let script = observer_script(
            "largest-contentful-paint",
            "entries.map((entry) => ({ startTime: entry.startTime }))",
        );
        let entries: Vec<PaintCandidate> = session.evaluate(&script).await?;
        Ok(match select_candidate(&entries) {
            Some(value) => Measurement::Observed(value),
            None => Measurement::Inconclusive(InconclusiveReason::NoSignal),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(start_times: &[f64]) -> Vec<PaintCandidate> {
        start_times
            .iter()
            .map(|&start_time| PaintCandidate { start_time })
            .collect()
    }

    #[test]
    fn selects_last_candidate_not_max_or_first() {
        let entries = candidates(&[800.0, 1400.0, 2100.0]);
        assert_eq!(select_candidate(&entries), Some(2100.0));

        // Out-of-order batch: still the last entry, not the largest.
        let unordered = candidates(&[800.0, 2100.0, 1400.0]);
        assert_eq!(select_candidate(&unordered), Some(1400.0));
    }

    #[test]
    fn empty_batch_yields_no_observation() {
        assert_eq!(select_candidate(&[]), None);
    }

    #[test]
    fn entries_decode_from_page_json() -> Result<(), serde_json::Error> {
        let decoded: Vec<PaintCandidate> =
            serde_json::from_str(r#"[{"startTime": 800.0}, {"startTime": 2100.5}]"#)?;
        assert_eq!(select_candidate(&decoded), Some(2100.5));
        Ok(())
    }
}
