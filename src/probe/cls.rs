use async_trait::async_trait;
use serde::Deserialize;

use crate::error::AppResult;
use crate::session::PageSession;
use crate::vitals::Metric;

use super::{Measurement, MetricProbe, ProbeConfig, observer_script};

/// One `layout-shift` entry as reported by the page.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutShift {
    pub value: f64,
    pub had_recent_input: bool,
}

/// Sums shift magnitudes, excluding shifts attributed to recent user
/// input.
#[must_use]
pub fn accumulate(entries: &[LayoutShift]) -> f64 {
    entries
        .iter()
        .filter(|entry| !entry.had_recent_input)
        .map(|entry| entry.value)
        .sum()
}

/// Cumulative Layout Shift.
///
/// Resolves on the first buffered batch, so it counts shifts up to that
/// point only; shifts later in the page lifetime are not included. A
/// page that never shifts produces no batch at all and the check times
/// out as inconclusive.
#[derive(Debug, Clone, Copy)]
pub struct ClsProbe;

#[async_trait]
impl MetricProbe for ClsProbe {
    fn metric(&self) -> Metric {
        Metric::Cls
    }

    async fn measure(
        &self,
        session: &PageSession,
        _config: &ProbeConfig,
    ) -> AppResult<Measurement> {
        let script = observer_script(
            "layout-shift",
            "entries.map((entry) => ({ value: entry.value, hadRecentInput: entry.hadRecentInput }))",
        );
        let entries: Vec<LayoutShift> = session.evaluate(&script).await?;
        Ok(Measurement::Observed(accumulate(&entries)))
    }
}
